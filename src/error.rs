//! Startup error taxonomy.
//!
//! Request handlers are infallible; every failure this service can hit happens
//! before the accept loop starts and is fatal.

use std::io;

use crate::config::ConfigError;
use crate::http::ServerError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to query hostname: {0}")]
    Hostname(#[source] io::Error),

    #[error(transparent)]
    Server(#[from] ServerError),
}
