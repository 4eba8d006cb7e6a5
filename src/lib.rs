//! Sample HTTP workload for blue/green deployments.
//!
//! Serves a health check and an informational root endpoint that report the
//! hostname and version of the instance answering, so traffic shifts between
//! the blue and green environments are observable from outside.

pub mod config;
pub mod error;
pub mod host;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use error::AppError;
pub use host::HostInfo;
pub use routes::create_router;
pub use state::AppState;
