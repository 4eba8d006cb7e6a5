//! Configuration loading and constants.
//!
//! The service is configured entirely through the process environment. `PORT`
//! and `APP_VERSION` are resolved once at startup into an immutable `AppConfig`
//! that handlers receive through application state.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;

// =============================================================================
// Environment
// =============================================================================

/// Environment variable holding the TCP port to listen on
pub const PORT_ENV: &str = "PORT";

/// Environment variable holding the version reported by both endpoints
pub const VERSION_ENV: &str = "APP_VERSION";

/// Port used when `PORT` is absent or empty
pub const DEFAULT_PORT: u16 = 3000;

/// Version used when `APP_VERSION` is absent or empty
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Listen on all interfaces
pub const BIND_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

// =============================================================================
// Responses
// =============================================================================

/// `status` field of a healthy `/health` response
pub const HEALTHY_STATUS: &str = "healthy";

/// `message` field of the `/` response
pub const ROOT_MESSAGE: &str = "hello from ecs blue/green deployment";

/// Health and info responses are computed per request and must never be cached
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Logging
// =============================================================================

/// Default log filter when neither `--log-level` nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "bluegreen_app=info,tower_http=info";

/// Log target for the startup and fatal-error lines. Always enabled at info,
/// whatever the configured filter, since deployment tooling scrapes them.
pub const STARTUP_LOG_TARGET: &str = "startup";

/// Resolved service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// TCP port the server binds on
    pub port: u16,
    /// Version string reported in responses
    pub version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as absent. A `PORT` that is set but not a valid
    /// port number is an error rather than a silent fallback.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key).filter(|v| !v.trim().is_empty())
        };

        let port = match non_empty(PORT_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value: raw, source })?,
            None => DEFAULT_PORT,
        };

        let version = non_empty(VERSION_ENV).unwrap_or_else(|| DEFAULT_VERSION.to_string());

        Ok(Self { port, version })
    }

    /// Socket address the listener binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(BIND_HOST, self.port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}
