//! Shared application state for request handlers.

use std::sync::Arc;
use std::time::Instant;

use crate::config::AppConfig;
use crate::host::HostInfo;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Everything in here is resolved once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub host: Arc<HostInfo>,
    started_at: Instant,
}

impl AppState {
    /// Creates application state. `started_at` should be captured as early in
    /// `main` as possible since it anchors the reported uptime.
    pub fn new(config: AppConfig, host: HostInfo, started_at: Instant) -> Self {
        Self {
            config: Arc::new(config),
            host: Arc::new(host),
            started_at,
        }
    }

    /// Seconds elapsed since process start.
    pub fn uptime(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
