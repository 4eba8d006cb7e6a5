//! Root informational endpoint.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::config::ROOT_MESSAGE;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: String,
    pub hostname: String,
    pub platform: &'static str,
    /// Seconds since process start
    pub uptime: f64,
}

/// Greeting plus the identity of the instance that served the request.
pub async fn index(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: ROOT_MESSAGE,
        version: state.config.version.clone(),
        hostname: state.host.hostname.clone(),
        platform: state.host.platform,
        uptime: state.uptime(),
    })
}
