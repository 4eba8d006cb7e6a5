//! Health check endpoint for container orchestration.
//!
//! Used by the load balancer target group to decide whether this task may
//! receive traffic. It is a liveness probe: it only checks that the process can
//! respond to HTTP, and reports which host and version answered.

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::config::HEALTHY_STATUS;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// RFC 3339 UTC timestamp with millisecond precision
    pub timestamp: String,
    pub hostname: String,
    pub version: String,
}

/// Health check handler.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTHY_STATUS,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        hostname: state.host.hostname.clone(),
        version: state.config.version.clone(),
    })
}
