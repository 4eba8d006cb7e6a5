//! HTTP route handlers.
//!
//! Both routes are computed per request, so every response is marked
//! `no-store`. Request tracing is enabled via middleware that generates a
//! unique request ID for each incoming request.

pub mod health;
pub mod home;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and cache headers.
///
/// Unmatched paths fall through to axum's default 404.
pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(home::index))
        .route("/health", get(health::health))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    Router::new()
        .merge(routes)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
