//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`                 - Health check (database)
//! - `{base}/students/*`            - Student REST API, `base` from `API_BASE_PATH`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin, method and header
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `base_path` - prefix for the student API (e.g. `/api`); an empty string
///   mounts it at the root
pub fn app_router(state: AppState, base_path: &str) -> NormalizePath<Router> {
    let student_router = api::routes::student_routes();

    let router = Router::new().route("/health", get(health_handler));
    let router = if base_path.is_empty() {
        router.merge(student_router)
    } else {
        router.nest(base_path, student_router)
    };

    let router = router
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
