//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`           - Index page
//! - `/prorate`         - Prorated rent form (GET) and submit (POST)
//! - `/estimate`        - Maintenance estimate form (GET) and submit (POST)
//! - `GET  /health`     - Health check: template, recalculation engine
//! - `/api/*`           - JSON API
//! - `/static/*`        - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the routes and middleware without path normalization.
///
/// Integration tests mount this directly.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
