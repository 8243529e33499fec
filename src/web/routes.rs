//! Calculator page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    estimate_form_handler, estimate_submit_handler, index_handler, prorate_form_handler,
    prorate_submit_handler,
};
use axum::{Router, routing::get};

/// Server-rendered calculator pages.
///
/// # Endpoints
///
/// - `GET  /`         - Index with links to both calculators
/// - `GET  /prorate`  - Prorated rent form
/// - `POST /prorate`  - Prorated rent submit
/// - `GET  /estimate` - Maintenance estimate form
/// - `POST /estimate` - Maintenance estimate submit
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route(
            "/prorate",
            get(prorate_form_handler).post(prorate_submit_handler),
        )
        .route(
            "/estimate",
            get(estimate_form_handler).post(estimate_submit_handler),
        )
}
