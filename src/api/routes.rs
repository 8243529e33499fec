//! API route configuration.

use crate::api::handlers::{estimate_handler, prorate_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// JSON API routes.
///
/// # Endpoints
///
/// - `POST /prorate`  - Prorated rent for a partial month
/// - `POST /estimate` - Maintenance package totals from the estimate workbook
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/prorate", post(prorate_handler))
        .route("/estimate", post(estimate_handler))
}
