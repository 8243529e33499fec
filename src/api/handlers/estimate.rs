//! Handler for the maintenance estimate endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::estimate::{EstimateRequestDto, EstimateResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Computes annual maintenance package totals from the estimate workbook.
///
/// # Endpoint
///
/// `POST /api/estimate`
///
/// # Request Body
///
/// ```json
/// { "project": "Oak Terrace HOA", "address": "12 Elm St", "sqft": 19000 }
/// ```
///
/// # Response
///
/// ```json
/// { "basic_total": 3100.0, "gold_total": 4650.0, "platinum_total": 6200.0 }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if `sqft` is below 1000
/// - 500 Internal Server Error if the workbook cannot be copied, edited,
///   recalculated or read; `details.reason` carries the cause
pub async fn estimate_handler(
    State(state): State<AppState>,
    Json(payload): Json<EstimateRequestDto>,
) -> Result<Json<EstimateResponse>, AppError> {
    payload.validate()?;

    let totals = state.estimate_service.estimate(payload.into()).await?;

    Ok(Json(totals.into()))
}
