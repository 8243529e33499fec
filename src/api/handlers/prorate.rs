//! Handler for the proration endpoint.

use axum::Json;
use validator::Validate;

use crate::api::dto::prorate::{ProrateRequest, ProrateResponse};
use crate::domain::proration::calculate_prorated_rent;
use crate::error::AppError;

/// Computes prorated rent for a partial month.
///
/// # Endpoint
///
/// `POST /api/prorate`
///
/// # Request Body
///
/// ```json
/// { "monthly_rent": 1750.0, "year": 2026, "month": 1, "move_in_day": 18 }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "month": "January",
///   "year": 2026,
///   "monthly_rent": 1750.0,
///   "move_in_day": 18,
///   "days_in_month": 31,
///   "days_occupied": 14,
///   "daily_rate": 56.45161290322581,
///   "prorated_rent": 790.3225806451613,
///   "daily_rate_display": "$56.45",
///   "prorated_rent_display": "$790.32",
///   "calculation": "$1,750.00 × (14/31)"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if a field is out of bounds or the move-in day
/// does not exist in that month.
pub async fn prorate_handler(
    Json(payload): Json<ProrateRequest>,
) -> Result<Json<ProrateResponse>, AppError> {
    payload.validate()?;

    let result = calculate_prorated_rent(
        payload.monthly_rent,
        payload.year,
        payload.month,
        payload.move_in_day,
    )?;

    Ok(Json(result.into()))
}
