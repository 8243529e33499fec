//! DTOs for the proration endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::proration::ProrationResult;
use crate::utils::currency::format_currency;

/// Request to prorate one month's rent.
///
/// Field bounds match the web form; the move-in day's upper bound depends on
/// the month and is checked by the calculation itself.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProrateRequest {
    #[validate(range(min = 0.0, message = "Monthly rent must not be negative"))]
    pub monthly_rent: f64,

    #[validate(range(min = 1900, max = 2100, message = "Year must be between 1900 and 2100"))]
    pub year: i32,

    /// Month index, `1` = January.
    #[validate(range(min = 1, max = 12, message = "Month must be between 1 and 12"))]
    pub month: u32,

    /// Checked against the month's length by `calculate_prorated_rent`.
    pub move_in_day: u32,
}

/// Proration result with display strings alongside the raw numbers.
#[derive(Debug, Serialize)]
pub struct ProrateResponse {
    #[serde(flatten)]
    pub result: ProrationResult,
    pub daily_rate_display: String,
    pub prorated_rent_display: String,
    pub calculation: String,
}

impl From<ProrationResult> for ProrateResponse {
    fn from(result: ProrationResult) -> Self {
        Self {
            daily_rate_display: format_currency(result.daily_rate),
            prorated_rent_display: format_currency(result.prorated_rent),
            calculation: result.caption(),
            result,
        }
    }
}
