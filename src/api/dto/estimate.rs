//! DTOs for the maintenance estimate endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::estimate::{EstimateRequest, EstimateTotals};

/// Request for a maintenance estimate.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EstimateRequestDto {
    /// Client or project name, written verbatim into the workbook.
    #[serde(default)]
    #[validate(length(max = 200))]
    pub project: String,

    #[serde(default)]
    #[validate(length(max = 300))]
    pub address: String,

    /// Property square footage.
    #[validate(range(min = 1000.0, message = "Square footage must be at least 1000"))]
    pub sqft: f64,
}

impl From<EstimateRequestDto> for EstimateRequest {
    fn from(dto: EstimateRequestDto) -> Self {
        Self {
            project: dto.project,
            address: dto.address,
            sqft: dto.sqft,
        }
    }
}

/// Annual package totals.
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub basic_total: f64,
    pub gold_total: f64,
    pub platinum_total: f64,
}

impl From<EstimateTotals> for EstimateResponse {
    fn from(totals: EstimateTotals) -> Self {
        Self {
            basic_total: totals.basic_total,
            gold_total: totals.gold_total,
            platinum_total: totals.platinum_total,
        }
    }
}
