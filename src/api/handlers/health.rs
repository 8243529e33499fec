//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Template**: The estimate workbook exists and is a file
/// 2. **Recalculator**: The configured engine responds
///
/// Proration has no dependencies and is always available.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let template_check = check_template(&state).await;
    let recalc_check = check_recalculator(&state).await;

    let all_healthy = template_check.is_ok() && recalc_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            template: template_check,
            recalculator: recalc_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the estimate template is present.
async fn check_template(state: &AppState) -> CheckStatus {
    let path = &state.estimate_service.layout().template_path;

    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() => CheckStatus::ok(format!("Found {}", path.display())),
        Ok(_) => CheckStatus::error(format!("{} is not a file", path.display())),
        Err(e) => CheckStatus::error(format!("{}: {}", path.display(), e)),
    }
}

/// Checks that the recalculation engine is usable.
async fn check_recalculator(state: &AppState) -> CheckStatus {
    let engine = state.estimate_service.recalculator();

    if engine.health_check().await {
        CheckStatus::ok(format!("Engine '{}' available", engine.name()))
    } else {
        CheckStatus::error(format!("Engine '{}' unavailable", engine.name()))
    }
}
