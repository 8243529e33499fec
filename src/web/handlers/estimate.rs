//! Maintenance estimate form handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use validator::Validate;

use super::validation_message;
use crate::domain::estimate::{EstimateRequest, EstimateTotals};
use crate::state::AppState;
use crate::utils::currency::format_currency;

/// Submitted estimate form fields.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EstimateForm {
    #[serde(default)]
    #[validate(length(max = 200, message = "Project name is too long"))]
    pub project: String,

    #[serde(default)]
    #[validate(length(max = 300, message = "Address is too long"))]
    pub address: String,

    #[validate(range(min = 1000.0, message = "Square footage must be at least 1000"))]
    pub sqft: f64,
}

impl Default for EstimateForm {
    fn default() -> Self {
        Self {
            project: String::new(),
            address: String::new(),
            sqft: 19_000.0,
        }
    }
}

/// Package totals formatted for display.
pub struct TotalsView {
    pub basic: String,
    pub gold: String,
    pub platinum: String,
}

impl From<EstimateTotals> for TotalsView {
    fn from(totals: EstimateTotals) -> Self {
        Self {
            basic: format_currency(totals.basic_total),
            gold: format_currency(totals.gold_total),
            platinum: format_currency(totals.platinum_total),
        }
    }
}

/// Template for the estimate page.
///
/// Renders `templates/estimate.html` with:
/// - Project, address and square footage inputs
/// - Basic / Gold / Platinum totals after a successful submit
/// - Error banner when the workbook could not be evaluated
#[derive(Template, WebTemplate)]
#[template(path = "estimate.html")]
pub struct EstimateTemplate {
    pub form: EstimateForm,
    pub totals: Option<TotalsView>,
    pub error: Option<String>,
}

/// Renders the empty estimate form.
///
/// # Endpoint
///
/// `GET /estimate`
pub async fn estimate_form_handler() -> impl IntoResponse {
    EstimateTemplate {
        form: EstimateForm::default(),
        totals: None,
        error: None,
    }
}

/// Handles the estimate form submit.
///
/// # Endpoint
///
/// `POST /estimate`
///
/// # Response Codes
///
/// - **200 OK**: Page with the three package totals
/// - **400 Bad Request**: Page with the validation message
/// - **500 Internal Server Error**: Page with `Error calculating estimate: <reason>`
pub async fn estimate_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<EstimateForm>,
) -> impl IntoResponse {
    if let Err(errors) = form.validate() {
        let error = Some(validation_message(&errors));
        return (
            StatusCode::BAD_REQUEST,
            EstimateTemplate {
                form,
                totals: None,
                error,
            },
        );
    }

    let request = EstimateRequest {
        project: form.project.clone(),
        address: form.address.clone(),
        sqft: form.sqft,
    };

    match state.estimate_service.estimate(request).await {
        Ok(totals) => (
            StatusCode::OK,
            EstimateTemplate {
                form,
                totals: Some(totals.into()),
                error: None,
            },
        ),
        Err(e) => {
            tracing::error!("Estimate failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                EstimateTemplate {
                    form,
                    totals: None,
                    error: Some(format!("Error calculating estimate: {e}")),
                },
            )
        }
    }
}
