//! Prorated rent form handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::Query,
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use validator::Validate;

use super::validation_message;
use crate::domain::month::Month;
use crate::domain::proration::{ProrationResult, calculate_prorated_rent, days_in_month};
use crate::utils::currency::format_currency;

const DEFAULT_MOVE_IN_DAY: u32 = 18;

/// Submitted proration form fields.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProrateForm {
    #[validate(range(min = 0.0, message = "Monthly rent must not be negative"))]
    pub monthly_rent: f64,

    #[validate(range(min = 1900, max = 2100, message = "Year must be between 1900 and 2100"))]
    pub year: i32,

    #[validate(range(min = 1, max = 12, message = "Month must be between 1 and 12"))]
    pub month: u32,

    /// Checked against the month's length by `calculate_prorated_rent`.
    pub move_in_day: u32,
}

impl Default for ProrateForm {
    fn default() -> Self {
        Self {
            monthly_rent: 1750.0,
            year: 2026,
            month: 1,
            move_in_day: DEFAULT_MOVE_IN_DAY,
        }
    }
}

/// Optional prefill for the form, e.g. `/prorate?year=2024&month=2`.
#[derive(Debug, Default, Deserialize)]
pub struct ProrateQuery {
    pub monthly_rent: Option<f64>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub move_in_day: Option<u32>,
}

/// One `<option>` of the month select.
pub struct MonthOption {
    pub value: u32,
    pub name: &'static str,
    pub selected: bool,
}

/// Result fields formatted for display.
pub struct ProrationView {
    pub period: String,
    pub days_in_month: u32,
    pub days_occupied: u32,
    pub daily_rate: String,
    pub prorated_rent: String,
    pub caption: String,
}

impl From<&ProrationResult> for ProrationView {
    fn from(result: &ProrationResult) -> Self {
        Self {
            period: result.period(),
            days_in_month: result.days_in_month,
            days_occupied: result.days_occupied,
            daily_rate: format_currency(result.daily_rate),
            prorated_rent: format_currency(result.prorated_rent),
            caption: result.caption(),
        }
    }
}

/// Template for the proration page.
///
/// Renders `templates/prorate.html` with:
/// - Rent, year, month and move-in day inputs
/// - Results block after a successful submit
/// - Error banner for rejected input
#[derive(Template, WebTemplate)]
#[template(path = "prorate.html")]
pub struct ProrateTemplate {
    pub form: ProrateForm,
    pub months: Vec<MonthOption>,
    pub max_day: u32,
    pub result: Option<ProrationView>,
    pub error: Option<String>,
}

impl ProrateTemplate {
    fn new(form: ProrateForm) -> Self {
        let max_day = Month::from_number(form.month)
            .ok()
            .and_then(|m| days_in_month(form.year, m))
            .unwrap_or(31);

        let months = Month::ALL
            .iter()
            .map(|m| MonthOption {
                value: m.number(),
                name: m.name(),
                selected: m.number() == form.month,
            })
            .collect();

        Self {
            form,
            months,
            max_day,
            result: None,
            error: None,
        }
    }
}

/// Renders the empty proration form.
///
/// # Endpoint
///
/// `GET /prorate`
///
/// Query parameters prefill the form. The move-in day defaults to the 18th,
/// clamped to the length of the selected month.
pub async fn prorate_form_handler(Query(query): Query<ProrateQuery>) -> impl IntoResponse {
    let defaults = ProrateForm::default();
    let mut page = ProrateTemplate::new(ProrateForm {
        monthly_rent: query.monthly_rent.unwrap_or(defaults.monthly_rent),
        year: query.year.unwrap_or(defaults.year),
        month: query.month.unwrap_or(defaults.month),
        move_in_day: defaults.move_in_day,
    });

    let max_day = page.max_day;
    page.form.move_in_day = query
        .move_in_day
        .unwrap_or_else(|| DEFAULT_MOVE_IN_DAY.min(max_day));

    page
}

/// Handles the proration form submit.
///
/// # Endpoint
///
/// `POST /prorate`
///
/// # Response Codes
///
/// - **200 OK**: Page with results
/// - **400 Bad Request**: Page with the validation message shown verbatim
pub async fn prorate_submit_handler(Form(form): Form<ProrateForm>) -> impl IntoResponse {
    let mut page = ProrateTemplate::new(form.clone());

    if let Err(errors) = form.validate() {
        page.error = Some(validation_message(&errors));
        return (StatusCode::BAD_REQUEST, page);
    }

    match calculate_prorated_rent(form.monthly_rent, form.year, form.month, form.move_in_day) {
        Ok(result) => {
            page.result = Some(ProrationView::from(&result));
            (StatusCode::OK, page)
        }
        Err(e) => {
            page.error = Some(e.to_string());
            (StatusCode::BAD_REQUEST, page)
        }
    }
}
