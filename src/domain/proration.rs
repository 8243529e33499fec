//! Prorated rent calculation for a partial first month.
//!
//! The move-in day itself counts as occupied, so moving in on the 1st owes
//! the full monthly rent and moving in on the last day owes one day's rent.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::month::Month;
use crate::utils::currency::format_currency;

/// Errors raised before a proration is computed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProrationError {
    #[error("{0}")]
    InvalidInput(String),
}

/// Outcome of a single proration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProrationResult {
    pub month: Month,
    pub year: i32,
    pub monthly_rent: f64,
    pub move_in_day: u32,
    pub days_in_month: u32,
    pub days_occupied: u32,
    pub daily_rate: f64,
    pub prorated_rent: f64,
}

impl ProrationResult {
    /// Human-readable form of the fraction applied to the rent,
    /// e.g. `$1,750.00 × (14/31)`.
    pub fn caption(&self) -> String {
        format!(
            "{} × ({}/{})",
            format_currency(self.monthly_rent),
            self.days_occupied,
            self.days_in_month
        )
    }

    /// Month and year label, e.g. `January 2026`.
    pub fn period(&self) -> String {
        format!("{} {}", self.month, self.year)
    }
}

/// Number of days in `month` of `year` under the proleptic Gregorian calendar.
///
/// Returns `None` when the year is outside the range chrono can represent.
pub fn days_in_month(year: i32, month: Month) -> Option<u32> {
    NaiveDate::from_ymd_opt(year, month.number(), 1)?;

    let (next_year, next_month) = match month {
        Month::December => (year.checked_add(1)?, 1),
        other => (year, other.number() + 1),
    };

    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    Some(first_of_next.pred_opt()?.day())
}

/// Computes rent owed from `move_in_day` through the end of the month.
///
/// # Arguments
///
/// - `monthly_rent` - full rent for the month, non-negative
/// - `year` - calendar year
/// - `month` - month index, `1..=12`
/// - `move_in_day` - first occupied day, `1..=days_in_month`
///
/// # Errors
///
/// Returns [`ProrationError::InvalidInput`] when the month index, year or
/// rent is unusable, or when `move_in_day` falls outside the month. The
/// message names the valid bound and is meant to be shown to the user as-is.
///
/// # Example
///
/// ```
/// use prorator::domain::proration::calculate_prorated_rent;
///
/// let result = calculate_prorated_rent(1750.0, 2026, 1, 18).unwrap();
/// assert_eq!(result.days_occupied, 14);
/// assert!((result.prorated_rent - 790.32).abs() < 0.01);
/// ```
pub fn calculate_prorated_rent(
    monthly_rent: f64,
    year: i32,
    month: u32,
    move_in_day: u32,
) -> Result<ProrationResult, ProrationError> {
    let month = Month::from_number(month)
        .map_err(|e| ProrationError::InvalidInput(e.to_string()))?;

    if !monthly_rent.is_finite() || monthly_rent < 0.0 {
        return Err(ProrationError::InvalidInput(
            "Monthly rent must be a non-negative amount.".to_string(),
        ));
    }

    let days_in_month = days_in_month(year, month).ok_or_else(|| {
        ProrationError::InvalidInput(format!(
            "Year {year} is outside the supported calendar range."
        ))
    })?;

    if !(1..=days_in_month).contains(&move_in_day) {
        return Err(ProrationError::InvalidInput(format!(
            "Move-in day must be between 1 and {days_in_month} for that month."
        )));
    }

    let days_occupied = days_in_month - move_in_day + 1;
    let daily_rate = monthly_rent / f64::from(days_in_month);
    let prorated_rent = daily_rate * f64::from(days_occupied);

    tracing::debug!(
        %month,
        year,
        move_in_day,
        days_occupied,
        prorated_rent,
        "Computed prorated rent"
    );

    Ok(ProrationResult {
        month,
        year,
        monthly_rent,
        move_in_day,
        days_in_month,
        days_occupied,
        daily_rate,
        prorated_rent,
    })
}
