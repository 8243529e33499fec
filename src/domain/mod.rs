//! Domain layer containing the calculators' business rules.
//!
//! Nothing here touches HTTP or the filesystem directly.
//!
//! # Modules
//!
//! - [`month`] - Calendar month value type
//! - [`proration`] - Prorated rent calculation and its result record
//! - [`estimate`] - Maintenance estimate request, totals and workbook layout
//! - [`recalculator`] - Trait for the external formula recalculation engine
//!
//! # Estimate Flow
//!
//! 1. Handler builds an [`estimate::EstimateRequest`]
//! 2. [`crate::application::services::EstimateService`] copies the template
//!    and writes the inputs
//! 3. A [`recalculator::Recalculator`] recomputes the copy
//! 4. Totals are read back into [`estimate::EstimateTotals`]

pub mod estimate;
pub mod month;
pub mod proration;
pub mod recalculator;

pub use estimate::{EstimateError, EstimateRequest, EstimateTotals, WorkbookLayout};
pub use month::Month;
pub use proration::{ProrationError, ProrationResult, calculate_prorated_rent, days_in_month};
pub use recalculator::Recalculator;
