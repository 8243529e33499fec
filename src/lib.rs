//! # Prorator
//!
//! Two small calculators for a property management office, served as HTML
//! forms and a JSON API with Axum:
//!
//! - **Prorated rent** - rent owed for a partial first month, from the
//!   move-in day through the end of the month
//! - **Maintenance estimate** - Basic, Gold and Platinum annual pricing read
//!   from an Excel model after writing the property inputs into it
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Proration math, estimate types and the
//!   [`Recalculator`](domain::Recalculator) seam
//! - **Application Layer** ([`application`]) - Estimate orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Workbook I/O and
//!   recalculation engines
//! - **API Layer** ([`api`]) - JSON handlers and DTOs
//! - **Web Layer** ([`web`]) - HTML forms
//!
//! ## Quick Start
//!
//! ```bash
//! export ESTIMATE_MODEL_PATH="estimate_model.xlsx"
//! export RECALC_ENGINE="libreoffice"   # or "none" to read cached values
//!
//! cargo run
//! ```
//!
//! The proration calculator is also available on the command line:
//!
//! ```bash
//! cargo run --bin prorate -- --rent 1750 --year 2026 --month jan --day 18
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::EstimateService;
    pub use crate::domain::{
        EstimateRequest, EstimateTotals, Month, ProrationResult, Recalculator, WorkbookLayout,
        calculate_prorated_rent,
    };
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
