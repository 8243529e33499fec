//! Utility functions shared by the web, API and CLI front-ends.
//!
//! - [`currency`] - Dollar amount formatting
//! - [`cell_ref`] - A1-style cell coordinate validation
//! - [`logger`] - `tracing` subscriber setup

pub mod cell_ref;
pub mod currency;
pub mod logger;
