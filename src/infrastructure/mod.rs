//! Infrastructure layer: filesystem and external-process integrations.
//!
//! - [`workbook`] - Reads and writes cells of `.xlsx` files
//! - [`recalc`] - Implementations of [`crate::domain::Recalculator`]

pub mod recalc;
pub mod workbook;
