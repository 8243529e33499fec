//! Recalculation engine implementations.
//!
//! - [`LibreOfficeRecalculator`] - recomputes formulas with headless LibreOffice
//! - [`NoopRecalculator`] - passes the workbook through untouched

pub mod libreoffice;
pub mod noop;

pub use libreoffice::LibreOfficeRecalculator;
pub use noop::NoopRecalculator;
