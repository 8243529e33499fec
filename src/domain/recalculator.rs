//! Formula recalculation engine trait.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::estimate::EstimateError;

/// Recomputes the formulas of a workbook file.
///
/// The estimate workbook carries its own pricing formulas; this trait is the
/// only seam through which they are evaluated. Implementations never modify
/// the template, only the scratch copy handed to them.
///
/// # Implementations
///
/// - [`crate::infrastructure::recalc::LibreOfficeRecalculator`] - headless LibreOffice
/// - [`crate::infrastructure::recalc::NoopRecalculator`] - reads cached values as-is
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Recalculator: Send + Sync {
    /// Recalculates `workbook` and returns the path of the recalculated file.
    ///
    /// `out_dir` is an empty scratch directory the implementation may write
    /// into. The returned path may be `workbook` itself.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::Recalculation`] if the engine fails or times out.
    async fn recalculate(&self, workbook: &Path, out_dir: &Path)
    -> Result<PathBuf, EstimateError>;

    /// Checks whether the engine is usable.
    ///
    /// Used by the health endpoint.
    async fn health_check(&self) -> bool;

    /// Short engine name for logs and health output.
    fn name(&self) -> &'static str;
}
