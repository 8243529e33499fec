//! No-op recalculation engine.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::estimate::EstimateError;
use crate::domain::recalculator::Recalculator;

/// An engine that leaves the workbook untouched.
///
/// Totals are then read from the values cached in the file when it was last
/// saved, so input changes do not flow through the formulas.
///
/// # Use Cases
///
/// - Development environments without LibreOffice
/// - Tests against workbooks with constant totals
pub struct NoopRecalculator;

impl NoopRecalculator {
    /// Creates a new NoopRecalculator instance.
    pub fn new() -> Self {
        debug!("Using NoopRecalculator (cached workbook values)");
        Self
    }
}

impl Default for NoopRecalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Recalculator for NoopRecalculator {
    async fn recalculate(
        &self,
        workbook: &Path,
        _out_dir: &Path,
    ) -> Result<PathBuf, EstimateError> {
        Ok(workbook.to_path_buf())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "none"
    }
}
