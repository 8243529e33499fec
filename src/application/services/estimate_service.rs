//! Spreadsheet-backed maintenance estimate service.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use tokio::task;
use tracing::{debug, info, warn};

use crate::domain::estimate::{EstimateError, EstimateRequest, EstimateTotals, WorkbookLayout};
use crate::domain::recalculator::Recalculator;
use crate::infrastructure::workbook;

/// Produces estimates by running the template workbook's own formulas.
///
/// Every call works on a fresh copy of the template inside its own temporary
/// directory, so concurrent estimates never share a file and the template is
/// only ever read. The directory is removed when the call returns.
pub struct EstimateService {
    layout: WorkbookLayout,
    recalculator: Arc<dyn Recalculator>,
}

impl EstimateService {
    /// Creates a new estimate service.
    pub fn new(layout: WorkbookLayout, recalculator: Arc<dyn Recalculator>) -> Self {
        Self {
            layout,
            recalculator,
        }
    }

    /// Returns the workbook layout in use.
    pub fn layout(&self) -> &WorkbookLayout {
        &self.layout
    }

    /// Returns the recalculation engine in use.
    pub fn recalculator(&self) -> &dyn Recalculator {
        self.recalculator.as_ref()
    }

    /// Computes the three package totals for `request`.
    ///
    /// # Steps
    ///
    /// 1. Validate the request
    /// 2. Copy the template into a scratch directory
    /// 3. Write the inputs into the copy
    /// 4. Recalculate the copy
    /// 5. Read the totals
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::InvalidInput`] for a bad request, otherwise
    /// whichever step failed. No partial totals are returned.
    pub async fn estimate(&self, request: EstimateRequest) -> Result<EstimateTotals, EstimateError> {
        request.validate()?;

        let scratch = run_blocking(|| {
            Ok(tempfile::Builder::new().prefix("estimate-").tempdir()?)
        })
        .await?;

        let result = self.estimate_in(scratch.path(), request).await;

        // Removes the copy and any engine output off the async workers.
        match task::spawn_blocking(move || scratch.close()).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!("Failed to remove estimate scratch directory: {}", e),
            Err(e) => warn!("Scratch cleanup task failed: {}", e),
        }

        result
    }

    async fn estimate_in(
        &self,
        scratch: &Path,
        request: EstimateRequest,
    ) -> Result<EstimateTotals, EstimateError> {
        let started = Instant::now();
        let copy = self.copy_template(scratch).await?;
        debug!(copy = %copy.display(), "Copied estimate template");

        let layout = self.layout.clone();
        let target = copy.clone();
        run_blocking(move || workbook::write_inputs(&target, &layout, &request)).await?;

        let out_dir = scratch.join("recalculated");
        tokio::fs::create_dir(&out_dir).await?;

        let recalculated = self
            .recalculator
            .recalculate(&copy, &out_dir)
            .await
            .inspect_err(|e| {
                warn!(engine = self.recalculator.name(), "Recalculation failed: {}", e)
            })?;

        let layout = self.layout.clone();
        let totals = run_blocking(move || workbook::read_totals(&recalculated, &layout)).await?;

        info!(
            engine = self.recalculator.name(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            basic = totals.basic_total,
            gold = totals.gold_total,
            platinum = totals.platinum_total,
            "Estimate computed"
        );

        Ok(totals)
    }

    async fn copy_template(&self, scratch: &Path) -> Result<PathBuf, EstimateError> {
        let file_name = self
            .layout
            .template_path
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("estimate_model.xlsx"));
        let copy = scratch.join(file_name);

        tokio::fs::copy(&self.layout.template_path, &copy)
            .await
            .map_err(|e| {
                EstimateError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "cannot copy template {}: {e}",
                        self.layout.template_path.display()
                    ),
                ))
            })?;

        Ok(copy)
    }
}

async fn run_blocking<T, F>(f: F) -> Result<T, EstimateError>
where
    F: FnOnce() -> Result<T, EstimateError> + Send + 'static,
    T: Send + 'static,
{
    task::spawn_blocking(f)
        .await
        .map_err(|e| EstimateError::Task(e.to_string()))?
}
