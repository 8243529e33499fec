//! Maintenance estimate entities and workbook layout.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Smallest property size the estimate model accepts, in square feet.
pub const MIN_SQUARE_FOOTAGE: f64 = 1000.0;

/// Errors that can occur while producing an estimate.
#[derive(Debug, thiserror::Error)]
pub enum EstimateError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Failed to access workbook: {0}")]
    Io(#[from] std::io::Error),

    #[error("Sheet \"{sheet}\" not found. Found: {found:?}")]
    SheetNotFound { sheet: String, found: Vec<String> },

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Recalculation failed: {0}")]
    Recalculation(String),

    #[error("Cell {cell} does not hold a number (found {value:?})")]
    InvalidOutput { cell: String, value: String },

    #[error("Estimate task failed: {0}")]
    Task(String),
}

/// Inputs written into the estimate workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateRequest {
    pub project: String,
    pub address: String,
    pub sqft: f64,
}

impl EstimateRequest {
    /// Checks the request before any file is touched.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::InvalidInput`] if the square footage is not a
    /// finite number of at least [`MIN_SQUARE_FOOTAGE`].
    pub fn validate(&self) -> Result<(), EstimateError> {
        if !self.sqft.is_finite() || self.sqft < MIN_SQUARE_FOOTAGE {
            return Err(EstimateError::InvalidInput(format!(
                "Square footage must be at least {MIN_SQUARE_FOOTAGE}, got {}",
                self.sqft
            )));
        }
        Ok(())
    }
}

/// Annual package totals read back from the recalculated workbook.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EstimateTotals {
    pub basic_total: f64,
    pub gold_total: f64,
    pub platinum_total: f64,
}

/// Cells receiving the request fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputCells {
    pub project: String,
    pub address: String,
    pub sqft: String,
}

/// Cells holding the package totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputCells {
    pub basic: String,
    pub gold: String,
    pub platinum: String,
}

/// Where the template lives and which cells carry meaning.
///
/// Inputs and outputs are read from the same sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkbookLayout {
    pub template_path: PathBuf,
    pub sheet_name: String,
    pub inputs: InputCells,
    pub outputs: OutputCells,
}

impl Default for WorkbookLayout {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from("estimate_model.xlsx"),
            sheet_name: "Maintenance Estimate".to_string(),
            inputs: InputCells {
                project: "C2".to_string(),
                address: "C3".to_string(),
                sqft: "C6".to_string(),
            },
            outputs: OutputCells {
                basic: "J22".to_string(),
                gold: "J23".to_string(),
                platinum: "J24".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(sqft: f64) -> EstimateRequest {
        EstimateRequest {
            project: "Oak Terrace".to_string(),
            address: "12 Elm St".to_string(),
            sqft,
        }
    }

    #[test]
    fn test_validate_accepts_minimum() {
        assert!(request(1000.0).validate().is_ok());
        assert!(request(19_000.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_small_or_invalid() {
        assert!(matches!(
            request(999.0).validate(),
            Err(EstimateError::InvalidInput(_))
        ));
        assert!(request(f64::NAN).validate().is_err());
        assert!(request(f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_default_layout() {
        let layout = WorkbookLayout::default();
        assert_eq!(layout.sheet_name, "Maintenance Estimate");
        assert_eq!(layout.inputs.sqft, "C6");
        assert_eq!(layout.outputs.platinum, "J24");
    }

    #[test]
    fn test_sheet_not_found_message_lists_sheets() {
        let err = EstimateError::SheetNotFound {
            sheet: "Maintenance Estimate".to_string(),
            found: vec!["Sheet1".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Sheet \"Maintenance Estimate\" not found. Found: [\"Sheet1\"]"
        );
    }
}
