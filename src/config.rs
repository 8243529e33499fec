//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Server
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! ## Estimate workbook
//!
//! ```bash
//! export ESTIMATE_MODEL_PATH="estimate_model.xlsx"
//! export ESTIMATE_SHEET="Maintenance Estimate"
//!
//! # Input cells
//! export ESTIMATE_CELL_PROJECT="C2"
//! export ESTIMATE_CELL_ADDRESS="C3"
//! export ESTIMATE_CELL_SQFT="C6"
//!
//! # Output cells (same sheet)
//! export ESTIMATE_CELL_BASIC="J22"
//! export ESTIMATE_CELL_GOLD="J23"
//! export ESTIMATE_CELL_PLATINUM="J24"
//! ```
//!
//! ## Recalculation engine
//!
//! - `RECALC_ENGINE` - `libreoffice` or `none` (default: `libreoffice`)
//! - `RECALC_COMMAND` - LibreOffice executable (default: `soffice`)
//! - `RECALC_TIMEOUT_SECONDS` - Per-estimate timeout (default: 60, range: 1-600)

use anyhow::Result;
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::estimate::{InputCells, OutputCells, WorkbookLayout};
use crate::utils::cell_ref::normalize_cell_ref;

/// Which engine recomputes the estimate workbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecalcEngine {
    LibreOffice,
    None,
}

impl FromStr for RecalcEngine {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "libreoffice" | "soffice" => Ok(Self::LibreOffice),
            "none" | "noop" => Ok(Self::None),
            other => anyhow::bail!("RECALC_ENGINE must be 'libreoffice' or 'none', got '{other}'"),
        }
    }
}

impl fmt::Display for RecalcEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LibreOffice => f.write_str("libreoffice"),
            Self::None => f.write_str("none"),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Template location and cell mapping for the estimator.
    pub workbook: WorkbookLayout,
    pub recalc_engine: RecalcEngine,
    /// Executable used by the LibreOffice engine.
    pub recalc_command: String,
    pub recalc_timeout_seconds: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `RECALC_ENGINE` names an unknown engine.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let workbook = Self::load_workbook_layout();

        let recalc_engine = env::var("RECALC_ENGINE")
            .map(|v| v.parse::<RecalcEngine>())
            .unwrap_or(Ok(RecalcEngine::LibreOffice))?;

        let recalc_command = env::var("RECALC_COMMAND").unwrap_or_else(|_| "soffice".to_string());

        let recalc_timeout_seconds = env::var("RECALC_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            workbook,
            recalc_engine,
            recalc_command,
            recalc_timeout_seconds,
        })
    }

    /// Loads the workbook path, sheet and cell mapping, falling back to the
    /// stock estimate model layout for anything unset.
    fn load_workbook_layout() -> WorkbookLayout {
        let defaults = WorkbookLayout::default();
        let cell = |key: &str, default: &str| env::var(key).unwrap_or_else(|_| default.to_string());

        WorkbookLayout {
            template_path: env::var("ESTIMATE_MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.template_path),
            sheet_name: env::var("ESTIMATE_SHEET").unwrap_or(defaults.sheet_name),
            inputs: InputCells {
                project: cell("ESTIMATE_CELL_PROJECT", &defaults.inputs.project),
                address: cell("ESTIMATE_CELL_ADDRESS", &defaults.inputs.address),
                sqft: cell("ESTIMATE_CELL_SQFT", &defaults.inputs.sqft),
            },
            outputs: OutputCells {
                basic: cell("ESTIMATE_CELL_BASIC", &defaults.outputs.basic),
                gold: cell("ESTIMATE_CELL_GOLD", &defaults.outputs.gold),
                platinum: cell("ESTIMATE_CELL_PLATINUM", &defaults.outputs.platinum),
            },
        }
    }

    /// Validates the configuration and normalizes cell coordinates to upper case.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - the sheet name is empty
    /// - any cell is not a plain A1 coordinate
    /// - `recalc_timeout_seconds` is outside 1-600
    /// - `recalc_command` is empty while the LibreOffice engine is selected
    pub fn validate(&mut self) -> Result<()> {
        // Validate log format
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        // Validate listen address format
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.workbook.sheet_name.trim().is_empty() {
            anyhow::bail!("ESTIMATE_SHEET must not be empty");
        }

        let layout = &mut self.workbook;
        for (key, cell) in [
            ("ESTIMATE_CELL_PROJECT", &mut layout.inputs.project),
            ("ESTIMATE_CELL_ADDRESS", &mut layout.inputs.address),
            ("ESTIMATE_CELL_SQFT", &mut layout.inputs.sqft),
            ("ESTIMATE_CELL_BASIC", &mut layout.outputs.basic),
            ("ESTIMATE_CELL_GOLD", &mut layout.outputs.gold),
            ("ESTIMATE_CELL_PLATINUM", &mut layout.outputs.platinum),
        ] {
            match normalize_cell_ref(cell) {
                Some(normalized) => *cell = normalized,
                None => anyhow::bail!("{key} must be a cell like 'C2', got '{cell}'"),
            }
        }

        if self.recalc_timeout_seconds == 0 || self.recalc_timeout_seconds > 600 {
            anyhow::bail!(
                "RECALC_TIMEOUT_SECONDS must be between 1 and 600, got {}",
                self.recalc_timeout_seconds
            );
        }

        if self.recalc_engine == RecalcEngine::LibreOffice && self.recalc_command.trim().is_empty()
        {
            anyhow::bail!("RECALC_COMMAND must not be empty when RECALC_ENGINE is 'libreoffice'");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Estimate model: {} (sheet '{}')",
            self.workbook.template_path.display(),
            self.workbook.sheet_name
        );
        tracing::info!(
            "  Input cells: project={} address={} sqft={}",
            self.workbook.inputs.project,
            self.workbook.inputs.address,
            self.workbook.inputs.sqft
        );
        tracing::info!(
            "  Output cells: basic={} gold={} platinum={}",
            self.workbook.outputs.basic,
            self.workbook.outputs.gold,
            self.workbook.outputs.platinum
        );
        match self.recalc_engine {
            RecalcEngine::LibreOffice => tracing::info!(
                "  Recalculation: {} ({}, timeout {}s)",
                self.recalc_engine,
                self.recalc_command,
                self.recalc_timeout_seconds
            ),
            RecalcEngine::None => tracing::info!("  Recalculation: disabled (cached values)"),
        }
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn test_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            workbook: WorkbookLayout::default(),
            recalc_engine: RecalcEngine::LibreOffice,
            recalc_command: "soffice".to_string(),
            recalc_timeout_seconds: 60,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = test_config();
        assert!(config.validate().is_ok());

        // Test invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Test invalid listen address
        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        // Test timeout bounds
        config.recalc_timeout_seconds = 0;
        assert!(config.validate().is_err());
        config.recalc_timeout_seconds = 601;
        assert!(config.validate().is_err());
        config.recalc_timeout_seconds = 60;

        // Empty command only matters for LibreOffice
        config.recalc_command = String::new();
        assert!(config.validate().is_err());
        config.recalc_engine = RecalcEngine::None;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cell_validation_normalizes() {
        let mut config = test_config();
        config.workbook.outputs.gold = " j23 ".to_string();
        config.validate().unwrap();
        assert_eq!(config.workbook.outputs.gold, "J23");

        config.workbook.inputs.sqft = "C0".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ESTIMATE_CELL_SQFT"));
    }

    #[test]
    fn test_empty_sheet_name_rejected() {
        let mut config = test_config();
        config.workbook.sheet_name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_recalc_engine_parse() {
        assert_eq!(
            "LibreOffice".parse::<RecalcEngine>().unwrap(),
            RecalcEngine::LibreOffice
        );
        assert_eq!("none".parse::<RecalcEngine>().unwrap(), RecalcEngine::None);
        assert!("excel".parse::<RecalcEngine>().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            for key in [
                "ESTIMATE_MODEL_PATH",
                "ESTIMATE_SHEET",
                "ESTIMATE_CELL_BASIC",
                "RECALC_ENGINE",
                "RECALC_TIMEOUT_SECONDS",
            ] {
                env::remove_var(key);
            }
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.workbook, WorkbookLayout::default());
        assert_eq!(config.recalc_engine, RecalcEngine::LibreOffice);
        assert_eq!(config.recalc_timeout_seconds, 60);
    }

    #[test]
    #[serial]
    fn test_workbook_layout_from_env() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("ESTIMATE_MODEL_PATH", "/srv/models/pricing.xlsx");
            env::set_var("ESTIMATE_SHEET", "Pricing");
            env::set_var("ESTIMATE_CELL_BASIC", "K30");
            env::set_var("RECALC_ENGINE", "none");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(
            config.workbook.template_path,
            PathBuf::from("/srv/models/pricing.xlsx")
        );
        assert_eq!(config.workbook.sheet_name, "Pricing");
        assert_eq!(config.workbook.outputs.basic, "K30");
        assert_eq!(config.workbook.outputs.gold, "J23");
        assert_eq!(config.recalc_engine, RecalcEngine::None);

        // Cleanup
        unsafe {
            env::remove_var("ESTIMATE_MODEL_PATH");
            env::remove_var("ESTIMATE_SHEET");
            env::remove_var("ESTIMATE_CELL_BASIC");
            env::remove_var("RECALC_ENGINE");
        }
    }

    #[test]
    #[serial]
    fn test_unknown_engine_fails_to_load() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("RECALC_ENGINE", "excel");
        }

        assert!(Config::from_env().is_err());

        // Cleanup
        unsafe {
            env::remove_var("RECALC_ENGINE");
        }
    }
}
