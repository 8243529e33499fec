//! Headless LibreOffice recalculation engine.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::domain::estimate::EstimateError;
use crate::domain::recalculator::Recalculator;

/// Timeout for the `--version` probe used by health checks.
const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

const PROFILE_DIR: &str = ".lo-profile";

/// Profile settings forcing a full recalculation of OOXML and ODF files on load.
const RECALC_ON_LOAD_XCU: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<oor:items xmlns:oor="http://openoffice.org/2001/registry" xmlns:xs="http://www.w3.org/2001/XMLSchema" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
<item oor:path="/org.openoffice.Office.Calc/Formula/Load"><prop oor:name="OOXMLRecalcMode" oor:op="fuse"><value>0</value></prop></item>
<item oor:path="/org.openoffice.Office.Calc/Formula/Load"><prop oor:name="ODFRecalcMode" oor:op="fuse"><value>0</value></prop></item>
</oor:items>
"#;

/// Recalculates workbooks by round-tripping them through `soffice --convert-to xlsx`.
///
/// LibreOffice loads the copy, evaluates its formulas and writes a new file
/// into `out_dir`. Each call gets its own user profile under `out_dir` so
/// concurrent conversions do not contend for the profile lock.
///
/// LibreOffice trusts the cached results in files saved by Excel unless told
/// otherwise, so every fresh profile is seeded with "Recalculation on File
/// Load: Always recalculate" before the conversion runs.
pub struct LibreOfficeRecalculator {
    command: String,
    timeout: Duration,
}

impl LibreOfficeRecalculator {
    /// Creates an engine that invokes `command` (usually `soffice`).
    pub fn new(command: impl Into<String>, timeout: Duration) -> Self {
        Self {
            command: command.into(),
            timeout,
        }
    }

    /// Writes a user profile under `out_dir` with recalculation on load forced on.
    async fn seed_profile(out_dir: &Path) -> Result<PathBuf, EstimateError> {
        let profile = out_dir.join(PROFILE_DIR);
        let user_dir = profile.join("user");

        tokio::fs::create_dir_all(&user_dir).await?;
        tokio::fs::write(user_dir.join("registrymodifications.xcu"), RECALC_ON_LOAD_XCU).await?;

        Ok(profile)
    }

    fn convert_command(&self, workbook: &Path, out_dir: &Path) -> Command {
        let profile = out_dir.join(PROFILE_DIR);

        let mut cmd = Command::new(&self.command);
        cmd.arg(format!("-env:UserInstallation=file://{}", profile.display()))
            .args(["--headless", "--norestore", "--calc", "--convert-to", "xlsx"])
            .arg("--outdir")
            .arg(out_dir)
            .arg(workbook)
            .stdin(Stdio::null())
            .kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl Recalculator for LibreOfficeRecalculator {
    async fn recalculate(
        &self,
        workbook: &Path,
        out_dir: &Path,
    ) -> Result<PathBuf, EstimateError> {
        let file_name = workbook.file_name().ok_or_else(|| {
            EstimateError::Recalculation(format!("{} has no file name", workbook.display()))
        })?;

        let profile = Self::seed_profile(out_dir).await?;
        debug!(profile = %profile.display(), "Seeded LibreOffice profile");

        let started = Instant::now();
        let output = timeout(self.timeout, self.convert_command(workbook, out_dir).output())
            .await
            .map_err(|_| {
                EstimateError::Recalculation(format!(
                    "{} timed out after {}s",
                    self.command,
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| {
                EstimateError::Recalculation(format!("failed to run {}: {e}", self.command))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(status = %output.status, stderr = %stderr.trim(), "LibreOffice conversion failed");
            return Err(EstimateError::Recalculation(format!(
                "{} exited with {}",
                self.command, output.status
            )));
        }

        let converted = out_dir.join(file_name).with_extension("xlsx");
        if !tokio::fs::try_exists(&converted).await? {
            return Err(EstimateError::Recalculation(format!(
                "{} produced no output for {}",
                self.command,
                workbook.display()
            )));
        }

        debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            output = %converted.display(),
            "LibreOffice recalculation finished"
        );

        Ok(converted)
    }

    async fn health_check(&self) -> bool {
        let probe = Command::new(&self.command)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .status();

        match timeout(PROBE_TIMEOUT, probe).await {
            Ok(Ok(status)) => status.success(),
            Ok(Err(e)) => {
                debug!("LibreOffice probe failed: {}", e);
                false
            }
            Err(_) => false,
        }
    }

    fn name(&self) -> &'static str {
        "libreoffice"
    }
}
