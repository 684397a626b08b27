//! Test-only helpers for writing status reports and config files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::io::config::{DEFAULT_CONFIG_PATH, FtcheckConfig, write_config};

/// Minimal status report carrying the given bounds.
pub fn status_json(data: i64, availability: i64) -> String {
    format!(
        concat!(
            "{{\"cluster\":{{\"fault_tolerance\":{{",
            "\"max_zone_failures_without_losing_data\":{},",
            "\"max_zone_failures_without_losing_availability\":{}",
            "}}}}}}\n"
        ),
        data, availability
    )
}

/// Write `status.json` under `dir` and return its path.
pub fn write_status(dir: &Path, data: i64, availability: i64) -> Result<PathBuf> {
    let path = dir.join("status.json");
    fs::write(&path, status_json(data, availability))
        .with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// Temporary working directory holding a config and a status report.
pub struct TestDir {
    temp: TempDir,
}

impl TestDir {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp: tempfile::tempdir().context("create tempdir")?,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.path().join(DEFAULT_CONFIG_PATH)
    }

    /// Write `ftcheck.toml` pointing at `status.json` in this directory.
    pub fn write_config(&self, expected_fault_tolerance: u32) -> Result<PathBuf> {
        let cfg = FtcheckConfig {
            expected_fault_tolerance,
            status_path: self.path().join("status.json"),
        };
        let path = self.config_path();
        write_config(&path, &cfg)?;
        Ok(path)
    }

    pub fn write_status(&self, data: i64, availability: i64) -> Result<PathBuf> {
        write_status(self.path(), data, availability)
    }
}
