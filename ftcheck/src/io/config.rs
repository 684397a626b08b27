//! Checker configuration stored in `ftcheck.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "ftcheck.toml";

/// Checker configuration (TOML).
///
/// Edited by operators alongside the cluster definition. Missing fields
/// default to values suitable for a double-replicated cluster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FtcheckConfig {
    /// Simultaneous zone failures the cluster is supposed to tolerate.
    pub expected_fault_tolerance: u32,

    /// Cluster status report (JSON) holding the current zone failure bounds.
    pub status_path: PathBuf,
}

impl Default for FtcheckConfig {
    fn default() -> Self {
        Self {
            expected_fault_tolerance: 1,
            status_path: PathBuf::from("status.json"),
        }
    }
}

impl FtcheckConfig {
    pub fn validate(&self) -> Result<()> {
        if self.status_path.as_os_str().is_empty() {
            return Err(anyhow!("status_path must be non-empty"));
        }
        Ok(())
    }

    /// Target as passed to the evaluator.
    pub fn expected(&self) -> i64 {
        i64::from(self.expected_fault_tolerance)
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `FtcheckConfig::default()`.
pub fn load_config(path: &Path) -> Result<FtcheckConfig> {
    if !path.exists() {
        let cfg = FtcheckConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: FtcheckConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &FtcheckConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
