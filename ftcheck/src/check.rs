//! Orchestration for `ftcheck check` and `ftcheck eval`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::core::types::{ToleranceReport, ZoneFailureBounds};
use crate::exit_codes;
use crate::io::config::load_config;
use crate::io::status::load_status;

/// Structured check outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Both bounds meet the expected fault tolerance.
    Satisfied(ToleranceReport),
    /// At least one bound falls short.
    Insufficient(ToleranceReport),
}

impl CheckOutcome {
    pub fn report(&self) -> &ToleranceReport {
        match self {
            Self::Satisfied(report) | Self::Insufficient(report) => report,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Satisfied(_) => exit_codes::OK,
            Self::Insufficient(_) => exit_codes::INSUFFICIENT,
        }
    }
}

/// Command-line values that take precedence over `ftcheck.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOverrides {
    pub expected: Option<u32>,
    pub status_path: Option<PathBuf>,
}

/// Evaluate in-memory bounds against `expected`.
pub fn check_bounds(expected: i64, bounds: ZoneFailureBounds) -> CheckOutcome {
    let report = ToleranceReport::evaluate(expected, bounds);
    debug!(
        expected,
        data = bounds.without_losing_data,
        availability = bounds.without_losing_availability,
        satisfied = report.satisfied,
        "evaluated fault tolerance"
    );
    if report.satisfied {
        CheckOutcome::Satisfied(report)
    } else {
        CheckOutcome::Insufficient(report)
    }
}

/// Load config and status report from disk, then evaluate.
///
/// A relative `status_path` from the config file resolves against the config
/// file's directory. A `--status` override is used as given.
pub fn check_from_paths(config_path: &Path, overrides: &CheckOverrides) -> Result<CheckOutcome> {
    let cfg = load_config(config_path).with_context(|| "load config for check")?;
    let expected = overrides
        .expected
        .map(i64::from)
        .unwrap_or_else(|| cfg.expected());
    let status_path = match &overrides.status_path {
        Some(path) => path.clone(),
        None => resolve_against(config_path, &cfg.status_path),
    };
    debug!(
        config = %config_path.display(),
        status = %status_path.display(),
        expected,
        "loaded check inputs"
    );

    let bounds = load_status(&status_path)?;
    let outcome = check_bounds(expected, bounds);
    match &outcome {
        CheckOutcome::Satisfied(_) => {
            info!(expected, "cluster meets expected fault tolerance");
        }
        CheckOutcome::Insufficient(report) => {
            let short: Vec<&str> = report.short.iter().map(|axis| axis.as_str()).collect();
            warn!(
                expected,
                data = bounds.without_losing_data,
                availability = bounds.without_losing_availability,
                short = %short.join(","),
                "cluster below expected fault tolerance"
            );
        }
    }
    Ok(outcome)
}

fn resolve_against(config_path: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(path),
        _ => path.to_path_buf(),
    }
}
