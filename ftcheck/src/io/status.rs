//! Cluster status report loading with schema validation.
//!
//! The report is produced by the cluster itself (`status json`). Only the
//! `cluster.fault_tolerance` section is read; everything else is ignored.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jsonschema::Draft;
use serde::Deserialize;
use serde_json::Value;

use crate::core::types::ZoneFailureBounds;

/// Bundled schema for the fault tolerance subset of a status report.
pub const STATUS_SCHEMA: &str = include_str!("../../../schemas/status/v1.schema.json");

#[derive(Debug, Deserialize)]
struct StatusReport {
    cluster: ClusterStatus,
}

#[derive(Debug, Deserialize)]
struct ClusterStatus {
    fault_tolerance: FaultToleranceStatus,
}

#[derive(Debug, Deserialize)]
struct FaultToleranceStatus {
    max_zone_failures_without_losing_data: i64,
    max_zone_failures_without_losing_availability: i64,
}

impl From<FaultToleranceStatus> for ZoneFailureBounds {
    fn from(status: FaultToleranceStatus) -> Self {
        ZoneFailureBounds::new(
            status.max_zone_failures_without_losing_data,
            status.max_zone_failures_without_losing_availability,
        )
    }
}

/// Load a status report from disk and extract the zone failure bounds.
pub fn load_status(path: &Path) -> Result<ZoneFailureBounds> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read status report {}", path.display()))?;
    parse_status(&raw).with_context(|| format!("load status report {}", path.display()))
}

/// Parse and validate a status report: schema conformance, then typed extraction.
///
/// Bounds are passed through as reported. Negative values are kept.
pub fn parse_status(raw: &str) -> Result<ZoneFailureBounds> {
    let mut value: Value = serde_json::from_str(raw).context("parse status json")?;
    validate_schema(&value)?;
    normalize_bounds(&mut value);
    let report: StatusReport =
        serde_json::from_value(value).context("deserialize status report")?;
    Ok(report.cluster.fault_tolerance.into())
}

/// Rewrite whole-number floats (`2.0`) as integers.
///
/// JSON Schema `integer` admits them, but `i64` deserialization does not.
fn normalize_bounds(value: &mut Value) {
    let Some(section) = value
        .pointer_mut("/cluster/fault_tolerance")
        .and_then(Value::as_object_mut)
    else {
        return;
    };
    for key in [
        "max_zone_failures_without_losing_data",
        "max_zone_failures_without_losing_availability",
    ] {
        if let Some(bound) = section.get_mut(key) {
            if let Some(whole) = whole_f64_as_i64(bound) {
                *bound = Value::from(whole);
            }
        }
    }
}

fn whole_f64_as_i64(value: &Value) -> Option<i64> {
    if !value.is_f64() {
        return None;
    }
    let float = value.as_f64()?;
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    let in_range = float >= i64::MIN as f64 && float < i64::MAX as f64;
    (float.fract() == 0.0 && in_range).then_some(float as i64)
}

/// Validate a status document against [`STATUS_SCHEMA`] (Draft 2020-12).
fn validate_schema(instance: &Value) -> Result<()> {
    let schema: Value = serde_json::from_str(STATUS_SCHEMA).context("parse status schema")?;
    let compiled = jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(&schema)
        .map_err(|err| anyhow!("invalid status schema: {}", err))?;
    let messages: Vec<String> = compiled
        .iter_errors(instance)
        .map(|err| err.to_string())
        .collect();
    if !messages.is_empty() {
        return Err(anyhow!(
            "status schema validation failed:\n- {}",
            messages.join("\n- ")
        ));
    }
    Ok(())
}
