//! Shared deterministic types for fault tolerance evaluation.
//!
//! These types carry already-computed bounds through the shell. They never
//! derive bounds from topology and must remain free of I/O.

use serde::{Deserialize, Serialize};

use crate::core::fault_tolerance::has_desired_fault_tolerance;

/// Upper bounds on simultaneous zone failures the cluster can currently absorb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneFailureBounds {
    /// Zone failures survivable without losing committed data.
    pub without_losing_data: i64,
    /// Zone failures survivable without losing the ability to serve requests.
    pub without_losing_availability: i64,
}

impl ZoneFailureBounds {
    pub const fn new(without_losing_data: i64, without_losing_availability: i64) -> Self {
        Self {
            without_losing_data,
            without_losing_availability,
        }
    }

    /// True if both bounds meet `expected`.
    pub const fn satisfies(&self, expected: i64) -> bool {
        has_desired_fault_tolerance(
            expected,
            self.without_losing_data,
            self.without_losing_availability,
        )
    }

    /// Axes whose bound falls below `expected`, data first.
    pub fn shortfalls(&self, expected: i64) -> Vec<ToleranceAxis> {
        let mut axes = Vec::new();
        if self.without_losing_data < expected {
            axes.push(ToleranceAxis::Data);
        }
        if self.without_losing_availability < expected {
            axes.push(ToleranceAxis::Availability);
        }
        axes
    }
}

/// Independently measured risk category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToleranceAxis {
    Data,
    Availability,
}

impl ToleranceAxis {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Data => "data",
            Self::Availability => "availability",
        }
    }
}

/// Verdict plus the inputs that produced it.
///
/// `satisfied` always comes from [`has_desired_fault_tolerance`]; `short` is
/// diagnostic and never feeds back into the verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToleranceReport {
    pub expected: i64,
    pub bounds: ZoneFailureBounds,
    pub satisfied: bool,
    pub short: Vec<ToleranceAxis>,
}

impl ToleranceReport {
    pub fn evaluate(expected: i64, bounds: ZoneFailureBounds) -> Self {
        Self {
            expected,
            bounds,
            satisfied: bounds.satisfies(expected),
            short: bounds.shortfalls(expected),
        }
    }

    /// Single-line summary used by the CLI.
    pub fn summary_line(&self) -> String {
        let verdict = if self.satisfied {
            "satisfied"
        } else {
            "insufficient"
        };
        let mut line = format!(
            "{} expected={} data={} availability={}",
            verdict,
            self.expected,
            self.bounds.without_losing_data,
            self.bounds.without_losing_availability
        );
        if !self.short.is_empty() {
            let axes: Vec<&str> = self.short.iter().map(|axis| axis.as_str()).collect();
            line.push_str(&format!(" short={}", axes.join(",")));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortfalls_lists_data_before_availability() {
        let bounds = ZoneFailureBounds::new(0, -1);
        assert_eq!(
            bounds.shortfalls(1),
            vec![ToleranceAxis::Data, ToleranceAxis::Availability]
        );
    }

    #[test]
    fn shortfalls_empty_when_satisfied() {
        let bounds = ZoneFailureBounds::new(2, 2);
        assert!(bounds.satisfies(2));
        assert!(bounds.shortfalls(2).is_empty());
    }

    #[test]
    fn report_flags_only_the_weak_axis() {
        let report = ToleranceReport::evaluate(2, ZoneFailureBounds::new(3, 1));
        assert!(!report.satisfied);
        assert_eq!(report.short, vec![ToleranceAxis::Availability]);
    }

    #[test]
    fn summary_line_for_insufficient_report() {
        let report = ToleranceReport::evaluate(2, ZoneFailureBounds::new(1, 3));
        assert_eq!(
            report.summary_line(),
            "insufficient expected=2 data=1 availability=3 short=data"
        );
    }

    #[test]
    fn summary_line_for_satisfied_report() {
        let report = ToleranceReport::evaluate(0, ZoneFailureBounds::new(0, 0));
        assert_eq!(
            report.summary_line(),
            "satisfied expected=0 data=0 availability=0"
        );
    }

    #[test]
    fn report_serializes_axes_lowercase() {
        let report = ToleranceReport::evaluate(1, ZoneFailureBounds::new(-1, 1));
        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(json["short"], serde_json::json!(["data"]));
        assert_eq!(json["satisfied"], serde_json::json!(false));
        assert_eq!(json["bounds"]["without_losing_data"], serde_json::json!(-1));
    }
}
