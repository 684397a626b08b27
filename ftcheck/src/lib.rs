//! Fault tolerance checker for zone-replicated storage clusters.
//!
//! Decides whether a cluster currently survives its declared number of
//! simultaneous zone failures, on both the durability and the availability
//! axis. The architecture enforces a strict separation:
//!
//! - **[`core`]**: The evaluator and the value types around it. No I/O, no
//!   logging, fully testable in isolation.
//! - **[`io`]**: Config and status report loading.
//!
//! [`check`] coordinates core logic with I/O to implement the CLI commands.

pub mod check;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::fault_tolerance::has_desired_fault_tolerance;
pub use crate::core::types::{ToleranceAxis, ToleranceReport, ZoneFailureBounds};
