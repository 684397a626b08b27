//! Stable exit codes for ftcheck CLI commands.

/// Command succeeded, or the cluster meets its expected fault tolerance.
pub const OK: i32 = 0;
/// Command failed due to invalid config, status report, or other errors.
pub const INVALID: i32 = 1;
/// The cluster does not meet its expected fault tolerance.
pub const INSUFFICIENT: i32 = 2;
