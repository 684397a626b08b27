//! Deterministic, pure logic shared by the checker.
//!
//! Core modules must be free of I/O side effects and must not log. They
//! operate on plain values and return deterministic outputs suitable for tests.

pub mod fault_tolerance;
pub mod types;
