//! I/O helpers for ftcheck commands.

pub mod config;
pub mod status;
