//! Support library for the `routeplan` binary.
//!
//! Exposes the command pipeline and logging setup so tests can drive them
//! in-process.

pub mod cli;
pub mod logging;
