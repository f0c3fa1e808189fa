//! Command-line interface for the route planner.
//!
//! `run` reads a road map, plans the requested route on the original and the
//! reduced network, and renders the comparison report.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, RunCommand, emit_summary, render_report, run_cli,
};

#[cfg(test)]
mod test_helpers;
