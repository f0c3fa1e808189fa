//! CLI entry point for the route planner.
//!
//! Parses command-line arguments with clap, plans the requested route, writes
//! the comparison report, and maps errors to exit codes. Logging is initialised
//! first so every later step can emit structured diagnostics via `tracing`.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use routeplan_cli::{
    cli::{Cli, CliError, emit_summary, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Parse CLI arguments, execute the command, and write the report.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    emit_summary(&summary, io::stdout().lock()).context("failed to write report")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let cli_error = err.downcast_ref::<CliError>();
        let code = cli_error.map(|cli_error| field::display(cli_error.code()));
        let connection_code = cli_error
            .and_then(|cli_error| match cli_error {
                CliError::RoadMap(road_map) => road_map.connection_code(),
                _ => None,
            })
            .map(|code| field::display(code.as_str()));

        error!(
            error = format!("{err:#}"),
            code,
            connection_code,
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
