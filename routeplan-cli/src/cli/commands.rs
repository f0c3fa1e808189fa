//! Command implementations and argument parsing for the routeplan CLI.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use routeplan_core::{Connection, RouteReport};
use routeplan_providers_text::{RoadMap, RoadMapError};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "routeplan",
    about = "Compare the fastest route on a road map with its barely connected network."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Plan the route named on the first line of a road map.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Road map with a `start<TAB>end` line followed by
    /// `point1<TAB>point2<TAB>length<TAB>id` roads.
    pub input: PathBuf,

    /// Write the report here instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The road map could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The report could not be written.
    #[error("failed to write report to `{path}`: {source}")]
    Output {
        /// Destination that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The road map was malformed.
    #[error(transparent)]
    RoadMap(#[from] RoadMapError),
}

impl CliError {
    /// Returns a stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CLI_INPUT_IO",
            Self::Output { .. } => "CLI_OUTPUT_IO",
            Self::RoadMap(err) => err.code(),
        }
    }
}

/// Outcome of a successful `run`.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Planner output for the requested query.
    pub report: RouteReport,
    /// Report destination; `None` means stdout.
    pub output: Option<PathBuf>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the road map cannot be read or parsed.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use routeplan_cli::cli::{Cli, Command, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "A\tC\nA\tB\t1\t1\nB\tC\t2\t2\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         input: file.path().to_path_buf(),
///         output: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.report.original_distance(), 3);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(input = field::Empty, start = field::Empty, end = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand { input, output } = command;
    let span = Span::current();
    span.record("input", field::display(input.display()));

    let map = RoadMap::from_reader(open_road_map(&input)?)?;
    span.record("start", field::display(map.start()));
    span.record("end", field::display(map.end()));

    let (planner, start, end) = map.into_planner();
    let report = planner.plan(&start, &end);
    info!(
        roads = planner.connections().len(),
        distance = report.original_distance(),
        reduced_distance = report.reduced_distance(),
        "command completed"
    );
    Ok(ExecutionSummary { report, output })
}

#[instrument(name = "cli.open_road_map", err, fields(path = field::Empty))]
pub(super) fn open_road_map(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Writes the report in `summary` to its destination file, or to `stdout`
/// when no destination was given.
///
/// # Errors
/// Returns [`CliError::Output`] when the destination cannot be created or
/// written.
#[instrument(name = "cli.emit", err, skip_all, fields(destination = field::Empty))]
pub fn emit_summary(summary: &ExecutionSummary, stdout: impl Write) -> Result<(), CliError> {
    let span = Span::current();
    match &summary.output {
        Some(path) => {
            span.record("destination", field::display(path.display()));
            let to_output_error = |source| CliError::Output {
                path: path.clone(),
                source,
            };
            let file = File::create(path).map_err(to_output_error)?;
            let mut writer = BufWriter::new(file);
            render_report(&summary.report, &mut writer).map_err(to_output_error)?;
            writer.flush().map_err(to_output_error)
        }
        None => {
            span.record("destination", field::display("<stdout>"));
            let mut writer = BufWriter::new(stdout);
            render_report(&summary.report, &mut writer)
                .and_then(|()| writer.flush())
                .map_err(|source| CliError::Output {
                    path: PathBuf::from("<stdout>"),
                    source,
                })
        }
    }
}

/// Renders `report` as the four-block comparison text.
///
/// Each road is written as `point1<TAB>point2<TAB>length<TAB>id`; ratios are
/// rounded to two decimal places.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use routeplan_cli::cli::render_report;
/// # use routeplan_core::{Connection, RoutePlanner};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let planner = RoutePlanner::new(vec![Connection::new("A", "B", 3, 1)?]);
/// let mut buffer = Vec::new();
/// render_report(&planner.plan("A", "B"), &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.starts_with("Fastest Route from A to B (3 KM):\nA\tB\t3\t1\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_report(report: &RouteReport, mut writer: impl Write) -> io::Result<()> {
    let (start, end) = (report.start(), report.end());
    writeln!(
        writer,
        "Fastest Route from {start} to {end} ({} KM):",
        report.original_distance()
    )?;
    write_roads(&mut writer, report.original_route())?;

    writeln!(writer, "Roads of Barely Connected Map is:")?;
    write_roads(&mut writer, report.reduced_network().connections())?;

    writeln!(
        writer,
        "Fastest Route from {start} to {end} on Barely Connected Map ({} KM):",
        report.reduced_distance()
    )?;
    write_roads(&mut writer, report.reduced_route())?;

    let comparison = report.comparison();
    writeln!(writer, "Analysis:")?;
    writeln!(
        writer,
        "Ratio of Construction Material Usage Between Barely Connected and Original Map: {:.2}",
        comparison.material_ratio()
    )?;
    writeln!(
        writer,
        "Ratio of Fastest Route Between Barely Connected and Original Map: {:.2}",
        comparison.route_ratio()
    )
}

fn write_roads(writer: &mut impl Write, roads: &[Connection]) -> io::Result<()> {
    roads.iter().try_for_each(|road| writeln!(writer, "{road}"))
}
