//! Small helpers shared across CLI tests.

use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, Command, RunCommand, run_cli};

pub(super) const DIAMOND: &str = "A\tD\n\
A\tB\t4\t1\n\
B\tD\t6\t2\n\
A\tC\t2\t3\n\
C\tD\t3\t4\n\
A\tD\t10\t5\n";

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_road_map(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

pub(super) fn run_cli_for(input: PathBuf, output: Option<PathBuf>) -> Cli {
    Cli {
        command: Command::Run(RunCommand { input, output }),
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
