//! Small helpers shared across CLI tests.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::commands::run_command;
use super::{CliError, GenerateCommand};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

/// Default options with a fixed seed, writing `name` inside `dir`.
pub(super) fn seeded_command(dir: &TempDir, name: &str, seed: u64) -> GenerateCommand {
    let mut command = GenerateCommand::new(dir.path().join(name));
    command.seed = Some(seed);
    command
}

pub(super) fn read(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => panic!("failed to read `{}`: {err}", path.display()),
    }
}

pub(super) fn run_command_expecting_error(command: GenerateCommand, panic_msg: &str) -> CliError {
    match run_command(command) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn missing_directory(dir: &TempDir) -> PathBuf {
    dir.path().join("missing").join("graph.dot")
}
