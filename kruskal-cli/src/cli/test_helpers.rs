//! Small helpers shared across CLI tests.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use kruskal_core::Pacer;
use tempfile::TempDir;

use super::commands::run_command;
use super::{CliError, OutputFormat, RunCommand};

/// Pacer that records every requested delay without sleeping.
#[derive(Default)]
pub(super) struct RecordingPacer {
    pub(super) waits: Vec<Duration>,
}

impl Pacer for RecordingPacer {
    fn wait(&mut self, delay: Duration) {
        self.waits.push(delay);
    }
}

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_graph_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) fn run_command_with(graph: Option<PathBuf>, auto: bool) -> RunCommand {
    RunCommand {
        graph,
        auto,
        delay_ms: 0,
        format: OutputFormat::Text,
    }
}

pub(super) fn run_command_expecting_error(cmd: RunCommand, panic_msg: &str) -> CliError {
    match run_command(cmd, &mut RecordingPacer::default()) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
