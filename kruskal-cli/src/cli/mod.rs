//! Command-line interface for the Kruskal walkthrough.
//!
//! The `run` command loads a graph from JSON (or uses the built-in demo
//! graph), plays every step either instantly or on the auto-play cadence, and
//! collects the explanations into a transcript.

mod commands;

pub use commands::{
    Cli, CliError, Command, OutputFormat, RunCommand, RunSummary, TranscriptEntry,
    render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
