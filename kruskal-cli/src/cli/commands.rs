//! Command implementations and argument parsing for the kruskal CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use kruskal_core::{
    AutoPlayer, DEFAULT_AUTO_PLAY_DELAY, Edge, Graph, Pacer, StepOutcome, Stepper, StepperError,
    StepperErrorCode, ThreadPacer,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEMO_GRAPH_NAME: &str = "demo";

fn default_delay_ms() -> u64 {
    u64::try_from(DEFAULT_AUTO_PLAY_DELAY.as_millis()).unwrap_or(u64::MAX)
}

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "kruskal",
    about = "Walk through Kruskal's minimum spanning tree algorithm step by step."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Play the walkthrough to completion and print every explanation.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// JSON file with `nodes` and `edges`; the built-in demo graph is used
    /// when omitted.
    #[arg(long)]
    pub graph: Option<PathBuf>,

    /// Pace the steps with the auto-play delay instead of running instantly.
    #[arg(long)]
    pub auto: bool,

    /// Delay between automatic steps, in milliseconds.
    #[arg(long = "delay-ms", default_value_t = default_delay_ms())]
    pub delay_ms: u64,

    /// Output encoding for the transcript.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Transcript encodings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated step lines followed by a short summary.
    #[default]
    Text,
    /// A single pretty-printed JSON document.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The graph file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The graph file was not valid graph JSON.
    #[error("failed to parse graph from `{path}`: {source}")]
    Parse {
        /// Path of the malformed file.
        path: PathBuf,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
    /// The stepper rejected the graph or failed mid-run.
    #[error(transparent)]
    Core(#[from] StepperError),
}

impl CliError {
    /// Returns the stable core error code when the failure came from the
    /// stepper.
    #[must_use]
    pub const fn core_code(&self) -> Option<StepperErrorCode> {
        match self {
            Self::Core(core) => Some(core.code()),
            Self::Io { .. } | Self::Parse { .. } => None,
        }
    }
}

/// One line of the walkthrough transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptEntry {
    /// Step counter after the call.
    pub step: usize,
    /// Machine-readable outcome label.
    pub kind: &'static str,
    /// Explanation shown to the learner.
    pub explanation: String,
}

impl TranscriptEntry {
    fn record(stepper: &Stepper, outcome: StepOutcome) -> Self {
        Self {
            step: stepper.step(),
            kind: outcome.kind(),
            explanation: outcome.to_string(),
        }
    }
}

/// Result of playing one walkthrough.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Graph label: the file stem, or `demo`.
    pub graph: String,
    /// Every call made, in order, ending with the completion message.
    pub steps: Vec<TranscriptEntry>,
    /// Accepted edges in acceptance order.
    pub mst_edges: Vec<Edge>,
    /// Summed weight of the accepted edges.
    pub total_weight: f64,
    /// Connected components left at the end; more than one means a forest.
    pub components: usize,
    /// Encoding used by [`render_summary`].
    #[serde(skip)]
    pub format: OutputFormat,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the graph cannot be loaded or the stepper fails.
///
/// # Examples
/// ```
/// use kruskal_cli::cli::{Cli, Command, OutputFormat, RunCommand, run_cli};
///
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         graph: None,
///         auto: false,
///         delay_ms: 0,
///         format: OutputFormat::Text,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.mst_edges.len(), 4);
/// assert_eq!(summary.total_weight, 12.0);
/// # Ok::<(), kruskal_cli::cli::CliError>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<RunSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run, &mut ThreadPacer)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command, pacer),
    fields(graph = field::Empty, auto = command.auto, delay_ms = command.delay_ms),
)]
pub(super) fn run_command<P>(command: RunCommand, pacer: &mut P) -> Result<RunSummary, CliError>
where
    P: Pacer + ?Sized,
{
    let (name, graph) = match command.graph.as_deref() {
        Some(path) => (graph_name(path), load_graph(path)?),
        None => (DEMO_GRAPH_NAME.to_owned(), Graph::demo()),
    };
    Span::current().record("graph", field::display(&name));

    let mut stepper = Stepper::new(graph)?;
    let steps = if command.auto {
        let player = AutoPlayer::new().with_delay(Duration::from_millis(command.delay_ms));
        play_auto(&mut stepper, &player, pacer)?
    } else {
        play_instant(&mut stepper)?
    };

    info!(
        graph = name.as_str(),
        steps = steps.len(),
        accepted = stepper.mst_edges().len(),
        components = stepper.component_count(),
        "walkthrough completed"
    );
    Ok(RunSummary {
        graph: name,
        steps,
        mst_edges: stepper.mst_edges().to_vec(),
        total_weight: stepper.total_weight(),
        components: stepper.component_count(),
        format: command.format,
    })
}

fn play_instant(stepper: &mut Stepper) -> Result<Vec<TranscriptEntry>, CliError> {
    let mut steps = Vec::with_capacity(stepper.edge_count().saturating_add(2));
    loop {
        let outcome = stepper.advance()?;
        steps.push(TranscriptEntry::record(stepper, outcome));
        if matches!(outcome, StepOutcome::Finished) {
            return Ok(steps);
        }
    }
}

fn play_auto<P>(
    stepper: &mut Stepper,
    player: &AutoPlayer,
    pacer: &mut P,
) -> Result<Vec<TranscriptEntry>, CliError>
where
    P: Pacer + ?Sized,
{
    let mut steps = Vec::with_capacity(stepper.edge_count().saturating_add(2));
    stepper.set_auto_playing(true);
    player.run(stepper, pacer, |stepper, outcome| {
        steps.push(TranscriptEntry::record(stepper, outcome));
    })?;
    Ok(steps)
}

#[instrument(name = "cli.load_graph", err, fields(path = field::Empty))]
pub(super) fn load_graph(path: &Path) -> Result<Graph, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub(super) fn graph_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "graph".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` to `writer` in the encoding it was requested with.
///
/// Text output prints one `step<TAB>explanation` line per call, then the
/// accepted edges, the total weight, and the component count.
///
/// # Errors
/// Returns [`io::Error`] if writing or JSON encoding fails.
///
/// # Examples
/// ```
/// use kruskal_cli::cli::{OutputFormat, RunSummary, TranscriptEntry, render_summary};
///
/// let summary = RunSummary {
///     graph: "empty".into(),
///     steps: vec![TranscriptEntry {
///         step: 1,
///         kind: "sorted",
///         explanation: "First, we sort all edges by weight in ascending order.".into(),
///     }],
///     mst_edges: Vec::new(),
///     total_weight: 0.0,
///     components: 1,
///     format: OutputFormat::Text,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer).expect("output is UTF-8");
/// assert!(text.starts_with("graph: empty\n1\tFirst, we sort"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_summary(summary: &RunSummary, mut writer: impl Write) -> io::Result<()> {
    match summary.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, summary)?;
            writeln!(writer)
        }
        OutputFormat::Text => {
            writeln!(writer, "graph: {}", summary.graph)?;
            for entry in &summary.steps {
                writeln!(writer, "{}\t{}", entry.step, entry.explanation)?;
            }
            writeln!(writer, "accepted edges: {}", summary.mst_edges.len())?;
            for edge in &summary.mst_edges {
                writeln!(writer, "{} - {}\t{}", edge.from(), edge.to(), edge.weight())?;
            }
            writeln!(writer, "total weight: {}", summary.total_weight)?;
            writeln!(writer, "components: {}", summary.components)
        }
    }
}
