//! Command implementations and argument parsing for the meshweave CLI.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Args, Parser, Subcommand, ValueEnum};
use meshweave_core::{DEFAULT_MAX_ATTEMPTS, GeneratorBuilder, GraphError, TriangulationMode};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_WIDTH: u32 = 320;
const DEFAULT_HEIGHT: u32 = 240;
const DEFAULT_NODES: usize = 10;
const DEFAULT_RADIUS: u32 = 40;
const DEFAULT_DOUBLE: f64 = 0.1;
const DEFAULT_HAIR: f64 = 0.0;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "meshweave",
    about = "Create random planar graphs, suitable as input to graphviz neato.",
    after_help = "neato may still pick a nonplanar embedding. Pass -n1 to neato to keep the \
                  generated coordinates, which are always planar."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a graph and write it as a Graphviz file.
    Generate(GenerateCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone, PartialEq)]
pub struct GenerateCommand {
    /// Width of the field on which to place nodes.
    #[arg(long, value_name = "SIZE", default_value_t = DEFAULT_WIDTH, value_parser = parse_positive_u32)]
    pub width: u32,

    /// Height of the field on which to place nodes.
    #[arg(long, value_name = "SIZE", default_value_t = DEFAULT_HEIGHT, value_parser = parse_positive_u32)]
    pub height: u32,

    /// Number of nodes to place.
    #[arg(long, value_name = "NUM", default_value_t = DEFAULT_NODES, value_parser = parse_positive_usize)]
    pub nodes: usize,

    /// Number of edges before doubling. Defaults to 1.25 times the node
    /// count and is never below nodes - 1.
    #[arg(long, value_name = "NUM", value_parser = parse_positive_usize)]
    pub edges: Option<usize>,

    /// Nodes are never placed within this distance of each other. At 0,
    /// nodes may share a point; shared points collapse to one triangulation
    /// vertex, which usually fails with a disconnected candidate pool.
    #[arg(long, value_name = "SIZE", default_value_t = DEFAULT_RADIUS)]
    pub radius: u32,

    /// Probability of an edge being doubled, from 0.00 to 1.00.
    #[arg(long, value_name = "CHANCE", default_value_t = DEFAULT_DOUBLE, value_parser = parse_probability)]
    pub double: f64,

    /// Adjustment favouring dead-end nodes, from 0.00 (least hairy) to 1.00
    /// (most hairy). Some dead ends may exist even at 0.00.
    #[arg(long, value_name = "AMOUNT", default_value_t = DEFAULT_HAIR, value_parser = parse_probability)]
    pub hair: f64,

    /// Seed for the random streams. Written to the first line of every
    /// output file. Defaults to a value derived from the clock and PID.
    #[arg(long, value_name = "NUMBER")]
    pub seed: Option<u64>,

    /// Triangulation used to derive the candidate edges.
    #[arg(long = "tri-mode", value_enum, default_value_t = TriMode::Conform)]
    pub tri_mode: TriMode,

    /// Consecutive rejected placements tolerated before giving up.
    #[arg(
        long = "max-attempts",
        value_name = "NUM",
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        value_parser = parse_positive_usize,
    )]
    pub max_attempts: usize,

    /// Also write the candidate triangulation to this file.
    #[arg(long = "debug-tris", value_name = "FILENAME")]
    pub debug_tris: Option<PathBuf>,

    /// Also write the spanning tree to this file.
    #[arg(long = "debug-span", value_name = "FILENAME")]
    pub debug_span: Option<PathBuf>,

    /// The Graphviz output is written to this file.
    pub filename: PathBuf,
}

impl GenerateCommand {
    /// Options with every default applied, writing to `filename`.
    #[must_use]
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            nodes: DEFAULT_NODES,
            edges: None,
            radius: DEFAULT_RADIUS,
            double: DEFAULT_DOUBLE,
            hair: DEFAULT_HAIR,
            seed: None,
            tri_mode: TriMode::Conform,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            debug_tris: None,
            debug_span: None,
            filename: filename.into(),
        }
    }
}

/// Triangulation modes selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TriMode {
    /// Bulk-loaded Delaunay triangulation.
    Delaunay,
    /// Delaunay triangulation with nodes inserted in a seeded random order.
    Incremental,
    /// Constrained Delaunay triangulation without Steiner points.
    Conform,
}

impl From<TriMode> for TriangulationMode {
    fn from(mode: TriMode) -> Self {
        match mode {
            TriMode::Delaunay => Self::Delaunay,
            TriMode::Incremental => Self::Incremental,
            TriMode::Conform => Self::Conform,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Writing an output file failed.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Graph generation failed.
    #[error(transparent)]
    Core(#[from] GraphError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionSummary {
    /// Seed used for every random stream.
    pub seed: u64,
    /// Nodes placed.
    pub nodes: usize,
    /// Unique edges before doubling.
    pub edges: usize,
    /// Copies added by doubling.
    pub doubled: usize,
    /// Every file written, main output first.
    pub outputs: Vec<PathBuf>,
}

/// Seed used when none is given: seconds since the Unix epoch OR'd with the
/// process id.
#[must_use]
pub fn default_seed() -> u64 {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs());
    seconds | u64::from(std::process::id())
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when generation or writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use meshweave_cli::cli::{Cli, Command, GenerateCommand, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let mut command = GenerateCommand::new(dir.path().join("graph.dot"));
/// command.seed = Some(11);
/// let summary = run_cli(Cli { command: Command::Generate(command) })?;
/// assert_eq!(summary.seed, 11);
/// assert_eq!(summary.edges, 12);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Generate(generate) => {
            Span::current().record("command", field::display("generate"));
            run_command(generate)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(
        seed = field::Empty,
        nodes = command.nodes,
        tri_mode = field::Empty,
        output = %command.filename.display(),
    ),
)]
pub(super) fn run_command(command: GenerateCommand) -> Result<ExecutionSummary, CliError> {
    let seed = command.seed.unwrap_or_else(default_seed);
    let mode = TriangulationMode::from(command.tri_mode);
    let span = Span::current();
    span.record("seed", seed);
    span.record("tri_mode", field::display(mode));

    let generator = GeneratorBuilder::new()
        .with_width(command.width)
        .with_height(command.height)
        .with_nodes(command.nodes)
        .with_edges(command.edges)
        .with_radius(command.radius)
        .with_double(command.double)
        .with_hair(command.hair)
        .with_seed(seed)
        .with_triangulation_mode(mode)
        .with_max_attempts(command.max_attempts)
        .build()?;
    let graph = generator.run()?;

    let mut documents = vec![(command.filename, graph.document().to_string())];
    if let Some(path) = command.debug_tris {
        documents.push((path, graph.candidates_document().to_string()));
    }
    if let Some(path) = command.debug_span {
        documents.push((path, graph.tree_document().to_string()));
    }
    // Nothing reaches a target path until every document is staged.
    let staged = documents
        .iter()
        .map(|(path, contents)| write_document(path, contents))
        .collect::<Result<Vec<_>, _>>()?;
    for ((path, _), file) in documents.iter().zip(staged) {
        file.persist(path).map_err(|err| CliError::Io {
            path: path.clone(),
            source: err.error,
        })?;
    }

    let summary = ExecutionSummary {
        seed,
        nodes: graph.nodes().len(),
        edges: graph.extended().len(),
        doubled: graph.doubled(),
        outputs: documents.into_iter().map(|(path, _)| path).collect(),
    };
    info!(
        seed,
        nodes = summary.nodes,
        edges = summary.edges,
        doubled = summary.doubled,
        "command completed"
    );
    Ok(summary)
}

/// Stages `contents` in a temporary file beside `path`.
#[instrument(
    name = "cli.write",
    err,
    skip(contents),
    fields(path = %path.display(), bytes = contents.len()),
)]
pub(super) fn write_document(path: &Path, contents: &str) -> Result<NamedTempFile, CliError> {
    let to_cli_error = |source: io::Error| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(directory).map_err(to_cli_error)?;
    file.write_all(contents.as_bytes()).map_err(to_cli_error)?;
    file.flush().map_err(to_cli_error)?;
    Ok(file)
}

fn parse_positive_usize(raw: &str) -> Result<usize, String> {
    let value: usize = raw
        .trim()
        .parse()
        .map_err(|err| format!("`{raw}` is not a whole number: {err}"))?;
    if value == 0 {
        return Err("positive value expected".to_owned());
    }
    Ok(value)
}

fn parse_positive_u32(raw: &str) -> Result<u32, String> {
    let value: u32 = raw
        .trim()
        .parse()
        .map_err(|err| format!("`{raw}` is not a whole number: {err}"))?;
    if value == 0 {
        return Err("positive value expected".to_owned());
    }
    Ok(value)
}

pub(super) fn parse_probability(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|err| format!("`{raw}` is not a number: {err}"))?;
    if !(0.0..=1.0).contains(&value) {
        return Err("value in the range [0.0, 1.0] expected".to_owned());
    }
    Ok(value)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::Cursor;
/// # use meshweave_cli::cli::{ExecutionSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     seed: 5,
///     nodes: 10,
///     edges: 12,
///     doubled: 1,
///     outputs: vec!["graph.dot".into()],
/// };
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer.into_inner())?;
/// assert_eq!(text, "seed: 5\nnodes: 10\nedges: 12\ndoubled: 1\nwrote: graph.dot\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "seed: {}", summary.seed)?;
    writeln!(writer, "nodes: {}", summary.nodes)?;
    writeln!(writer, "edges: {}", summary.edges)?;
    writeln!(writer, "doubled: {}", summary.doubled)?;
    for path in &summary.outputs {
        writeln!(writer, "wrote: {}", path.display())?;
    }
    Ok(())
}
