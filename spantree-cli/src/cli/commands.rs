//! Command implementations and argument parsing for the spantree CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use spantree_core::{Graph, GraphError, MinimumSpanningTree};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::editor::{EditorSession, seed_graph};
use super::graph_file::{GraphFileError, parse_graph};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spantree",
    about = "Edit weighted undirected graphs and compute minimum spanning trees."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the minimum spanning tree of a graph description file.
    Mst(MstCommand),
    /// Edit a graph interactively, one command per line.
    Edit(EditCommand),
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstCommand {
    /// Path to the graph description file.
    pub path: PathBuf,

    /// Label of the vertex the tree grows from.
    #[arg(long)]
    pub start: String,
}

/// Options accepted by the `edit` command.
#[derive(Debug, Args, Clone)]
pub struct EditCommand {
    /// Optional graph description file to load before editing.
    pub path: Option<PathBuf>,

    /// Preload the demo graph instead of starting empty.
    #[arg(long, conflicts_with = "path")]
    pub seed: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while loading an input source.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Writing to the output stream failed.
    #[error("failed to write output: {source}")]
    Output {
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The graph description file could not be parsed.
    #[error(transparent)]
    Parse(#[from] GraphFileError),
    /// The core graph operation failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Summarises the outcome of an `mst` command.
#[derive(Debug, Clone, PartialEq)]
pub struct MstSummary {
    /// Start vertex the tree was grown from.
    pub start: String,
    /// Number of vertices in the source graph.
    pub vertex_count: usize,
    /// The computed tree.
    pub tree: MinimumSpanningTree,
}

/// Executes the CLI command represented by `cli`, reading interactive input
/// from `input` and writing results to `output`.
///
/// # Errors
/// Returns [`CliError`] when loading, parsing, or execution fails.
#[instrument(
    name = "cli.run",
    err,
    skip(cli, input, output),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli, input: impl BufRead, mut output: impl Write) -> Result<(), CliError> {
    match cli.command {
        Command::Mst(command) => {
            Span::current().record("command", field::display("mst"));
            let summary = run_mst(&command)?;
            render_summary(&summary, &mut output).map_err(|source| CliError::Output { source })
        }
        Command::Edit(command) => {
            Span::current().record("command", field::display("edit"));
            run_edit(&command, input, output)
        }
    }
}

#[instrument(
    name = "cli.mst",
    err,
    skip(command),
    fields(path = field::Empty, start = field::Empty),
)]
pub(super) fn run_mst(command: &MstCommand) -> Result<MstSummary, CliError> {
    let span = Span::current();
    span.record("path", field::display(command.path.display()));
    let start = command.start.to_ascii_uppercase();
    span.record("start", field::display(&start));

    let graph = load_graph(&command.path)?;
    let tree = graph.minimum_spanning_tree(&start)?;
    info!(
        edges = tree.len(),
        total_weight = tree.total_weight(),
        "minimum spanning tree computed"
    );
    Ok(MstSummary {
        start,
        vertex_count: graph.len(),
        tree,
    })
}

#[instrument(
    name = "cli.edit",
    err,
    skip(command, input, output),
    fields(seed = command.seed, path = field::Empty),
)]
pub(super) fn run_edit(
    command: &EditCommand,
    input: impl BufRead,
    output: impl Write,
) -> Result<(), CliError> {
    let graph = match &command.path {
        Some(path) => {
            Span::current().record("path", field::display(path.display()));
            load_graph(path)?
        }
        None if command.seed => seed_graph(),
        None => Graph::new(),
    };
    let mut session = EditorSession::with_graph(graph);
    session
        .run(input, output)
        .map_err(|source| CliError::Output { source })
}

pub(super) fn load_graph(path: &Path) -> Result<Graph, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_graph(BufReader::new(file))?)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &MstSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "start: {}", summary.start)?;
    writeln!(writer, "vertices: {}", summary.vertex_count)?;
    render_tree(&summary.tree, writer)
}

/// Renders `tree` to `writer`, one edge per line, followed by the summed
/// weight.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_tree(tree: &MinimumSpanningTree, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "mst edges: {}", tree.len())?;
    for edge in tree.edges() {
        writeln!(
            writer,
            "{}\t{}\t{}",
            edge.origin(),
            edge.destination(),
            edge.weight()
        )?;
    }
    writeln!(writer, "total weight: {}", tree.total_weight())
}
