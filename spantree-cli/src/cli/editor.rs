//! Interactive editing session for a graph.
//!
//! Interprets one command per input line against an owned [`Graph`]: vertices
//! and edges are added or removed and the MST can be recomputed against the
//! current state at any point. Invalid operations report a message on the
//! output stream (and a `warn!` diagnostic) and the session continues.

use std::io::{self, BufRead, Write};

use spantree_core::{Graph, GraphError};
use tracing::warn;

use super::commands::render_tree;

const HELP_TEXT: &str = "\
commands:
  add-vertex <label>
  remove-vertex <label>
  add-edge <origin> <destination> <weight>
  remove-edge <origin> <destination>
  mst <start>
  print
  help
  quit";

/// One parsed editor command. Labels are upper-cased during parsing.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum EditorCommand {
    AddVertex {
        label: String,
    },
    RemoveVertex {
        label: String,
    },
    AddEdge {
        origin: String,
        destination: String,
        weight: f64,
    },
    RemoveEdge {
        origin: String,
        destination: String,
    },
    Mst {
        start: String,
    },
    Print,
    Help,
    Quit,
}

/// Errors produced while parsing a single editor line.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub(crate) enum EditorParseError {
    /// The line held no fields.
    #[error("empty command")]
    Empty,
    /// The first field is not a known command.
    #[error("unknown command `{command}`; type `help` for the command list")]
    UnknownCommand {
        /// The unrecognised first field.
        command: String,
    },
    /// A command had the wrong number of arguments.
    #[error("`{command}` expects {expected} arguments, got {got}")]
    ArgumentCount {
        /// The malformed command.
        command: &'static str,
        /// Number of arguments the command requires.
        expected: usize,
        /// Number of arguments found.
        got: usize,
    },
    /// An edge weight could not be parsed as a number.
    #[error("invalid weight `{value}`")]
    InvalidWeight {
        /// The raw weight field.
        value: String,
    },
}

pub(crate) fn parse_command(line: &str) -> Result<EditorCommand, EditorParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    match fields.as_slice() {
        [] => Err(EditorParseError::Empty),
        ["add-vertex", label] => Ok(EditorCommand::AddVertex {
            label: label.to_ascii_uppercase(),
        }),
        ["add-vertex", ..] => Err(argument_count("add-vertex", 1, &fields)),
        ["remove-vertex", label] => Ok(EditorCommand::RemoveVertex {
            label: label.to_ascii_uppercase(),
        }),
        ["remove-vertex", ..] => Err(argument_count("remove-vertex", 1, &fields)),
        ["add-edge", origin, destination, weight] => {
            let parsed = weight
                .parse::<f64>()
                .map_err(|_| EditorParseError::InvalidWeight {
                    value: (*weight).to_owned(),
                })?;
            Ok(EditorCommand::AddEdge {
                origin: origin.to_ascii_uppercase(),
                destination: destination.to_ascii_uppercase(),
                weight: parsed,
            })
        }
        ["add-edge", ..] => Err(argument_count("add-edge", 3, &fields)),
        ["remove-edge", origin, destination] => Ok(EditorCommand::RemoveEdge {
            origin: origin.to_ascii_uppercase(),
            destination: destination.to_ascii_uppercase(),
        }),
        ["remove-edge", ..] => Err(argument_count("remove-edge", 2, &fields)),
        ["mst", start] => Ok(EditorCommand::Mst {
            start: start.to_ascii_uppercase(),
        }),
        ["mst", ..] => Err(argument_count("mst", 1, &fields)),
        ["print"] => Ok(EditorCommand::Print),
        ["help"] => Ok(EditorCommand::Help),
        ["quit" | "exit"] => Ok(EditorCommand::Quit),
        [command, ..] => Err(EditorParseError::UnknownCommand {
            command: (*command).to_owned(),
        }),
    }
}

fn argument_count(command: &'static str, expected: usize, fields: &[&str]) -> EditorParseError {
    EditorParseError::ArgumentCount {
        command,
        expected,
        got: fields.len().saturating_sub(1),
    }
}

/// The demo graph the original editor seeds on startup: nine vertices with
/// fourteen weighted edges.
#[must_use]
pub(crate) fn seed_graph() -> Graph {
    let mut graph = Graph::new();
    for label in ["A", "B", "C", "D", "E", "F", "G", "H", "I"] {
        graph.add_vertex(label);
    }
    let edges = [
        ("A", "B", 4.0),
        ("A", "H", 8.0),
        ("B", "H", 11.0),
        ("B", "C", 8.0),
        ("C", "D", 7.0),
        ("C", "F", 4.0),
        ("C", "I", 2.0),
        ("D", "E", 9.0),
        ("D", "F", 14.0),
        ("E", "F", 10.0),
        ("F", "G", 2.0),
        ("G", "H", 1.0),
        ("G", "I", 6.0),
        ("H", "I", 7.0),
    ];
    for (origin, destination, weight) in edges {
        // Endpoints were inserted above, so the edge cannot be rejected.
        let _ = graph.add_edge(origin, destination, weight);
    }
    graph
}

/// Owns the graph being edited and interprets commands against it.
#[derive(Debug, Default)]
pub struct EditorSession {
    graph: Graph,
}

impl EditorSession {
    /// Creates a session over an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session over an existing graph.
    #[must_use]
    pub fn with_graph(graph: Graph) -> Self {
        Self { graph }
    }

    /// Returns the graph in its current state.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Runs the session until `quit` or end of input.
    ///
    /// # Errors
    /// Returns [`io::Error`] when reading a command or writing a response
    /// fails; rejected commands are reported inline and do not end the
    /// session.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        writeln!(output, "spantree editor; type `help` for commands")?;
        for read in input.lines() {
            let line = read?;
            match parse_command(&line) {
                Ok(EditorCommand::Quit) => break,
                Ok(command) => self.apply(command, &mut output)?,
                Err(EditorParseError::Empty) => {}
                Err(err) => {
                    warn!(error = %err, "rejected editor command");
                    writeln!(output, "error: {err}")?;
                }
            }
        }
        Ok(())
    }

    fn apply(&mut self, command: EditorCommand, output: &mut impl Write) -> io::Result<()> {
        match command {
            EditorCommand::AddVertex { label } => {
                self.graph.add_vertex(label.clone());
                writeln!(output, "vertex {label} added")?;
            }
            EditorCommand::RemoveVertex { label } => {
                match self.graph.remove_vertex(&label) {
                    Ok(()) => writeln!(output, "vertex {label} removed")?,
                    Err(err) => report_rejection(output, &err)?,
                }
            }
            EditorCommand::AddEdge {
                origin,
                destination,
                weight,
            } => match self.graph.add_edge(&origin, &destination, weight) {
                Ok(()) => writeln!(output, "edge {origin} {destination} ({weight}) added")?,
                Err(err) => report_rejection(output, &err)?,
            },
            EditorCommand::RemoveEdge {
                origin,
                destination,
            } => match self.graph.remove_edge(&origin, &destination) {
                Ok(()) => writeln!(output, "edge {origin} {destination} removed")?,
                Err(err) => report_rejection(output, &err)?,
            },
            EditorCommand::Mst { start } => match self.graph.minimum_spanning_tree(&start) {
                Ok(tree) => render_tree(&tree, &mut *output)?,
                Err(err @ GraphError::Disconnected { .. }) => {
                    writeln!(output, "{err}; connect every vertex and retry")?;
                }
                Err(err) => report_rejection(output, &err)?,
            },
            EditorCommand::Print => self.print(output)?,
            EditorCommand::Help => writeln!(output, "{HELP_TEXT}")?,
            EditorCommand::Quit => {}
        }
        Ok(())
    }

    fn print(&self, output: &mut impl Write) -> io::Result<()> {
        writeln!(output, "vertices: {}", self.graph.len())?;
        for label in self.graph.labels() {
            write!(output, "{label}:")?;
            if let Some(records) = self.graph.neighbours(label) {
                for record in records {
                    write!(output, " {}({})", record.label(), record.weight())?;
                }
            }
            writeln!(output)?;
        }
        Ok(())
    }
}

fn report_rejection(output: &mut impl Write, err: &GraphError) -> io::Result<()> {
    warn!(error = %err, code = err.code().as_str(), "operation rejected");
    writeln!(output, "error: {err}")
}
