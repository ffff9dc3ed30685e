//! Line-oriented graph description parsing.
//!
//! The format mirrors the editor's operations: one directive per line,
//! `vertex <label>` or `edge <origin> <destination> <weight>`. Blank lines
//! and `#` comments are ignored. Labels are upper-cased on ingestion, the
//! same normalisation the interactive editor applies.

use std::io::{self, BufRead};
use std::num::ParseFloatError;

use spantree_core::{Graph, GraphError};
use thiserror::Error;

/// Errors raised while parsing a graph description.
#[derive(Debug, Error)]
pub enum GraphFileError {
    /// Reading from the underlying source failed.
    #[error("failed to read line {line}: {source}")]
    Io {
        /// 1-based line number at which reading failed.
        line: usize,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A line did not start with a known directive.
    #[error("line {line}: unknown directive `{directive}`")]
    UnknownDirective {
        /// 1-based line number of the offending line.
        line: usize,
        /// The unrecognised first field.
        directive: String,
    },
    /// A directive had the wrong number of fields.
    #[error("line {line}: `{directive}` expects {expected} fields, got {got}")]
    FieldCount {
        /// 1-based line number of the offending line.
        line: usize,
        /// The directive that was malformed.
        directive: &'static str,
        /// Number of fields the directive requires, directive included.
        expected: usize,
        /// Number of fields found on the line.
        got: usize,
    },
    /// An edge weight could not be parsed as a number.
    #[error("line {line}: invalid weight `{value}`: {source}")]
    InvalidWeight {
        /// 1-based line number of the offending line.
        line: usize,
        /// The raw weight field.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: ParseFloatError,
    },
    /// A directive was rejected by the graph.
    #[error("line {line}: {source}")]
    Graph {
        /// 1-based line number of the offending line.
        line: usize,
        /// The graph rejection, typically an unknown endpoint.
        #[source]
        source: GraphError,
    },
}

/// Parses a graph description from `reader`.
///
/// # Errors
/// Returns [`GraphFileError`] identifying the offending line when the input
/// cannot be read, a directive is malformed, or the graph rejects an edge.
pub fn parse_graph(reader: impl BufRead) -> Result<Graph, GraphFileError> {
    let mut graph = Graph::new();
    for (index, read) in reader.lines().enumerate() {
        let number = index + 1;
        let line = read.map_err(|source| GraphFileError::Io {
            line: number,
            source,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        match fields.as_slice() {
            ["vertex", label] => graph.add_vertex(label.to_ascii_uppercase()),
            ["vertex", ..] => {
                return Err(GraphFileError::FieldCount {
                    line: number,
                    directive: "vertex",
                    expected: 2,
                    got: fields.len(),
                });
            }
            ["edge", origin, destination, weight] => {
                let parsed =
                    weight
                        .parse::<f64>()
                        .map_err(|source| GraphFileError::InvalidWeight {
                            line: number,
                            value: (*weight).to_owned(),
                            source,
                        })?;
                graph
                    .add_edge(
                        &origin.to_ascii_uppercase(),
                        &destination.to_ascii_uppercase(),
                        parsed,
                    )
                    .map_err(|source| GraphFileError::Graph {
                        line: number,
                        source,
                    })?;
            }
            ["edge", ..] => {
                return Err(GraphFileError::FieldCount {
                    line: number,
                    directive: "edge",
                    expected: 4,
                    got: fields.len(),
                });
            }
            [directive, ..] => {
                return Err(GraphFileError::UnknownDirective {
                    line: number,
                    directive: (*directive).to_owned(),
                });
            }
            [] => {}
        }
    }
    Ok(graph)
}
