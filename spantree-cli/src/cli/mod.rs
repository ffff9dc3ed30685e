//! Command-line interface for editing weighted graphs and computing minimum
//! spanning trees.
//!
//! The `mst` command loads a graph description file and prints the tree; the
//! `edit` command runs an interactive session with the editor's operation
//! set: add/remove vertex, add/remove edge, compute MST.

mod commands;
mod editor;
mod graph_file;

pub use commands::{
    Cli, CliError, Command, EditCommand, MstCommand, MstSummary, render_summary, render_tree,
    run_cli,
};
pub use editor::EditorSession;
pub use graph_file::{GraphFileError, parse_graph};
