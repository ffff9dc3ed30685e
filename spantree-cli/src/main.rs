//! CLI entry point for the spantree graph editor.
//!
//! Parses command-line arguments with clap, executes the requested command,
//! and maps errors to appropriate exit codes. Logging is initialised eagerly
//! so subsequent operations can emit structured diagnostics via `tracing`.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use spantree_cli::{
    cli::{Cli, CliError, run_cli},
    logging::{self, LoggingError},
};

fn try_main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    run_cli(cli, stdin.lock(), &mut writer)?;
    writer
        .flush()
        .map_err(|source| CliError::Output { source })?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let code = match &err {
            CliError::Graph(graph_error) => Some(graph_error.code().as_str()),
            _ => None,
        };
        error!(error = %err, code, "command execution failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialised"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialise logging: {err}");
}
