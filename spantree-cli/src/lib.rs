//! Spantree CLI library.
//!
//! Exposes the command surface and logging initialisation so integration
//! tests can drive the CLI without spawning a process.

pub mod cli;
pub mod logging;
