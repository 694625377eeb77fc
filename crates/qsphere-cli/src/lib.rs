//! The `qsph` command-line tool: quad-sphere encode/decode over the shell.
//!
//! Each subcommand is a plain function returning a serializable report, so
//! the same code paths are exercised by tests and by the binary.

pub mod commands;
pub mod error;
pub mod output;
pub mod platform;

pub use error::CliError;
