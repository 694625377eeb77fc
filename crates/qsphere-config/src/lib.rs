//! Configuration system for the quad-sphere tools.
//!
//! Settings persist to disk as RON files and can be overridden from the
//! command line via clap. Unknown or missing fields fall back to defaults,
//! so older and newer config files both load.

mod cli;
mod config;
mod error;

pub use cli::{CliArgs, Command};
pub use config::{CheckConfig, Config, DebugConfig, OutputConfig, OutputFormat, default_config_dir};
pub use error::ConfigError;
