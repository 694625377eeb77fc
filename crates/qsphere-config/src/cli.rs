//! Command-line argument parsing for the `qsph` tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{Config, OutputFormat};

/// Quad-sphere coordinate tool command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "qsph", about = "Quad-sphere encode/decode of unit directions")]
pub struct CliArgs {
    /// What to run.
    #[command(subcommand)]
    pub command: Command,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Output format (plain, json).
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Digits after the decimal point in plain output.
    #[arg(long, global = true)]
    pub precision: Option<usize>,

    /// Path to config directory (overrides default location).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Subcommands of `qsph`.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Quad-sphere coordinates `(face, x, y)` of a direction (normalized first).
    Encode {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        #[arg(allow_negative_numbers = true)]
        z: f64,
    },
    /// Unit direction for a face number and face coordinates in [-1, 1].
    Decode {
        face: i64,
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
    /// Cube face a direction falls on.
    Face {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        #[arg(allow_negative_numbers = true)]
        z: f64,
    },
    /// Encode/decode random unit directions and report the worst round-trip error.
    Check {
        /// Number of directions to sample.
        #[arg(long)]
        samples: Option<u32>,
        /// RNG seed.
        #[arg(long)]
        seed: Option<u64>,
        /// Largest accepted round-trip error.
        #[arg(long)]
        tolerance: Option<f64>,
    },
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if let Some(format) = args.format {
            self.output.format = format;
        }
        if let Some(precision) = args.precision {
            self.output.precision = precision;
        }
        if let Command::Check {
            samples,
            seed,
            tolerance,
        } = args.command
        {
            if let Some(samples) = samples {
                self.check.samples = samples;
            }
            if let Some(seed) = seed {
                self.check.seed = seed;
            }
            if let Some(tolerance) = tolerance {
                self.check.tolerance = tolerance;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(command: Command) -> CliArgs {
        CliArgs {
            command,
            log_level: None,
            format: None,
            precision: None,
            config: None,
        }
    }

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let mut cli = args(Command::Check {
            samples: Some(100),
            seed: None,
            tolerance: Some(1e-9),
        });
        cli.format = Some(OutputFormat::Json);
        config.apply_cli_overrides(&cli);
        assert_eq!(config.check.samples, 100);
        assert_eq!(config.check.tolerance, 1e-9);
        assert_eq!(config.output.format, OutputFormat::Json);
        // Non-overridden fields retain defaults
        assert_eq!(config.check.seed, 42);
        assert_eq!(config.output.precision, 12);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&args(Command::Face {
            x: 1.0,
            y: 0.0,
            z: 0.0,
        }));
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_negative_coordinates() {
        let cli = CliArgs::try_parse_from(["qsph", "encode", "-0.5", "0.25", "-1"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Encode {
                x: -0.5,
                y: 0.25,
                z: -1.0
            }
        );
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = CliArgs::try_parse_from([
            "qsph",
            "decode",
            "3",
            "0.1",
            "-0.2",
            "--format",
            "json",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Command::Decode {
                face: 3,
                x: 0.1,
                y: -0.2
            }
        );
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_parse_check_options() {
        let cli = CliArgs::try_parse_from(["qsph", "check", "--samples", "250", "--seed", "9"])
            .unwrap();
        assert_eq!(
            cli.command,
            Command::Check {
                samples: Some(250),
                seed: Some(9),
                tolerance: None
            }
        );
    }

    #[test]
    fn test_unknown_format_rejected() {
        let result = CliArgs::try_parse_from(["qsph", "face", "1", "0", "0", "--format", "xml"]);
        assert!(result.is_err());
    }
}
