//! The `qsph` binary entry point.
//!
//! Run with `cargo run -p qsphere-cli -- encode 0.3 -0.2 0.9`.
//! Run with `cargo run -p qsphere-cli -- check --samples 100000 --format json`.

use clap::Parser;
use qsphere_cli::CliError;
use qsphere_cli::commands::{run_check, run_decode, run_encode, run_face};
use qsphere_cli::output::render;
use qsphere_cli::platform::AppDirs;
use qsphere_config::{CliArgs, Command, Config};
use tracing::error;

fn main() {
    let args = CliArgs::parse();

    let dirs = match AppDirs::resolve_and_create(args.config.as_deref()) {
        Ok(dirs) => dirs,
        Err(e) => {
            eprintln!("Failed to initialize config directory: {e}");
            std::process::exit(1);
        }
    };

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&dirs.config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    qsphere_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));

    if let Err(e) = run(&args.command, &config) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(command: &Command, config: &Config) -> Result<(), CliError> {
    let text = match *command {
        Command::Encode { x, y, z } => render(&run_encode(x, y, z)?, &config.output)?,
        Command::Decode { face, x, y } => render(&run_decode(face, x, y)?, &config.output)?,
        Command::Face { x, y, z } => render(&run_face(x, y, z)?, &config.output)?,
        Command::Check { .. } => {
            let report = run_check(&config.check);
            println!("{}", render(&report, &config.output)?);
            if !report.passed {
                return Err(CliError::CheckFailed {
                    max_error: report.max_error,
                    tolerance: report.tolerance,
                });
            }
            return Ok(());
        }
    };
    println!("{text}");
    Ok(())
}
