//! Resona CLI - Command-line interface for entrainment audio generation
//!
//! Each generator subcommand writes one WAV file. Configuration errors are
//! reported before any audio is synthesized, and a failed run never leaves a
//! partial file behind.

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use resona_cli::cli_args::{Cli, Commands};
use resona_cli::{commands, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Presets { json } => commands::presets::run(json),
        generator => match generator.into_generate() {
            Some((options, params)) => commands::generate::run(&options, params),
            None => Ok(ExitCode::SUCCESS),
        },
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            match commands::error_code(&e) {
                Some(code) => eprintln!("{} [{}]: {:#}", "error".red().bold(), code, e),
                None => eprintln!("{}: {:#}", "error".red().bold(), e),
            }
            ExitCode::FAILURE
        }
    }
}
