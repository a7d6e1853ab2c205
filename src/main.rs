use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::{error, info, warn};

mod augment;
mod cli;
mod error;
mod train;

use cli::{AppArgs, Command};
use train::TrainConfig;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args = AppArgs::parse();

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Flip { input, output } => {
            let (input, output) = cli::resolve_flip_dirs(input, output)?;
            // Per-file failures are already logged; only setup errors reach here
            let summary = augment::flip_folder(&input, output.as_deref())?;
            if !summary.failed.is_empty() {
                warn!(
                    "⚠️  {} of {} images could not be mirrored",
                    summary.failed.len(),
                    summary.found
                );
            }
            Ok(())
        }
        Command::Train {
            config,
            program,
            dry_run,
        } => {
            let config = match config {
                Some(path) => TrainConfig::load(&path)?,
                None => TrainConfig::default(),
            };

            if dry_run {
                config.validate()?;
                info!("{}", train::command_line(&config, &program));
                return Ok(());
            }

            train::launch(&config, &program)?;
            Ok(())
        }
    }
}
