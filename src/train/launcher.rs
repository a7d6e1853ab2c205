/// Launches the external YOLO trainer as a child process
///
/// The trainer inherits stdout and stderr so its progress bars show up
/// directly in the terminal. This call blocks until training ends.
use log::{error, info};
use std::process::Command;

use super::config::TrainConfig;
use crate::error::TrainError;

/// Trainer executable looked up on PATH when none is given
pub const DEFAULT_TRAINER: &str = "yolo";

/// Render the full command for logs and dry runs
pub fn command_line(config: &TrainConfig, program: &str) -> String {
    let mut parts = vec![program.to_string()];
    parts.extend(config.to_args());
    parts.join(" ")
}

/// Validate `config`, run `program` with its arguments and wait for it
pub fn launch(config: &TrainConfig, program: &str) -> Result<(), TrainError> {
    config.validate()?;

    info!("🐝 Starting training: {}", command_line(config, program));

    let status = Command::new(program)
        .args(config.to_args())
        .status()
        .map_err(|source| TrainError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if !status.success() {
        error!("❌ Training failed with {}", status);
        return Err(TrainError::Failed {
            program: program.to_string(),
            code: status.code(),
        });
    }

    info!("✅ Training finished");
    Ok(())
}
