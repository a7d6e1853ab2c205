/// Training launcher for the bumblebee detector
///
/// The detector itself is trained by the external Ultralytics `yolo` tool.
/// This module only owns the run parameters (config.rs) and starts the
/// tool with them (launcher.rs).

pub mod config;
pub mod launcher;

pub use config::TrainConfig;
pub use launcher::{command_line, launch, DEFAULT_TRAINER};
