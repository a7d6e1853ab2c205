use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Folder name used when `flip` is run without arguments
pub const DEFAULT_RAW_DIR: &str = "raw";

/// Dataset augmentation and training launcher for the bumblebee detector.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct AppArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Write a left-right mirrored copy of every image in a folder.
    Flip {
        /// Folder with the source images. Defaults to `raw` next to the executable.
        input: Option<PathBuf>,
        /// Where to write `<name>_flip.<ext>` files. Defaults to the input's parent,
        /// or to the `raw` folder itself when no input is given.
        output: Option<PathBuf>,
    },
    /// Train the detector with the external `yolo` tool.
    Train {
        /// JSON file overriding the default training parameters.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Trainer executable.
        #[arg(long, default_value = crate::train::DEFAULT_TRAINER)]
        program: String,
        /// Print the trainer command without running it.
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
}

/// The `raw` folder next to the running executable
pub fn default_raw_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "executable has no parent directory"))?;
    Ok(dir.join(DEFAULT_RAW_DIR))
}

/// Resolve the flip folders: no input means `raw` in, `raw` out
pub fn resolve_flip_dirs(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> io::Result<(PathBuf, Option<PathBuf>)> {
    match input {
        Some(input) => Ok((input, output)),
        None => {
            let raw = default_raw_dir()?;
            let output = output.unwrap_or_else(|| raw.clone());
            Ok((raw, Some(output)))
        }
    }
}
