/// Batch mirroring of a folder of images
///
/// Every supported image directly inside the input folder is decoded,
/// mirrored and written next to its siblings as `<stem>_flip.<ext>`.
/// A file that fails to decode or encode is logged and skipped; only
/// problems with the folders themselves stop the batch.
use image::ImageReader;
use log::{error, info, warn};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use super::mirror::mirror;
use super::scan::find_images;
use crate::error::FlipError;

/// Suffix appended to the stem of every mirrored file
pub const FLIP_SUFFIX: &str = "_flip";

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct FlipSummary {
    /// Number of supported images found in the input folder
    pub found: usize,
    /// Output files written successfully
    pub written: Vec<PathBuf>,
    /// Input files that could not be mirrored, with the reason
    pub failed: Vec<(PathBuf, FlipError)>,
}

/// Build the mirrored file name: `bee.PNG` becomes `bee_flip.PNG`
///
/// Works on the raw OS string, so names that are not valid UTF-8 keep
/// their exact bytes.
pub fn flipped_file_name(path: &Path) -> Option<OsString> {
    let mut name = path.file_stem()?.to_os_string();
    name.push(FLIP_SUFFIX);
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    Some(name)
}

/// Where the mirrored copy of `src` goes inside `output_dir`
pub fn output_path_for(src: &Path, output_dir: &Path) -> Result<PathBuf, FlipError> {
    let name = flipped_file_name(src).ok_or_else(|| FlipError::NoFileName(src.to_path_buf()))?;
    Ok(output_dir.join(name))
}

/// Decode `src`, mirror it and encode the result to `dst`.
///
/// The input format is sniffed from the file contents, falling back to the
/// extension. The output format follows `dst`'s extension. Decoded buffers
/// are dropped before this returns, on success and on every error path.
pub fn flip_file(src: &Path, dst: &Path) -> Result<(), FlipError> {
    let reader = ImageReader::open(src)
        .map_err(|source| FlipError::Open {
            path: src.to_path_buf(),
            source,
        })?
        .with_guessed_format()
        .map_err(|source| FlipError::Open {
            path: src.to_path_buf(),
            source,
        })?;

    let img = reader.decode().map_err(|source| FlipError::Decode {
        path: src.to_path_buf(),
        source,
    })?;

    let flipped = mirror(&img);
    drop(img);

    flipped.save(dst).map_err(|source| FlipError::Encode {
        path: dst.to_path_buf(),
        source,
    })
}

/// Mirror every supported image directly inside `input_dir`.
///
/// `output_dir` defaults to the parent of `input_dir` and is created if
/// missing. Returns `Err` only when the folders themselves are unusable;
/// per-file failures are logged and collected in the summary.
pub fn flip_folder(input_dir: &Path, output_dir: Option<&Path>) -> Result<FlipSummary, FlipError> {
    let output_dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_output_dir(input_dir),
    };

    // Ensure the output directory exists
    fs::create_dir_all(&output_dir).map_err(|source| FlipError::CreateDir {
        path: output_dir.clone(),
        source,
    })?;

    let images = find_images(input_dir)?;

    if images.is_empty() {
        warn!("🔍 No images found in {}", input_dir.display());
        return Ok(FlipSummary::default());
    }

    info!("🪞 Found {} images, mirroring left to right...", images.len());

    let mut summary = FlipSummary {
        found: images.len(),
        ..Default::default()
    };

    for src in images {
        let result = output_path_for(&src, &output_dir)
            .and_then(|dst| flip_file(&src, &dst).map(|()| dst));

        match result {
            Ok(dst) => {
                info!("✓ {} → {}", display_name(&src), display_name(&dst));
                summary.written.push(dst);
            }
            Err(e) => {
                error!("✗ Failed to process {}: {}", display_name(&src), e);
                summary.failed.push((src, e));
            }
        }
    }

    info!(
        "✅ Done! {} mirrored, {} failed. Output saved to: {}",
        summary.written.len(),
        summary.failed.len(),
        output_dir.display()
    );

    Ok(summary)
}

/// Parent of the input folder, or the folder itself when it has none
fn default_output_dir(input_dir: &Path) -> PathBuf {
    match input_dir.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        // A bare relative name like `raw` has an empty parent: the working directory
        Some(_) => PathBuf::from("."),
        None => input_dir.to_path_buf(),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .to_string()
}
