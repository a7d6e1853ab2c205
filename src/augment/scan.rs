use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::FlipError;

/// Supported image file extensions, compared case-insensitively
pub const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "bmp", "gif", "tiff", "webp"];

/// Check if a path has one of the supported image extensions
pub fn is_supported_image(path: &Path) -> bool {
    match path.extension() {
        Some(extension) => {
            let ext = extension.to_string_lossy().to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}

/// List the supported images directly inside `dir`.
///
/// Only regular files one level deep are returned; subdirectories and files
/// with other extensions are skipped. The result is sorted so a batch always
/// runs in the same order. A missing or unreadable `dir` is an error.
pub fn find_images(dir: &Path) -> Result<Vec<PathBuf>, FlipError> {
    if dir.is_file() {
        return Err(FlipError::NotADirectory(dir.to_path_buf()));
    }

    let mut images = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|source| FlipError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

        // Follows symlinks, so a link to an image counts as a file
        if !entry.path().is_file() {
            continue;
        }

        if is_supported_image(entry.path()) {
            images.push(entry.into_path());
        }
    }

    images.sort();
    Ok(images)
}
