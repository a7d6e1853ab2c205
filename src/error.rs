/// Error types shared by the flipper and the training launcher
///
/// Each variant carries the path or value it concerns so that a logged
/// error is enough to locate the problem without a backtrace.
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while mirroring a folder of images.
///
/// `ReadDir`, `NotADirectory` and `CreateDir` abort a batch. The others
/// are reported per file and the batch moves on.
#[derive(Debug, Error)]
pub enum FlipError {
    #[error("cannot read input directory {path}: {}", walk_reason(.source))]
    ReadDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("input path is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("cannot create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("cannot encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("path has no file name: {0}")]
    NoFileName(PathBuf),
}

/// The underlying io error; walkdir's own message repeats the path
fn walk_reason(err: &walkdir::Error) -> String {
    match err.io_error() {
        Some(io) => io.to_string(),
        None => err.to_string(),
    }
}

/// Errors raised while preparing or running a training job.
#[derive(Debug, Error)]
pub enum TrainError {
    #[error("cannot read training config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid training config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid training parameter: {0}")]
    Invalid(String),
    #[error("cannot start trainer `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    /// `code` is `None` when the trainer was killed by a signal.
    #[error("trainer `{program}` exited with status {code:?}")]
    Failed { program: String, code: Option<i32> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use walkdir::WalkDir;

    #[test]
    fn test_read_dir_message_names_path_once() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing-raw");
        let source = WalkDir::new(&missing).into_iter().next().unwrap().unwrap_err();

        let message = FlipError::ReadDir {
            path: missing.clone(),
            source,
        }
        .to_string();

        assert_eq!(message.matches("missing-raw").count(), 1, "{}", message);
    }
}
