//! Error types for the sorting engine.
//!
//! Two tiers, matching the batch contract: `SortError` aborts the whole run,
//! the per-file errors are logged and skipped so one bad file never stops
//! the batch.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal, batch-level errors. Either of these aborts the run before or
/// during the pipeline and surfaces in the shell's status label.
#[derive(Error, Debug)]
pub enum SortError {
    /// Designer count outside the valid range
    #[error("invalid designer count {0}: must be at least 1")]
    Configuration(usize),

    /// Source directory missing/unlistable, or destination creation failed
    #[error("filesystem error at {path:?}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SortError {
    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}

/// Convenience result type for engine operations.
pub type SortResult<T> = Result<T, SortError>;

/// Per-file, non-fatal: the image could not be opened or is too small to
/// sample. The caller defaults the classification to non-white.
#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("could not decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Images under 5x5 cannot fit the sampling block
    #[error("{path:?} is {width}x{height}, smaller than the sampling block")]
    TooSmall {
        path: PathBuf,
        width: u32,
        height: u32,
    },
}

/// Per-file, non-fatal: the labeling command could not be run or reported
/// failure. The move is still attempted.
#[derive(Error, Debug)]
pub enum TagError {
    #[error("failed to launch labeling command: {0}")]
    Spawn(#[from] io::Error),

    #[error("labeling command exited with {0}")]
    CommandFailed(std::process::ExitStatus),
}

/// Per-file, non-fatal: the move failed and the file stays in place.
/// Files that hit this are not counted as processed.
#[derive(Error, Debug)]
#[error("could not move {path:?} into {dest:?}: {source}")]
pub struct MoveError {
    pub path: PathBuf,
    pub dest: PathBuf,
    #[source]
    pub source: io::Error,
}
