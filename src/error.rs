use std::path::PathBuf;
use thiserror::Error;

/// Why a single ROI was skipped. Never aborts the batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoiError {
    #[error("coordinate list is empty")]
    Empty,
    #[error("coordinates are not a list")]
    NotAList,
    #[error("coordinate {index} is not an [x, y] pair")]
    BadCoordinate { index: usize },
    #[error("coordinate {index} has a non-numeric component")]
    NonNumeric { index: usize },
}

/// File-level failures. Each one aborts only the file it occurred in.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("input file not found: {}", .0.display())]
    MissingInputFile(PathBuf),
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}", .path.display())]
    InvalidInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("top-level value in {} is not a mapping of ROI ids", .0.display())]
    NotAMapping(PathBuf),
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
