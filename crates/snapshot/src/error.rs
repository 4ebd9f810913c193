//! Snapshot loading errors.

use std::path::PathBuf;

use finstat_shared::AppError;

/// Errors raised while loading a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The snapshot file could not be read.
    #[error("Cannot read snapshot {path}: {source}")]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid snapshot document.
    #[error("Invalid snapshot JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but violates a data invariant.
    #[error("Inconsistent snapshot: {0}")]
    Inconsistent(String),
}

impl From<SnapshotError> for AppError {
    fn from(err: SnapshotError) -> Self {
        match &err {
            SnapshotError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                Self::NotFound(err.to_string())
            }
            _ => Self::DataUnavailable(err.to_string()),
        }
    }
}
