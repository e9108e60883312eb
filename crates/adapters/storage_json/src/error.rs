//! Storage-specific error type wrapping file and JSON errors.

use std::path::PathBuf;

use hoodbase_domain::error::HoodbaseError;

/// Errors originating from the JSON file storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backing file is missing or could not be read.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file does not hold a JSON array of neighborhoods.
    #[error("malformed records in {}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The backing file (or its directory) could not be written.
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The collection could not be encoded.
    #[error("failed to encode records")]
    Encode(#[source] serde_json::Error),
}

impl From<StorageError> for HoodbaseError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
