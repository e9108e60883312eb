//! Backing file bootstrap.

use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::neighborhood_repo::{JsonNeighborhoodRepository, load, persist};

/// Configuration for the JSON storage adapter.
#[derive(Debug, Clone)]
pub struct Config {
    /// Location of the JSON file holding the collection.
    pub path: PathBuf,
    /// Create the file (and its parent directories) with an empty
    /// collection when it does not exist yet.
    pub create_if_missing: bool,
}

impl Config {
    /// Build a [`JsonDatabase`] from this configuration.
    ///
    /// Creates the file if missing (when allowed) and checks that an
    /// existing file holds a readable collection.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the file cannot be created, or exists but
    /// cannot be read or decoded.
    pub async fn build(self) -> Result<JsonDatabase, StorageError> {
        JsonDatabase::initialize(self.path, self.create_if_missing).await
    }
}

/// Handle on the JSON file backing the neighborhood collection.
#[derive(Debug)]
pub struct JsonDatabase {
    path: PathBuf,
}

impl JsonDatabase {
    async fn initialize(path: PathBuf, create_if_missing: bool) -> Result<Self, StorageError> {
        let exists = tokio::fs::try_exists(&path)
            .await
            .map_err(|source| StorageError::Read {
                path: path.clone(),
                source,
            })?;

        if exists {
            let records = load(&path).await?;
            tracing::info!(path = %path.display(), records = records.len(), "opened neighborhood store");
        } else if create_if_missing {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|source| StorageError::Write {
                        path: parent.to_path_buf(),
                        source,
                    })?;
            }
            persist(&path, &[]).await?;
            tracing::info!(path = %path.display(), "created empty neighborhood store");
        } else {
            tracing::warn!(path = %path.display(), "neighborhood store does not exist");
        }

        Ok(Self { path })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Hand out a repository bound to the backing file.
    #[must_use]
    pub fn repository(&self) -> JsonNeighborhoodRepository {
        JsonNeighborhoodRepository::new(self.path.clone())
    }
}
