//! JSON file implementation of [`NeighborhoodRepository`].

use std::future::Future;
use std::path::{Path, PathBuf};

use hoodbase_app::ports::NeighborhoodRepository;
use hoodbase_domain::error::HoodbaseError;
use hoodbase_domain::id::NeighborhoodId;
use hoodbase_domain::neighborhood::Neighborhood;

use crate::error::StorageError;

/// Read and decode the whole collection.
pub(crate) async fn load(path: &Path) -> Result<Vec<Neighborhood>, StorageError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| StorageError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_slice(&bytes).map_err(|source| StorageError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Encode and overwrite the whole collection.
pub(crate) async fn persist(path: &Path, records: &[Neighborhood]) -> Result<(), StorageError> {
    let bytes = serde_json::to_vec_pretty(records).map_err(StorageError::Encode)?;
    tokio::fs::write(path, bytes)
        .await
        .map_err(|source| StorageError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Neighborhood repository backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonNeighborhoodRepository {
    path: PathBuf,
}

impl JsonNeighborhoodRepository {
    /// Create a repository reading and writing the file at `path`.
    ///
    /// The file is not touched until the first call.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NeighborhoodRepository for JsonNeighborhoodRepository {
    fn read_all(&self) -> impl Future<Output = Result<Vec<Neighborhood>, HoodbaseError>> + Send {
        let path = self.path.clone();
        async move { Ok(load(&path).await?) }
    }

    fn read_page(
        &self,
        offset: usize,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Neighborhood>, HoodbaseError>> + Send {
        let path = self.path.clone();
        async move {
            let records = load(&path).await?;
            Ok(records.into_iter().skip(offset).take(limit).collect())
        }
    }

    fn find_by_id(
        &self,
        id: NeighborhoodId,
    ) -> impl Future<Output = Result<Option<Neighborhood>, HoodbaseError>> + Send {
        let path = self.path.clone();
        async move {
            let records = load(&path).await?;
            Ok(records.into_iter().find(|n| n.id == id))
        }
    }

    fn add(
        &self,
        neighborhood: Neighborhood,
    ) -> impl Future<Output = Result<Neighborhood, HoodbaseError>> + Send {
        let path = self.path.clone();
        async move {
            let mut records = load(&path).await?;
            records.push(neighborhood.clone());
            persist(&path, &records).await?;
            Ok(neighborhood)
        }
    }

    fn delete(
        &self,
        neighborhood: Neighborhood,
    ) -> impl Future<Output = Result<(), HoodbaseError>> + Send {
        let path = self.path.clone();
        async move {
            let mut records = load(&path).await?;
            records.retain(|n| n.id != neighborhood.id);
            persist(&path, &records).await?;
            Ok(())
        }
    }
}
