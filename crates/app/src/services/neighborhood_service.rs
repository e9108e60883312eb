//! Neighborhood service — use-cases for managing neighborhoods.

use tokio::sync::Mutex;

use hoodbase_domain::error::{
    DuplicateNameError, HoodbaseError, InvalidParameterError, NotFoundError,
};
use hoodbase_domain::id::NeighborhoodId;
use hoodbase_domain::neighborhood::{Neighborhood, NewNeighborhood};
use hoodbase_domain::pagination;

use crate::ports::NeighborhoodRepository;

/// Application service for neighborhood CRUD and pagination.
///
/// Every call re-reads the collection from the repository. Mutations hold a
/// write gate across their read-check-write sequence, so two creates with
/// the same name cannot both pass the duplicate check.
pub struct NeighborhoodService<R> {
    repo: R,
    write_gate: Mutex<()>,
}

impl<R: NeighborhoodRepository> NeighborhoodService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            write_gate: Mutex::new(()),
        }
    }

    /// Validate a candidate, reject duplicate names, assign an id and store it.
    ///
    /// # Errors
    ///
    /// Returns [`HoodbaseError::Validation`] if a field rule fails,
    /// [`HoodbaseError::Duplicate`] if a record with the same name exists,
    /// or a storage error propagated from the repository.
    pub async fn create_neighborhood(
        &self,
        candidate: NewNeighborhood,
    ) -> Result<Neighborhood, HoodbaseError> {
        candidate.validate()?;

        let _guard = self.write_gate.lock().await;
        let existing = self.repo.read_all().await?;
        if existing
            .iter()
            .any(|n| n.name_district == candidate.name_district)
        {
            return Err(DuplicateNameError {
                name: candidate.name_district,
            }
            .into());
        }

        let neighborhood = candidate.into_neighborhood(NeighborhoodId::new())?;
        let created = self.repo.add(neighborhood).await?;
        tracing::info!(id = %created.id, name = %created.name_district, "neighborhood created");
        Ok(created)
    }

    /// List one page of neighborhoods in insertion order.
    ///
    /// Pages are 1-based; page `0` is treated as the first page.
    ///
    /// # Errors
    ///
    /// Returns [`HoodbaseError::InvalidParameter`] when `page` or `limit` is
    /// missing or negative, or a storage error from the repository.
    pub async fn list_neighborhood(
        &self,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Vec<Neighborhood>, HoodbaseError> {
        let (Some(page), Some(limit)) = (page, limit) else {
            return Err(InvalidParameterError::PageOrLimit.into());
        };
        let (Ok(page), Ok(limit)) = (u64::try_from(page), u64::try_from(limit)) else {
            return Err(InvalidParameterError::PageOrLimit.into());
        };

        let offset = pagination::offset(page, limit);
        tracing::debug!(page, limit, offset, "listing neighborhoods");
        self.repo
            .read_page(to_usize(offset), to_usize(limit))
            .await
    }

    /// Look up a neighborhood by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HoodbaseError::NotFound`] when no neighborhood with `id`
    /// exists, or a storage error from the repository.
    pub async fn get_neighborhood_by_id(
        &self,
        id: NeighborhoodId,
    ) -> Result<Neighborhood, HoodbaseError> {
        self.repo.find_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                key: id.to_string(),
            }
            .into()
        })
    }

    /// Look up a neighborhood by its exact district name.
    ///
    /// # Errors
    ///
    /// Returns [`HoodbaseError::NotFound`] when no neighborhood is named
    /// `name`, or a storage error from the repository.
    pub async fn get_neighborhood_by_name(&self, name: &str) -> Result<Neighborhood, HoodbaseError> {
        self.repo
            .read_all()
            .await?
            .into_iter()
            .find(|n| n.name_district == name)
            .ok_or_else(|| {
                NotFoundError {
                    key: name.to_string(),
                }
                .into()
            })
    }

    /// Number of pages of size `limit` needed to list every neighborhood.
    ///
    /// Returns `0` when `limit` is missing or not positive, without touching
    /// the repository.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_total_pages(&self, limit: Option<i64>) -> Result<u64, HoodbaseError> {
        let Some(limit) = limit.and_then(|l| u64::try_from(l).ok()).filter(|l| *l > 0) else {
            return Ok(0);
        };
        let count = self.repo.read_all().await?.len();
        let count = u64::try_from(count).unwrap_or(u64::MAX);
        Ok(pagination::total_pages(count, limit))
    }

    /// Delete a neighborhood by id.
    ///
    /// # Errors
    ///
    /// Returns [`HoodbaseError::NotFound`] if the neighborhood does not
    /// exist, or a storage error from the repository.
    pub async fn delete_neighborhood_by_id(&self, id: NeighborhoodId) -> Result<(), HoodbaseError> {
        let _guard = self.write_gate.lock().await;
        let neighborhood = self.get_neighborhood_by_id(id).await?;
        self.repo.delete(neighborhood).await?;
        tracing::info!(%id, "neighborhood deleted");
        Ok(())
    }
}

fn to_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}
