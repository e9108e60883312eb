//! Storage port — repository trait for the neighborhood collection.

use std::future::Future;

use hoodbase_domain::error::HoodbaseError;
use hoodbase_domain::id::NeighborhoodId;
use hoodbase_domain::neighborhood::Neighborhood;

/// Repository owning the persisted collection of [`Neighborhood`]s.
///
/// Records keep their insertion order. Implementations are not required to
/// coordinate concurrent writers; callers serialize read-then-write
/// sequences themselves.
pub trait NeighborhoodRepository {
    /// Load the whole collection in insertion order.
    fn read_all(&self) -> impl Future<Output = Result<Vec<Neighborhood>, HoodbaseError>> + Send;

    /// Load the records in `[offset, offset + limit)`.
    ///
    /// Returns fewer than `limit` records when the window runs past the end
    /// of the collection, and none when `offset` is past the end.
    fn read_page(
        &self,
        offset: usize,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Neighborhood>, HoodbaseError>> + Send;

    /// Get a record by its identifier.
    fn find_by_id(
        &self,
        id: NeighborhoodId,
    ) -> impl Future<Output = Result<Option<Neighborhood>, HoodbaseError>> + Send;

    /// Append a record and persist the collection.
    fn add(
        &self,
        neighborhood: Neighborhood,
    ) -> impl Future<Output = Result<Neighborhood, HoodbaseError>> + Send;

    /// Remove the record with the same id and persist the collection.
    fn delete(
        &self,
        neighborhood: Neighborhood,
    ) -> impl Future<Output = Result<(), HoodbaseError>> + Send;
}

impl<T: NeighborhoodRepository + Send + Sync> NeighborhoodRepository for std::sync::Arc<T> {
    fn read_all(&self) -> impl Future<Output = Result<Vec<Neighborhood>, HoodbaseError>> + Send {
        (**self).read_all()
    }

    fn read_page(
        &self,
        offset: usize,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Neighborhood>, HoodbaseError>> + Send {
        (**self).read_page(offset, limit)
    }

    fn find_by_id(
        &self,
        id: NeighborhoodId,
    ) -> impl Future<Output = Result<Option<Neighborhood>, HoodbaseError>> + Send {
        (**self).find_by_id(id)
    }

    fn add(
        &self,
        neighborhood: Neighborhood,
    ) -> impl Future<Output = Result<Neighborhood, HoodbaseError>> + Send {
        (**self).add(neighborhood)
    }

    fn delete(
        &self,
        neighborhood: Neighborhood,
    ) -> impl Future<Output = Result<(), HoodbaseError>> + Send {
        (**self).delete(neighborhood)
    }
}
