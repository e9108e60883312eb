//! Shared application state for axum handlers.

use std::sync::Arc;

use hoodbase_app::ports::NeighborhoodRepository;
use hoodbase_app::services::neighborhood_service::NeighborhoodService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need
/// to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Neighborhood CRUD service.
    pub neighborhood_service: Arc<NeighborhoodService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            neighborhood_service: Arc::clone(&self.neighborhood_service),
        }
    }
}

impl<R> AppState<R>
where
    R: NeighborhoodRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(neighborhood_service: NeighborhoodService<R>) -> Self {
        Self {
            neighborhood_service: Arc::new(neighborhood_service),
        }
    }
}
