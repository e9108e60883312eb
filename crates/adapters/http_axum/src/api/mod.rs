//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod neighborhoods;

use axum::Router;
use axum::routing::get;

use hoodbase_app::ports::NeighborhoodRepository;

use crate::state::AppState;

/// Build the `/api/v1` sub-router.
///
/// The collection routes answer with and without a trailing slash.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: NeighborhoodRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/neighborhood",
            get(neighborhoods::list::<R>).post(neighborhoods::create::<R>),
        )
        .route(
            "/neighborhood/",
            get(neighborhoods::list::<R>).post(neighborhoods::create::<R>),
        )
        .route(
            "/neighborhood/{id}",
            get(neighborhoods::get::<R>).delete(neighborhoods::delete::<R>),
        )
}
