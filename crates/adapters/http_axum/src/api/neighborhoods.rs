//! JSON REST handlers for neighborhoods.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use hoodbase_app::ports::NeighborhoodRepository;
use hoodbase_domain::error::{HoodbaseError, InvalidParameterError};
use hoodbase_domain::id::NeighborhoodId;
use hoodbase_domain::neighborhood::{Neighborhood, NewNeighborhood};

use crate::error::ApiError;
use crate::state::AppState;

/// Page used when `page` is missing or unusable.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when `size` is missing or unusable.
pub const DEFAULT_SIZE: i64 = 10;

/// Raw pagination query. Values stay textual so that garbage such as
/// `size=null` falls back to a default instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub size: Option<String>,
}

impl ListQuery {
    fn page(&self) -> i64 {
        non_negative_or(self.page.as_deref(), DEFAULT_PAGE)
    }

    fn size(&self) -> i64 {
        non_negative_or(self.size.as_deref(), DEFAULT_SIZE)
    }
}

fn non_negative_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|v| *v >= 0)
        .unwrap_or(default)
}

/// Body of the list endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborhoodPage {
    pub page: i64,
    pub total_pages: u64,
    pub neighborhoods: Vec<Neighborhood>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<NeighborhoodPage>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Neighborhood>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Neighborhood>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

fn parse_id(id: &str) -> Result<NeighborhoodId, ApiError> {
    NeighborhoodId::from_str(id).map_err(|_| {
        ApiError::from(HoodbaseError::from(InvalidParameterError::Id(
            id.to_string(),
        )))
    })
}

/// `GET /api/v1/neighborhood/?page=&size=`
pub async fn list<R>(
    State(state): State<AppState<R>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<ListResponse, ApiError>
where
    R: NeighborhoodRepository + Send + Sync + 'static,
{
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let (page, size) = (query.page(), query.size());

    let service = &state.neighborhood_service;
    let neighborhoods = service.list_neighborhood(Some(page), Some(size)).await?;
    let total_pages = service.get_total_pages(Some(size)).await?;

    Ok(ListResponse::Ok(Json(NeighborhoodPage {
        page,
        total_pages,
        neighborhoods,
    })))
}

/// `GET /api/v1/neighborhood/:id`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: NeighborhoodRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let neighborhood = state.neighborhood_service.get_neighborhood_by_id(id).await?;
    Ok(GetResponse::Ok(Json(neighborhood)))
}

/// `POST /api/v1/neighborhood/`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    body: Result<Json<NewNeighborhood>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    R: NeighborhoodRepository + Send + Sync + 'static,
{
    let Json(candidate) = body?;
    let created = state
        .neighborhood_service
        .create_neighborhood(candidate)
        .await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `DELETE /api/v1/neighborhood/:id`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: NeighborhoodRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    state
        .neighborhood_service
        .delete_neighborhood_by_id(id)
        .await?;
    Ok(DeleteResponse::NoContent)
}
