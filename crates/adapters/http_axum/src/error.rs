//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use hoodbase_domain::error::HoodbaseError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`HoodbaseError`] and request body rejections to an HTTP response
/// with appropriate status code.
pub enum ApiError {
    Domain(HoodbaseError),
    /// The request body is not a JSON document of the expected shape.
    Body(JsonRejection),
}

impl From<HoodbaseError> for ApiError {
    fn from(err: HoodbaseError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = match self {
            Self::Domain(err) => err,
            Self::Body(rejection) => {
                tracing::debug!(status = %rejection.status(), "request body rejected");
                let body = ErrorBody {
                    error: rejection.body_text(),
                };
                return (StatusCode::BAD_REQUEST, Json(body)).into_response();
            }
        };
        let (status, message) = match &err {
            HoodbaseError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            HoodbaseError::InvalidParameter(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            HoodbaseError::NotFound(err) => {
                tracing::debug!(key = %err.key, "neighborhood not found");
                (StatusCode::NOT_FOUND, err.to_string())
            }
            HoodbaseError::Duplicate(err) => (StatusCode::CONFLICT, err.to_string()),
            HoodbaseError::Storage(err) => {
                tracing::error!(error = %err, source = ?err.source(), "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
