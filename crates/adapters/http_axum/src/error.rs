//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use catalog_domain::error::{CatalogError, FieldErrors, NotFoundError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<FieldErrors>,
}

impl ErrorBody {
    fn message(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            fields: None,
        }
    }
}

/// Maps [`CatalogError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(CatalogError);

impl ApiError {
    /// A 404 for a path segment that does not name an existing product.
    pub(crate) fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self(CatalogError::NotFound(NotFoundError {
            entity,
            id: id.into(),
        }))
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ValidationError::Malformed(rejection.body_text()).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            CatalogError::Validation(ValidationError::Fields(fields)) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "validation failed".to_string(),
                    fields: Some(fields),
                },
            ),
            CatalogError::Validation(err @ ValidationError::Malformed(_)) => {
                (StatusCode::BAD_REQUEST, ErrorBody::message(err.to_string()))
            }
            CatalogError::NotFound(err) => {
                (StatusCode::NOT_FOUND, ErrorBody::message(err.to_string()))
            }
            CatalogError::Storage(err) => {
                tracing::error!(
                    error = %err,
                    source = ?std::error::Error::source(&*err),
                    "storage error"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::message("internal server error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Response for paths outside the route table.
pub(crate) async fn fallback() -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorBody::message("not found"))).into_response()
}
