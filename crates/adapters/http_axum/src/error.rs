//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use tradfri_domain::error::{TradfriError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps gateway failures and malformed requests to an HTTP response.
#[derive(Debug)]
pub enum ApiError {
    Gateway(TradfriError),
    Body(JsonRejection),
}

impl From<TradfriError> for ApiError {
    fn from(err: TradfriError) -> Self {
        Self::Gateway(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Gateway(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        Self::Body(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Body(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "rejected request body");
                (StatusCode::BAD_REQUEST, rejection.body_text())
            }
            Self::Gateway(err) if err.is_validation() => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Gateway(err) if err.is_not_found() => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Gateway(err) => {
                tracing::error!(error = %err, "gateway error");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
