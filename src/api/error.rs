//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::pipeline::AnalysisError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Invalid values: {0}")]
    InvalidValues(String),
    #[error("No valid reports could be analyzed")]
    NoValidReports,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::BadRequest(detail) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", detail),
            ApiError::InvalidValues(detail) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_VALUES", detail)
            }
            ApiError::NoValidReports => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "NO_VALID_REPORTS",
                "No valid reports could be analyzed".to_string(),
            ),
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };

        (status, Json(body)).into_response()
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::EmptyInput => ApiError::BadRequest(err.to_string()),
            AnalysisError::InvalidValues(_) => ApiError::InvalidValues(err.to_string()),
            AnalysisError::NoValidReports => ApiError::NoValidReports,
            AnalysisError::Classifier(e) => ApiError::Internal(e.to_string()),
        }
    }
}
