use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use strq_analyze::AnalyzeError;
use strq_filter::FilterError;
use strq_nl::NlError;

/// Request-terminal errors, mapped onto the HTTP status vocabulary.
///
/// Every error aborts its request with a single `{"error": ...}` body;
/// no partial results ride alongside. Unclassified failures surface as a
/// generic bad-request with no internal detail.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Request body was not a JSON object.
    #[error("invalid request body or missing 'value' field")]
    InvalidBody,

    /// The `value` field is present but not a string.
    #[error("'value' must be a string")]
    InvalidInput,

    /// No record matches the requested value.
    #[error("string does not exist in the system")]
    NotFound,

    /// Duplicate value at ingest.
    #[error("string already exists in the system")]
    Conflict,

    /// The NL endpoint was called without its `query` parameter.
    #[error("missing query parameter 'query'")]
    MissingQuery,

    /// Filter coercion failure; shared verbatim by both query paths.
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// Natural-language translation failure.
    #[error(transparent)]
    Nl(#[from] NlError),

    /// Configuration problem; startup-fatal, never per-request.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error while binding or serving.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Anything unclassified. Reported to clients without detail.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<AnalyzeError> for ServerError {
    fn from(err: AnalyzeError) -> Self {
        match err {
            AnalyzeError::DuplicateValue(_) => Self::Conflict,
        }
    }
}

impl ServerError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody => StatusCode::BAD_REQUEST,
            Self::InvalidInput => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::MissingQuery => StatusCode::BAD_REQUEST,
            Self::Filter(_) => StatusCode::BAD_REQUEST,
            Self::Nl(NlError::SemanticMismatch) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Nl(NlError::Translation(_)) => StatusCode::BAD_REQUEST,
            Self::Config(_) | Self::Io(_) | Self::Internal(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Client-facing message. Internal detail is never leaked.
    fn public_message(&self) -> String {
        match self {
            Self::Nl(NlError::Translation(reason)) => {
                tracing::warn!(%reason, "translation failed");
                "Bad Request".to_string()
            }
            Self::Config(_) | Self::Io(_) | Self::Internal(_) => "Bad Request".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.public_message() }));
        (status, body).into_response()
    }
}

/// Result alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
