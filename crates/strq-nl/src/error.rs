use thiserror::Error;

/// Errors from natural-language translation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NlError {
    /// The model understood the query but it does not relate to
    /// filterable string properties. Distinct from malformed output:
    /// surfaced to callers as unprocessable, not bad-request.
    #[error("query parsed but resulted in conflicting filters")]
    SemanticMismatch,

    /// The query could not be turned into a filter at all: malformed
    /// model output or an upstream collaborator failure.
    #[error("translation failed: {0}")]
    Translation(String),
}

/// Result alias for translation operations.
pub type NlResult<T> = Result<T, NlError>;
