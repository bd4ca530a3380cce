use thiserror::Error;

/// Errors from record analysis and ingestion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyzeError {
    /// A record with the same normalized value already exists.
    #[error("string already exists in the system: {0}")]
    DuplicateValue(String),
}

/// Result alias for analysis operations.
pub type AnalyzeResult<T> = Result<T, AnalyzeError>;
