use thiserror::Error;

/// Errors from filter coercion and evaluation.
///
/// Both the structured query path and the NL adapter path surface these
/// verbatim, so the two entry points share one filtering-error vocabulary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// A query key outside the five recognized fields.
    #[error("unknown query parameter '{0}'")]
    UnknownParameter(String),

    /// A recognized field whose value failed type coercion.
    #[error("{field} must be {expected}")]
    InvalidValue {
        field: &'static str,
        expected: &'static str,
    },
}

impl FilterError {
    pub(crate) fn boolean(field: &'static str) -> Self {
        Self::InvalidValue {
            field,
            expected: "a boolean (true/false)",
        }
    }

    pub(crate) fn integer(field: &'static str) -> Self {
        Self::InvalidValue {
            field,
            expected: "an integer",
        }
    }

    pub(crate) fn string(field: &'static str) -> Self {
        Self::InvalidValue {
            field,
            expected: "a string",
        }
    }
}
