//! Filter engine for StrQ.
//!
//! Two explicit steps, in the order the caller sees them:
//!
//! 1. **Coercion** ([`coerce`]): turn untyped caller input (query-string
//!    pairs or a JSON object from the NL adapter) into a typed
//!    [`FilterSpec`](strq_types::FilterSpec). Unknown keys and
//!    uncoercible values abort here, before any predicate runs.
//! 2. **Evaluation** ([`apply`]): AND the non-null predicates over a
//!    record snapshot. Predicates are independent, so evaluation order
//!    never changes the result.
//!
//! Failures are fail-fast and terminal: the caller gets one error and no
//! partial result.

pub mod coerce;
pub mod engine;
pub mod error;

pub use coerce::{coerce, RawFilter};
pub use engine::{apply, FilterResult};
pub use error::FilterError;
