//! String analysis for StrQ.
//!
//! Turns raw text into an immutable [`StringRecord`](strq_types::StringRecord):
//! normalization (trim + lower-case), SHA-256 content hashing, derived
//! property computation, and the duplicate-checking builder that is the
//! only way records enter the store.

pub mod builder;
pub mod error;
pub mod hash;
pub mod props;

pub use builder::RecordBuilder;
pub use error::{AnalyzeError, AnalyzeResult};
pub use hash::sha256_hex;
pub use props::{derive_properties, normalize};
