//! Natural-language query translation for StrQ.
//!
//! Converts a free-form question ("all single word palindromes") into the
//! same untyped filter shape the structured query path uses. The
//! non-deterministic part is isolated behind the [`NlTranslator`]
//! capability: production wires in [`GeminiTranslator`], tests wire in
//! [`FixedReplyTranslator`].
//!
//! The adapter enforces the collaborator contract — fence stripping, the
//! out-of-domain marker, `"null"` normalization — and nothing more. Field
//! type validation belongs to the filter engine, whose errors propagate to
//! the caller unchanged.

pub mod adapter;
pub mod error;
pub mod gemini;
pub mod prompt;
pub mod translator;

pub use adapter::NlFilterAdapter;
pub use error::{NlError, NlResult};
pub use gemini::GeminiTranslator;
pub use translator::{FixedReplyTranslator, NlTranslator};
