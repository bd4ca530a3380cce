//! In-memory record storage for StrQ.
//!
//! The store is an ordered, process-lifetime collection of
//! [`StringRecord`](strq_types::StringRecord)s, keyed by normalized value
//! and by content hash. It starts empty and has no eviction policy.
//!
//! # Design Rules
//!
//! 1. Records are immutable once appended; deletion removes them wholesale.
//! 2. The store never enforces value uniqueness — the builder checks before
//!    appending, preserving single-writer semantics.
//! 3. Reads return cloned snapshots (copy-on-read), so iteration is never
//!    affected by concurrent mutation and no torn record is observable.
//! 4. Insertion order is preserved and is the order `all()` reports.

pub mod memory;
pub mod traits;

pub use memory::InMemoryStringStore;
pub use traits::RecordStore;
