//! Foundation types for StrQ.
//!
//! This crate provides the record and filter types shared by every other
//! StrQ crate.
//!
//! # Key Types
//!
//! - [`StringRecord`] — An ingested string plus its derived properties
//! - [`StringProperties`] — The derived, immutable property set
//! - [`FilterSpec`] — The typed five-field query shape
//! - [`CharFrequencyMap`] — Per-character counts in first-occurrence order

pub mod filter;
pub mod record;

pub use filter::FilterSpec;
pub use record::{CharFrequencyMap, StringProperties, StringRecord};
