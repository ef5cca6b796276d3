//! # cimap-core
//!
//! Core types for cimap - ordered maps with case-insensitive string keys.
//!
//! Keys are ordered by a pluggable [`TextCollator`]. The default collator uses the
//! culture-invariant ICU4X root collation, so `"ciao"`, `"Ciao"` and `"CIAO"` (or `"perché"`
//! and `"PERCHÉ"`) are the same key, and iteration follows alphabetical rather than
//! code point order.

pub mod collate;
pub mod error;
pub mod map;
pub mod order;

// Re-export main types at the crate root for convenience
#[cfg(feature = "icu")]
pub use collate::IcuCollator;
pub use collate::{
    Backend, CaseMode, CollationOptions, CollationOptionsBuilder, DefaultCollator,
    FoldingCollator, InvariantCollator, SharedCollator, TextCollator,
};
pub use error::{Error, Result};
pub use map::CaseInsensitiveMap;
pub use order::IgnoreCase;
