//! # cimap
//!
//! Ordered maps with case-insensitive, collation-aware string keys.
//!
//! This crate provides the main API, re-exporting all types from the `cimap-core` crate.
//!
//! ```
//! use cimap::CaseInsensitiveMap;
//!
//! let mut dictionary: CaseInsensitiveMap<&str> = CaseInsensitiveMap::new();
//! dictionary.insert("gatto", "cat");
//!
//! assert_eq!(dictionary.find("GATTO"), Some(&"cat"));
//! assert_eq!(dictionary.find("gAtTo"), Some(&"cat"));
//! ```

// Re-export the collation and map modules for access to iterators and backends
pub use cimap_core::{collate, map};
// Re-export all main types at the crate root for convenience
#[cfg(feature = "icu")]
pub use cimap_core::IcuCollator;
pub use cimap_core::{
    Backend, CaseInsensitiveMap, CaseMode, CollationOptions, CollationOptionsBuilder,
    DefaultCollator, Error, FoldingCollator, IgnoreCase, InvariantCollator, Result,
    SharedCollator, TextCollator,
};
