//! String collation seam.
//!
//! Key ordering is delegated to a [`TextCollator`]: given two strings and a [`CaseMode`] it
//! answers less, equal or greater. Two implementations ship with the crate:
//! - [`IcuCollator`]: ICU4X collation, culture-invariant (root) by default (`icu` feature)
//! - [`FoldingCollator`]: Unicode full case folding over canonical decompositions, no locale data
//!
//! The [`DefaultCollator`] type depends on the `icu` feature:
//! - When `icu` is enabled (default): `IcuCollator`
//! - When disabled: `FoldingCollator`

use std::{cmp::Ordering, sync::Arc};

use crate::error::Result;

mod fold;
#[cfg(feature = "icu")]
mod icu;
mod options;

#[cfg(feature = "icu")]
pub use self::icu::IcuCollator;
pub use self::{
    fold::FoldingCollator,
    options::{Backend, CollationOptions, CollationOptionsBuilder},
};

cfg_if::cfg_if! {
    if #[cfg(feature = "icu")] {
        pub use self::icu::IcuCollator as DefaultCollator;
    } else {
        pub use self::fold::FoldingCollator as DefaultCollator;
    }
}

/// A collator chosen at run time, e.g. from [`CollationOptions`].
pub type SharedCollator = Arc<dyn TextCollator + Send + Sync>;

/// Whether letter case takes part in a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaseMode {
    /// Case variants of the same text compare equal.
    #[default]
    Insensitive,
    /// Case variants are ordered, e.g. `"a"` and `"A"` are distinct.
    Sensitive,
}

/// Three-way string comparison under some collation rules.
///
/// Implementations must be a total preorder for every [`CaseMode`]: reflexive equality,
/// antisymmetric, and transitive for both `Less` and `Equal`. A map relies on this to keep
/// its keys unique and sorted.
pub trait TextCollator {
    /// Compares `a` with `b`.
    fn compare(&self, a: &str, b: &str, mode: CaseMode) -> Ordering;
}

/// Collators that can be built without any configuration.
///
/// The instance must order text the same way in every environment, independently of the
/// process locale.
pub trait InvariantCollator: TextCollator + Sized {
    /// Creates the culture-invariant collator.
    fn invariant() -> Result<Self>;
}

impl<T: TextCollator + ?Sized> TextCollator for &T {
    fn compare(&self, a: &str, b: &str, mode: CaseMode) -> Ordering {
        (**self).compare(a, b, mode)
    }
}

impl<T: TextCollator + ?Sized> TextCollator for Box<T> {
    fn compare(&self, a: &str, b: &str, mode: CaseMode) -> Ordering {
        (**self).compare(a, b, mode)
    }
}

impl<T: TextCollator + ?Sized> TextCollator for Arc<T> {
    fn compare(&self, a: &str, b: &str, mode: CaseMode) -> Ordering {
        (**self).compare(a, b, mode)
    }
}
