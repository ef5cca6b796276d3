//! Case-insensitive key ordering.

use std::cmp::Ordering;

use crate::collate::{CaseMode, TextCollator};

/// Strict weak ordering over strings that ignores letter case.
///
/// Wraps a [`TextCollator`] and always compares in [`CaseMode::Insensitive`]. This is the
/// ordering policy a [`CaseInsensitiveMap`](crate::CaseInsensitiveMap) injects into its keys.
///
/// # Examples
///
/// ```
/// use cimap_core::{FoldingCollator, IgnoreCase};
///
/// let order = IgnoreCase::new(FoldingCollator::new());
/// assert!(order.equivalent("gatto", "GATTO"));
/// assert!(order.less("ciao", "Gatto"));
/// assert!(!order.less("ciao", "CIAO"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IgnoreCase<C> {
    collator: C,
}

impl<C: TextCollator> IgnoreCase<C> {
    /// Creates the ordering on top of `collator`.
    pub fn new(collator: C) -> Self {
        Self { collator }
    }

    /// Three-way comparison ignoring case.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b, CaseMode::Insensitive)
    }

    /// Returns `true` if `a` sorts strictly before `b`.
    pub fn less(&self, a: &str, b: &str) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Returns `true` if neither string sorts before the other.
    pub fn equivalent(&self, a: &str, b: &str) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

impl<C> IgnoreCase<C> {
    /// The underlying collator.
    pub fn collator(&self) -> &C {
        &self.collator
    }
}
