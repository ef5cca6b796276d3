//! Locale-free collation based on Unicode case folding.

use std::cmp::Ordering;

use unicode_casefold::UnicodeCaseFold;
use unicode_normalization::UnicodeNormalization;

use super::{CaseMode, InvariantCollator, TextCollator};
use crate::error::Result;

/// Orders text by code point after canonical decomposition.
///
/// In [`CaseMode::Insensitive`] both sides are full case folded first (`NFD(fold(NFD(s)))`),
/// so `"PERCHÉ"`, `"perché"` and `"perche\u{301}"` are the same key, and `"STRASSE"` matches
/// `"straße"`. Accents stay significant.
///
/// The order is deterministic and needs no data beyond the Unicode tables compiled into
/// `unicode-normalization` and `unicode-casefold`, but it is a code point order: `"Zebra"`
/// sorts before `"apple"` in [`CaseMode::Sensitive`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FoldingCollator;

impl FoldingCollator {
    /// Creates a new folding collator.
    pub fn new() -> Self {
        Self
    }
}

impl TextCollator for FoldingCollator {
    fn compare(&self, a: &str, b: &str, mode: CaseMode) -> Ordering {
        match mode {
            CaseMode::Insensitive => a.nfd().case_fold().nfd().cmp(b.nfd().case_fold().nfd()),
            CaseMode::Sensitive => a.nfd().cmp(b.nfd()),
        }
    }
}

impl InvariantCollator for FoldingCollator {
    fn invariant() -> Result<Self> {
        Ok(Self)
    }
}
