//! ICU4X-backed collation.

use std::{cmp::Ordering, fmt};

use icu_collator::{
    Collator, CollatorBorrowed, CollatorPreferences,
    options::{CollatorOptions, Strength},
};
use icu_locale_core::Locale;

use super::{CaseMode, InvariantCollator, TextCollator};
use crate::error::{Error, Result};

/// Display name of the root collation in logs and errors.
const ROOT_LOCALE: &str = "und";

/// Locale-aware collation using ICU4X with compiled CLDR data.
///
/// Two collators are kept for the same locale:
/// - secondary strength for [`CaseMode::Insensitive`]: accents are significant, and ties are
///   broken by a tertiary comparison of the lowercased inputs so that width and compatibility
///   variants (`ｃｉａｏ`, `ﬁle`) stay apart from their plain forms while case variants stay equal
/// - tertiary strength for [`CaseMode::Sensitive`]
pub struct IcuCollator {
    locale: Option<String>,
    insensitive: CollatorBorrowed<'static>,
    sensitive: CollatorBorrowed<'static>,
}

impl IcuCollator {
    /// Creates a collator using the root collation order.
    ///
    /// The root order does not depend on the process locale, so maps built with it
    /// iterate in the same order everywhere.
    pub fn invariant() -> Result<Self> {
        Self::with_preferences(None, CollatorPreferences::default())
    }

    /// Creates a collator for the given BCP-47 locale tag (e.g. `"sv"`, `"de-u-co-phonebk"`).
    pub fn for_locale(tag: &str) -> Result<Self> {
        let locale: Locale = tag.parse().map_err(|source| Error::InvalidLocale {
            tag: tag.to_string(),
            source,
        })?;
        Self::with_preferences(Some(locale.to_string()), locale.into())
    }

    /// The locale tag this collator was created for, `None` for the root collation.
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    fn with_preferences(locale: Option<String>, prefs: CollatorPreferences) -> Result<Self> {
        let data_error = |source| Error::CollationData {
            locale: locale.clone().unwrap_or_else(|| ROOT_LOCALE.to_string()),
            source,
        };

        let insensitive = Collator::try_new(prefs.clone(), strength(Strength::Secondary))
            .map_err(data_error)?;
        let sensitive =
            Collator::try_new(prefs, strength(Strength::Tertiary)).map_err(data_error)?;

        tracing::debug!(
            locale = locale.as_deref().unwrap_or(ROOT_LOCALE),
            "icu collator initialized"
        );

        Ok(Self {
            locale,
            insensitive,
            sensitive,
        })
    }
}

fn strength(strength: Strength) -> CollatorOptions {
    let mut options = CollatorOptions::default();
    options.strength = Some(strength);
    options
}

impl TextCollator for IcuCollator {
    fn compare(&self, a: &str, b: &str, mode: CaseMode) -> Ordering {
        match mode {
            CaseMode::Insensitive => self
                .insensitive
                .compare(a, b)
                .then_with(|| self.sensitive.compare(&a.to_lowercase(), &b.to_lowercase())),
            CaseMode::Sensitive => self.sensitive.compare(a, b),
        }
    }
}

impl InvariantCollator for IcuCollator {
    fn invariant() -> Result<Self> {
        IcuCollator::invariant()
    }
}

impl fmt::Debug for IcuCollator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IcuCollator")
            .field("locale", &self.locale())
            .finish_non_exhaustive()
    }
}
