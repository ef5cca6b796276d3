//! Collation configuration.

use std::{fmt, sync::Arc};

use super::{FoldingCollator, SharedCollator};
use crate::error::Result;

/// The collation backend used to order keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// ICU4X collation with compiled CLDR data.
    Icu,
    /// Unicode case folding, code point order.
    Fold,
}

impl Default for Backend {
    fn default() -> Self {
        if cfg!(feature = "icu") {
            Backend::Icu
        } else {
            Backend::Fold
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Icu => f.write_str("icu"),
            Backend::Fold => f.write_str("fold"),
        }
    }
}

/// Selects and configures the collator that orders map keys.
///
/// Without a locale the collation is culture-invariant. The locale is only honoured by
/// the [`Backend::Icu`] backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CollationOptions {
    /// The collation backend.
    pub backend: Backend,

    /// BCP-47 locale tag, e.g. `"it"` or `"sv"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl CollationOptions {
    /// Creates options for the default backend with invariant collation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a new [`CollationOptionsBuilder`].
    pub fn builder() -> CollationOptionsBuilder {
        CollationOptionsBuilder::new()
    }

    /// Builds the configured collator.
    pub fn build_collator(&self) -> Result<SharedCollator> {
        match self.backend {
            #[cfg(feature = "icu")]
            Backend::Icu => {
                let collator = match self.locale.as_deref() {
                    Some(tag) => super::IcuCollator::for_locale(tag)?,
                    None => super::IcuCollator::invariant()?,
                };
                Ok(Arc::new(collator))
            }
            #[cfg(not(feature = "icu"))]
            Backend::Icu => Err(crate::error::Error::BackendUnavailable(Backend::Icu)),
            Backend::Fold => {
                if let Some(locale) = &self.locale {
                    tracing::debug!(%locale, "locale ignored by the fold backend");
                }
                Ok(Arc::new(FoldingCollator::new()))
            }
        }
    }
}

/// Builder for [`CollationOptions`].
#[derive(Debug, Default)]
pub struct CollationOptionsBuilder {
    backend: Backend,
    locale: Option<String>,
}

impl CollationOptionsBuilder {
    /// Creates a builder with the default backend and no locale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the collation backend.
    pub fn backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Sets the locale tag.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Constructs a new [`CollationOptions`] taking all field values from this builder.
    pub fn build(self) -> CollationOptions {
        CollationOptions {
            backend: self.backend,
            locale: self.locale,
        }
    }
}
