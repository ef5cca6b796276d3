//! Error types for cimap-core

use crate::collate::Backend;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Collation configuration errors.
///
/// Every variant is fatal for the map that asked for the collator: ordering keys
/// with a different collator than the one configured would break key uniqueness,
/// so there is no fallback.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The locale tag could not be parsed
    #[cfg(feature = "icu")]
    #[error("invalid locale identifier {tag:?}")]
    InvalidLocale {
        tag: String,
        #[source]
        source: icu_locale_core::ParseError,
    },

    /// Collation data for the locale could not be loaded
    #[cfg(feature = "icu")]
    #[error("collation data unavailable for locale {locale}")]
    CollationData {
        locale: String,
        #[source]
        source: icu_provider::DataError,
    },

    /// The configured backend is not compiled into this build
    #[error("collation backend '{0}' is not available in this build")]
    BackendUnavailable(Backend),
}
