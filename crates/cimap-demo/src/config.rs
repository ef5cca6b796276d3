//! Demo configuration.
//!
//! Collation options are layered: built-in defaults, then `cimap.toml` (or `--config`), then
//! `CIMAP_*` environment variables, then command-line flags.

use std::path::{Path, PathBuf};

use cimap::{Backend, CollationOptions};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

const CONFIG_FILE: &str = "cimap.toml";
const ENV_PREFIX: &str = "CIMAP_";

/// Replays the case-insensitive dictionary lookups and resolves extra keys.
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Args {
    /// TOML configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Collation backend, overrides the configuration
    #[arg(long, value_enum)]
    pub backend: Option<BackendArg>,

    /// BCP-47 locale tag, overrides the configuration
    #[arg(long, value_name = "TAG")]
    pub locale: Option<String>,

    /// Keys to look up in the sample dictionary
    pub keys: Vec<String>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum BackendArg {
    Icu,
    Fold,
}

impl From<BackendArg> for Backend {
    fn from(value: BackendArg) -> Self {
        match value {
            BackendArg::Icu => Backend::Icu,
            BackendArg::Fold => Backend::Fold,
        }
    }
}

/// Resolves the collation options for this run.
pub fn load(args: &Args) -> Result<CollationOptions, figment::Error> {
    let file = args.config.as_deref().unwrap_or(Path::new(CONFIG_FILE));

    let mut options: CollationOptions = Figment::from(Serialized::defaults(CollationOptions::new()))
        .merge(Toml::file(file))
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()?;

    if let Some(backend) = args.backend {
        options.backend = backend.into();
    }
    if let Some(locale) = &args.locale {
        options.locale = Some(locale.clone());
    }

    Ok(options)
}
