//! # cimap-demo
//!
//! Builds the sample Italian dictionary with the configured collator, checks that every case
//! variant of its keys resolves to the right translation, then looks up any keys given on the
//! command line.

mod config;
mod sample;

use std::process::ExitCode;

use clap::Parser as _;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("collation error: {0}")]
    Collation(#[from] cimap::Error),
}

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = config::Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!(error = %err, "demo aborted");
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` if any sample lookup failed.
fn run(args: &config::Args) -> Result<bool, DemoError> {
    let options = config::load(args)?;
    tracing::info!(
        backend = %options.backend,
        locale = options.locale.as_deref().unwrap_or("invariant"),
        "collation configured"
    );

    let collator = options.build_collator()?;

    println!("*** Testing Map with Case Insensitive String Keys ***\n");

    let mut dictionary = sample::dictionary(collator);
    let mismatches = sample::check(&mut dictionary);
    for mismatch in &mismatches {
        tracing::error!(
            key = mismatch.key,
            expected = mismatch.expected,
            found = %mismatch.found,
            "lookup mismatch"
        );
    }

    for key in &args.keys {
        match dictionary.find_key_value(key) {
            Some((stored, value)) => println!("{key} => {value} (stored as {stored})"),
            None => println!("{key} => <absent>"),
        }
    }

    if mismatches.is_empty() {
        println!("All right.");
    }

    Ok(mismatches.is_empty())
}
