//! Term report binary - prints every glossary term found in a script with
//! its translation and occurrence count, without preparing a request payload.
//!
//! Usage:
//!   cargo run --bin term-report -- script.txt
//!
//! Required environment variables:
//! - GLOSSARY_FILE
//!
//! Optional:
//! - TARGET_LANGUAGE (defaults to "french")
//! - EXPAND_CONTRACTIONS (defaults to true)

use anyhow::{Context, Result};
use script_prep::config::Config;
use script_prep::contractions;
use script_prep::glossary::{self, GlossaryStore};
use std::path::Path;
use tracing::info;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("script_prep=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    let script_path = std::env::args()
        .nth(1)
        .context("usage: term-report <script-file>")?;
    let text = std::fs::read_to_string(&script_path)
        .with_context(|| format!("Failed to read script file '{}'", script_path))?;

    let store = GlossaryStore::load_from_file(Path::new(&config.glossary_file))?;
    let table = store.table_for(&config.target_language)?;

    let text = if config.expand_contractions {
        contractions::expand(&text)
    } else {
        text
    };

    let report = glossary::find_terms_with_counts(&text, &table)?;
    info!(
        "Found {} distinct terms for '{}'",
        report.len(),
        config.target_language
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
