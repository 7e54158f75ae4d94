use anyhow::{Context, Result};
use script_prep::config::Config;
use script_prep::glossary::GlossaryStore;
use script_prep::pipeline::{prepare_script, PrepareOptions};
use std::path::Path;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("script_prep=info".parse()?),
        )
        .init();

    // Load configuration from environment
    let config = Config::from_env()?;

    let script_path = std::env::args()
        .nth(1)
        .context("usage: script-prep <script-file>")?;

    info!("Reading script from {}", script_path);
    let text = std::fs::read_to_string(&script_path)
        .with_context(|| format!("Failed to read script file '{}'", script_path))?;

    info!("Loading glossary from {}", config.glossary_file);
    let store = GlossaryStore::load_from_file(Path::new(&config.glossary_file))?;
    let table = store.table_for(&config.target_language)?;
    info!(
        "Glossary for '{}' has {} terms",
        config.target_language,
        table.len()
    );

    let options = PrepareOptions {
        expand_contractions: config.expand_contractions,
    };
    let prepared = prepare_script(&text, &table, &options)?;
    info!("Matched {} glossary terms", prepared.glossary.len());

    println!("{}", serde_json::to_string_pretty(&prepared)?);
    Ok(())
}
