use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Glossary
    pub glossary_file: String,
    pub target_language: String,

    // Normalization
    pub expand_contractions: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Glossary
            glossary_file: std::env::var("GLOSSARY_FILE").context("GLOSSARY_FILE not set")?,
            target_language: std::env::var("TARGET_LANGUAGE")
                .unwrap_or_else(|_| "french".to_string()),

            // Normalization
            expand_contractions: std::env::var("EXPAND_CONTRACTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        })
    }
}
