//! In-memory glossary store keyed by target language.
//!
//! The matching core only ever sees a flat list of entries for one language;
//! this store is the lookup that supplies it. Languages are identified by a
//! case-insensitive name ("french", "German"). An unknown language yields an
//! empty entry list, which the matcher turns into an empty result — never an
//! error.

use crate::glossary::{GlossaryEntry, GlossaryError, GlossaryTable};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Failure while loading a glossary document.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read glossary file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse glossary document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid glossary entry for language '{language}': {source}")]
    InvalidEntry {
        language: String,
        source: GlossaryError,
    },
}

/// Ordered glossary entries per target language.
#[derive(Debug, Clone, Default)]
pub struct GlossaryStore {
    /// Lowercased language name → entries in supplied order.
    languages: HashMap<String, Vec<GlossaryEntry>>,
}

impl GlossaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from a JSON document mapping language names to entry
    /// lists:
    ///
    /// ```json
    /// { "french": [ { "english_term": "cloud", "target_term": "nuage" } ] }
    /// ```
    pub fn load_from_file(path: &Path) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path)?;
        let store = Self::from_json(&content)?;
        debug!(
            languages = store.languages.len(),
            path = %path.display(),
            "loaded glossary store"
        );
        Ok(store)
    }

    /// Parse a store from a JSON document. Entries are validated up front so
    /// a bad term fails the load instead of failing a later match call.
    pub fn from_json(document: &str) -> Result<Self, StoreError> {
        let raw: HashMap<String, Vec<GlossaryEntry>> = serde_json::from_str(document)?;

        let mut store = Self::new();
        for (language, entries) in raw {
            for entry in entries {
                store
                    .insert(&language, entry)
                    .map_err(|source| StoreError::InvalidEntry {
                        language: language.clone(),
                        source,
                    })?;
            }
        }
        Ok(store)
    }

    /// Add one entry for a target language, preserving insertion order.
    pub fn insert(&mut self, language: &str, entry: GlossaryEntry) -> Result<(), GlossaryError> {
        if entry.english_term.trim().is_empty() {
            return Err(GlossaryError::EmptyTerm);
        }
        self.languages
            .entry(language.to_lowercase())
            .or_default()
            .push(entry);
        Ok(())
    }

    /// Entries for a target language, empty if the language is unknown.
    pub fn entries_for(&self, language: &str) -> &[GlossaryEntry] {
        self.languages
            .get(&language.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Build the per-invocation match table for a target language.
    pub fn table_for(&self, language: &str) -> Result<GlossaryTable, GlossaryError> {
        GlossaryTable::from_entries(self.entries_for(language).iter().cloned())
    }

    /// Known language names (lowercased), in no particular order.
    pub fn languages(&self) -> Vec<&str> {
        self.languages.keys().map(String::as_str).collect()
    }
}
