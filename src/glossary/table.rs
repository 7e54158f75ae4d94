//! Glossary entries and the per-invocation term table.

use crate::glossary::GlossaryError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// One glossary pair: an English phrase and its translation in the target
/// language the surrounding table is scoped to. Phrases may contain spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    pub english_term: String,
    pub target_term: String,
}

impl GlossaryEntry {
    pub fn new(english_term: impl Into<String>, target_term: impl Into<String>) -> Self {
        Self {
            english_term: english_term.into(),
            target_term: target_term.into(),
        }
    }
}

/// Read-only term table for one target language, built fresh per invocation
/// from the caller-supplied entries.
///
/// Terms are keyed case-insensitively and whitespace-collapsed, so a match
/// found in the text can be resolved back to the canonical term exactly as
/// the glossary stores it. If two entries are case-variants of the same key,
/// the first one in the supplied order wins; later duplicates are logged and
/// ignored.
#[derive(Debug, Clone, Default)]
pub struct GlossaryTable {
    /// Normalized key → (canonical term, translation).
    by_key: HashMap<String, (String, String)>,
    /// Canonical terms in supplied order, for pattern construction.
    terms: Vec<String>,
}

impl GlossaryTable {
    /// Build a table from ordered glossary entries.
    ///
    /// Fails on any entry whose English term is empty after trimming.
    pub fn from_entries<I>(entries: I) -> Result<Self, GlossaryError>
    where
        I: IntoIterator<Item = GlossaryEntry>,
    {
        let mut table = Self::default();
        for entry in entries {
            let term = entry.english_term.trim();
            if term.is_empty() {
                return Err(GlossaryError::EmptyTerm);
            }

            let key = normalize_term(term);
            if table.by_key.contains_key(&key) {
                warn!(term, "duplicate glossary key ignored, first entry wins");
                continue;
            }

            table.terms.push(term.to_string());
            table
                .by_key
                .insert(key, (term.to_string(), entry.target_term));
        }
        Ok(table)
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Canonical terms in the order the entries were supplied.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Resolve matched text back to its canonical term and translation.
    ///
    /// The matched text may differ from the stored term in casing and in
    /// internal whitespace runs; both are folded away before lookup.
    pub fn resolve(&self, matched: &str) -> Option<(&str, &str)> {
        self.by_key
            .get(&normalize_term(matched))
            .map(|(term, translation)| (term.as_str(), translation.as_str()))
    }
}

/// Fold casing and collapse whitespace runs for key comparison.
fn normalize_term(term: &str) -> String {
    term.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
