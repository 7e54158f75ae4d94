//! Compiled glossary pattern and the two scan contracts.
//!
//! The matcher turns a [`GlossaryTable`] into a single compiled alternation
//! and walks the text left to right, so occurrences are naturally
//! non-overlapping. Construction is proportional to glossary size; callers
//! that scan many texts against a stable glossary should build one
//! [`GlossaryMatcher`] and reuse it.

use crate::glossary::{GlossaryError, GlossaryTable};
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use std::collections::BTreeMap;

/// One occurrence of a glossary term in the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchHit<'a> {
    /// Canonical glossary term, exactly as stored in the table.
    pub term: &'a str,
    /// Byte offset of the occurrence in the source text.
    pub offset: usize,
}

/// Translation plus the number of non-overlapping occurrences of a term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    pub translation: String,
    pub count: usize,
}

/// A glossary table compiled into a single scan pattern.
pub struct GlossaryMatcher<'a> {
    table: &'a GlossaryTable,
    /// `None` for an empty table; every scan then yields an empty result.
    pattern: Option<Regex>,
}

impl<'a> GlossaryMatcher<'a> {
    /// Compile the match pattern for `table`.
    ///
    /// Pattern construction:
    /// 1. escape every term for literal matching, relaxing internal
    ///    whitespace so any run of whitespace in a phrase matches any run of
    ///    whitespace in the text (phrases survive reflowed scripts);
    /// 2. sort the escaped alternatives by descending length, so longer
    ///    phrases are tried before shorter ones at the same position;
    /// 3. wrap the alternation in `\b` assertions on both sides, so a term
    ///    never matches inside a larger word ("art" never matches inside
    ///    "heart");
    /// 4. match case-insensitively with Unicode simple case folding (no
    ///    locale-specific casing rules).
    ///
    /// The regex crate has no atomic grouping, but its leftmost-first
    /// alternation semantics commit to the first alternative that yields a
    /// match at a position, which together with the length sort makes the
    /// longest-match policy deterministic.
    pub fn new(table: &'a GlossaryTable) -> Result<Self, GlossaryError> {
        let pattern = if table.is_empty() {
            None
        } else {
            let mut alternatives: Vec<String> =
                table.terms().iter().map(|term| relax_whitespace(term)).collect();
            alternatives.sort_by(|a, b| b.len().cmp(&a.len()));

            let pattern = format!(r"\b(?:{})\b", alternatives.join("|"));
            Some(
                RegexBuilder::new(&pattern)
                    .case_insensitive(true)
                    .build()?,
            )
        };
        Ok(Self { table, pattern })
    }

    /// Every occurrence of every glossary term, in text order.
    pub fn hits(&self, text: &str) -> Vec<MatchHit<'a>> {
        self.scan(text)
            .into_iter()
            .map(|(term, _, offset)| MatchHit { term, offset })
            .collect()
    }

    /// Distinct matched terms mapped to their translations.
    pub fn find_distinct_terms(&self, text: &str) -> BTreeMap<String, String> {
        let mut result = BTreeMap::new();
        for (term, translation, _) in self.scan(text) {
            result
                .entry(term.to_string())
                .or_insert_with(|| translation.to_string());
        }
        result
    }

    /// Distinct matched terms mapped to their translations and the number of
    /// non-overlapping occurrences of each.
    pub fn find_terms_with_counts(&self, text: &str) -> BTreeMap<String, TermCount> {
        let mut result: BTreeMap<String, TermCount> = BTreeMap::new();
        for (term, translation, _) in self.scan(text) {
            result
                .entry(term.to_string())
                .and_modify(|entry| entry.count += 1)
                .or_insert_with(|| TermCount {
                    translation: translation.to_string(),
                    count: 1,
                });
        }
        result
    }

    /// Walk the text and resolve each pattern match back to its canonical
    /// term. Empty or whitespace-only text yields no hits by contract.
    fn scan(&self, text: &str) -> Vec<(&'a str, &'a str, usize)> {
        let Some(pattern) = &self.pattern else {
            return Vec::new();
        };
        if text.trim().is_empty() {
            return Vec::new();
        }

        pattern
            .find_iter(text)
            .filter_map(|m| {
                self.table
                    .resolve(m.as_str())
                    .map(|(term, translation)| (term, translation, m.start()))
            })
            .collect()
    }
}

/// Escape a term for literal matching, with any internal whitespace run
/// matching any whitespace run in the text.
fn relax_whitespace(term: &str) -> String {
    term.split_whitespace()
        .map(|token| regex::escape(token))
        .collect::<Vec<_>>()
        .join(r"\s+")
}

/// Scan `text` for glossary terms and return each distinct matched term with
/// its translation. Empty glossary or blank text yields an empty mapping.
pub fn find_distinct_terms(
    text: &str,
    table: &GlossaryTable,
) -> Result<BTreeMap<String, String>, GlossaryError> {
    Ok(GlossaryMatcher::new(table)?.find_distinct_terms(text))
}

/// Scan `text` for glossary terms and return each distinct matched term with
/// its translation and occurrence count.
pub fn find_terms_with_counts(
    text: &str,
    table: &GlossaryTable,
) -> Result<BTreeMap<String, TermCount>, GlossaryError> {
    Ok(GlossaryMatcher::new(table)?.find_terms_with_counts(text))
}
