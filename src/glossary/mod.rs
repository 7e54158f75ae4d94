//! Glossary term detection for translation requests.
//!
//! A glossary pins specialized vocabulary during translation: each entry
//! pairs a curated English phrase with its translation in one target
//! language. Before a script is sent to the translation service, the text is
//! scanned for every glossary phrase and the matched subset is attached to
//! the request as structured metadata.
//!
//! # Architecture
//!
//! - `table`: per-invocation read-only term table with canonical-key lookup
//! - `matcher`: compiled pattern over the table plus the two scan contracts
//!   (distinct terms, counted terms)
//! - `store`: in-memory glossary collection keyed by target language,
//!   loadable from a JSON document
//!
//! Matching is case-insensitive, whitespace-flexible inside phrases, bounded
//! by Unicode word boundaries on both sides, and longest-match deterministic:
//! when two phrases could match at the same position, only the longer one is
//! reported.

mod matcher;
mod store;
mod table;

use thiserror::Error;

pub use matcher::{find_distinct_terms, find_terms_with_counts, GlossaryMatcher, MatchHit, TermCount};
pub use store::{GlossaryStore, StoreError};
pub use table::{GlossaryEntry, GlossaryTable};

/// Failure while building a glossary table or compiling its match pattern.
///
/// A glossary entry that cannot be turned into a valid pattern is a data
/// defect, not a skippable row: dropping it silently would lose a term the
/// translation depends on, so construction fails instead.
#[derive(Debug, Error)]
pub enum GlossaryError {
    #[error("glossary term is empty after trimming")]
    EmptyTerm,

    #[error("failed to compile glossary pattern: {0}")]
    Pattern(#[from] regex::Error),
}
