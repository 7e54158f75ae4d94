//! Script preparation core: contraction normalization and glossary term
//! detection for translation requests.
//!
//! Before a plain-text script is sent to an external translation service, the
//! surrounding application runs it through two independent components:
//!
//! - [`contractions::expand`] rewrites informal English contractions
//!   ("don't", "it's") into their expanded forms, preserving the casing of
//!   each matched occurrence.
//! - [`glossary`] scans the text for curated multi-word glossary terms and
//!   reports each matched term with its translation (and optionally its
//!   occurrence count), so a glossary can be attached to the translation
//!   request.
//!
//! Both components are pure functions of their inputs: no I/O, no shared
//! mutable state, safe to call from any number of concurrent tasks. The
//! caller sequences them; [`pipeline::prepare_script`] provides the standard
//! composition.

pub mod config;
pub mod contractions;
pub mod glossary;
pub mod pipeline;

pub use glossary::{GlossaryEntry, GlossaryError, GlossaryMatcher, GlossaryStore, GlossaryTable};
pub use pipeline::{prepare_script, PrepareOptions, PreparedScript};
