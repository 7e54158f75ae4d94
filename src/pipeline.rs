//! Caller-side composition: normalize, then match, then package.
//!
//! The translation request carries the raw (optionally normalized) text plus
//! the matched glossary subset as structured metadata. This module only
//! sequences the two core components; it performs no I/O and no network
//! calls, so the surrounding application can run it from any request handler.

use crate::contractions;
use crate::glossary::{self, GlossaryError, GlossaryTable};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Options for preparing one script.
#[derive(Debug, Clone)]
pub struct PrepareOptions {
    /// Run the contraction normalizer before glossary matching.
    pub expand_contractions: bool,
}

impl Default for PrepareOptions {
    fn default() -> Self {
        Self {
            expand_contractions: true,
        }
    }
}

/// The payload forwarded alongside a translation request: the prepared text
/// and the glossary subset that applies to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreparedScript {
    pub text: String,
    pub glossary: BTreeMap<String, String>,
}

/// Prepare one script for translation: expand contractions (unless disabled)
/// and attach every glossary term found in the resulting text.
pub fn prepare_script(
    text: &str,
    table: &GlossaryTable,
    options: &PrepareOptions,
) -> Result<PreparedScript, GlossaryError> {
    let text = if options.expand_contractions {
        contractions::expand(text)
    } else {
        text.to_string()
    };

    let glossary = glossary::find_distinct_terms(&text, table)?;
    debug!(
        terms = glossary.len(),
        chars = text.len(),
        "prepared script for translation"
    );

    Ok(PreparedScript { text, glossary })
}
