//! Contraction expansion for informal English script text.
//!
//! Translation services handle expanded verb forms ("do not") more reliably
//! than informal contractions ("don't"), so scripts are normalized before the
//! translation request is built. Every recognized contraction is replaced by
//! its expansion; all other text, including whitespace and punctuation, is
//! left untouched. The rewrite is idempotent: no expansion re-matches any
//! contraction key.

use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Fixed contraction table: lowercase key (ASCII apostrophe) → expansion.
///
/// Keys are matched case-insensitively and with the Unicode right single
/// quotation mark (U+2019) accepted in place of the ASCII apostrophe.
const CONTRACTIONS: &[(&str, &str)] = &[
    ("i'll", "I will"),
    ("we'll", "we will"),
    ("you'll", "you will"),
    ("he'll", "he will"),
    ("she'll", "she will"),
    ("they'll", "they will"),
    ("it'll", "it will"),
    ("who'll", "who will"),
    ("there'll", "there will"),
    ("i'm", "I am"),
    ("we're", "we are"),
    ("you're", "you are"),
    ("they're", "they are"),
    ("he's", "he is"),
    ("she's", "she is"),
    ("it's", "it is"),
    ("i've", "I have"),
    ("we've", "we have"),
    ("you've", "you have"),
    ("they've", "they have"),
    ("don't", "do not"),
    ("doesn't", "does not"),
    ("didn't", "did not"),
    ("can't", "cannot"),
    ("won't", "will not"),
    ("isn't", "is not"),
    ("aren't", "are not"),
    ("wasn't", "was not"),
    ("weren't", "were not"),
    ("shouldn't", "should not"),
    ("wouldn't", "would not"),
    ("couldn't", "could not"),
    ("let's", "let us"),
    ("what's", "what is"),
    ("that's", "that is"),
    ("there's", "there is"),
];

// Compiled pattern and lookup table (cached for performance)
static CONTRACTION_RE: OnceLock<Regex> = OnceLock::new();
static CONTRACTION_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn contraction_map() -> &'static HashMap<&'static str, &'static str> {
    CONTRACTION_MAP.get_or_init(|| CONTRACTIONS.iter().copied().collect())
}

/// Single alternation over all contraction keys, longest first, whole-word
/// only. The apostrophe in each key also matches U+2019 so that text pasted
/// from word processors ("don’t") is normalized the same way.
fn contraction_pattern() -> &'static Regex {
    CONTRACTION_RE.get_or_init(|| {
        let mut keys: Vec<&str> = CONTRACTIONS.iter().map(|(key, _)| *key).collect();
        keys.sort_by_key(|key| std::cmp::Reverse(key.len()));

        let alternatives: Vec<String> = keys
            .iter()
            .map(|key| regex::escape(key).replace('\'', "['\u{2019}]"))
            .collect();

        let pattern = format!(r"\b(?:{})\b", alternatives.join("|"));
        RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .expect("contraction pattern is built from a fixed table of literals")
    })
}

/// Expand every recognized contraction in `text`.
///
/// Matches whole words only ("can't" never matches inside "scan't"), walks
/// the text left to right in a single non-overlapping pass, and derives the
/// casing of each replacement from the matched occurrence:
///
/// - all letters uppercase → expansion fully uppercase ("DON'T" → "DO NOT")
/// - first character uppercase → expansion capitalized ("Don't" → "Do not")
/// - otherwise → expansion fully lowercase ("don't" → "do not")
pub fn expand(text: &str) -> String {
    contraction_pattern()
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let matched = &caps[0];
            let key = matched.to_lowercase().replace('\u{2019}', "'");
            match contraction_map().get(key.as_str()) {
                Some(expansion) => apply_casing(matched, expansion),
                None => matched.to_string(),
            }
        })
        .into_owned()
}

/// Transfer the casing style of `matched` onto `expansion`.
fn apply_casing(matched: &str, expansion: &str) -> String {
    let mut letters = matched.chars().filter(|c| c.is_alphabetic()).peekable();
    let all_upper = letters.peek().is_some() && letters.all(|c| c.is_uppercase());
    if all_upper {
        return expansion.to_uppercase();
    }

    if matched.chars().next().is_some_and(char::is_uppercase) {
        let mut chars = expansion.chars();
        return match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
    }

    expansion.to_lowercase()
}
