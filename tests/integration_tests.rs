//! Integration tests for the script preparation core.
//!
//! These tests verify the interaction between the glossary store, the
//! matcher, and the contraction normalizer across the complete preparation
//! workflow, including loading the glossary document from disk.

use tempfile::TempDir;

use script_prep::contractions;
use script_prep::glossary::{self, GlossaryEntry, GlossaryStore, GlossaryTable};
use script_prep::pipeline::{prepare_script, PrepareOptions};

// ==================== Test Helpers ====================

/// Write a glossary JSON document into a temp dir and load it as a store.
fn load_store(temp_dir: &TempDir, document: &str) -> GlossaryStore {
    let path = temp_dir.path().join("glossary.json");
    std::fs::write(&path, document).expect("Failed to write glossary file");
    GlossaryStore::load_from_file(&path).expect("Failed to load glossary store")
}

const SAMPLE_GLOSSARY: &str = r#"{
    "french": [
        { "english_term": "artificial intelligence", "target_term": "intelligence artificielle" },
        { "english_term": "intelligence", "target_term": "renseignement" },
        { "english_term": "machine learning", "target_term": "apprentissage automatique" },
        { "english_term": "cloud", "target_term": "nuage" }
    ],
    "german": [
        { "english_term": "cloud", "target_term": "Wolke" }
    ]
}"#;

// ==================== End-to-End Pipeline Tests ====================

#[test]
fn test_full_pipeline_from_file_to_payload() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = load_store(&temp_dir, SAMPLE_GLOSSARY);
    let table = store.table_for("french").expect("Should build table");

    let script = "We'll move artificial intelligence workloads to the cloud. It's time.";
    let prepared =
        prepare_script(script, &table, &PrepareOptions::default()).expect("Should prepare");

    assert_eq!(
        prepared.text,
        "We will move artificial intelligence workloads to the cloud. It is time."
    );
    assert_eq!(
        prepared.glossary.get("artificial intelligence"),
        Some(&"intelligence artificielle".to_string())
    );
    assert_eq!(prepared.glossary.get("cloud"), Some(&"nuage".to_string()));
    // The phrase term suppresses the embedded "intelligence" entry.
    assert!(!prepared.glossary.contains_key("intelligence"));
}

#[test]
fn test_pipeline_per_language_tables_are_independent() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = load_store(&temp_dir, SAMPLE_GLOSSARY);

    let french = store.table_for("french").expect("Should build");
    let german = store.table_for("german").expect("Should build");

    let text = "cloud and machine learning";
    let french_terms = glossary::find_distinct_terms(text, &french).unwrap();
    let german_terms = glossary::find_distinct_terms(text, &german).unwrap();

    assert_eq!(french_terms.len(), 2);
    assert_eq!(german_terms.len(), 1);
    assert_eq!(german_terms.get("cloud"), Some(&"Wolke".to_string()));
}

#[test]
fn test_pipeline_unknown_language_yields_empty_glossary() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = load_store(&temp_dir, SAMPLE_GLOSSARY);
    let table = store.table_for("klingon").expect("Should build empty table");

    let prepared = prepare_script("cloud text", &table, &PrepareOptions::default())
        .expect("Should prepare");
    assert!(prepared.glossary.is_empty());
    assert_eq!(prepared.text, "cloud text");
}

#[test]
fn test_pipeline_expansion_feeds_matching() {
    // A glossary term hidden behind a contraction boundary still matches
    // after expansion runs first.
    let table = GlossaryTable::from_entries(vec![GlossaryEntry::new("do not disturb", "ne pas déranger")])
        .expect("Should build");

    let prepared = prepare_script("Don't disturb the recording", &table, &PrepareOptions::default())
        .expect("Should prepare");

    assert_eq!(prepared.text, "Do not disturb the recording");
    assert_eq!(
        prepared.glossary.get("do not disturb"),
        Some(&"ne pas déranger".to_string())
    );
}

// ==================== Counted Report Tests ====================

#[test]
fn test_counted_report_over_expanded_text() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = load_store(&temp_dir, SAMPLE_GLOSSARY);
    let table = store.table_for("french").expect("Should build");

    let text = contractions::expand("It's cloud first. Cloud again. CLOUD!");
    let report = glossary::find_terms_with_counts(&text, &table).unwrap();

    let entry = report.get("cloud").expect("Should match");
    assert_eq!(entry.count, 3);
    assert_eq!(entry.translation, "nuage");
}

// ==================== Error Propagation Tests ====================

#[test]
fn test_load_fails_on_invalid_entry() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("glossary.json");
    std::fs::write(
        &path,
        r#"{ "french": [ { "english_term": "  ", "target_term": "vide" } ] }"#,
    )
    .expect("Failed to write glossary file");

    let result = GlossaryStore::load_from_file(&path);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("french"));
}

#[test]
fn test_load_fails_on_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let result = GlossaryStore::load_from_file(&temp_dir.path().join("missing.json"));
    assert!(result.is_err());
}

// ==================== Payload Serialization Tests ====================

#[test]
fn test_prepared_payload_json_shape() {
    let table = GlossaryTable::from_entries(vec![GlossaryEntry::new("cloud", "nuage")])
        .expect("Should build");
    let prepared = prepare_script("the cloud", &table, &PrepareOptions::default())
        .expect("Should prepare");

    let value: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&prepared).unwrap()).unwrap();
    assert_eq!(value["text"], "the cloud");
    assert_eq!(value["glossary"]["cloud"], "nuage");
}
