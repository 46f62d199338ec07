//! Property-based tests for JSON export and import
//!
//! Exported files must import back to the same collection, and import must
//! refuse files with malformed records as a whole.

use proptest::prelude::*;
use snipvault_core::export::write_snippets;
use snipvault_core::import::{parse_snippets, read_snippets};
use snipvault_core::SnippetError;
use std::path::Path;
use tempfile::TempDir;

use super::{arb_collection, arb_snippet};
use crate::fixtures::memory_store;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Exporting and re-importing yields an identical collection.
    #[test]
    fn export_then_import_round_trip(collection in arb_collection()) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snippets.json");

        let written = write_snippets(&path, &collection).unwrap();
        let imported = read_snippets(&written).unwrap();

        prop_assert_eq!(imported, collection);
    }

    /// Importing an export into an empty store reproduces the exported
    /// collection exactly.
    #[test]
    fn import_into_empty_store_equals_export(collection in arb_collection()) {
        let temp_dir = TempDir::new().unwrap();
        let written = write_snippets(&temp_dir.path().join("out"), &collection).unwrap();

        let store = memory_store();
        let report = store.merge_import(read_snippets(&written).unwrap()).unwrap();

        prop_assert_eq!(report.imported, collection.len());
        prop_assert!(report.skipped.is_empty());
        prop_assert_eq!(store.list(), collection);
    }

    /// A record missing a required field rejects the whole file, naming
    /// the record's position.
    #[test]
    fn missing_field_rejects_whole_file(
        valid in prop::collection::vec(arb_snippet(), 0..6),
        field in prop::sample::select(vec!["id", "name", "tags", "code"])
    ) {
        let mut records: Vec<serde_json::Value> = valid
            .iter()
            .map(|s| serde_json::to_value(s).unwrap())
            .collect();
        let mut broken = serde_json::json!({"id": 7, "name": "broken", "tags": [], "code": "x"});
        broken.as_object_mut().unwrap().remove(field);
        records.push(broken);

        let content = serde_json::to_string(&records).unwrap();
        let result = parse_snippets(&content, Path::new("import.json"));

        prop_assert!(
            matches!(result, Err(SnippetError::Validation { index, .. }) if index == valid.len()),
            "Expected Validation at {}, got {:?}",
            valid.len(),
            result
        );
    }

    /// A mistyped field rejects the whole file.
    #[test]
    fn wrong_field_type_rejects_whole_file(name in "[a-z]{1,8}", tag in any::<i64>()) {
        let content = serde_json::json!([
            {"id": 1, "name": name, "tags": [tag], "code": "x"}
        ])
        .to_string();

        let result = parse_snippets(&content, Path::new("import.json"));

        prop_assert!(matches!(result, Err(SnippetError::Validation { index: 0, .. })), "expected Validation error at index 0, got {:?}", result);
    }
}

#[test]
fn malformed_import_leaves_store_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.json");
    std::fs::write(
        &path,
        r#"[{"id": 1, "name": "ok", "tags": [], "code": "x"}, {"name": "no-id"}]"#,
    )
    .unwrap();

    let store = memory_store();
    store.create("keep", &[], "kept").unwrap();
    let before = store.list();

    let result = read_snippets(&path).and_then(|incoming| store.merge_import(incoming));

    assert!(matches!(result, Err(SnippetError::Validation { index: 1, .. })));
    assert_eq!(store.list(), before);
}

#[test]
fn export_appends_json_extension() {
    let temp_dir = TempDir::new().unwrap();
    let written = write_snippets(
        &temp_dir.path().join("backup"),
        &crate::fixtures::sample_collection(),
    )
    .unwrap();

    assert_eq!(written, temp_dir.path().join("backup.json"));
    assert!(written.exists());
}
