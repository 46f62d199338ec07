//! Property-based tests for merge-import
//!
//! Merge-import appends incoming snippets whose names are not already in
//! the collection. Names are compared against the pre-existing collection
//! only, so duplicates inside one import batch are all admitted.

use std::collections::HashSet;

use proptest::prelude::*;
use snipvault_core::Snippet;

use super::{arb_collection, arb_snippet};
use crate::fixtures::memory_store;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The result is the original collection followed by the incoming
    /// snippets whose names were not taken, in import order.
    #[test]
    fn merge_appends_non_colliding_in_order(
        existing in arb_collection(),
        incoming in prop::collection::vec(arb_snippet(), 0..12)
    ) {
        let store = memory_store();
        store.replace(&existing).unwrap();

        let taken: HashSet<&str> = existing.iter().map(|s| s.name.as_str()).collect();
        let admitted: Vec<Snippet> = incoming
            .iter()
            .filter(|s| !taken.contains(s.name.as_str()))
            .cloned()
            .collect();

        let report = store.merge_import(incoming.clone()).unwrap();

        let mut expected = existing.clone();
        expected.extend(admitted.iter().cloned());
        prop_assert_eq!(store.list(), expected);
        prop_assert_eq!(report.imported, admitted.len());
        prop_assert_eq!(report.imported + report.skipped.len(), incoming.len());
    }

    /// Existing entries are never overwritten by an import.
    #[test]
    fn merge_retains_originals(
        existing in arb_collection(),
        replacement_code in "[a-z]{1,10}"
    ) {
        let store = memory_store();
        store.replace(&existing).unwrap();

        let clashing: Vec<Snippet> = existing
            .iter()
            .map(|s| Snippet::new(s.id.wrapping_add(1), s.name.clone(), replacement_code.clone()))
            .collect();

        let report = store.merge_import(clashing).unwrap();

        prop_assert_eq!(report.imported, 0);
        prop_assert_eq!(store.list(), existing);
    }

    /// Snippets sharing a name inside one batch are all admitted.
    #[test]
    fn merge_admits_intra_batch_duplicates(
        snippet in arb_snippet(),
        copies in 2usize..5
    ) {
        let store = memory_store();
        let batch: Vec<Snippet> = (0..copies)
            .map(|i| Snippet::new(i as u64, snippet.name.clone(), snippet.code.clone()))
            .collect();

        store.merge_import(batch.clone()).unwrap();

        prop_assert_eq!(store.list(), batch);
    }
}

#[test]
fn merge_example_keeps_original_a() {
    let store = memory_store();
    let original = Snippet::new(1, "a", "original");
    store.replace(std::slice::from_ref(&original)).unwrap();

    store
        .merge_import(vec![Snippet::new(2, "a", "imported"), Snippet::new(3, "b", "b")])
        .unwrap();

    assert_eq!(store.list(), vec![original, Snippet::new(3, "b", "b")]);
}
