//! Property-based tests for snippet store mutations
//!
//! Covers append-on-create, duplicate rejection, absent-id deletes, clear
//! and id allocation.

use proptest::prelude::*;
use snipvault_core::{SnippetError, SnippetStore};

use super::{arb_code, arb_collection, arb_name, arb_tags};
use crate::fixtures::memory_store;

fn seeded_store(collection: &[snipvault_core::Snippet]) -> std::sync::Arc<SnippetStore> {
    let store = memory_store();
    store.replace(collection).unwrap();
    store
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any collection C and a name not in C, create yields C ++ [s].
    #[test]
    fn create_appends_exactly_one(
        collection in arb_collection(),
        name in arb_name(),
        tags in arb_tags(),
        code in arb_code()
    ) {
        prop_assume!(!collection.iter().any(|s| s.name == name));
        let store = seeded_store(&collection);

        let created = store.create(&name, &tags, &code).unwrap();
        let after = store.list();

        prop_assert_eq!(after.len(), collection.len() + 1);
        prop_assert_eq!(&after[..collection.len()], &collection[..]);
        prop_assert_eq!(after.last(), Some(&created));
        prop_assert_eq!(&created.name, &name);
        prop_assert_eq!(&created.tags, &tags);
        prop_assert_eq!(&created.code, &code);
    }

    /// Creating with a name already present reports DuplicateName and
    /// leaves the collection unchanged.
    #[test]
    fn duplicate_create_leaves_collection_unchanged(
        collection in arb_collection(),
        pick in any::<prop::sample::Index>(),
        code in arb_code()
    ) {
        prop_assume!(!collection.is_empty());
        let store = seeded_store(&collection);
        let taken = collection[pick.index(collection.len())].name.clone();

        let result = store.create(&taken, &[], &code);

        prop_assert!(
            matches!(result, Err(SnippetError::DuplicateName(ref n)) if *n == taken),
            "Expected DuplicateName, got {:?}",
            result
        );
        prop_assert_eq!(store.list(), collection);
    }

    /// Deleting an absent id leaves the serialized collection byte-identical.
    #[test]
    fn delete_absent_id_is_identity(collection in arb_collection(), id in any::<u64>()) {
        prop_assume!(!collection.iter().any(|s| s.id == id));
        let store = seeded_store(&collection);
        let before = serde_json::to_vec(&store.list()).unwrap();

        let removed = store.delete_by_id(id).unwrap();

        prop_assert!(!removed);
        prop_assert_eq!(serde_json::to_vec(&store.list()).unwrap(), before);
    }

    /// Deleting a present id removes exactly the first entry with that id.
    #[test]
    fn delete_present_id_removes_one(
        collection in arb_collection(),
        pick in any::<prop::sample::Index>()
    ) {
        prop_assume!(!collection.is_empty());
        let store = seeded_store(&collection);
        let target = pick.index(collection.len());
        let id = collection[target].id;
        let first = collection.iter().position(|s| s.id == id).unwrap();

        prop_assert!(store.delete_by_id(id).unwrap());

        let mut expected = collection.clone();
        expected.remove(first);
        prop_assert_eq!(store.list(), expected);
    }

    /// Clear always yields an empty collection.
    #[test]
    fn clear_always_empty(collection in arb_collection()) {
        let store = seeded_store(&collection);
        store.clear().unwrap();
        prop_assert!(store.list().is_empty());
    }

    /// Ids handed out in sequence are strictly increasing even when the
    /// clock does not move.
    #[test]
    fn ids_strictly_increase(names in prop::collection::hash_set(arb_name(), 1..10)) {
        let store = SnippetStore::with_id_allocator(
            std::sync::Arc::new(snipvault_core::MemoryKeyValueStore::new()),
            snipvault_core::IdAllocator::with_clock(|| 42),
        );

        let ids: Vec<u64> = names
            .iter()
            .map(|name| store.create(name, &[], "x").unwrap().id)
            .collect();

        prop_assert!(ids.windows(2).all(|pair| pair[0] < pair[1]), "ids: {:?}", ids);
    }
}

#[test]
fn example_scenario_from_empty() {
    let store = memory_store();

    let created = store
        .create("foo", &["x".to_string(), "y".to_string()], "print(1)")
        .unwrap();
    assert_eq!(store.list(), vec![created.clone()]);
    assert_eq!(created.tags, vec!["x", "y"]);

    let result = store.create("foo", &[], "other");
    assert!(matches!(result, Err(SnippetError::DuplicateName(_))));
    assert_eq!(store.list(), vec![created]);
}
