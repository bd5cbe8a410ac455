//! Property tests for the AVL engine
//!
//! Exercises the engine through its public API with generated workloads.

use avltrace_trace::{TraceEvent, TraceRecorder};
use avltrace_tree::AvlTree;
use proptest::prelude::*;

fn build<K: Ord + Clone>(keys: &[K]) -> AvlTree<K> {
    let mut tree = AvlTree::new();
    for key in keys {
        let _ = tree.insert(key.clone());
    }
    tree
}

proptest! {
    #[test]
    fn every_node_is_balanced(keys in prop::collection::vec(-500i64..500, 0..300)) {
        let tree = build(&keys);
        for key in tree.keys() {
            prop_assert!((-1..=1).contains(&tree.balance_factor_of(&key)));
            prop_assert!(tree.height_of(&key) >= 1);
        }
        prop_assert_eq!(tree.len(), tree.keys().len());
    }

    #[test]
    fn string_keys_keep_the_invariants(
        keys in prop::collection::vec("[a-z]{1,4}", 0..100),
        deletes in prop::collection::vec("[a-z]{1,4}", 0..50),
    ) {
        let mut tree = build(&keys);
        for key in &deletes {
            let _ = tree.delete(key);
            prop_assert!(tree.check_invariants().is_ok());
            prop_assert!(!tree.contains(key));
        }
    }

    #[test]
    fn height_is_logarithmic(keys in prop::collection::hash_set(0u32..100_000, 1..1_000)) {
        let keys: Vec<u32> = keys.into_iter().collect();
        let tree = build(&keys);
        // 1.44 * log2(n + 2) bounds the height of any AVL tree.
        let n = f64::from(u32::try_from(tree.len()).unwrap_or(u32::MAX));
        let bound = 1.45 * (n + 2.0).log2();
        prop_assert!(f64::from(tree.height()) <= bound);
    }

    #[test]
    fn shared_recorder_concatenates_calls(
        keys in prop::collection::vec(0i32..50, 1..40),
        victim in 0i32..50,
    ) {
        let mut separate = AvlTree::new();
        let mut expected = Vec::new();
        for &key in &keys {
            expected.extend(separate.insert(key).into_events());
        }
        expected.extend(separate.delete(&victim).into_events());

        let mut shared = AvlTree::new();
        let mut recorder = TraceRecorder::new();
        for key in &keys {
            shared.insert_with(key, &mut recorder);
        }
        shared.delete_with(&victim, &mut recorder);

        prop_assert_eq!(recorder.events(), expected.as_slice());
        prop_assert_eq!(shared, separate);
    }

    #[test]
    fn every_mutation_ends_with_a_terminal_event(
        keys in prop::collection::vec(0i32..30, 0..40),
        key in 0i32..30,
        insert in any::<bool>(),
    ) {
        let mut tree = build(&keys);
        let trace = if insert { tree.insert(key) } else { tree.delete(&key) };

        let terminal = trace
            .iter()
            .find(|e| !e.is_rotation() && !e.is_search())
            .cloned();
        let expected = match (insert, build(&keys).contains(&key)) {
            (true, false) => TraceEvent::Insert { key },
            (true, true) => TraceEvent::Duplicate { key },
            (false, true) => TraceEvent::Delete { key },
            (false, false) => TraceEvent::NotFound { key },
        };
        prop_assert_eq!(terminal, Some(expected));
    }
}
