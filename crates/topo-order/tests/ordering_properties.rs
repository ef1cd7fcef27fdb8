//! Property tests for dependency ordering.
//!
//! Acyclic declarations are generated against a hidden random permutation: a
//! position may only depend on positions placed before it in that
//! permutation, so every generated input has at least one valid order.

use proptest::prelude::*;

use topo_order::domain::invariants::{invariant_bijection, invariant_topological_order};
use topo_order::{AdjacencyMatrix, DeclaredIndex, OrderingError, TopologicalCursor};

// ============================================================================
// Strategies
// ============================================================================

fn arb_acyclic(max_items: usize) -> impl Strategy<Value = Vec<Vec<DeclaredIndex>>> {
    (0..=max_items)
        .prop_flat_map(|n| {
            (
                Just((0..n).collect::<Vec<usize>>()).prop_shuffle(),
                prop::collection::vec(any::<bool>(), n * n),
            )
        })
        .prop_map(|(hidden, coins)| {
            let n = hidden.len();
            let mut deps = vec![Vec::new(); n];
            for later in 0..n {
                for earlier in 0..later {
                    if coins[later * n + earlier] {
                        deps[hidden[later]].push(hidden[earlier] as DeclaredIndex);
                    }
                }
            }
            deps
        })
}

fn items_for(deps: &[Vec<DeclaredIndex>]) -> Vec<u32> {
    (0..deps.len() as u32).collect()
}

fn adjacency_for(deps: &[Vec<DeclaredIndex>]) -> AdjacencyMatrix {
    let mut adjacency = AdjacencyMatrix::new(deps.len());
    for (dependent, prerequisites) in deps.iter().enumerate() {
        for &prerequisite in prerequisites {
            adjacency.add_edge(dependent, prerequisite as usize);
        }
    }
    adjacency
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: every acyclic input yields a permutation respecting all edges.
    #[test]
    fn prop_order_is_topological_permutation(deps in arb_acyclic(12)) {
        let items = items_for(&deps);

        let cursor = TopologicalCursor::new(&items, &deps).unwrap();

        prop_assert!(invariant_bijection(cursor.mapping(), items.len()));
        prop_assert!(invariant_topological_order(cursor.mapping(), &adjacency_for(&deps)));
    }

    /// Property: forward traversal visits items in mapping order.
    #[test]
    fn prop_forward_follows_mapping(deps in arb_acyclic(12)) {
        let items = items_for(&deps);

        let cursor = TopologicalCursor::new(&items, &deps).unwrap();
        let expected: Vec<u32> = cursor.mapping().iter().map(|p| items[p]).collect();

        prop_assert_eq!(cursor.copied().collect::<Vec<_>>(), expected);
    }

    /// Property: k steps forward then k steps back restores the rank and
    /// replays the same items reversed.
    #[test]
    fn prop_forward_backward_roundtrip(deps in arb_acyclic(12), seed in any::<usize>()) {
        prop_assume!(!deps.is_empty());
        let items = items_for(&deps);
        // Stay below len: at rank len there is no previous element
        let k = seed % deps.len();

        let mut cursor = TopologicalCursor::new(&items, &deps).unwrap();
        let forward: Vec<u32> = (0..k).map(|_| *cursor.try_next().unwrap()).collect();
        let mut backward: Vec<u32> = (0..k).map(|_| *cursor.try_previous().unwrap()).collect();
        backward.reverse();

        prop_assert_eq!(cursor.rank(), 0);
        prop_assert_eq!(forward, backward);
    }

    /// Property: same declarations, same order.
    #[test]
    fn prop_order_is_deterministic(deps in arb_acyclic(12)) {
        let items = items_for(&deps);

        let first = TopologicalCursor::new(&items, &deps).unwrap();
        let second = TopologicalCursor::new(&items, &deps).unwrap();

        prop_assert_eq!(first.mapping(), second.mapping());
    }

    /// Property: reversing any declared edge closes a cycle.
    #[test]
    fn prop_back_edge_is_cycle(deps in arb_acyclic(10), pick in any::<usize>()) {
        let edges: Vec<(usize, DeclaredIndex)> = deps
            .iter()
            .enumerate()
            .flat_map(|(dependent, prerequisites)| {
                prerequisites.iter().map(move |&prerequisite| (dependent, prerequisite))
            })
            .collect();
        prop_assume!(!edges.is_empty());

        let (dependent, prerequisite) = edges[pick % edges.len()];
        let mut cyclic = deps.clone();
        cyclic[prerequisite as usize].push(dependent as DeclaredIndex);
        let items = items_for(&cyclic);

        let result = TopologicalCursor::new(&items, &cyclic);

        prop_assert!(
            matches!(result, Err(OrderingError::CircularDependency { .. })),
            "expected a cycle, got {:?}",
            result
        );
    }

    /// Property: an index at or past the end is always rejected.
    #[test]
    fn prop_out_of_range_rejected(
        deps in arb_acyclic(10),
        pick in any::<usize>(),
        overshoot in 0isize..100,
    ) {
        prop_assume!(!deps.is_empty());
        let position = pick % deps.len();
        let mut broken = deps.clone();
        broken[position].push(deps.len() as DeclaredIndex + overshoot);
        let items = items_for(&broken);

        let result = TopologicalCursor::new(&items, &broken);

        prop_assert!(
            matches!(result, Err(OrderingError::UnsatisfiedDependency { .. })),
            "expected an unsatisfied dependency, got {:?}",
            result
        );
    }
}
