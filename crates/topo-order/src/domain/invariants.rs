//! Domain invariants for dependency-ordered traversal
//!
//! Each check takes the finished mapping and answers whether it is a valid
//! result. Used by debug assertions after resolution and by the service when
//! `verify_invariants` is enabled.

use super::entities::{AdjacencyMatrix, IndexMapping};

/// INVARIANT-1: Bijection
/// Every position in `0..item_count` appears exactly once.
pub fn invariant_bijection(mapping: &IndexMapping, item_count: usize) -> bool {
    if mapping.len() != item_count {
        return false;
    }

    let mut seen = vec![false; item_count];
    for position in mapping.iter() {
        if position >= item_count || seen[position] {
            return false;
        }
        seen[position] = true;
    }

    true
}

/// INVARIANT-2: Topological Order
/// For every edge `i -> j` (i depends on j), j is ranked strictly before i.
///
/// `adjacency` must be the matrix as built, before resolution cleared it.
pub fn invariant_topological_order(mapping: &IndexMapping, adjacency: &AdjacencyMatrix) -> bool {
    let mut rank_of = vec![usize::MAX; adjacency.size()];
    for (rank, position) in mapping.iter().enumerate() {
        let Some(slot) = rank_of.get_mut(position) else {
            return false;
        };
        *slot = rank;
    }

    for dependent in 0..adjacency.size() {
        for prerequisite in adjacency.prerequisites(dependent) {
            if rank_of[prerequisite] >= rank_of[dependent] {
                return false;
            }
        }
    }

    true
}
