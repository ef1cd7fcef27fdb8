//! Kahn-style Repeated-Scan Resolution
//!
//! O(N²) per scan over the dense matrix, at most N + 1 scans. Detects cycles
//! when a scan makes no progress.

use crate::domain::entities::{AdjacencyMatrix, IndexMapping};
use crate::domain::errors::{OrderingError, OrderingResult};
use tracing::{debug, trace, warn};

/// Resolve the adjacency closure into a traversal order.
///
/// Each scan walks every unprocessed position in ascending order. A position
/// with no outstanding prerequisite is appended immediately, and its incoming
/// edges are cleared before the scan moves on, so a later position in the
/// same scan can already become eligible. Scans repeat until every position
/// is placed or one scan places nothing.
///
/// The resulting order is fully determined by the matrix; ties always go to
/// the lower original position.
pub fn kahns_resolve_order(mut adjacency: AdjacencyMatrix) -> OrderingResult<IndexMapping> {
    let size = adjacency.size();

    #[cfg(debug_assertions)]
    let original = adjacency.clone();

    let mut order = Vec::with_capacity(size);
    let mut unprocessed = vec![true; size];
    let mut scans = 0usize;

    while order.len() < size {
        scans += 1;
        let mut extracted = 0usize;

        for position in 0..size {
            if !unprocessed[position] || adjacency.has_prerequisites(position) {
                continue;
            }

            adjacency.clear_incoming(position);
            unprocessed[position] = false;
            order.push(position);
            extracted += 1;
        }

        trace!(scan = scans, extracted, "[topo-order] Resolution scan");

        if extracted == 0 {
            break;
        }
    }

    // Cycle detection: a stalled scan leaves positions unplaced
    if order.len() < size {
        let unresolved: Vec<_> = (0..size).filter(|&position| unprocessed[position]).collect();
        warn!(
            unresolved = unresolved.len(),
            "[topo-order] Circular dependency detected"
        );
        return Err(OrderingError::CircularDependency { unresolved });
    }

    let mapping = IndexMapping::new(order);

    #[cfg(debug_assertions)]
    {
        use crate::domain::invariants::{invariant_bijection, invariant_topological_order};
        debug_assert!(invariant_bijection(&mapping, size));
        debug_assert!(invariant_topological_order(&mapping, &original));
    }

    debug!(item_count = size, scans, "[topo-order] Order resolved");

    Ok(mapping)
}
