//! Adjacency Closure Builder
//!
//! Queries the dependency provider once per position and records every
//! declared prerequisite in a dense matrix.

use crate::domain::entities::AdjacencyMatrix;
use crate::domain::errors::{OrderingError, OrderingResult};
use crate::ports::outbound::DependencyProvider;
use tracing::warn;

/// Build the adjacency closure for `item_count` positions.
///
/// Positions are queried in ascending order. The first declared prerequisite
/// outside `[0, item_count)` aborts the build; positions after it are never
/// queried and no partial matrix escapes.
pub fn build_adjacency<P>(item_count: usize, provider: &P) -> OrderingResult<AdjacencyMatrix>
where
    P: DependencyProvider + ?Sized,
{
    let mut adjacency = AdjacencyMatrix::new(item_count);

    for position in 0..item_count {
        let Some(declared) = provider.dependencies(position) else {
            continue;
        };

        for dependency in declared {
            let prerequisite = usize::try_from(dependency)
                .ok()
                .filter(|&prerequisite| prerequisite < item_count);

            let Some(prerequisite) = prerequisite else {
                warn!(
                    position,
                    dependency,
                    item_count,
                    "[topo-order] Unsatisfied dependency declared"
                );
                return Err(OrderingError::UnsatisfiedDependency {
                    position,
                    dependency,
                    item_count,
                });
            };

            adjacency.add_edge(position, prerequisite);
        }
    }

    Ok(adjacency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{DeclaredIndex, Position};
    use std::cell::RefCell;

    #[test]
    fn test_records_declared_edges() {
        let provider: Vec<Vec<DeclaredIndex>> = vec![vec![2], vec![], vec![1]];

        let adjacency = build_adjacency(3, &provider).unwrap();

        assert!(adjacency.has_edge(0, 2));
        assert!(adjacency.has_edge(2, 1));
        assert!(!adjacency.has_edge(2, 0));
        assert_eq!(adjacency.edge_count(), 2);
    }

    #[test]
    fn test_absent_declarations() {
        let provider = |_: Position| -> Option<Vec<DeclaredIndex>> { None };

        let adjacency = build_adjacency(4, &provider).unwrap();

        assert_eq!(adjacency.size(), 4);
        assert_eq!(adjacency.edge_count(), 0);
    }

    #[test]
    fn test_rejects_index_past_end() {
        let provider: Vec<Vec<DeclaredIndex>> = vec![vec![3]];

        let result = build_adjacency(3, &provider);

        assert_eq!(
            result,
            Err(OrderingError::UnsatisfiedDependency {
                position: 0,
                dependency: 3,
                item_count: 3,
            })
        );
    }

    #[test]
    fn test_rejects_negative_index() {
        let provider: Vec<Vec<DeclaredIndex>> = vec![vec![], vec![0, -1]];

        let result = build_adjacency(2, &provider);

        assert!(matches!(
            result,
            Err(OrderingError::UnsatisfiedDependency {
                position: 1,
                dependency: -1,
                ..
            })
        ));
    }

    #[test]
    fn test_queries_each_position_once_in_order() {
        let calls = RefCell::new(Vec::new());
        let provider = |position: Position| -> Option<Vec<DeclaredIndex>> {
            calls.borrow_mut().push(position);
            None
        };

        build_adjacency(3, &provider).unwrap();

        assert_eq!(*calls.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_stops_querying_after_failure() {
        let calls = RefCell::new(Vec::new());
        let provider = |position: Position| -> Option<Vec<DeclaredIndex>> {
            calls.borrow_mut().push(position);
            (position == 1).then(|| vec![9])
        };

        assert!(build_adjacency(4, &provider).is_err());
        assert_eq!(*calls.borrow(), vec![0, 1]);
    }
}
