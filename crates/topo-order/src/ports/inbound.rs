//! Inbound Ports (Driving Ports / API)

use crate::cursor::TopologicalCursor;
use crate::domain::entities::IndexMapping;
use crate::domain::errors::OrderingResult;
use crate::ports::outbound::{DependencyProvider, ItemSequence};

/// Primary dependency-ordering API
pub trait DependencyOrderingApi {
    /// Compute the traversal order for `item_count` positions.
    ///
    /// This is the whole construction pipeline:
    /// 1. Query `provider` once per position and validate each declaration
    /// 2. Build the adjacency closure
    /// 3. Resolve it by repeated scans
    fn compute_order<P>(&self, item_count: usize, provider: &P) -> OrderingResult<IndexMapping>
    where
        P: DependencyProvider + ?Sized;

    /// Compute the order for `items` and return a cursor positioned at rank 0.
    fn traverse<'a, S, P>(
        &self,
        items: &'a S,
        provider: &P,
    ) -> OrderingResult<TopologicalCursor<'a, S>>
    where
        S: ItemSequence + ?Sized,
        P: DependencyProvider + ?Sized;
}
