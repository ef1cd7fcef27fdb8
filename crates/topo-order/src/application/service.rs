//! Dependency Ordering Service
//!
//! Main service implementing DependencyOrderingApi.

use crate::algorithms::{build_adjacency, kahns_resolve_order};
use crate::config::OrderingConfig;
use crate::cursor::TopologicalCursor;
use crate::domain::entities::IndexMapping;
use crate::domain::errors::{OrderingError, OrderingResult};
use crate::domain::invariants::{invariant_bijection, invariant_topological_order};
use crate::ports::inbound::DependencyOrderingApi;
use crate::ports::outbound::{DependencyProvider, ItemSequence};

use tracing::{debug, warn};

/// Dependency Ordering Service
///
/// Orchestrates construction:
/// 1. Validate item count against the configured cap
/// 2. Build the adjacency closure from the provider
/// 3. Resolve the traversal order
/// 4. Optionally re-check the result
#[derive(Debug, Clone, Default)]
pub struct OrderingService {
    config: OrderingConfig,
}

impl OrderingService {
    /// Create a new service with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new service with custom config
    pub fn with_config(config: OrderingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OrderingConfig {
        &self.config
    }

    fn validate_item_count(&self, item_count: usize) -> OrderingResult<()> {
        match self.config.max_items {
            Some(max) if item_count > max => {
                warn!(item_count, max, "[topo-order] Item count exceeds limit");
                Err(OrderingError::TooManyItems {
                    count: item_count,
                    max,
                })
            }
            _ => Ok(()),
        }
    }
}

impl DependencyOrderingApi for OrderingService {
    fn compute_order<P>(&self, item_count: usize, provider: &P) -> OrderingResult<IndexMapping>
    where
        P: DependencyProvider + ?Sized,
    {
        // 1. Validate input
        self.validate_item_count(item_count)?;

        debug!(item_count, "[topo-order] Computing dependency order");

        // 2. Build adjacency closure
        let adjacency = build_adjacency(item_count, provider)?;
        debug!(
            edge_count = adjacency.edge_count(),
            "[topo-order] Adjacency built"
        );

        // 3. Resolve, keeping the original edges around if we need to re-check
        let (mapping, original) = if self.config.verify_invariants {
            let original = adjacency.clone();
            (kahns_resolve_order(adjacency)?, Some(original))
        } else {
            (kahns_resolve_order(adjacency)?, None)
        };

        // 4. Verify
        if let Some(original) = original {
            if !invariant_bijection(&mapping, item_count) {
                return Err(OrderingError::InvariantViolation {
                    invariant: "bijection",
                });
            }
            if !invariant_topological_order(&mapping, &original) {
                return Err(OrderingError::InvariantViolation {
                    invariant: "topological order",
                });
            }
        }

        Ok(mapping)
    }

    fn traverse<'a, S, P>(
        &self,
        items: &'a S,
        provider: &P,
    ) -> OrderingResult<TopologicalCursor<'a, S>>
    where
        S: ItemSequence + ?Sized,
        P: DependencyProvider + ?Sized,
    {
        let mapping = self.compute_order(items.item_count(), provider)?;
        Ok(TopologicalCursor::from_mapping(items, mapping))
    }
}
