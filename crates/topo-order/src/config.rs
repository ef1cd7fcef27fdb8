//! Configuration for dependency-ordered traversal

use serde::{Deserialize, Serialize};

/// Ordering configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderingConfig {
    /// Upper bound on the number of items (the closure is N×N). `None` is unbounded.
    pub max_items: Option<usize>,
    /// Re-check bijection and topological order after every resolution
    pub verify_invariants: bool,
}

impl OrderingConfig {
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }

    pub fn with_verify_invariants(mut self, verify: bool) -> Self {
        self.verify_invariants = verify;
        self
    }
}
