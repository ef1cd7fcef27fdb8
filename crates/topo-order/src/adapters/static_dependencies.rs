//! In-memory dependency declarations
//!
//! Implements `DependencyProvider` for callers that know every declaration
//! up front and just want to register them by position.

use crate::domain::value_objects::{DeclaredIndex, Position};
use crate::ports::outbound::DependencyProvider;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Dependency declarations registered by position.
///
/// Positions never registered have no prerequisites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticDependencies {
    declarations: BTreeMap<Position, Vec<DeclaredIndex>>,
}

impl StaticDependencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the prerequisites of `position`, replacing any earlier
    /// registration. `None` drops the registration.
    pub fn add_dependencies(
        &mut self,
        position: Position,
        dependencies: Option<Vec<DeclaredIndex>>,
    ) {
        match dependencies {
            Some(dependencies) => {
                self.declarations.insert(position, dependencies);
            }
            None => {
                self.declarations.remove(&position);
            }
        }
    }

    /// Chaining form of [`StaticDependencies::add_dependencies`]
    pub fn with_dependencies(
        mut self,
        position: Position,
        dependencies: impl IntoIterator<Item = DeclaredIndex>,
    ) -> Self {
        self.add_dependencies(position, Some(dependencies.into_iter().collect()));
        self
    }

    /// Number of positions with a registration
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl DependencyProvider for StaticDependencies {
    fn dependencies(&self, position: Position) -> Option<Vec<DeclaredIndex>> {
        self.declarations.get(&position).cloned()
    }
}

/// Provider that declares nothing; traversal follows the original order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDependencies;

impl DependencyProvider for NoDependencies {
    fn dependencies(&self, _position: Position) -> Option<Vec<DeclaredIndex>> {
        None
    }
}
