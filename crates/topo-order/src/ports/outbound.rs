//! Outbound Ports (Driven Ports / SPI)
//!
//! Capabilities the caller hands to the engine: the item sequence to walk and
//! the dependency declarations between its positions.

use crate::domain::value_objects::{DeclaredIndex, Position};
use std::collections::{BTreeMap, HashMap, VecDeque};

/// Dependency declarations, keyed by position.
///
/// The engine calls [`DependencyProvider::dependencies`] exactly once for each
/// position in `0..item_count`, in ascending order, while a cursor is being
/// constructed. The answers are snapshotted into the adjacency closure; the
/// provider is never consulted again, so later changes to what it would
/// return have no effect on an existing cursor.
///
/// `None` and an empty vector both mean "no prerequisites".
pub trait DependencyProvider {
    /// Positions that must be visited before `position`.
    fn dependencies(&self, position: Position) -> Option<Vec<DeclaredIndex>>;
}

impl<F> DependencyProvider for F
where
    F: Fn(Position) -> Option<Vec<DeclaredIndex>>,
{
    fn dependencies(&self, position: Position) -> Option<Vec<DeclaredIndex>> {
        self(position)
    }
}

impl<S: std::hash::BuildHasher> DependencyProvider for HashMap<Position, Vec<DeclaredIndex>, S> {
    fn dependencies(&self, position: Position) -> Option<Vec<DeclaredIndex>> {
        self.get(&position).cloned()
    }
}

impl DependencyProvider for BTreeMap<Position, Vec<DeclaredIndex>> {
    fn dependencies(&self, position: Position) -> Option<Vec<DeclaredIndex>> {
        self.get(&position).cloned()
    }
}

/// Entry `i` holds the prerequisites of position `i`; a short slice leaves
/// the trailing positions without prerequisites.
impl DependencyProvider for [Vec<DeclaredIndex>] {
    fn dependencies(&self, position: Position) -> Option<Vec<DeclaredIndex>> {
        self.get(position).cloned()
    }
}

impl DependencyProvider for Vec<Vec<DeclaredIndex>> {
    fn dependencies(&self, position: Position) -> Option<Vec<DeclaredIndex>> {
        self.as_slice().dependencies(position)
    }
}

/// Ordered, fixed-length, random-access storage the engine indexes into.
///
/// The engine only ever reads through a shared borrow and never copies items.
pub trait ItemSequence {
    type Item;

    /// Number of items
    fn item_count(&self) -> usize;

    /// Item at `position`, or `None` when out of range
    fn item_at(&self, position: Position) -> Option<&Self::Item>;
}

impl<T> ItemSequence for [T] {
    type Item = T;

    fn item_count(&self) -> usize {
        self.len()
    }

    fn item_at(&self, position: Position) -> Option<&T> {
        self.get(position)
    }
}

impl<T, const N: usize> ItemSequence for [T; N] {
    type Item = T;

    fn item_count(&self) -> usize {
        N
    }

    fn item_at(&self, position: Position) -> Option<&T> {
        self.get(position)
    }
}

impl<T> ItemSequence for Vec<T> {
    type Item = T;

    fn item_count(&self) -> usize {
        self.len()
    }

    fn item_at(&self, position: Position) -> Option<&T> {
        self.get(position)
    }
}

impl<T> ItemSequence for VecDeque<T> {
    type Item = T;

    fn item_count(&self) -> usize {
        self.len()
    }

    fn item_at(&self, position: Position) -> Option<&T> {
        self.get(position)
    }
}
