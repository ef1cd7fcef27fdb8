//! Core entities for dependency-ordered traversal

use super::value_objects::{Position, Rank};
use serde::{Deserialize, Serialize};

/// Dense prerequisite closure over `size` positions.
///
/// `has_edge(i, j)` is true iff position `i` depends on position `j`, i.e. `j`
/// must be visited before `i`. Stored row-major in a single `Vec<bool>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    size: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// Create an edgeless matrix over `size` positions
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Number of positions
    pub fn size(&self) -> usize {
        self.size
    }

    fn cell(&self, dependent: Position, prerequisite: Position) -> usize {
        debug_assert!(dependent < self.size && prerequisite < self.size);
        dependent * self.size + prerequisite
    }

    /// Record that `dependent` depends on `prerequisite`.
    ///
    /// Recording the same edge twice is a no-op.
    pub fn add_edge(&mut self, dependent: Position, prerequisite: Position) {
        let cell = self.cell(dependent, prerequisite);
        self.cells[cell] = true;
    }

    /// Check if `dependent` depends on `prerequisite`
    pub fn has_edge(&self, dependent: Position, prerequisite: Position) -> bool {
        self.cells[self.cell(dependent, prerequisite)]
    }

    /// Check if `position` still has any outstanding prerequisite
    pub fn has_prerequisites(&self, position: Position) -> bool {
        let start = position * self.size;
        self.cells[start..start + self.size].iter().any(|&edge| edge)
    }

    /// Prerequisites of `position`, ascending
    pub fn prerequisites(&self, position: Position) -> impl Iterator<Item = Position> + '_ {
        let start = position * self.size;
        self.cells[start..start + self.size]
            .iter()
            .enumerate()
            .filter(|(_, &edge)| edge)
            .map(|(prerequisite, _)| prerequisite)
    }

    /// Remove `position` as a pending prerequisite of every other position
    pub fn clear_incoming(&mut self, position: Position) {
        for dependent in 0..self.size {
            let cell = self.cell(dependent, position);
            self.cells[cell] = false;
        }
    }

    /// Number of recorded edges
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|&&edge| edge).count()
    }
}

/// Traversal order: `position_at(k)` is the original position visited at rank `k`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexMapping {
    positions: Vec<Position>,
}

impl IndexMapping {
    /// Wrap an already computed order.
    ///
    /// No validation happens here; see [`crate::domain::invariants`].
    pub fn new(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    /// The order that visits every position where it already is
    pub fn identity(len: usize) -> Self {
        Self::new((0..len).collect())
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Original position visited at `rank`
    pub fn position_at(&self, rank: Rank) -> Option<Position> {
        self.positions.get(rank).copied()
    }

    /// Rank at which `position` is visited
    pub fn rank_of(&self, position: Position) -> Option<Rank> {
        self.positions.iter().position(|&p| p == position)
    }

    /// Positions in traversal order
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions.iter().copied()
    }

    pub fn as_slice(&self) -> &[Position] {
        &self.positions
    }
}

impl From<IndexMapping> for Vec<Position> {
    fn from(mapping: IndexMapping) -> Self {
        mapping.positions
    }
}
