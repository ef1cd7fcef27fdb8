//! Error types for dependency-ordered traversal
//!
//! Construction failures and traversal failures are kept apart: the former
//! abort building a cursor, the latter are boundary conditions a caller can
//! avoid by checking `has_next` / `has_previous` first.

use super::value_objects::{CursorOperation, DeclaredIndex, Direction, Position};
use thiserror::Error;

/// Result type for ordering construction
pub type OrderingResult<T> = Result<T, OrderingError>;

/// Result type for cursor movement
pub type CursorResult<T> = Result<T, CursorError>;

/// All errors that can occur while computing a dependency order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderingError {
    /// No item sequence was supplied
    #[error("Item sequence is missing")]
    MissingItems,

    /// A declared prerequisite lies outside `[0, item_count)`
    #[error(
        "Unsatisfied dependency: position {position} depends on {dependency}, \
         outside 0..{item_count}"
    )]
    UnsatisfiedDependency {
        position: Position,
        dependency: DeclaredIndex,
        item_count: usize,
    },

    /// No total order exists for the declared dependencies
    #[error("Circular dependency among positions {unresolved:?}")]
    CircularDependency { unresolved: Vec<Position> },

    /// Item count exceeds the configured cap
    #[error("Too many items: {count} > {max}")]
    TooManyItems { count: usize, max: usize },

    /// Post-resolution self-check failed
    #[error("Ordering invariant violated: {invariant}")]
    InvariantViolation { invariant: &'static str },
}

/// Errors raised by cursor operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CursorError {
    /// Movement requested past a boundary
    #[error("No more elements ({direction})")]
    NoMoreElements { direction: Direction },

    /// Structural mutation through the cursor
    #[error("Operation not supported: {operation}")]
    Unsupported { operation: CursorOperation },
}
