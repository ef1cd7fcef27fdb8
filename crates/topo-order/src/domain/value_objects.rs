//! Value objects for dependency-ordered traversal
//!
//! Positions and ranks are both plain indices; the aliases exist so that
//! signatures say which of the two they mean.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Zero-based index into the original, unmodified item sequence.
pub type Position = usize;

/// Zero-based index into the computed traversal order.
pub type Rank = usize;

/// A prerequisite index as declared by a dependency provider.
///
/// Signed so that malformed (negative) declarations can be expressed and
/// rejected at construction instead of being unrepresentable.
pub type DeclaredIndex = isize;

/// Direction of cursor movement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Towards higher ranks (`next`)
    Forward,
    /// Towards lower ranks (`previous`)
    Backward,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Backward => write!(f, "backward"),
        }
    }
}

/// Structural mutations a cursor refuses to perform
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CursorOperation {
    /// Remove the element last returned
    Remove,
    /// Replace the element last returned
    Set,
    /// Insert a new element at the cursor
    Add,
}

impl fmt::Display for CursorOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CursorOperation::Remove => write!(f, "remove"),
            CursorOperation::Set => write!(f, "set"),
            CursorOperation::Add => write!(f, "add"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Forward.to_string(), "forward");
        assert_eq!(Direction::Backward.to_string(), "backward");
    }

    #[test]
    fn test_cursor_operation_display() {
        assert_eq!(CursorOperation::Remove.to_string(), "remove");
        assert_eq!(CursorOperation::Set.to_string(), "set");
        assert_eq!(CursorOperation::Add.to_string(), "add");
    }
}
