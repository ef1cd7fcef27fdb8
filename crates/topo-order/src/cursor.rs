//! Bidirectional cursor over a borrowed sequence in dependency order
//!
//! The order is computed once, when the cursor is built. After that every
//! operation is an O(1) move of a single rank in `[0, len]`.

use crate::application::service::OrderingService;
use crate::config::OrderingConfig;
use crate::domain::entities::IndexMapping;
use crate::domain::errors::{CursorError, CursorResult, OrderingError, OrderingResult};
use crate::domain::value_objects::{CursorOperation, Direction, Position, Rank};
use crate::ports::inbound::DependencyOrderingApi;
use crate::ports::outbound::{DependencyProvider, ItemSequence};
use std::fmt;
use std::iter::FusedIterator;

/// Dependency-ordered cursor over `items`.
///
/// Items are never copied; the cursor hands out `&'a` references into the
/// borrowed sequence in the order given by its [`IndexMapping`].
///
/// # Example
///
/// ```
/// use topo_order::TopologicalCursor;
///
/// let items = ["Foo", "Bar", "Baz"];
/// // "Foo" (0) depends on "Baz" (2)
/// let provider = |position: usize| (position == 0).then(|| vec![2isize]);
///
/// let cursor = TopologicalCursor::new(&items[..], &provider).unwrap();
/// let visited: Vec<_> = cursor.copied().collect();
/// assert_eq!(visited, vec!["Bar", "Baz", "Foo"]);
/// ```
pub struct TopologicalCursor<'a, S: ItemSequence + ?Sized> {
    items: &'a S,
    mapping: IndexMapping,
    next_rank: Rank,
}

impl<'a, S: ItemSequence + ?Sized> TopologicalCursor<'a, S> {
    /// Order `items` by the declarations of `provider`, using the default
    /// [`OrderingConfig`].
    pub fn new<P>(items: &'a S, provider: &P) -> OrderingResult<Self>
    where
        P: DependencyProvider + ?Sized,
    {
        OrderingService::new().traverse(items, provider)
    }

    /// Same as [`TopologicalCursor::new`] with an explicit configuration
    pub fn with_config<P>(
        items: &'a S,
        provider: &P,
        config: OrderingConfig,
    ) -> OrderingResult<Self>
    where
        P: DependencyProvider + ?Sized,
    {
        OrderingService::with_config(config).traverse(items, provider)
    }

    /// Accepts a possibly absent sequence.
    ///
    /// Fails with [`OrderingError::MissingItems`] on `None` without querying
    /// `provider`.
    pub fn from_optional<P>(items: Option<&'a S>, provider: &P) -> OrderingResult<Self>
    where
        P: DependencyProvider + ?Sized,
    {
        let items = items.ok_or(OrderingError::MissingItems)?;
        Self::new(items, provider)
    }

    /// Wrap an order that has already been resolved for `items`
    pub(crate) fn from_mapping(items: &'a S, mapping: IndexMapping) -> Self {
        debug_assert_eq!(items.item_count(), mapping.len());
        Self {
            items,
            mapping,
            next_rank: 0,
        }
    }

    /// Number of items in the traversal
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Rank of the element the next forward move returns
    pub fn rank(&self) -> Rank {
        self.next_rank
    }

    /// The resolved traversal order
    pub fn mapping(&self) -> &IndexMapping {
        &self.mapping
    }

    /// The borrowed sequence
    pub fn items(&self) -> &'a S {
        self.items
    }

    fn item_at_rank(&self, rank: Rank) -> Option<&'a S::Item> {
        let items = self.items;
        self.mapping
            .position_at(rank)
            .and_then(|position| items.item_at(position))
    }

    pub fn has_next(&self) -> bool {
        self.next_rank < self.len()
    }

    /// Return the next item in dependency order and advance.
    ///
    /// Fails with [`CursorError::NoMoreElements`] at the end; the cursor is
    /// left where it was.
    pub fn try_next(&mut self) -> CursorResult<&'a S::Item> {
        let exhausted = CursorError::NoMoreElements {
            direction: Direction::Forward,
        };
        if !self.has_next() {
            return Err(exhausted);
        }

        let item = self.item_at_rank(self.next_rank).ok_or(exhausted)?;
        self.next_rank += 1;
        Ok(item)
    }

    /// True iff `0 < rank < len`.
    ///
    /// Once the cursor has reached the end this is false, even though
    /// [`TopologicalCursor::previous_index`] still names the last position.
    pub fn has_previous(&self) -> bool {
        self.next_rank > 0 && self.next_rank < self.len()
    }

    /// Step back and return the item at the new rank.
    ///
    /// Fails with [`CursorError::NoMoreElements`] whenever
    /// [`TopologicalCursor::has_previous`] is false; the cursor is left where
    /// it was.
    pub fn try_previous(&mut self) -> CursorResult<&'a S::Item> {
        let exhausted = CursorError::NoMoreElements {
            direction: Direction::Backward,
        };
        if !self.has_previous() {
            return Err(exhausted);
        }

        let item = self.item_at_rank(self.next_rank - 1).ok_or(exhausted)?;
        self.next_rank -= 1;
        Ok(item)
    }

    /// Original position the next forward move returns, or `len` at the end.
    ///
    /// This is a position in the borrowed sequence, not a rank.
    pub fn next_index(&self) -> Position {
        self.mapping
            .position_at(self.next_rank)
            .unwrap_or_else(|| self.len())
    }

    /// Original position of the element before the cursor, or `-1` at the start
    pub fn previous_index(&self) -> isize {
        self.next_rank
            .checked_sub(1)
            .and_then(|rank| self.mapping.position_at(rank))
            // Positions index a live sequence, so they fit in isize
            .map_or(-1, |position| position as isize)
    }

    /// Always fails: the traversal cannot remove items
    pub fn remove(&mut self) -> CursorResult<()> {
        Err(CursorError::Unsupported {
            operation: CursorOperation::Remove,
        })
    }

    /// Always fails: the traversal cannot replace items
    pub fn set(&mut self, _item: S::Item) -> CursorResult<()> {
        Err(CursorError::Unsupported {
            operation: CursorOperation::Set,
        })
    }

    /// Always fails: the traversal cannot insert items
    pub fn add(&mut self, _item: S::Item) -> CursorResult<()> {
        Err(CursorError::Unsupported {
            operation: CursorOperation::Add,
        })
    }
}

impl<'a, S: ItemSequence + ?Sized> Iterator for TopologicalCursor<'a, S> {
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len() - self.next_rank;
        (remaining, Some(remaining))
    }
}

impl<S: ItemSequence + ?Sized> ExactSizeIterator for TopologicalCursor<'_, S> {}

impl<S: ItemSequence + ?Sized> FusedIterator for TopologicalCursor<'_, S> {}

impl<S: ItemSequence + ?Sized> Clone for TopologicalCursor<'_, S> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            mapping: self.mapping.clone(),
            next_rank: self.next_rank,
        }
    }
}

impl<S: ItemSequence + ?Sized> fmt::Debug for TopologicalCursor<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TopologicalCursor")
            .field("mapping", &self.mapping.as_slice())
            .field("next_rank", &self.next_rank)
            .finish()
    }
}
