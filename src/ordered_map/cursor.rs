//! Positions and cursors over an [`OrderedMap`](crate::OrderedMap).
//!
//! A [`Position`] is a plain value naming one place in a map's in-order
//! sequence: an entry, one past the last entry, or one before the first. It
//! does not borrow the map, so it can outlive mutations; it goes stale only
//! when the entry it names is erased.
//!
//! A [`Cursor`] pairs a position with a shared borrow of the map and walks it
//! in either direction. [`CursorMut`] borrows the map exclusively and can
//! edit values or remove the entry under it.

use core::fmt;

use crate::compare::Natural;
use crate::error::Error;
use crate::raw::{Handle, RawTree};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    At(Handle),
    PastEnd,
    BeforeBegin,
}

/// A place in a map's in-order sequence.
///
/// Two positions are equal when they name the same entry, or when both are
/// past-the-end, or when both are before-begin.
///
/// # Examples
///
/// ```
/// use ordered_bst::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// let (at_two, _) = map.insert(2, "b");
/// map.insert(1, "a");
///
/// assert_eq!(map[at_two], "b");
/// assert!(map.end().is_past_end());
/// assert_ne!(map.begin(), at_two);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Position {
    state: State,
    /// The maximum node at the time the position stepped past it.
    last: Option<Handle>,
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl Eq for Position {}

impl Position {
    pub(crate) const fn at(handle: Handle) -> Self {
        Self {
            state: State::At(handle),
            last: None,
        }
    }

    pub(crate) const fn past_end(last: Option<Handle>) -> Self {
        Self {
            state: State::PastEnd,
            last,
        }
    }

    pub(crate) const fn before_begin() -> Self {
        Self {
            state: State::BeforeBegin,
            last: None,
        }
    }

    /// Returns the position of `handle`, or past-the-end when there is none.
    pub(crate) fn at_or_past_end<K, V, C>(handle: Option<Handle>, tree: &RawTree<K, V, C>) -> Self {
        match handle {
            Some(handle) => Self::at(handle),
            None => Self::past_end(tree.last()),
        }
    }

    /// Returns `true` if this is the position one past the last entry.
    #[must_use]
    pub fn is_past_end(&self) -> bool {
        self.state == State::PastEnd
    }

    /// Returns `true` if this is the position one before the first entry.
    #[must_use]
    pub fn is_before_begin(&self) -> bool {
        self.state == State::BeforeBegin
    }

    /// Returns the node named by this position without checking that it is live.
    pub(crate) fn handle(&self) -> Option<Handle> {
        match self.state {
            State::At(handle) => Some(handle),
            State::PastEnd | State::BeforeBegin => None,
        }
    }

    /// Resolves the position to a live node of `tree`.
    pub(crate) fn resolve<K, V, C>(&self, tree: &RawTree<K, V, C>) -> Result<Handle, Error> {
        match self.state {
            State::At(handle) if tree.is_live(handle) => Ok(handle),
            State::At(_) => Err(Error::Stale),
            State::PastEnd => Err(Error::PastTheEnd),
            State::BeforeBegin => Err(Error::BeforeBegin),
        }
    }

    /// Steps to the in-order successor.
    ///
    /// Stepping from the maximum lands past-the-end and remembers the maximum.
    /// Past-the-end stays put. Before-begin moves to the minimum.
    pub(crate) fn advance<K, V, C>(&mut self, tree: &RawTree<K, V, C>) {
        *self = match self.state {
            State::At(handle) => match tree.successor(handle) {
                Some(next) => Self::at(next),
                None => Self::past_end(Some(handle)),
            },
            State::PastEnd => return,
            State::BeforeBegin => Self::at_or_past_end(tree.first(), tree),
        };
    }

    /// Steps to the in-order predecessor.
    ///
    /// Stepping back from past-the-end recovers the remembered maximum when it
    /// is still the maximum, and the current maximum otherwise. Stepping back
    /// from the minimum lands before-begin, which stays put.
    pub(crate) fn retreat<K, V, C>(&mut self, tree: &RawTree<K, V, C>) {
        *self = match self.state {
            State::At(handle) => match tree.predecessor(handle) {
                Some(prev) => Self::at(prev),
                None => Self::before_begin(),
            },
            State::PastEnd => {
                let anchor = self
                    .last
                    .filter(|&last| tree.is_live(last) && tree.successor(last).is_none())
                    .or_else(|| tree.last());
                match anchor {
                    Some(last) => Self::at(last),
                    None => Self::before_begin(),
                }
            }
            State::BeforeBegin => return,
        };
    }
}

/// A read-only cursor over an [`OrderedMap`](crate::OrderedMap).
///
/// Created by [`cursor_first`], [`cursor_end`], [`cursor_at`], [`find`] and
/// the bound queries.
///
/// # Examples
///
/// ```
/// use ordered_bst::OrderedMap;
///
/// let map = OrderedMap::from([(1, "a"), (2, "b"), (3, "c")]);
/// let mut cursor = map.cursor_end();
/// cursor.move_prev();
/// assert_eq!(cursor.key_value(), Some((&3, &"c")));
///
/// cursor.move_next();
/// assert!(cursor.is_past_end());
/// ```
///
/// [`cursor_first`]: crate::OrderedMap::cursor_first
/// [`cursor_end`]: crate::OrderedMap::cursor_end
/// [`cursor_at`]: crate::OrderedMap::cursor_at
/// [`find`]: crate::OrderedMap::find
pub struct Cursor<'a, K, V, C = Natural> {
    tree: &'a RawTree<K, V, C>,
    pos: Position,
}

impl<'a, K, V, C> Cursor<'a, K, V, C> {
    pub(crate) fn new(tree: &'a RawTree<K, V, C>, pos: Position) -> Self {
        Self { tree, pos }
    }

    /// Moves to the next entry in key order.
    pub fn move_next(&mut self) {
        self.pos.advance(self.tree);
    }

    /// Moves to the previous entry in key order.
    pub fn move_prev(&mut self) {
        self.pos.retreat(self.tree);
    }

    /// Returns the key under the cursor, or `None` at either boundary.
    #[must_use]
    pub fn key(&self) -> Option<&'a K> {
        self.key_value().map(|(k, _)| k)
    }

    /// Returns the value under the cursor, or `None` at either boundary.
    #[must_use]
    pub fn value(&self) -> Option<&'a V> {
        self.key_value().map(|(_, v)| v)
    }

    #[must_use]
    pub fn key_value(&self) -> Option<(&'a K, &'a V)> {
        self.pos.handle().map(|handle| self.tree.key_value(handle))
    }

    /// Returns the position under the cursor, detached from the borrow.
    #[must_use]
    pub fn position(&self) -> Position {
        self.pos
    }

    #[must_use]
    pub fn is_past_end(&self) -> bool {
        self.pos.is_past_end()
    }

    #[must_use]
    pub fn is_before_begin(&self) -> bool {
        self.pos.is_before_begin()
    }
}

impl<K, V, C> Clone for Cursor<'_, K, V, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, C> Copy for Cursor<'_, K, V, C> {}

impl<K, V, C> PartialEq for Cursor<'_, K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<K, V, C> Eq for Cursor<'_, K, V, C> {}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for Cursor<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.pos.state)
            .field("entry", &self.key_value())
            .finish()
    }
}

/// A cursor over an [`OrderedMap`](crate::OrderedMap) that can edit values and
/// remove entries.
///
/// # Examples
///
/// ```
/// use ordered_bst::OrderedMap;
///
/// let mut map = OrderedMap::from([(1, 10), (2, 20), (3, 30)]);
/// let mut cursor = map.find_mut(&2);
/// *cursor.value_mut().unwrap() += 1;
///
/// assert_eq!(cursor.remove_current(), Some((2, 21)));
/// assert_eq!(cursor.key(), Some(&3));
/// drop(cursor);
///
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [1, 3]);
/// ```
pub struct CursorMut<'a, K, V, C = Natural> {
    tree: &'a mut RawTree<K, V, C>,
    pos: Position,
}

impl<'a, K, V, C> CursorMut<'a, K, V, C> {
    pub(crate) fn new(tree: &'a mut RawTree<K, V, C>, pos: Position) -> Self {
        Self { tree, pos }
    }

    pub fn move_next(&mut self) {
        self.pos.advance(self.tree);
    }

    pub fn move_prev(&mut self) {
        self.pos.retreat(self.tree);
    }

    #[must_use]
    pub fn key(&self) -> Option<&K> {
        self.key_value().map(|(k, _)| k)
    }

    #[must_use]
    pub fn value(&self) -> Option<&V> {
        self.key_value().map(|(_, v)| v)
    }

    /// Returns the value under the cursor for in-place modification.
    pub fn value_mut(&mut self) -> Option<&mut V> {
        self.key_value_mut().map(|(_, v)| v)
    }

    #[must_use]
    pub fn key_value(&self) -> Option<(&K, &V)> {
        self.pos.handle().map(|handle| self.tree.key_value(handle))
    }

    /// Returns the entry under the cursor. Keys are never handed out mutably.
    pub fn key_value_mut(&mut self) -> Option<(&K, &mut V)> {
        let handle = self.pos.handle()?;
        Some(self.tree.key_value_mut(handle))
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.pos
    }

    #[must_use]
    pub fn is_past_end(&self) -> bool {
        self.pos.is_past_end()
    }

    #[must_use]
    pub fn is_before_begin(&self) -> bool {
        self.pos.is_before_begin()
    }

    /// Reborrows as a read-only cursor at the same position.
    #[must_use]
    pub fn as_cursor(&self) -> Cursor<'_, K, V, C> {
        Cursor::new(self.tree, self.pos)
    }

    /// Removes the entry under the cursor and moves to its successor.
    ///
    /// Returns `None` and does nothing at either boundary.
    ///
    /// # Complexity
    ///
    /// O(h) where h is the height of the tree.
    pub fn remove_current(&mut self) -> Option<(K, V)> {
        let handle = self.pos.handle()?;
        let next = self.tree.successor(handle);
        let entry = self.tree.erase(handle);
        self.pos = Position::at_or_past_end(next, self.tree);
        Some(entry)
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for CursorMut<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("position", &self.pos.state)
            .field("entry", &self.key_value())
            .finish()
    }
}
