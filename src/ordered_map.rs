use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ops::{Bound, Index, IndexMut, RangeBounds};
use core::ptr;

use crate::compare::{Compare, Natural};
use crate::error::Error;
use crate::raw::{Arena, Handle, Node, RawTree};

mod capacity;
mod cursor;
mod entry;

pub use cursor::{Cursor, CursorMut, Position};
pub use entry::{Entry, OccupiedEntry, VacantEntry};

/// Checks that the start bound does not come after the end bound under `comp`.
///
/// # Panics
///
/// Panics if `start > end`, or if `start` and `end` are equivalent and both
/// bounds are `Excluded`.
fn validate_range_bounds<T, R, C>(range: &R, comp: &C)
where
    T: ?Sized,
    R: RangeBounds<T>,
    C: Compare<T>,
{
    if let (Bound::Included(start) | Bound::Excluded(start), Bound::Included(end) | Bound::Excluded(end)) =
        (range.start_bound(), range.end_bound())
    {
        let valid =
            if matches!(range.start_bound(), Bound::Excluded(_)) && matches!(range.end_bound(), Bound::Excluded(_)) {
                comp.less(start, end)
            } else {
                !comp.less(end, start)
            };
        assert!(valid, "range start is greater than range end in OrderedMap");
    }
}

/// An ordered map backed by an unbalanced binary search tree.
///
/// Entries are kept in key order under a comparator chosen at construction.
/// [`OrderedMap::new`] orders keys by their [`Ord`] implementation; any
/// [`Compare`] implementation, closures included, can be supplied with
/// [`OrderedMap::with_comparator`]. Two keys the comparator orders neither way
/// are the same key: inserting the second is refused and leaves the stored
/// value alone.
///
/// Every entry occupies its own tree node. Nodes never move while they are in
/// the map, so a [`Position`] or [`Cursor`] naming one entry survives the
/// insertion or removal of any other entry.
///
/// The tree does not rebalance itself. Searches, insertions and removals take
/// time proportional to the height of the tree, which is logarithmic for keys
/// inserted in random order and linear for keys inserted in sorted order.
/// [`len`](OrderedMap::len) and the bound queries walk the entries in order
/// and take linear time.
///
/// It is a logic error for a key to be modified in such a way that its order
/// relative to any other key changes while it is in the map. The behavior
/// resulting from such a logic error is not specified, but will be
/// encapsulated to the `OrderedMap` that observed it and will not result in
/// undefined behavior.
///
/// # Examples
///
/// ```
/// use ordered_bst::OrderedMap;
///
/// let mut reviews = OrderedMap::new();
///
/// reviews.insert("Office Space", "Deals with real issues in the workplace.");
/// reviews.insert("Pulp Fiction", "Masterpiece.");
/// reviews.insert("The Godfather", "Very enjoyable.");
///
/// // An existing entry is never overwritten by `insert`.
/// let (_, inserted) = reviews.insert("Pulp Fiction", "Overrated.");
/// assert!(!inserted);
/// assert_eq!(reviews["Pulp Fiction"], "Masterpiece.");
///
/// if !reviews.contains_key("Les Misérables") {
///     println!("We've got {} reviews, but Les Misérables ain't one.", reviews.len());
/// }
///
/// reviews.remove("The Godfather");
///
/// for (movie, review) in &reviews {
///     println!("{movie}: \"{review}\"");
/// }
/// ```
///
/// A map can be walked in both directions with a cursor, starting from either
/// end:
///
/// ```
/// use ordered_bst::OrderedMap;
///
/// let map = OrderedMap::from([(3, 'c'), (1, 'a'), (2, 'b')]);
///
/// let mut cursor = map.cursor_end();
/// let mut backwards = Vec::new();
/// loop {
///     cursor.move_prev();
///     match cursor.value() {
///         Some(&v) => backwards.push(v),
///         None => break,
///     }
/// }
/// assert_eq!(backwards, ['c', 'b', 'a']);
/// assert!(cursor.is_before_begin());
/// ```
pub struct OrderedMap<K, V, C = Natural> {
    raw: RawTree<K, V, C>,
}

/// The front and back of an in-order walk; both ends are inclusive.
#[derive(Clone, Copy, Debug)]
struct Span {
    front: Option<Handle>,
    back: Option<Handle>,
}

impl Span {
    const EMPTY: Span = Span { front: None, back: None };

    fn next<K>(&mut self, nodes: &Arena<Node<K>>) -> Option<Handle> {
        let handle = self.front?;
        if self.front == self.back {
            *self = Span::EMPTY;
        } else {
            self.front = nodes.successor(handle);
        }
        Some(handle)
    }

    fn next_back<K>(&mut self, nodes: &Arena<Node<K>>) -> Option<Handle> {
        let handle = self.back?;
        if self.front == self.back {
            *self = Span::EMPTY;
        } else {
            self.back = nodes.predecessor(handle);
        }
        Some(handle)
    }
}

/// An iterator over the entries of an `OrderedMap`.
///
/// This `struct` is created by the [`iter`] method on [`OrderedMap`]. See its
/// documentation for more.
///
/// # Examples
///
/// ```
/// use ordered_bst::OrderedMap;
///
/// let map = OrderedMap::from([(1, "a"), (2, "b")]);
/// let mut iter = map.iter();
/// assert_eq!(iter.next(), Some((&1, &"a")));
/// assert_eq!(iter.next_back(), Some((&2, &"b")));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: OrderedMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    nodes: &'a Arena<Node<K>>,
    values: &'a Arena<V>,
    span: Span,
}

/// A mutable iterator over the entries of an `OrderedMap`.
///
/// This `struct` is created by the [`iter_mut`] method on [`OrderedMap`]. See its
/// documentation for more.
///
/// [`iter_mut`]: OrderedMap::iter_mut
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IterMut<'a, K: 'a, V: 'a> {
    nodes: &'a Arena<Node<K>>,
    values: *mut Arena<V>,
    span: Span,
    _marker: PhantomData<&'a mut V>,
}

// SAFETY: IterMut reads keys through a shared borrow and hands out each value
// mutably at most once, so it behaves like (&K, &mut V).
unsafe impl<K: Sync, V: Send> Send for IterMut<'_, K, V> {}
unsafe impl<K: Sync, V: Sync> Sync for IterMut<'_, K, V> {}

/// An owning iterator over the entries of an `OrderedMap`, sorted by key.
///
/// This `struct` is created by the [`into_iter`] method on [`OrderedMap`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: alloc::vec::IntoIter<(K, V)>,
}

/// An iterator over the keys of an `OrderedMap`.
///
/// This `struct` is created by the [`keys`] method on [`OrderedMap`].
///
/// [`keys`]: OrderedMap::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over the values of an `OrderedMap`.
///
/// This `struct` is created by the [`values`] method on [`OrderedMap`].
///
/// [`values`]: OrderedMap::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// A mutable iterator over the values of an `OrderedMap`.
///
/// This `struct` is created by the [`values_mut`] method on [`OrderedMap`].
///
/// [`values_mut`]: OrderedMap::values_mut
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ValuesMut<'a, K, V> {
    inner: IterMut<'a, K, V>,
}

/// An owning iterator over the keys of an `OrderedMap`.
///
/// This `struct` is created by the [`into_keys`] method on [`OrderedMap`].
///
/// [`into_keys`]: OrderedMap::into_keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoKeys<K, V> {
    inner: IntoIter<K, V>,
}

/// An owning iterator over the values of an `OrderedMap`.
///
/// This `struct` is created by the [`into_values`] method on [`OrderedMap`].
///
/// [`into_values`]: OrderedMap::into_values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoValues<K, V> {
    inner: IntoIter<K, V>,
}

/// An iterator over a sub-range of entries in an `OrderedMap`.
///
/// This `struct` is created by the [`range`] and [`between`] methods on
/// [`OrderedMap`].
///
/// [`range`]: OrderedMap::range
/// [`between`]: OrderedMap::between
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Range<'a, K: 'a, V: 'a> {
    inner: Iter<'a, K, V>,
}

impl<K, V> OrderedMap<K, V, Natural> {
    /// Makes a new, empty `OrderedMap` ordered by [`Ord`].
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    ///
    /// // entries can now be inserted into the empty map
    /// map.insert(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        OrderedMap {
            raw: RawTree::new(Natural),
        }
    }
}

impl<K, V, C> OrderedMap<K, V, C> {
    /// Makes a new, empty `OrderedMap` ordered by `comp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map = OrderedMap::with_comparator(|a: &&str, b: &&str| a.len() < b.len());
    /// map.insert("three", 3);
    /// map.insert("one", 1);
    /// map.insert("eleven", 11);
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), ["one", "three", "eleven"]);
    /// ```
    #[must_use]
    pub const fn with_comparator(comp: C) -> Self {
        OrderedMap {
            raw: RawTree::new(comp),
        }
    }

    /// Returns the comparator that orders the keys.
    #[must_use]
    pub fn key_comp(&self) -> &C {
        self.raw.comparator()
    }

    /// Returns the number of entries in the map.
    ///
    /// The count is not stored; it is recomputed on every call.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no entries.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Clears the map, removing all entries.
    ///
    /// Entries are destroyed in post-order: both subtrees of a node are gone
    /// before the node itself.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// a.insert(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the first key-value pair in the map.
    /// The key in this pair is the minimum key in the map.
    ///
    /// # Complexity
    ///
    /// O(h) where h is the height of the tree.
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.raw.first().map(|handle| self.raw.key_value(handle))
    }

    /// Returns the last key-value pair in the map.
    /// The key in this pair is the maximum key in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.last_key_value(), None);
    /// map.insert(1, "b");
    /// map.insert(2, "a");
    /// assert_eq!(map.last_key_value(), Some((&2, &"a")));
    /// ```
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.raw.last().map(|handle| self.raw.key_value(handle))
    }

    /// Removes and returns the first entry in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(map.pop_first(), Some((1, "a")));
    /// assert_eq!(map.pop_first(), Some((2, "b")));
    /// assert_eq!(map.pop_first(), None);
    /// ```
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let handle = self.raw.first()?;
        Some(self.raw.erase(handle))
    }

    /// Removes and returns the last entry in the map.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let handle = self.raw.last()?;
        Some(self.raw.erase(handle))
    }

    /// Returns the position of the first entry, or past-the-end if the map is empty.
    #[must_use]
    pub fn begin(&self) -> Position {
        Position::at_or_past_end(self.raw.first(), &self.raw)
    }

    /// Returns the position one past the last entry.
    #[must_use]
    pub fn end(&self) -> Position {
        Position::past_end(self.raw.last())
    }

    /// Returns a cursor at the first entry, or past-the-end if the map is empty.
    pub fn cursor_first(&self) -> Cursor<'_, K, V, C> {
        Cursor::new(&self.raw, self.begin())
    }

    /// Returns a cursor one past the last entry.
    ///
    /// Moving it back once lands on the maximum key.
    pub fn cursor_end(&self) -> Cursor<'_, K, V, C> {
        Cursor::new(&self.raw, self.end())
    }

    /// Returns a cursor at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` names an entry that has been removed.
    pub fn cursor_at(&self, position: Position) -> Cursor<'_, K, V, C> {
        self.check_live(position, "cursor_at");
        Cursor::new(&self.raw, position)
    }

    /// Returns a mutable cursor at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` names an entry that has been removed.
    pub fn cursor_at_mut(&mut self, position: Position) -> CursorMut<'_, K, V, C> {
        self.check_live(position, "cursor_at_mut");
        CursorMut::new(&mut self.raw, position)
    }

    fn check_live(&self, position: Position, operation: &str) {
        if let Err(Error::Stale) = position.resolve(&self.raw) {
            panic!("`OrderedMap::{operation}()` - {}", Error::Stale);
        }
    }

    /// Returns the entry at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PastTheEnd`] or [`Error::BeforeBegin`] for the boundary
    /// positions, and [`Error::Stale`] if the entry has been removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::{Error, OrderedMap};
    ///
    /// let mut map = OrderedMap::new();
    /// let (position, _) = map.insert("a", 1);
    /// assert_eq!(map.try_get_at(position), Ok((&"a", &1)));
    /// assert_eq!(map.try_get_at(map.end()), Err(Error::PastTheEnd));
    ///
    /// map.remove("a");
    /// assert_eq!(map.try_get_at(position), Err(Error::Stale));
    /// ```
    pub fn try_get_at(&self, position: Position) -> Result<(&K, &V), Error> {
        let handle = position.resolve(&self.raw)?;
        Ok(self.raw.key_value(handle))
    }

    /// Returns the entry at `position` with a mutable value.
    ///
    /// # Errors
    ///
    /// Fails as [`try_get_at`](Self::try_get_at) does.
    pub fn try_get_at_mut(&mut self, position: Position) -> Result<(&K, &mut V), Error> {
        let handle = position.resolve(&self.raw)?;
        Ok(self.raw.key_value_mut(handle))
    }

    /// Removes the entry at `position` and returns it.
    ///
    /// # Errors
    ///
    /// Fails as [`try_get_at`](Self::try_get_at) does; the map is unchanged.
    pub fn try_erase_at(&mut self, position: Position) -> Result<(K, V), Error> {
        let handle = position.resolve(&self.raw)?;
        Ok(self.raw.erase(handle))
    }

    /// Removes the entry at `position` and returns it.
    ///
    /// Positions of other entries stay valid.
    ///
    /// # Panics
    ///
    /// Panics if `position` is past-the-end, before-begin, or names an entry
    /// that has already been removed.
    ///
    /// # Complexity
    ///
    /// O(h) where h is the height of the tree.
    pub fn erase_at(&mut self, position: Position) -> (K, V) {
        match self.try_erase_at(position) {
            Ok(entry) => entry,
            Err(err) => panic!("`OrderedMap::erase_at()` - {err}"),
        }
    }

    /// Removes the entries from `first` up to, but not including, `last`, and
    /// returns how many were removed.
    ///
    /// # Panics
    ///
    /// Panics if either position names an entry that has been removed, if
    /// either is before-begin, or if `last` is not reachable from `first`. The
    /// map is left unchanged when this panics.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map: OrderedMap<_, _> = (1..=6).map(|k| (k, k * 10)).collect();
    /// let first = map.find(&2).position();
    /// let last = map.find(&5).position();
    ///
    /// assert_eq!(map.erase_range(first, last), 3);
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [1, 5, 6]);
    /// ```
    pub fn erase_range(&mut self, first: Position, last: Position) -> usize {
        let end = match last.resolve(&self.raw) {
            Ok(handle) => Some(handle),
            Err(Error::PastTheEnd) => None,
            Err(err) => panic!("`OrderedMap::erase_range()` - {err}"),
        };
        if first == last {
            return 0;
        }
        let front = match first.resolve(&self.raw) {
            Ok(handle) => handle,
            Err(err) => panic!("`OrderedMap::erase_range()` - {err}"),
        };

        // Nothing is removed unless `last` is reachable.
        let mut walk = Some(front);
        while walk != end {
            match walk {
                Some(handle) => walk = self.raw.successor(handle),
                None => panic!("`OrderedMap::erase_range()` - last position is not reachable from first"),
            }
        }

        let mut current = Some(front);
        let mut removed = 0;
        while let Some(handle) = current.filter(|&handle| Some(handle) != end) {
            current = self.raw.successor(handle);
            self.raw.erase(handle);
            removed += 1;
        }
        removed
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(3, "c");
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// for (key, value) in map.iter() {
    ///     println!("{key}: {value}");
    /// }
    ///
    /// let (first_key, first_value) = map.iter().next().unwrap();
    /// assert_eq!((*first_key, *first_value), (1, "a"));
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.iter_span(Span {
            front: self.raw.first(),
            back: self.raw.last(),
        })
    }

    fn iter_span(&self, span: Span) -> Iter<'_, K, V> {
        Iter {
            nodes: self.raw.nodes(),
            values: self.raw.values(),
            span,
        }
    }

    /// Gets a mutable iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    ///
    /// // add 10 to the value if the key isn't "a"
    /// for (key, value) in map.iter_mut() {
    ///     if key != &"a" {
    ///         *value += 10;
    ///     }
    /// }
    /// assert_eq!(map.values().copied().collect::<Vec<_>>(), [1, 12, 13]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        let span = Span {
            front: self.raw.first(),
            back: self.raw.last(),
        };
        let (nodes, values) = self.raw.split_mut();
        IterMut {
            nodes,
            values: ptr::from_mut(values),
            span,
            _marker: PhantomData,
        }
    }

    /// Gets an iterator over the keys of the map, in sorted order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the map, in order by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let map = OrderedMap::from([(2, "b"), (1, "hello")]);
    /// let values: Vec<&str> = map.values().cloned().collect();
    /// assert_eq!(values, ["hello", "b"]);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Gets a mutable iterator over the values of the map, in order by key.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut { inner: self.iter_mut() }
    }

    /// Creates a consuming iterator visiting all the keys, in sorted order.
    /// The map cannot be used after calling this.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys { inner: self.into_iter() }
    }

    /// Creates a consuming iterator visiting all the values, in order by key.
    /// The map cannot be used after calling this.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues { inner: self.into_iter() }
    }
}

impl<K, V, C> OrderedMap<K, V, C> {
    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, as long as the
    /// comparator orders the borrowed form the same way.
    ///
    /// # Complexity
    ///
    /// O(h) where h is the height of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.get_key_value(key).map(|(_, v)| v)
    }

    /// Returns the stored key and its value for the supplied key.
    ///
    /// The stored key may differ from `key` when the comparator treats the
    /// two as equivalent.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.raw.search(key).map(|handle| self.raw.key_value(handle))
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map[&1], "b");
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        let handle = self.raw.search(key)?;
        Some(self.raw.value_mut(handle))
    }

    /// Returns `true` if the map contains a value for the specified key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.raw.search(key).is_some()
    }

    /// Returns the number of entries with the given key: 0 or 1.
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        usize::from(self.contains_key(key))
    }

    /// Returns a cursor at the entry for `key`, or past-the-end if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let map = OrderedMap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(map.find(&2).value(), Some(&"b"));
    /// assert!(map.find(&3).is_past_end());
    /// assert_eq!(map.find(&3), map.cursor_end());
    /// ```
    pub fn find<Q>(&self, key: &Q) -> Cursor<'_, K, V, C>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        let position = Position::at_or_past_end(self.raw.search(key), &self.raw);
        Cursor::new(&self.raw, position)
    }

    /// Returns a mutable cursor at the entry for `key`, or past-the-end if
    /// there is none.
    pub fn find_mut<Q>(&mut self, key: &Q) -> CursorMut<'_, K, V, C>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        let position = Position::at_or_past_end(self.raw.search(key), &self.raw);
        CursorMut::new(&mut self.raw, position)
    }

    /// Removes a key from the map, returning the value at the key if the key
    /// was previously in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes a key from the map, returning the stored key and value if the
    /// key was previously in the map.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.raw.remove(key)
    }

    /// Removes a key from the map and returns how many entries were removed: 0 or 1.
    ///
    /// # Complexity
    ///
    /// O(h) where h is the height of the tree.
    pub fn erase<Q>(&mut self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        usize::from(self.raw.remove(key).is_some())
    }

    /// Returns a cursor at the first entry whose key is not ordered before
    /// `key`, or past-the-end if there is none.
    ///
    /// # Complexity
    ///
    /// O(n): the entries are scanned in order from the minimum.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let map = OrderedMap::from([(1, 'a'), (3, 'c'), (5, 'e')]);
    /// assert_eq!(map.lower_bound(&3).key(), Some(&3));
    /// assert_eq!(map.lower_bound(&4).key(), Some(&5));
    /// assert!(map.lower_bound(&6).is_past_end());
    /// ```
    pub fn lower_bound<Q>(&self, key: &Q) -> Cursor<'_, K, V, C>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        let position = Position::at_or_past_end(self.raw.lower_bound(key), &self.raw);
        Cursor::new(&self.raw, position)
    }

    /// Returns a cursor at the first entry whose key is ordered after `key`,
    /// or past-the-end if there is none.
    ///
    /// # Complexity
    ///
    /// O(n): the entries are scanned in order from the minimum.
    pub fn upper_bound<Q>(&self, key: &Q) -> Cursor<'_, K, V, C>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        let position = Position::at_or_past_end(self.raw.upper_bound(key), &self.raw);
        Cursor::new(&self.raw, position)
    }

    /// Returns the half-open range of entries whose keys are equivalent to
    /// `key`, as a pair of cursors.
    ///
    /// Keys are unique, so the range holds one entry or none. An empty range
    /// sits between the entries bracketing `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let map = OrderedMap::from([(1, ()), (3, ()), (5, ()), (7, ())]);
    ///
    /// let (first, last) = map.equal_range(&5);
    /// assert_eq!(first.key(), Some(&5));
    /// assert_eq!(last.key(), Some(&7));
    ///
    /// let (first, last) = map.equal_range(&4);
    /// assert_eq!(first, last);
    /// assert_eq!(first.key(), Some(&5));
    /// ```
    pub fn equal_range<Q>(&self, key: &Q) -> (Cursor<'_, K, V, C>, Cursor<'_, K, V, C>)
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        (self.lower_bound(key), self.upper_bound(key))
    }

    /// Constructs a double-ended iterator over a sub-range of entries in the map.
    /// The simplest way is to use the range syntax `min..max`, thus `range(min..max)` will
    /// yield entries from min (inclusive) to max (exclusive).
    /// The range may also be entered as `(Bound<T>, Bound<T>)`, so for example
    /// `range((Excluded(4), Included(10)))` will yield a left-exclusive, right-inclusive
    /// range from 4 to 10.
    ///
    /// # Panics
    ///
    /// Panics if range `start > end`.
    /// Panics if range `start == end` and both bounds are `Excluded`.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::ops::Bound::Included;
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(3, "a");
    /// map.insert(5, "b");
    /// map.insert(8, "c");
    /// for (&key, &value) in map.range((Included(&4), Included(&8))) {
    ///     println!("{key}: {value}");
    /// }
    /// assert_eq!(Some((&5, &"b")), map.range(4..).next());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n) to find the bounds; each iteration step is O(h).
    pub fn range<Q, R>(&self, range: R) -> Range<'_, K, V>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
        R: RangeBounds<Q>,
    {
        validate_range_bounds(&range, self.raw.comparator());

        let front = match range.start_bound() {
            Bound::Included(start) => self.raw.lower_bound(start),
            Bound::Excluded(start) => self.raw.upper_bound(start),
            Bound::Unbounded => self.raw.first(),
        };
        let end = match range.end_bound() {
            Bound::Included(end) => self.raw.upper_bound(end),
            Bound::Excluded(end) => self.raw.lower_bound(end),
            Bound::Unbounded => None,
        };

        // Validated bounds put `end` at or after `front`, so meeting it means empty.
        if front == end {
            return Range {
                inner: self.iter_span(Span::EMPTY),
            };
        }
        self.range_until(front, end)
    }

    /// Builds the iteration from `front` up to the exclusive `end`, where
    /// `None` means past-the-end.
    fn range_until(&self, front: Option<Handle>, end: Option<Handle>) -> Range<'_, K, V> {
        let back = match end {
            Some(end) => self.raw.predecessor(end),
            None => self.raw.last(),
        };
        let span = if front.is_some() && back.is_some() { Span { front, back } } else { Span::EMPTY };
        Range {
            inner: self.iter_span(span),
        }
    }
}

impl<K, V, C: Compare<K>> OrderedMap<K, V, C> {
    /// Inserts a key-value pair unless the map already holds an equivalent key.
    ///
    /// Returns the position of the entry for the key and whether it was newly
    /// inserted. An existing entry is left as it was and `value` is dropped;
    /// use [`entry`](Self::entry) or [`get_mut`](Self::get_mut) to replace it.
    ///
    /// # Complexity
    ///
    /// O(h) where h is the height of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// let (first, inserted) = map.insert(37, "a");
    /// assert!(inserted);
    ///
    /// let (again, inserted) = map.insert(37, "b");
    /// assert!(!inserted);
    /// assert_eq!(again, first);
    /// assert_eq!(map[&37], "a");
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> (Position, bool) {
        let (handle, inserted) = self.raw.insert(key, value);
        (Position::at(handle), inserted)
    }

    /// Like [`insert`](Self::insert), but reports allocation failure instead
    /// of aborting.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Alloc`] if room for the new entry cannot be reserved.
    /// The map is unchanged and fully usable in that case.
    pub fn try_insert(&mut self, key: K, value: V) -> Result<(Position, bool), Error> {
        match self.raw.locate(&key) {
            Ok(handle) => Ok((Position::at(handle), false)),
            Err(slot) => {
                let handle = self.raw.try_attach(slot, key, value)?;
                Ok((Position::at(handle), true))
            }
        }
    }

    /// Gets the given key's corresponding entry in the map for in-place manipulation.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut count: OrderedMap<&str, usize> = OrderedMap::new();
    ///
    /// // count the number of occurrences of letters in the vec
    /// for x in ["a", "b", "a", "c", "a", "b"] {
    ///     count.entry(x).and_modify(|curr| *curr += 1).or_insert(1);
    /// }
    ///
    /// assert_eq!(count["a"], 3);
    /// assert_eq!(count["b"], 2);
    /// assert_eq!(count["c"], 1);
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V, C> {
        match self.raw.locate(&key) {
            Ok(handle) => Entry::Occupied(OccupiedEntry {
                handle,
                tree: &mut self.raw,
            }),
            Err(slot) => Entry::Vacant(VacantEntry {
                key,
                slot,
                tree: &mut self.raw,
            }),
        }
    }

    /// Returns the value for `key`, first inserting `V::default()` if the key
    /// is absent.
    ///
    /// The map grows even if the caller only reads the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map: OrderedMap<&str, u32> = OrderedMap::new();
    /// assert_eq!(*map.get_or_insert_default("missing"), 0);
    /// assert_eq!(map.len(), 1);
    ///
    /// *map.get_or_insert_default("hits") += 1;
    /// *map.get_or_insert_default("hits") += 1;
    /// assert_eq!(map["hits"], 2);
    /// ```
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.entry(key).or_default()
    }

    /// Constructs a double-ended iterator over the entries from `first` up to,
    /// but not including, `last`.
    ///
    /// The iterator is empty if `first` is past-the-end, or if `last` names an
    /// entry ordered before `first`.
    ///
    /// # Panics
    ///
    /// Panics if either position names an entry that has been removed, or if
    /// either is before-begin. Both positions are checked even when the
    /// iterator would be empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let map: OrderedMap<_, _> = (1..=5).map(|k| (k, ())).collect();
    /// let first = map.lower_bound(&2).position();
    /// let last = map.upper_bound(&4).position();
    /// let keys: Vec<_> = map.between(first, last).map(|(k, _)| *k).collect();
    /// assert_eq!(keys, [2, 3, 4]);
    /// ```
    pub fn between(&self, first: Position, last: Position) -> Range<'_, K, V> {
        let end = match last.resolve(&self.raw) {
            Ok(handle) => Some(handle),
            Err(Error::PastTheEnd) => None,
            Err(err) => panic!("`OrderedMap::between()` - {err}"),
        };
        let front = match first.resolve(&self.raw) {
            Ok(handle) => handle,
            Err(Error::PastTheEnd) => {
                return Range {
                    inner: self.iter_span(Span::EMPTY),
                };
            }
            Err(err) => panic!("`OrderedMap::between()` - {err}"),
        };

        if let Some(end) = end {
            let comp = self.raw.comparator();
            if !comp.less(self.raw.node(front).key(), self.raw.node(end).key()) {
                return Range {
                    inner: self.iter_span(Span::EMPTY),
                };
            }
        }
        self.range_until(Some(front), end)
    }
}

impl<K: Clone, V: Clone, C: Clone> Clone for OrderedMap<K, V, C> {
    /// Copies every entry into an independent tree of the same shape.
    fn clone(&self) -> Self {
        OrderedMap { raw: self.raw.clone() }
    }
}

impl<K: Hash, V: Hash, C> Hash for OrderedMap<K, V, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (k, v) in self {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for OrderedMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<K: Eq, V: Eq, C> Eq for OrderedMap<K, V, C> {}

impl<K: PartialOrd, V: PartialOrd, C> PartialOrd for OrderedMap<K, V, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<K: Ord, V: Ord, C> Ord for OrderedMap<K, V, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for OrderedMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C: Default> Default for OrderedMap<K, V, C> {
    fn default() -> Self {
        OrderedMap::with_comparator(C::default())
    }
}

impl<K, V, C: Compare<K> + Default> FromIterator<(K, V)> for OrderedMap<K, V, C> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = OrderedMap::default();
        map.extend(iter);
        map
    }
}

impl<K, V, C: Compare<K>> Extend<(K, V)> for OrderedMap<K, V, C> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K: Copy, V: Copy, C: Compare<K>> Extend<(&'a K, &'a V)> for OrderedMap<K, V, C> {
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: T) {
        for (&k, &v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a OrderedMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K, V, C> IntoIterator for &'a mut OrderedMap<K, V, C> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> IterMut<'a, K, V> {
        self.iter_mut()
    }
}

impl<K, V, C> IntoIterator for OrderedMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let map = OrderedMap::from([(2, "b"), (1, "a")]);
    /// let mut iter = map.into_iter();
    /// assert_eq!(iter.next(), Some((1, "a")));
    /// assert_eq!(iter.next_back(), Some((2, "b")));
    /// ```
    fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.drain_in_order().into_iter(),
        }
    }
}

impl<K, Q, V, C> Index<&Q> for OrderedMap<K, V, C>
where
    K: Borrow<Q>,
    C: Compare<Q>,
    Q: ?Sized,
{
    type Output = V;

    /// Returns a reference to the value for `key`.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K, V, C> Index<Position> for OrderedMap<K, V, C> {
    type Output = V;

    /// Returns a reference to the value at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is past-the-end, before-begin, or stale.
    fn index(&self, position: Position) -> &V {
        match self.try_get_at(position) {
            Ok((_, value)) => value,
            Err(err) => panic!("`OrderedMap::index()` - {err}"),
        }
    }
}

impl<K, V, C> IndexMut<Position> for OrderedMap<K, V, C> {
    fn index_mut(&mut self, position: Position) -> &mut V {
        match self.try_get_at_mut(position) {
            Ok((_, value)) => value,
            Err(err) => panic!("`OrderedMap::index_mut()` - {err}"),
        }
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for OrderedMap<K, V, Natural> {
    /// Converts a `[(K, V); N]` into an `OrderedMap<K, V>`.
    ///
    /// If the array holds equivalent keys, the first one wins.
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let map = OrderedMap::from([(1, 2), (3, 4), (1, 5)]);
    /// assert_eq!(map[&1], 2);
    /// ```
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, K: 'a, V: 'a> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.span.next(self.nodes)?;
        Some(self.entry(handle))
    }
}

impl<'a, K: 'a, V: 'a> Iter<'a, K, V> {
    fn entry(&self, handle: Handle) -> (&'a K, &'a V) {
        let node = self.nodes.get(handle);
        (node.key(), self.values.get(node.value()))
    }
}

impl<'a, K: 'a, V: 'a> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let handle = self.span.next_back(self.nodes)?;
        Some(self.entry(handle))
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            nodes: self.nodes,
            values: self.values,
            span: self.span,
        }
    }
}

impl<'a, K: 'a, V: 'a> IterMut<'a, K, V> {
    fn entry(&mut self, handle: Handle) -> (&'a K, &'a mut V) {
        let node = self.nodes.get(handle);
        // SAFETY: `values` comes from the exclusive borrow taken in `iter_mut`
        // and lives for 'a. The span yields each node at most once and every
        // node owns a distinct value slot, so no two returned references alias.
        // Keys are read from the node arena, which is never written through.
        let value = unsafe { Arena::get_mut_ptr(self.values, node.value()) };
        (node.key(), value)
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.span.next(self.nodes)?;
        Some(self.entry(handle))
    }
}

impl<K, V> DoubleEndedIterator for IterMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let handle = self.span.next_back(self.nodes)?;
        Some(self.entry(handle))
    }
}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

impl<K, V> fmt::Debug for IterMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut").field("span", &self.span).finish()
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

impl<K, V> Default for IntoIter<K, V> {
    /// Creates an empty `ordered_map::IntoIter`.
    ///
    /// ```
    /// # use ordered_bst::ordered_map;
    /// let iter: ordered_map::IntoIter<u8, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IntoIter {
            inner: alloc::vec::Vec::new().into_iter(),
        }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }
}

impl<K, V> DoubleEndedIterator for ValuesMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> FusedIterator for ValuesMut<'_, K, V> {}

impl<K, V> fmt::Debug for ValuesMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValuesMut").field("span", &self.inner.span).finish()
    }
}

impl<K, V> Iterator for IntoKeys<K, V> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoKeys<K, V> {
    fn next_back(&mut self) -> Option<K> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for IntoKeys<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoKeys<K, V> {}

impl<K: fmt::Debug, V> fmt::Debug for IntoKeys<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.inner.as_slice().iter().map(|(k, _)| k)).finish()
    }
}

impl<K, V> Iterator for IntoValues<K, V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoValues<K, V> {
    fn next_back(&mut self) -> Option<V> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for IntoValues<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoValues<K, V> {}

impl<K, V: fmt::Debug> fmt::Debug for IntoValues<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.inner.as_slice().iter().map(|(_, v)| v)).finish()
    }
}

impl<'a, K, V> Iterator for Range<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<K, V> DoubleEndedIterator for Range<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> FusedIterator for Range<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Range<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Clone for Range<'_, K, V> {
    fn clone(&self) -> Self {
        Range {
            inner: self.inner.clone(),
        }
    }
}
