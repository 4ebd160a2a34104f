use super::OrderedMap;
use crate::compare::Natural;
use crate::error::Error;
use crate::raw::RawTree;

impl<K, V> OrderedMap<K, V, Natural> {
    /// Creates an empty map with room for at least `capacity` entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let map: OrderedMap<i32, i32> = OrderedMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<K, V, C> OrderedMap<K, V, C> {
    /// Creates an empty map ordered by `comp` with room for at least
    /// `capacity` entries.
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, comp: C) -> Self {
        OrderedMap {
            raw: RawTree::with_capacity(capacity, comp),
        }
    }

    /// Returns the number of entries the map can hold without reallocating.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Reserves room for at least `additional` more entries.
    ///
    /// Slots freed by earlier removals count toward the reservation.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    pub fn reserve(&mut self, additional: usize) {
        self.raw.reserve(additional);
    }

    /// Tries to reserve room for at least `additional` more entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Alloc`] if the allocator reports a failure or the
    /// capacity would overflow. The map is unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map: OrderedMap<u8, u8> = OrderedMap::new();
    /// map.try_reserve(10).expect("reservation failed");
    /// assert!(map.capacity() >= 10);
    /// assert!(map.try_reserve(usize::MAX).is_err());
    /// ```
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), Error> {
        Ok(self.raw.try_reserve(additional)?)
    }
}
