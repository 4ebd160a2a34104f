//! Key comparators.
//!
//! An [`OrderedMap`](crate::OrderedMap) orders its keys with a [`Compare`]
//! implementation chosen at construction. Two keys are *equivalent* when
//! neither is less than the other; a map never holds two equivalent keys.

/// A strict weak ordering over `T`.
///
/// Implementations must be irreflexive (`less(a, a)` is `false`), transitive,
/// and consistent for the lifetime of any map using them. Violating this is a
/// logic error: the map stays memory safe but may return wrong results.
///
/// Any `Fn(&T, &T) -> bool` closure is a comparator:
///
/// ```
/// use ordered_bst::OrderedMap;
///
/// let mut map = OrderedMap::with_comparator(|a: &i32, b: &i32| a.abs() < b.abs());
/// map.insert(-3, "minus three");
/// map.insert(1, "one");
/// let (_, inserted) = map.insert(3, "three");
///
/// // 3 and -3 are equivalent under this ordering.
/// assert!(!inserted);
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [1, -3]);
/// ```
pub trait Compare<T: ?Sized> {
    /// Returns `true` if `a` is ordered strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool;

    /// Returns `true` if neither key is ordered before the other.
    fn equivalent(&self, a: &T, b: &T) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

/// The natural ordering of a type, as given by [`Ord`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Natural;

impl<T: ?Sized + Ord> Compare<T> for Natural {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Reverses the ordering of another comparator.
///
/// ```
/// use ordered_bst::{Natural, OrderedMap, Reverse};
///
/// let mut map = OrderedMap::with_comparator(Reverse(Natural));
/// map.extend([(1, 'a'), (3, 'c'), (2, 'b')]);
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [3, 2, 1]);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Reverse<C = Natural>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reverse<C> {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self.0.less(b, a)
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
