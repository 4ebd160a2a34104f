use std::cell::RefCell;
use std::collections::BTreeMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use ordered_bst::ordered_map::{self, Entry};
use ordered_bst::{Error, Natural, OrderedMap, Reverse};

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

/// Generates keys from a range small enough to cause collisions.
fn key_strategy() -> impl Strategy<Value = i64> {
    -1_000i64..1_000i64
}

fn value_strategy() -> impl Strategy<Value = i64> {
    any::<i64>()
}

fn entries_strategy() -> impl Strategy<Value = Vec<(i64, i64)>> {
    proptest::collection::vec((key_strategy(), value_strategy()), 0..TEST_SIZE)
}

/// Builds the oracle for a sequence of insertions; an existing key keeps its value.
fn oracle(entries: &[(i64, i64)]) -> BTreeMap<i64, i64> {
    let mut bt_map = BTreeMap::new();
    for &(k, v) in entries {
        bt_map.entry(k).or_insert(v);
    }
    bt_map
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum MapOp {
    Insert(i64, i64),
    Remove(i64),
    Erase(i64),
    Get(i64),
    ContainsKey(i64),
    Count(i64),
    FirstKeyValue,
    LastKeyValue,
    PopFirst,
    PopLast,
    Len,
}

fn map_op_strategy() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        5 => (key_strategy(), value_strategy()).prop_map(|(k, v)| MapOp::Insert(k, v)),
        3 => key_strategy().prop_map(MapOp::Remove),
        1 => key_strategy().prop_map(MapOp::Erase),
        2 => key_strategy().prop_map(MapOp::Get),
        1 => key_strategy().prop_map(MapOp::ContainsKey),
        1 => key_strategy().prop_map(MapOp::Count),
        1 => Just(MapOp::FirstKeyValue),
        1 => Just(MapOp::LastKeyValue),
        1 => Just(MapOp::PopFirst),
        1 => Just(MapOp::PopLast),
        1 => Just(MapOp::Len),
    ]
}

// ─── Core CRUD operations ────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random sequence of operations on both OrderedMap and BTreeMap
    /// and asserts identical results at every step.
    #[test]
    fn map_ops_match_btreemap(ops in proptest::collection::vec(map_op_strategy(), TEST_SIZE)) {
        let mut map: OrderedMap<i64, i64> = OrderedMap::new();
        let mut bt_map: BTreeMap<i64, i64> = BTreeMap::new();

        for op in &ops {
            match op {
                MapOp::Insert(k, v) => {
                    let (position, inserted) = map.insert(*k, *v);
                    let bt_inserted = !bt_map.contains_key(k);
                    let bt_value = *bt_map.entry(*k).or_insert(*v);
                    prop_assert_eq!(inserted, bt_inserted, "insert({}, {})", k, v);
                    prop_assert_eq!(map.try_get_at(position), Ok((k, &bt_value)));
                }
                MapOp::Remove(k) => {
                    prop_assert_eq!(map.remove(k), bt_map.remove(k), "remove({})", k);
                }
                MapOp::Erase(k) => {
                    let expected = usize::from(bt_map.remove(k).is_some());
                    prop_assert_eq!(map.erase(k), expected, "erase({})", k);
                }
                MapOp::Get(k) => {
                    prop_assert_eq!(map.get(k), bt_map.get(k), "get({})", k);
                }
                MapOp::ContainsKey(k) => {
                    prop_assert_eq!(map.contains_key(k), bt_map.contains_key(k), "contains_key({})", k);
                }
                MapOp::Count(k) => {
                    prop_assert_eq!(map.count(k), usize::from(bt_map.contains_key(k)), "count({})", k);
                }
                MapOp::FirstKeyValue => {
                    prop_assert_eq!(map.first_key_value(), bt_map.first_key_value());
                }
                MapOp::LastKeyValue => {
                    prop_assert_eq!(map.last_key_value(), bt_map.last_key_value());
                }
                MapOp::PopFirst => {
                    prop_assert_eq!(map.pop_first(), bt_map.pop_first());
                }
                MapOp::PopLast => {
                    prop_assert_eq!(map.pop_last(), bt_map.pop_last());
                }
                MapOp::Len => {
                    prop_assert_eq!(map.len(), bt_map.len());
                    prop_assert_eq!(map.is_empty(), bt_map.is_empty());
                }
            }
        }

        prop_assert!(map.iter().eq(bt_map.iter()));
    }

    /// Iteration in both directions yields keys in strictly increasing order.
    #[test]
    fn iter_matches_btreemap(entries in entries_strategy()) {
        let map: OrderedMap<i64, i64> = entries.iter().copied().collect();
        let bt_map = oracle(&entries);

        prop_assert!(map.iter().eq(bt_map.iter()));
        prop_assert!(map.iter().rev().eq(bt_map.iter().rev()));
        prop_assert!(map.keys().eq(bt_map.keys()));
        prop_assert!(map.values().eq(bt_map.values()));
        prop_assert!(map.keys().zip(map.keys().skip(1)).all(|(a, b)| a < b));
        prop_assert_eq!(map.len(), bt_map.len());
    }

    /// Alternating next and next_back meet in the middle without repeating an entry.
    #[test]
    fn iter_double_ended_meets_in_middle(entries in entries_strategy(), pattern in any::<u64>()) {
        let map: OrderedMap<i64, i64> = entries.iter().copied().collect();
        let bt_map = oracle(&entries);

        let mut iter = map.iter();
        let mut bt_iter = bt_map.iter();
        for step in 0.. {
            let (got, expected) = if pattern.rotate_left(step % 64) & 1 == 0 {
                (iter.next(), bt_iter.next())
            } else {
                (iter.next_back(), bt_iter.next_back())
            };
            prop_assert_eq!(got, expected);
            if got.is_none() {
                break;
            }
        }
        prop_assert_eq!(iter.next(), None);
        prop_assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn into_iter_matches_btreemap(entries in entries_strategy()) {
        let map: OrderedMap<i64, i64> = entries.iter().copied().collect();
        let bt_map = oracle(&entries);

        prop_assert!(map.clone().into_iter().eq(bt_map.clone()));
        prop_assert!(map.clone().into_keys().rev().eq(bt_map.clone().into_keys().rev()));
        prop_assert!(map.into_values().eq(bt_map.into_values()));
    }

    #[test]
    fn iter_mut_and_values_mut_update_in_place(entries in entries_strategy()) {
        let mut map: OrderedMap<i64, i64> = entries.iter().copied().collect();
        let mut bt_map = oracle(&entries);

        for ((k, v), (bt_k, bt_v)) in map.iter_mut().zip(bt_map.iter_mut()) {
            prop_assert_eq!(k, bt_k);
            *v = v.wrapping_add(*k);
            *bt_v = bt_v.wrapping_add(*bt_k);
        }
        for v in map.values_mut().rev() {
            *v = v.wrapping_mul(3);
        }
        for v in bt_map.values_mut() {
            *v = v.wrapping_mul(3);
        }

        prop_assert!(map.iter().eq(bt_map.iter()));
    }

    /// Inserting distinct keys and erasing all of them in any order leaves an empty map.
    #[test]
    fn erase_all_in_any_order_empties_map(
        (keys, erase_order) in proptest::collection::btree_set(key_strategy(), 0..TEST_SIZE)
            .prop_map(|s| s.into_iter().collect::<Vec<_>>())
            .prop_shuffle()
            .prop_flat_map(|keys| (Just(keys.clone()), Just(keys).prop_shuffle())),
    ) {
        let mut map = OrderedMap::new();
        for &k in &keys {
            prop_assert!(map.insert(k, k).1);
        }
        prop_assert_eq!(map.len(), keys.len());

        let mut remaining = keys.len();
        for k in &erase_order {
            prop_assert_eq!(map.erase(k), 1);
            prop_assert_eq!(map.erase(k), 0);
            remaining -= 1;
            prop_assert_eq!(map.len(), remaining);
        }
        prop_assert!(map.is_empty());
        prop_assert_eq!(map.len(), 0);
    }

    #[test]
    fn get_mut_matches_btreemap(
        entries in entries_strategy(),
        lookups in proptest::collection::vec(key_strategy(), 0..200),
    ) {
        let mut map: OrderedMap<i64, i64> = entries.iter().copied().collect();
        let mut bt_map = oracle(&entries);

        for k in &lookups {
            if let Some(v) = map.get_mut(k) {
                *v = v.wrapping_neg();
            }
            if let Some(v) = bt_map.get_mut(k) {
                *v = v.wrapping_neg();
            }
        }
        prop_assert!(map.iter().eq(bt_map.iter()));
    }

    #[test]
    fn clear_empties_map(entries in entries_strategy()) {
        let mut map: OrderedMap<i64, i64> = entries.iter().copied().collect();
        map.clear();
        prop_assert!(map.is_empty());
        prop_assert_eq!(map.len(), 0);
        prop_assert_eq!(map.iter().next(), None);

        map.extend(entries.iter().copied());
        prop_assert!(map.iter().eq(oracle(&entries).iter()));
    }

    #[test]
    fn try_insert_matches_insert(entries in entries_strategy()) {
        let mut map = OrderedMap::new();
        let mut bt_map = BTreeMap::new();
        for &(k, v) in &entries {
            let (_, inserted) = map.try_insert(k, v).unwrap();
            prop_assert_eq!(inserted, !bt_map.contains_key(&k));
            bt_map.entry(k).or_insert(v);
        }
        prop_assert!(map.iter().eq(bt_map.iter()));
    }
}

// ─── Entry API and bracket access ────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn entry_api_matches_btreemap(keys in proptest::collection::vec(key_strategy(), 0..TEST_SIZE)) {
        let mut map: OrderedMap<i64, usize> = OrderedMap::new();
        let mut bt_map: BTreeMap<i64, usize> = BTreeMap::new();

        for k in &keys {
            map.entry(*k).and_modify(|v| *v += 1).or_insert(1);
            bt_map.entry(*k).and_modify(|v| *v += 1).or_insert(1);
        }
        prop_assert!(map.iter().eq(bt_map.iter()));
    }

    #[test]
    fn occupied_entry_replaces_and_removes(entries in entries_strategy(), k in key_strategy(), v in value_strategy()) {
        let mut map: OrderedMap<i64, i64> = entries.iter().copied().collect();
        let mut bt_map = oracle(&entries);

        match map.entry(k) {
            Entry::Occupied(mut o) => {
                prop_assert_eq!(o.key(), &k);
                let old = o.insert(v);
                prop_assert_eq!(Some(old), bt_map.insert(k, v));
                prop_assert_eq!(o.remove_entry(), (k, v));
                bt_map.remove(&k);
            }
            Entry::Vacant(vacant) => {
                prop_assert!(!bt_map.contains_key(&k));
                prop_assert_eq!(vacant.key(), &k);
                prop_assert_eq!(*vacant.insert(v), v);
                bt_map.insert(k, v);
            }
        }
        prop_assert!(map.iter().eq(bt_map.iter()));
    }

    /// Bracket access on an absent key grows the map by one default value.
    #[test]
    fn get_or_insert_default_grows_map(entries in entries_strategy(), k in key_strategy()) {
        let mut map: OrderedMap<i64, i64> = entries.iter().copied().collect();
        let bt_map = oracle(&entries);
        let before = map.len();

        let value = *map.get_or_insert_default(k);
        if let Some(expected) = bt_map.get(&k) {
            prop_assert_eq!(value, *expected);
            prop_assert_eq!(map.len(), before);
        } else {
            prop_assert_eq!(value, 0);
            prop_assert_eq!(map.len(), before + 1);
        }
    }
}

#[test]
fn entry_or_insert_variants() {
    let mut map: OrderedMap<&str, usize> = OrderedMap::new();
    assert_eq!(*map.entry("a").or_insert_with(|| 3), 3);
    assert_eq!(*map.entry("bb").or_insert_with_key(|k| k.len()), 2);
    assert_eq!(*map.entry("a").or_insert_with(|| unreachable!()), 3);
    assert_eq!(*map.entry("ccc").or_default(), 0);

    if let Entry::Occupied(o) = map.entry("bb") {
        assert_eq!(o.remove(), 2);
    }
    if let Entry::Vacant(v) = map.entry("dd") {
        assert_eq!(v.into_key(), "dd");
    }
    assert_eq!(map.iter().collect::<Vec<_>>(), [(&"a", &3), (&"ccc", &0)]);
}

#[test]
fn occupied_entry_into_mut_outlives_entry() {
    let mut map = OrderedMap::from([(1, String::from("a"))]);
    let value = match map.entry(1) {
        Entry::Occupied(o) => o.into_mut(),
        Entry::Vacant(_) => unreachable!(),
    };
    value.push('b');
    assert_eq!(map[&1], "ab");
}

// ─── Construction, comparison and hashing ────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn clone_produces_equal_independent_map(entries in entries_strategy(), k in key_strategy()) {
        let mut map: OrderedMap<i64, i64> = entries.iter().copied().collect();
        let copy = map.clone();
        prop_assert_eq!(&copy, &map);

        map.remove(&k);
        map.insert(k, 0);
        if let Some(v) = map.get_mut(&k) {
            *v = 1;
        }
        prop_assert!(copy.iter().eq(oracle(&entries).iter()));
    }

    #[test]
    fn eq_and_ord_match_btreemap(a in entries_strategy(), b in entries_strategy()) {
        let map_a: OrderedMap<i64, i64> = a.iter().copied().collect();
        let map_b: OrderedMap<i64, i64> = b.iter().copied().collect();
        let bt_a = oracle(&a);
        let bt_b = oracle(&b);

        prop_assert_eq!(map_a == map_b, bt_a == bt_b);
        prop_assert_eq!(map_a.cmp(&map_b), bt_a.cmp(&bt_b));
        prop_assert_eq!(map_a.partial_cmp(&map_b), bt_a.partial_cmp(&bt_b));
    }

    #[test]
    fn hash_consistent_for_equal_maps(entries in entries_strategy()) {
        let forward: OrderedMap<i64, i64> = oracle(&entries).into_iter().collect();
        let backward: OrderedMap<i64, i64> = oracle(&entries).into_iter().rev().collect();
        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(hash_of(&forward), hash_of(&backward));
    }

    #[test]
    fn extend_from_refs_matches_btreemap(a in entries_strategy(), b in entries_strategy()) {
        let mut map: OrderedMap<i64, i64> = a.iter().copied().collect();
        let mut bt_map = oracle(&a);
        let source = oracle(&b);

        map.extend(&source);
        for (k, v) in &source {
            bt_map.entry(*k).or_insert(*v);
        }
        prop_assert!(map.iter().eq(bt_map.iter()));
    }
}

#[test]
fn from_array_keeps_first_of_duplicates() {
    let map = OrderedMap::from([(3, "c"), (1, "a"), (3, "x"), (2, "b")]);
    assert_eq!(map.iter().collect::<Vec<_>>(), [(&1, &"a"), (&2, &"b"), (&3, &"c")]);
    assert_eq!(format!("{map:?}"), r#"{1: "a", 2: "b", 3: "c"}"#);
}

#[test]
fn custom_comparators_order_keys() {
    let mut reversed = OrderedMap::with_comparator(Reverse(Natural));
    reversed.extend([(1, ()), (3, ()), (2, ())]);
    assert_eq!(reversed.keys().copied().collect::<Vec<_>>(), [3, 2, 1]);
    assert_eq!(reversed.lower_bound(&2).key(), Some(&2));
    assert_eq!(reversed.upper_bound(&2).key(), Some(&1));

    let mut by_len = OrderedMap::with_comparator(|a: &String, b: &String| a.len() < b.len());
    by_len.insert(String::from("abc"), 1);
    let (_, inserted) = by_len.insert(String::from("xyz"), 2);
    assert!(!inserted);
    assert_eq!(by_len.get_key_value(&String::from("qqq")), Some((&String::from("abc"), &1)));
    assert!(by_len.key_comp()(&String::from("a"), &String::from("ab")));
}

#[test]
fn capacity_and_reservation() {
    let mut map: OrderedMap<u32, u32> = OrderedMap::with_capacity(16);
    assert!(map.capacity() >= 16);
    map.reserve(64);
    assert!(map.capacity() >= 64);
    assert!(map.try_reserve(8).is_ok());
    assert!(matches!(map.try_reserve(usize::MAX), Err(Error::Alloc(_))));

    map.extend((0..10).map(|k| (k, k)));
    assert_eq!(map.len(), 10);
}

#[test]
fn default_iterators_are_empty() {
    let iter: ordered_map::IntoIter<u8, u8> = Default::default();
    assert_eq!(iter.len(), 0);
}

// ─── Bounds and ranges ───────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn bounds_match_btreemap(entries in entries_strategy(), k in key_strategy()) {
        let map: OrderedMap<i64, i64> = entries.iter().copied().collect();
        let bt_map = oracle(&entries);

        prop_assert_eq!(map.lower_bound(&k).key_value(), bt_map.range(k..).next());
        prop_assert_eq!(
            map.upper_bound(&k).key_value(),
            bt_map.range((std::ops::Bound::Excluded(k), std::ops::Bound::Unbounded)).next()
        );

        let (first, last) = map.equal_range(&k);
        let in_range: Vec<_> = map.between(first.position(), last.position()).collect();
        let expected: Vec<_> = bt_map.range(k..=k).collect();
        prop_assert_eq!(in_range, expected);
    }

    #[test]
    fn range_matches_btreemap(entries in entries_strategy(), a in key_strategy(), b in key_strategy()) {
        let map: OrderedMap<i64, i64> = entries.iter().copied().collect();
        let bt_map = oracle(&entries);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

        prop_assert!(map.range(lo..hi).eq(bt_map.range(lo..hi)));
        prop_assert!(map.range(lo..=hi).rev().eq(bt_map.range(lo..=hi).rev()));
        prop_assert!(map.range(lo..).eq(bt_map.range(lo..)));
        prop_assert!(map.range(..hi).eq(bt_map.range(..hi)));
        prop_assert!(map.range::<i64, _>(..).eq(bt_map.range::<i64, _>(..)));

        let excluded = (std::ops::Bound::Excluded(lo), std::ops::Bound::Included(hi));
        prop_assert!(map.range(excluded).eq(bt_map.range(excluded)));
    }

    #[test]
    fn between_matches_range(entries in entries_strategy(), a in key_strategy(), b in key_strategy()) {
        let map: OrderedMap<i64, i64> = entries.iter().copied().collect();
        let first = map.lower_bound(&a).position();
        let last = map.lower_bound(&b).position();

        let got: Vec<_> = map.between(first, last).collect();
        let expected: Vec<_> = if a <= b { map.range(a..b).collect() } else { Vec::new() };
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn erase_range_matches_btreemap(entries in entries_strategy(), a in key_strategy(), b in key_strategy()) {
        let mut map: OrderedMap<i64, i64> = entries.iter().copied().collect();
        let mut bt_map = oracle(&entries);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

        let first = map.lower_bound(&lo).position();
        let last = map.lower_bound(&hi).position();
        let removed = map.erase_range(first, last);

        let doomed: Vec<_> = bt_map.range(lo..hi).map(|(k, _)| *k).collect();
        for k in &doomed {
            bt_map.remove(k);
        }
        prop_assert_eq!(removed, doomed.len());
        prop_assert!(map.iter().eq(bt_map.iter()));
    }
}

#[test]
fn equal_range_on_present_and_absent_keys() {
    let map = OrderedMap::from([(1, 'a'), (3, 'c'), (5, 'e'), (7, 'g')]);

    let (first, last) = map.equal_range(&5);
    assert_eq!(first.key(), Some(&5));
    assert_eq!(last.key(), Some(&7));
    assert_eq!(map.between(first.position(), last.position()).collect::<Vec<_>>(), [(&5, &'e')]);

    let (first, last) = map.equal_range(&4);
    assert_eq!(first, last);
    assert_eq!(first.key(), Some(&5));
    let mut before = first;
    before.move_prev();
    assert_eq!(before.key(), Some(&3));

    let (first, last) = map.equal_range(&8);
    assert!(first.is_past_end() && last.is_past_end());
}

#[test]
fn erase_range_whole_map() {
    let mut map: OrderedMap<i32, i32> = (0..50).map(|k| ((k * 37) % 50, k)).collect();
    let (begin, end) = (map.begin(), map.end());
    assert_eq!(map.erase_range(begin, end), 50);
    assert!(map.is_empty());
    assert_eq!(map.begin(), map.end());
}

#[test]
fn positions_survive_other_erasures() {
    let mut map = OrderedMap::new();
    let positions: Vec<_> = [5, 2, 8, 1, 3, 7, 9].iter().map(|&k| map.insert(k, k * 10).0).collect();

    // 8 has two children; its removal must not move 7 or 9.
    map.erase_at(positions[2]);
    map.remove(&5);

    for (&k, &position) in [5, 2, 8, 1, 3, 7, 9].iter().zip(&positions) {
        match k {
            5 | 8 => assert_eq!(map.try_get_at(position), Err(Error::Stale)),
            _ => assert_eq!(map[position], k * 10),
        }
    }
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [1, 2, 3, 7, 9]);
}

#[test]
fn stale_position_is_reported_until_its_slot_is_reused() {
    let mut map = OrderedMap::from([(1, 'a'), (2, 'b')]);
    let position = map.find(&2).position();

    map.remove(&2);
    assert_eq!(map.try_get_at(position), Err(Error::Stale));

    // The freed slot goes to the next insertion.
    map.insert(7, 'g');
    assert_eq!(map.try_get_at(position), Ok((&7, &'g')));
}

#[test]
fn index_mut_by_position_writes_through() {
    let mut map = OrderedMap::new();
    let (position, _) = map.insert("k", 1);
    map[position] += 41;
    assert_eq!(map["k"], 42);
}

#[test]
fn post_order_teardown() {
    struct Logged(i32, Rc<RefCell<Vec<i32>>>);

    impl Drop for Logged {
        fn drop(&mut self) {
            self.1.borrow_mut().push(self.0);
        }
    }

    let log = Rc::new(RefCell::new(Vec::new()));
    let mut map = OrderedMap::new();
    for k in [5, 2, 8, 1, 3] {
        map.insert(k, Logged(k, Rc::clone(&log)));
    }
    map.clear();
    assert_eq!(*log.borrow(), [1, 3, 2, 8, 5]);

    log.borrow_mut().clear();
    for k in [4, 6, 5] {
        map.insert(k, Logged(k, Rc::clone(&log)));
    }
    drop(map);
    assert_eq!(*log.borrow(), [5, 6, 4]);
}

// ─── Panic tests ─────────────────────────────────────────────────────────────

#[test]
#[should_panic(expected = "range start is greater than range end in OrderedMap")]
fn range_start_greater_than_end_panics() {
    let map = OrderedMap::from([(1, 1), (2, 2)]);
    let _ = map.range(3..1);
}

#[test]
#[should_panic(expected = "range start is greater than range end in OrderedMap")]
fn range_excluded_excluded_same_bound_panics() {
    use std::ops::Bound::Excluded;

    let map = OrderedMap::from([(1, 1), (2, 2)]);
    let _ = map.range((Excluded(1), Excluded(1)));
}

#[test]
#[should_panic(expected = "no entry found for key")]
fn index_missing_key_panics() {
    let map = OrderedMap::from([(1, 1)]);
    let _ = map[&2];
}

#[test]
#[should_panic(expected = "`OrderedMap::index()` - position is past the end of the map")]
fn index_past_end_panics() {
    let map = OrderedMap::from([(1, 1)]);
    let _ = map[map.end()];
}

#[test]
#[should_panic(expected = "`OrderedMap::erase_at()` - position refers to an entry that is no longer in the map")]
fn erase_at_stale_position_panics() {
    let mut map = OrderedMap::new();
    let (position, _) = map.insert(1, 1);
    map.erase_at(position);
    map.erase_at(position);
}

#[test]
#[should_panic(expected = "`OrderedMap::erase_range()` - position is before the beginning of the map")]
fn erase_range_before_begin_panics() {
    let mut map = OrderedMap::from([(1, 1), (2, 2)]);
    let mut cursor = map.cursor_first();
    cursor.move_prev();
    let before = cursor.position();
    let end = map.end();
    map.erase_range(before, end);
}

#[test]
#[should_panic(expected = "`OrderedMap::erase_range()` - last position is not reachable from first")]
fn erase_range_unreachable_last_panics_without_removing() {
    let mut map: OrderedMap<i32, i32> = (1..=6).map(|k| (k, k)).collect();
    let first = map.find(&4).position();
    let last = map.find(&2).position();

    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| map.erase_range(first, last)));
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6]);
    if let Err(payload) = outcome {
        std::panic::resume_unwind(payload);
    }
}

#[test]
#[should_panic(expected = "`OrderedMap::erase_range()` - position is past the end of the map")]
fn erase_range_from_end_to_entry_panics() {
    let mut map = OrderedMap::from([(1, 1), (2, 2)]);
    let end = map.end();
    let first = map.begin();
    map.erase_range(end, first);
}

#[test]
#[should_panic(expected = "`OrderedMap::between()` - position refers to an entry that is no longer in the map")]
fn between_checks_last_when_first_is_end() {
    let mut map = OrderedMap::from([(1, 1), (2, 2)]);
    let stale = map.find(&1).position();
    map.remove(&1);
    let end = map.end();
    let _ = map.between(end, stale);
}
