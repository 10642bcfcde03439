//! The contract shared by both map variants, as a trait.
//!
//! `ChainedHashMap` and `ProbingHashMap` expose the same surface; this trait
//! captures it so hosts, benchmarks, and property tests can be written once
//! and run against either collision-resolution strategy.

use crate::{ChainedHashMap, ProbingHashMap};

/// Operations common to both string-keyed map implementations.
pub trait StringMap<V> {
    /// Inserts or updates a key/value pair, returning the previous value.
    fn put(&mut self, key: String, value: V) -> Option<V>;

    /// Returns the value associated with the key, if present.
    fn get(&self, key: &str) -> Option<&V>;

    /// Returns true if the key is in the map.
    fn contains_key(&self, key: &str) -> bool;

    /// Removes the key, returning its value if it was present.
    fn remove(&mut self, key: &str) -> Option<V>;

    /// Removes every entry without changing capacity.
    fn clear(&mut self);

    /// Changes the table capacity; invalid targets are silently ignored.
    fn resize_table(&mut self, new_capacity: usize);

    /// Current load factor, `size / capacity`.
    fn table_load(&self) -> f64;

    /// Number of empty buckets, by each variant's own accounting.
    fn empty_buckets(&self) -> usize;

    /// All current keys.
    fn get_keys(&self) -> Vec<String>;

    /// Number of entries in the map.
    fn get_size(&self) -> usize;

    /// Number of buckets in the table.
    fn get_capacity(&self) -> usize;

    /// Returns true if the map holds no entries.
    fn is_empty(&self) -> bool {
        self.get_size() == 0
    }
}

impl<V> StringMap<V> for ChainedHashMap<V> {
    fn put(&mut self, key: String, value: V) -> Option<V> {
        Self::put(self, key, value)
    }

    fn get(&self, key: &str) -> Option<&V> {
        Self::get(self, key)
    }

    fn contains_key(&self, key: &str) -> bool {
        Self::contains_key(self, key)
    }

    fn remove(&mut self, key: &str) -> Option<V> {
        Self::remove(self, key)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn resize_table(&mut self, new_capacity: usize) {
        Self::resize_table(self, new_capacity);
    }

    fn table_load(&self) -> f64 {
        Self::table_load(self)
    }

    fn empty_buckets(&self) -> usize {
        Self::empty_buckets(self)
    }

    fn get_keys(&self) -> Vec<String> {
        Self::get_keys(self)
    }

    fn get_size(&self) -> usize {
        Self::get_size(self)
    }

    fn get_capacity(&self) -> usize {
        Self::get_capacity(self)
    }
}

impl<V> StringMap<V> for ProbingHashMap<V> {
    fn put(&mut self, key: String, value: V) -> Option<V> {
        Self::put(self, key, value)
    }

    fn get(&self, key: &str) -> Option<&V> {
        Self::get(self, key)
    }

    fn contains_key(&self, key: &str) -> bool {
        Self::contains_key(self, key)
    }

    fn remove(&mut self, key: &str) -> Option<V> {
        Self::remove(self, key)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn resize_table(&mut self, new_capacity: usize) {
        Self::resize_table(self, new_capacity);
    }

    fn table_load(&self) -> f64 {
        Self::table_load(self)
    }

    fn empty_buckets(&self) -> usize {
        Self::empty_buckets(self)
    }

    fn get_keys(&self) -> Vec<String> {
        Self::get_keys(self)
    }

    fn get_size(&self) -> usize {
        Self::get_size(self)
    }

    fn get_capacity(&self) -> usize {
        Self::get_capacity(self)
    }
}

/// Fills a map with key/value pairs and returns it.
pub fn from_pairs<V, M, I>(mut map: M, pairs: I) -> M
where
    M: StringMap<V>,
    I: IntoIterator<Item = (String, V)>,
{
    for (key, value) in pairs {
        map.put(key, value);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::fold_hash;
    use proptest::prelude::*;
    use std::collections::HashMap;

    /// A mutation applied to both the map under test and the oracle.
    #[derive(Debug, Clone)]
    enum Op {
        /// Upsert a key.
        Put(String, i32),
        /// Remove a key (often absent).
        Remove(String),
        /// Request a capacity change.
        Resize(usize),
        /// Drop every entry.
        Clear,
    }

    /// Single-letter keys from a ten-letter alphabet so collisions and
    /// overwrites are frequent but the live entry count stays small.
    fn key_strategy() -> impl Strategy<Value = String> {
        "[a-j]"
    }

    /// Arbitrary op sequences.
    ///
    /// Resizes are optional: quadratic probing only guarantees termination
    /// under the map's own doubling policy, so the probing run must not feed
    /// it arbitrary externally-chosen capacities.
    fn ops_strategy(resizes: bool) -> BoxedStrategy<Vec<Op>> {
        let op = if resizes {
            prop_oneof![
                4 => (key_strategy(), any::<i32>()).prop_map(|(k, v)| Op::Put(k, v)),
                2 => key_strategy().prop_map(Op::Remove),
                1 => (1_usize..64).prop_map(Op::Resize),
                1 => Just(Op::Clear),
            ]
            .boxed()
        } else {
            prop_oneof![
                4 => (key_strategy(), any::<i32>()).prop_map(|(k, v)| Op::Put(k, v)),
                2 => key_strategy().prop_map(Op::Remove),
                1 => Just(Op::Clear),
            ]
            .boxed()
        };
        proptest::collection::vec(op, 0..80).boxed()
    }

    /// Replays the ops against the map and a `std` `HashMap` oracle, then
    /// checks that contents and size agree.
    fn check_against_oracle<M: StringMap<i32>>(mut map: M, ops: &[Op]) {
        let mut oracle: HashMap<String, i32> = HashMap::new();
        for op in ops {
            match op {
                Op::Put(key, value) => {
                    assert_eq!(map.put(key.clone(), *value), oracle.insert(key.clone(), *value));
                }
                Op::Remove(key) => {
                    assert_eq!(map.remove(key), oracle.remove(key));
                }
                Op::Resize(capacity) => map.resize_table(*capacity),
                Op::Clear => {
                    map.clear();
                    oracle.clear();
                }
            }
        }

        assert_eq!(map.get_size(), oracle.len());
        let mut keys = map.get_keys();
        keys.sort();
        let mut expected: Vec<String> = oracle.keys().cloned().collect();
        expected.sort();
        assert_eq!(keys, expected);
        for (key, value) in &oracle {
            assert_eq!(map.get(key), Some(value));
        }
    }

    proptest! {
        #[test]
        fn chained_matches_oracle(ops in ops_strategy(true)) {
            check_against_oracle(ChainedHashMap::new(11, fold_hash), &ops);
        }

        #[test]
        fn probing_matches_oracle(ops in ops_strategy(false)) {
            check_against_oracle(ProbingHashMap::new(11, fold_hash), &ops);
        }
    }

    #[test]
    fn test_from_pairs() {
        let pairs = vec![("a".to_string(), 1), ("b".to_string(), 2), ("a".to_string(), 3)];
        let map: ChainedHashMap<i32> = from_pairs(ChainedHashMap::new(4, fold_hash), pairs);

        assert_eq!(map.get_size(), 2);
        assert_eq!(map.get("a"), Some(&3));
        assert_eq!(map.get("b"), Some(&2));
    }

    #[test]
    fn test_contract_is_interchangeable() {
        /// Runs the same scenario through the shared contract.
        fn exercise<M: StringMap<u32>>(mut map: M) {
            map.put("x".to_string(), 7);
            assert!(map.contains_key("x"));
            assert_eq!(map.get_size(), 1);
            map.clear();
            assert!(map.is_empty());
        }

        exercise(ChainedHashMap::new(4, fold_hash));
        exercise(ProbingHashMap::new(4, fold_hash));
    }
}
