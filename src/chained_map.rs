//! A string-keyed hash map using separate chaining for collision resolution.

use crate::hashing::HashFn;
use std::fmt;

/// A single key/value pair owned by one bucket chain.
#[derive(Debug, Clone)]
struct ChainEntry<V> {
    /// The key in the key-value pair.
    key: String,
    /// The value associated with the key.
    value: V,
}

/// A hash map that resolves collisions with per-bucket chains.
///
/// Every bucket owns an ordered chain of entries; keys that hash to the same
/// bucket simply extend that bucket's chain. The table never grows on its own:
/// capacity only changes through an explicit [`resize_table`] call, so the
/// load factor may exceed 1.0.
///
/// Note: this implementation is not thread-safe; callers that share a map
/// across threads must provide their own mutual exclusion.
///
/// [`resize_table`]: ChainedHashMap::resize_table
#[derive(Debug, Clone)]
pub struct ChainedHashMap<V> {
    /// The bucket chains; the vector's length is the table capacity.
    buckets: Vec<Vec<ChainEntry<V>>>,
    /// Current number of entries across all chains.
    size: usize,
    /// Hash function supplied at construction.
    hash_fn: HashFn,
}

impl<V> ChainedHashMap<V> {
    /// Creates an empty map with the given capacity and hash function.
    ///
    /// Capacities below 1 are clamped to 1.
    #[must_use]
    pub fn new(capacity: usize, hash_fn: HashFn) -> Self {
        let capacity = capacity.max(1);
        Self { buckets: (0..capacity).map(|_| Vec::new()).collect(), size: 0, hash_fn }
    }

    /// Index of the bucket the key hashes to under the current capacity.
    #[allow(clippy::cast_possible_truncation)]
    fn bucket_index(&self, key: &str) -> usize {
        let hash = (self.hash_fn)(key);
        (hash % self.buckets.len() as u64) as usize
    }

    /// Inserts or updates the key/value pair.
    ///
    /// If the key is already present its value is replaced and the old value
    /// returned; otherwise a new entry is appended to the target chain.
    pub fn put(&mut self, key: String, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        let bucket = self.buckets.get_mut(index)?;
        match bucket.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => Some(std::mem::replace(&mut entry.value, value)),
            None => {
                bucket.push(ChainEntry { key, value });
                self.size = self.size.saturating_add(1);
                None
            }
        }
    }

    /// Returns the value associated with the key, if present.
    pub fn get(&self, key: &str) -> Option<&V> {
        let index = self.bucket_index(key);
        self.buckets.get(index)?.iter().find(|entry| entry.key == key).map(|entry| &entry.value)
    }

    /// Returns true if the key is in the map.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes the key and its value, returning the value if the key was
    /// present. Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.bucket_index(key);
        let bucket = self.buckets.get_mut(index)?;
        let position = bucket.iter().position(|entry| entry.key == key)?;
        let entry = bucket.remove(position);
        self.size = self.size.saturating_sub(1);
        Some(entry.value)
    }

    /// Removes every entry. Capacity is unchanged.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.size = 0;
    }

    /// Changes the table capacity, rehashing every entry into fresh chains.
    ///
    /// A `new_capacity` below 1 is silently ignored. Unlike the probing
    /// variant, a capacity smaller than the current entry count is accepted;
    /// chains simply grow longer.
    #[allow(clippy::cast_possible_truncation)]
    pub fn resize_table(&mut self, new_capacity: usize) {
        if new_capacity < 1 {
            return;
        }
        let mut rehashed: Vec<Vec<ChainEntry<V>>> =
            (0..new_capacity).map(|_| Vec::new()).collect();
        for bucket in self.buckets.drain(..) {
            for entry in bucket {
                let index = ((self.hash_fn)(&entry.key) % new_capacity as u64) as usize;
                if let Some(chain) = rehashed.get_mut(index) {
                    chain.push(entry);
                }
            }
        }
        self.buckets = rehashed;
    }

    /// Current load factor, `size / capacity`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn table_load(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Number of buckets whose chain is empty.
    #[must_use]
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|bucket| bucket.is_empty()).count()
    }

    /// All keys in the map, in bucket order then chain order.
    #[must_use]
    pub fn get_keys(&self) -> Vec<String> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|entry| entry.key.clone()))
            .collect()
    }

    /// Number of entries in the map.
    #[must_use]
    pub fn get_size(&self) -> usize {
        self.size
    }

    /// Number of buckets in the table.
    #[must_use]
    pub fn get_capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns true if the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

impl<V: fmt::Debug> fmt::Display for ChainedHashMap<V> {
    /// One bucket per line: `index: [key: value, ...]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, bucket) in self.buckets.iter().enumerate() {
            write!(f, "{index}: [")?;
            for (position, entry) in bucket.iter().enumerate() {
                if position > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {:?}", entry.key, entry.value)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
