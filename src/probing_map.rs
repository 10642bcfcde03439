//! A string-keyed hash map using open addressing with quadratic probing.

use crate::hashing::HashFn;
use std::fmt;
use std::mem;

/// State of a single table slot.
///
/// A deleted entry keeps its key in a `Tombstone` so a tombstone without a
/// prior key is unrepresentable; the value is dropped at removal time.
#[derive(Debug, Clone)]
enum Slot<V> {
    /// Never held an entry.
    Empty,
    /// Holds a current entry.
    Live {
        /// The key in the key-value pair.
        key: String,
        /// The value associated with the key.
        value: V,
    },
    /// Held an entry that has since been removed.
    Tombstone {
        /// The key the removed entry had.
        key: String,
    },
}

/// A hash map that resolves collisions by quadratic probing.
///
/// Each slot holds at most one entry. Insertions probe `base`, `base + 1`,
/// `base + 4`, `base + 9`, ... (mod capacity) from the key's home slot and
/// take the first empty or tombstoned slot. Removal marks the slot with a
/// tombstone rather than emptying it.
///
/// The table grows to twice its capacity whenever an insertion of a new key
/// finds the load factor at or above 0.5, and it grows *before* the insertion
/// index is computed. Keeping the load factor below 0.5 under this doubling
/// policy is what guarantees the probe sequence terminates; do not rely on
/// termination for arbitrary externally-chosen capacities near full load.
///
/// Note: this implementation is not thread-safe; callers that share a map
/// across threads must provide their own mutual exclusion.
#[derive(Debug, Clone)]
pub struct ProbingHashMap<V> {
    /// The table slots; the vector's length is the table capacity.
    slots: Vec<Slot<V>>,
    /// Current number of live (non-tombstone) entries.
    size: usize,
    /// Hash function supplied at construction.
    hash_fn: HashFn,
}

/// Load factor at or above which `put` doubles the capacity before inserting.
const GROWTH_LOAD_FACTOR: f64 = 0.5;

impl<V> ProbingHashMap<V> {
    /// Creates an empty map with the given capacity and hash function.
    ///
    /// Capacities below 1 are clamped to 1.
    #[must_use]
    pub fn new(capacity: usize, hash_fn: HashFn) -> Self {
        let capacity = capacity.max(1);
        Self { slots: (0..capacity).map(|_| Slot::Empty).collect(), size: 0, hash_fn }
    }

    /// Home slot of the key under the current capacity.
    #[allow(clippy::cast_possible_truncation)]
    fn bucket_index(&self, key: &str) -> usize {
        let hash = (self.hash_fn)(key);
        (hash % self.slots.len() as u64) as usize
    }

    /// Slot `base + step * step` (mod capacity).
    #[allow(clippy::cast_possible_truncation)]
    fn probe_index(&self, base: usize, step: u64) -> usize {
        let offset = step.saturating_mul(step);
        let probed = (base as u64).saturating_add(offset);
        (probed % self.slots.len() as u64) as usize
    }

    /// Index of the live slot holding the key, if any.
    ///
    /// Scans every slot left to right; tombstones are skipped even when their
    /// key matches.
    fn find_live(&self, key: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| matches!(slot, Slot::Live { key: held, .. } if held == key))
    }

    /// Inserts or updates the key/value pair.
    ///
    /// An existing key is overwritten in place, with the old value returned
    /// and no growth check. A new key first grows the table if the load
    /// factor has reached 0.5, then probes quadratically from its home slot
    /// and claims the first empty or tombstoned slot.
    pub fn put(&mut self, key: String, value: V) -> Option<V> {
        if let Some(index) = self.find_live(&key) {
            if let Some(Slot::Live { value: held, .. }) = self.slots.get_mut(index) {
                return Some(mem::replace(held, value));
            }
        }

        // Grow before computing the insertion index: the probe below must run
        // against the already-doubled capacity.
        if self.table_load() >= GROWTH_LOAD_FACTOR {
            let doubled = self.slots.len().saturating_mul(2);
            self.resize_table(doubled);
        }

        let base = self.bucket_index(&key);
        let mut index = base;
        let mut step: u64 = 1;
        while let Some(Slot::Live { .. }) = self.slots.get(index) {
            index = self.probe_index(base, step);
            step = step.saturating_add(1);
        }
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Slot::Live { key, value };
            self.size = self.size.saturating_add(1);
        }
        None
    }

    /// Returns the value associated with the key, if present.
    ///
    /// Tombstoned entries never match.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.slots.iter().find_map(|slot| match slot {
            Slot::Live { key: held, value } if held == key => Some(value),
            _ => None,
        })
    }

    /// Returns true if a live entry for the key exists.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.find_live(key).is_some()
    }

    /// Removes the key by tombstoning its slot, returning the value if the
    /// key was live. Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.find_live(key)?;
        let slot = self.slots.get_mut(index)?;
        match mem::replace(slot, Slot::Empty) {
            Slot::Live { key, value } => {
                *slot = Slot::Tombstone { key };
                self.size = self.size.saturating_sub(1);
                Some(value)
            }
            other => {
                *slot = other;
                None
            }
        }
    }

    /// Resets every slot, tombstones included. Capacity is unchanged.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = Slot::Empty;
        }
        self.size = 0;
    }

    /// Changes the table capacity, rehashing every live entry.
    ///
    /// Silently ignored when `new_capacity` is below 1 or below the live
    /// entry count. Live entries are reinserted through the normal `put`
    /// path, so tombstones do not survive a resize; if reinsertion itself
    /// crosses the growth threshold the final capacity exceeds
    /// `new_capacity`.
    pub fn resize_table(&mut self, new_capacity: usize) {
        if new_capacity < 1 || new_capacity < self.size {
            return;
        }
        let mut rebuilt = Self::new(new_capacity, self.hash_fn);
        for slot in self.slots.drain(..) {
            if let Slot::Live { key, value } = slot {
                rebuilt.put(key, value);
            }
        }
        *self = rebuilt;
    }

    /// Current load factor, `size / capacity`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn table_load(&self) -> f64 {
        self.size as f64 / self.slots.len() as f64
    }

    /// `capacity - size`.
    ///
    /// Tombstoned slots count as occupied here even though they hold no live
    /// entry, matching the live-size accounting rather than raw slot state.
    #[must_use]
    pub fn empty_buckets(&self) -> usize {
        self.slots.len().saturating_sub(self.size)
    }

    /// All live keys, in slot order.
    #[must_use]
    pub fn get_keys(&self) -> Vec<String> {
        self.slots
            .iter()
            .filter_map(|slot| match slot {
                Slot::Live { key, .. } => Some(key.clone()),
                _ => None,
            })
            .collect()
    }

    /// Number of live entries in the map.
    #[must_use]
    pub fn get_size(&self) -> usize {
        self.size
    }

    /// Number of slots in the table.
    #[must_use]
    pub fn get_capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the map holds no live entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

impl<V: fmt::Debug> fmt::Display for ProbingHashMap<V> {
    /// One slot per line: `index: key: value`, with empty slots as `_` and
    /// tombstones marked, keeping their key visible for debugging.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, slot) in self.slots.iter().enumerate() {
            match slot {
                Slot::Empty => writeln!(f, "{index}: _")?,
                Slot::Live { key, value } => writeln!(f, "{index}: {key}: {value:?}")?,
                Slot::Tombstone { key } => writeln!(f, "{index}: {key} (tombstone)")?,
            }
        }
        Ok(())
    }
}
