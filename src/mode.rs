//! Mode (most frequent element) finding over a frequency map.

use crate::ChainedHashMap;
use crate::hashing::fold_hash;

/// Returns the most frequent elements and their occurrence count.
///
/// Builds a [`ChainedHashMap`] keyed by element with occurrence counts, then
/// walks the distinct keys once tracking the running maximum. Ties are all
/// included; a strictly greater count resets the result set. An empty input
/// yields `(vec![], 0)`.
///
/// ```
/// let items = ["apple", "apple", "grape", "melon", "melon", "peach"];
/// let (mut mode, frequency) = duomap::find_mode(&items);
/// mode.sort();
/// assert_eq!(mode, vec!["apple", "melon"]);
/// assert_eq!(frequency, 2);
/// ```
#[must_use]
pub fn find_mode<S: AsRef<str>>(items: &[S]) -> (Vec<String>, usize) {
    let capacity = (items.len() / 3).max(1);
    let mut counts: ChainedHashMap<usize> = ChainedHashMap::new(capacity, fold_hash);

    for item in items {
        let key = item.as_ref();
        let next = counts.get(key).map_or(1, |count| count.saturating_add(1));
        counts.put(key.to_string(), next);
    }

    let mut mode = Vec::new();
    let mut frequency = 0_usize;
    for key in counts.get_keys() {
        let Some(&count) = counts.get(&key) else { continue };
        if count > frequency {
            frequency = count;
            mode.clear();
            mode.push(key);
        } else if count == frequency {
            mode.push(key);
        }
    }

    (mode, frequency)
}
