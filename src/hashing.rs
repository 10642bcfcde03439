//! Hash functions for the string-keyed maps.
//!
//! Both map variants take their hash function at construction time as a plain
//! function pointer, so deterministic functions (including non-capturing
//! closures) can be injected in tests. The functions here are the ones a host
//! program will typically reach for.

use std::hash::{DefaultHasher, Hash, Hasher};

/// A hash function supplied to a map at construction time.
///
/// Maps a key to a non-negative integer; the map reduces the result modulo its
/// current capacity to pick a bucket. Must be deterministic for the lifetime
/// of the map.
pub type HashFn = fn(&str) -> u64;

/// Sums the character codes of the key.
///
/// Simple and fast, but anagrams collide ("ab" and "ba" hash identically).
///
/// ```
/// assert_eq!(duomap::fold_hash("abc"), 294);
/// ```
#[must_use]
pub fn fold_hash(key: &str) -> u64 {
    key.chars().fold(0_u64, |acc, ch| acc.saturating_add(u64::from(ch)))
}

/// Sums the character codes of the key weighted by position.
///
/// Each character contributes `(position + 1) * code`, so permutations of the
/// same characters hash differently.
///
/// ```
/// assert_eq!(duomap::weighted_fold_hash("abc"), 590);
/// ```
#[must_use]
pub fn weighted_fold_hash(key: &str) -> u64 {
    key.chars().enumerate().fold(0_u64, |acc, (position, ch)| {
        let weight = (position as u64).saturating_add(1);
        acc.saturating_add(weight.saturating_mul(u64::from(ch)))
    })
}

/// Hashes the key with the standard library's default hasher.
///
/// Deterministic within a process; use one of the fold hashes when values must
/// be reproducible across runs.
#[must_use]
pub fn std_hash(key: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}
