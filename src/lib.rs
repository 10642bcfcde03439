//! # duomap
//!
//! String-keyed hash maps built from first principles, with two alternative
//! collision-resolution strategies:
//!
//! - `ChainedHashMap`: separate chaining — each bucket owns a chain of
//!   entries, and capacity only changes through an explicit `resize_table`.
//! - `ProbingHashMap`: open addressing with quadratic probing — each slot
//!   holds at most one entry, deletions leave tombstones, and the table
//!   doubles itself whenever an insertion finds the load factor at 0.5.
//!
//! Both take a plain hash function (`fn(&str) -> u64`) at construction, so
//! behavior is fully deterministic and tests can pin bucket placement.
//!
//! ## Basic Usage
//!
//! ```rust
//! use duomap::{ChainedHashMap, fold_hash};
//!
//! let mut map = ChainedHashMap::new(16, fold_hash);
//!
//! map.put("apple".to_string(), 1);
//! map.put("banana".to_string(), 2);
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // Update values
//! map.put("apple".to_string(), 10);
//! assert_eq!(map.get("apple"), Some(&10));
//!
//! // Remove values
//! map.remove("apple");
//! assert_eq!(map.get("apple"), None);
//! ```
//!
//! ## Picking a Strategy
//!
//! ```rust
//! use duomap::{ProbingHashMap, StringMap, weighted_fold_hash};
//!
//! let mut map = ProbingHashMap::new(4, weighted_fold_hash);
//! for (i, fruit) in ["kiwi", "fig", "plum"].iter().enumerate() {
//!     map.put((*fruit).to_string(), i);
//! }
//!
//! // The third insert hit the 0.5 load threshold and doubled the table.
//! assert_eq!(map.get_capacity(), 8);
//! assert!(map.table_load() < 0.5);
//! ```
//!
//! Both maps implement the [`StringMap`] trait, so code can be written once
//! against the shared contract and run with either strategy.

/// Module implementing the separate-chaining hash map
mod chained_map;
/// Module providing the pluggable hash functions
mod hashing;
/// Module implementing mode finding over a frequency map
mod mode;
/// Module implementing the quadratic-probing hash map
mod probing_map;
/// Shared contract trait and helpers for both map variants
mod utils;

pub use chained_map::ChainedHashMap;
pub use hashing::{HashFn, fold_hash, std_hash, weighted_fold_hash};
pub use mode::find_mode;
pub use probing_map::ProbingHashMap;
pub use utils::{StringMap, from_pairs};
