//! # Bucket Map
//!
//! A hash map that resolves collisions by separate chaining.
//!
//! Keys are hashed into a slot array; keys that land in the same slot share
//! that slot's chain, an owned singly-linked list searched by key equality.
//! The slot array starts with 16 slots and doubles, rehashing every entry,
//! whenever an insertion finds the map holding `capacity * load_factor`
//! entries or more (0.5 by default).
//!
//! The map is single-threaded. Iteration follows slot order and, within a
//! slot, chain order; it makes no promise about insertion or sorted order.
//!
//! ## Basic Usage
//!
//! ```rust
//! use bucketmap::BucketMap;
//!
//! // Create a new map
//! let mut map = BucketMap::new();
//!
//! // Insert values
//! assert_eq!(map.put("apple".to_string(), 1), None);
//! map.put("banana".to_string(), 2);
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // Update values
//! assert_eq!(map.put("apple".to_string(), 10), Some(1));
//! assert_eq!(map.len(), 2);
//!
//! // Remove values
//! assert_eq!(map.remove("apple"), Some(10));
//! assert_eq!(map.get("apple"), None);
//!
//! // Diagnostic dump
//! assert_eq!(map.to_string(), "[banana -> 2, ]");
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use bucketmap::{BucketMap, Error, TableConfig};
//!
//! let map: BucketMap<u64, u64> = BucketMap::with_capacity(128).unwrap();
//! assert_eq!(map.capacity(), 128);
//!
//! let err = BucketMap::<u64, u64>::with_config(TableConfig::default().with_load_factor(0.0));
//! assert!(matches!(err, Err(Error::InvalidArgument { name: "load_factor", .. })));
//! ```

/// Per-slot collision lists
mod chain;
/// Construction parameters and their validation
mod config;
/// Key-value pairs as stored in the map
mod entry;
/// Crate error type
mod error;
/// Iterators and the traversal cursor
mod iter;
/// Chain length diagnostics
mod stats;
/// The map itself
mod table;

pub use config::{DEFAULT_INITIAL_CAPACITY, DEFAULT_LOAD_FACTOR, TableConfig};
pub use entry::Entry;
pub use error::{Error, Result};
pub use iter::{Cursor, Entries, IntoIter, Iter, IterMut, Keys, Values};
pub use stats::ChainStats;
pub use table::BucketMap;
