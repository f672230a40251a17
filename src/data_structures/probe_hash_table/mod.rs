// Copyright (c) 2025 Quill Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Probe hash table: an open-addressed map with linear probing.
//!
//! A fixed-capacity table of slots keyed by strings, used as the frequency store
//! behind the Markov models. Collisions are resolved by scanning forward one slot
//! at a time, deletions leave tombstones so probe chains stay intact, and the
//! table rebuilds itself at a larger capacity once enough slots are occupied.
//!
//! # Features
//!
//! - Polynomial (Horner's rule) hashing over code points, base 37
//! - Configurable initial capacity, load factor and growth factor
//! - Lazy deletion with tombstones, cleared on rehash
//! - Caller-supplied default for absent keys
//! - Single-owner; no interior mutability and no locking
//!
//! # Example
//!
//! ```
//! use quill_lib::data_structures::probe_hash_table::{ProbeHashTable, ProbeHashTableConfig};
//!
//! // Absent keys read as the default value
//! let mut table = ProbeHashTable::<u64>::new(0);
//! assert_eq!(*table.get("th"), 0);
//!
//! table.set("th", 3);
//! assert_eq!(*table.get("th"), 3);
//!
//! // Deleting twice fails the second time
//! assert_eq!(table.delete("th"), Ok(3));
//! assert!(table.delete("th").is_err());
//!
//! // Custom parameters are validated at construction
//! let config = ProbeHashTableConfig::new()
//!     .with_initial_capacity(8)
//!     .with_load_factor(0.75)
//!     .with_growth_factor(2.0);
//! let table = ProbeHashTable::<u64>::with_config(config, 0).unwrap();
//! assert_eq!(table.capacity(), 8);
//! ```
//!
//! # Rehashing
//!
//! Every slot that has ever been filled counts towards the load factor, deleted
//! or not. When that count reaches `capacity * load_factor` the table allocates
//! `ceil(capacity * growth_factor)` slots and re-inserts only the live entries.

// Module declarations
mod config;
mod error;
mod hash;
mod table;

// Re-exports
pub use config::{
    ProbeHashTableConfig, DEFAULT_GROWTH_FACTOR, DEFAULT_INITIAL_CAPACITY, DEFAULT_LOAD_FACTOR,
};
pub use error::{ProbeHashTableError, Result};
pub use hash::polynomial_hash;
pub use table::ProbeHashTable;
