//! Data structures for Quill.
//!
//! This module contains the specialized containers the Markov models are
//! built on. All implementations are single-owner and free of unsafe code.

pub mod probe_hash_table;

// Re-export common data structures
pub use probe_hash_table::{ProbeHashTable, ProbeHashTableConfig, ProbeHashTableError};
