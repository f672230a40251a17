//! Quill Library
//!
//! Speaker identification with character-level Markov models. Two reference
//! texts each train a k-order model; a sample text is scored under both, and
//! the model that assigns it the higher per-character log-probability names
//! the likelier author.
//!
//! # Architecture
//!
//! Data flows one way:
//! - [`data_structures::probe_hash_table`] stores n-gram counts in an
//!   open-addressed table with linear probing and tombstone deletion
//! - [`markov::KGramModel`] counts wrap-around windows of a text and scores
//!   strings with Laplace smoothing
//! - [`markov::SpeakerClassifier`] normalizes two scores and picks a speaker
//!
//! The binary wraps these with file input, configuration and logging.

// Re-export public modules
pub mod bench;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod markov;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use markov::{classify, new_model};

/// Version information for Quill.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
