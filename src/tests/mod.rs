//! Test modules for Quill.
//!
//! This module contains cross-component tests:
//! - Configuration loading and validation
//! - Error conversion and reporting
//! - Property-based tests of the probe hash table against a reference map
//! - Property-based tests of the Markov layer across backing stores
//!
//! Unit tests for a single component live beside that component.

pub mod error_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{create_test_dir, key_strategy, text_strategy, TestFixture};
