// Copyright (c) 2025 Quill Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Character-level Markov models for speaker identification.
//!
//! A [`KGramModel`] counts every `k`- and `k + 1`-character window of a
//! reference text, treating the text as circular. It scores an arbitrary string
//! by summing Laplace-smoothed log transition probabilities over that string's
//! own windows. A [`SpeakerClassifier`] normalizes the scores of two models by
//! the sample length and names the more likely speaker.
//!
//! # Example
//!
//! ```
//! use quill_lib::markov::{classify, Speaker};
//!
//! let result = classify("abab", "bbbb", "abab", 1, true).unwrap();
//! assert!(result.score_a > result.score_b);
//! assert_eq!(result.verdict, Speaker::A);
//! ```
//!
//! The counts can live in either the crate's probe hash table or a standard
//! hash map. Both give bit-identical scores; the choice only affects speed.

// Module declarations
mod classifier;
mod error;
mod kgram;
mod model;
mod store;

// Re-exports
pub use classifier::{Identification, Speaker, SpeakerClassifier};
pub use error::{ModelError, Result};
pub use kgram::{windows, KGrams};
pub use model::KGramModel;
pub use store::{CountStore, CountTable, StoreKind};

/// Builds a model of order `k` over `text`.
///
/// # Arguments
///
/// * `k` - Model order.
/// * `text` - Source text; must not be empty.
/// * `use_custom_store` - `true` for the probe hash table, `false` for a standard map.
pub fn new_model(k: usize, text: &str, use_custom_store: bool) -> Result<KGramModel> {
    KGramModel::new(k, text, StoreKind::from_custom_flag(use_custom_store))
}

/// Builds models over `text_a` and `text_b` and identifies the likelier author of `sample`.
///
/// # Returns
///
/// Both normalized scores and the verdict, or an error if either reference
/// text or the sample is empty.
pub fn classify(
    text_a: &str,
    text_b: &str,
    sample: &str,
    k: usize,
    use_custom_store: bool,
) -> Result<Identification> {
    let store = StoreKind::from_custom_flag(use_custom_store);
    SpeakerClassifier::from_texts(text_a, text_b, k, store)?.identify(sample)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_identical_texts_ties_to_a() {
        // Both models score every window of "aaaa" as ln(1) = 0.
        let result = classify("aaaa", "bbbb", "aaaa", 1, true).unwrap();

        assert_eq!(result.score_a, 0.0);
        assert_eq!(result.score_b, 0.0);
        assert_eq!(result.verdict, Speaker::A);
    }

    #[test]
    fn test_classify_matches_across_stores() {
        let a = "it was the best of times, it was the worst of times";
        let b = "call me ishmael. some years ago, never mind how long";
        let sample = "it was the age of wisdom";

        for k in 0..5 {
            let custom = classify(a, b, sample, k, true).unwrap();
            let standard = classify(a, b, sample, k, false).unwrap();
            assert_eq!(custom, standard, "k = {k}");
        }
    }

    #[test]
    fn test_new_model_selects_store() {
        assert_eq!(
            new_model(2, "abc", true).unwrap().store_kind(),
            StoreKind::ProbeTable
        );
        assert_eq!(
            new_model(2, "abc", false).unwrap().store_kind(),
            StoreKind::StandardMap
        );
    }

    #[test]
    fn test_classify_surfaces_empty_inputs() {
        assert_eq!(
            classify("", "abc", "abc", 1, true),
            Err(ModelError::EmptySourceText)
        );
        assert_eq!(
            classify("abc", "abc", "", 1, false),
            Err(ModelError::EmptySample)
        );
    }
}
