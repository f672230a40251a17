// Copyright (c) 2025 Quill Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Character-level k-order Markov model.

use hashbrown::HashSet;
use tracing::debug;

use crate::data_structures::probe_hash_table::ProbeHashTableConfig;
use crate::markov::error::{ModelError, Result};
use crate::markov::kgram::windows;
use crate::markov::store::{CountStore, CountTable, StoreKind};

/// Frequency counts of the `k`- and `k + 1`-grams of a source text.
///
/// The model is immutable once built; scoring never touches the counts.
///
/// # Examples
///
/// ```
/// use quill_lib::markov::{KGramModel, StoreKind};
///
/// let model = KGramModel::new(1, "aaa", StoreKind::ProbeTable).unwrap();
/// assert_eq!(model.count("a"), 3);
/// assert_eq!(model.count("aa"), 3);
/// assert_eq!(model.unique_chars(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct KGramModel {
    k: usize,
    text: String,
    unique_chars: usize,
    counts: CountTable,
}

impl KGramModel {
    /// Builds a model over `text` using the default table parameters.
    ///
    /// # Arguments
    ///
    /// * `k` - Model order.
    /// * `text` - Source text; must not be empty.
    /// * `store` - Backing store for the counts.
    pub fn new(k: usize, text: impl Into<String>, store: StoreKind) -> Result<Self> {
        Self::with_table_config(k, text, store, &ProbeHashTableConfig::default())
    }

    /// Builds a model over `text` with custom probe table parameters.
    ///
    /// # Errors
    ///
    /// * `ModelError::EmptySourceText` if `text` is empty
    /// * `ModelError::Store` if `config` is invalid for the probe table
    pub fn with_table_config(
        k: usize,
        text: impl Into<String>,
        store: StoreKind,
        config: &ProbeHashTableConfig,
    ) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(ModelError::EmptySourceText);
        }

        let mut counts = CountTable::new(store, config)?;
        for (gram, next_gram) in windows(&text, k) {
            counts.increment(&gram);
            counts.increment(&next_gram);
        }

        let unique_chars = text.chars().collect::<HashSet<char>>().len();

        debug!(
            k,
            store = %store,
            unique_chars,
            distinct_grams = counts.len(),
            "Built k-gram model"
        );

        Ok(Self {
            k,
            text,
            unique_chars,
            counts,
        })
    }

    /// Returns the model order.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the number of distinct characters in the source text.
    pub fn unique_chars(&self) -> usize {
        self.unique_chars
    }

    /// Returns which store backs the counts.
    pub fn store_kind(&self) -> StoreKind {
        self.counts.kind()
    }

    /// Returns how often `gram` occurred as a window, 0 if never.
    pub fn count(&self, gram: &str) -> u64 {
        self.counts.count(gram)
    }

    /// Returns the number of distinct grams counted.
    pub fn distinct_grams(&self) -> usize {
        self.counts.len()
    }

    /// Log-probability of `s` under this model, not normalized by length.
    ///
    /// Each wrap-around window pair of `s` contributes
    /// `ln((m + 1) / (n + unique_chars))`, where `m` and `n` are the counts of
    /// its `k + 1`-gram and `k`-gram. More negative means less likely. An empty
    /// `s` scores 0.
    pub fn log_probability(&self, s: &str) -> f64 {
        let vocabulary = self.unique_chars as u64;
        windows(s, self.k).fold(0.0, |total, (gram, next_gram)| {
            let m = self.counts.count(&next_gram);
            let n = self.counts.count(&gram);
            total + ((m + 1) as f64 / (n + vocabulary) as f64).ln()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(StoreKind::ProbeTable ; "probe table")]
    #[test_case(StoreKind::StandardMap ; "standard map")]
    fn test_counts_wrap_around(store: StoreKind) {
        let model = KGramModel::new(1, "aaa", store).unwrap();

        assert_eq!(model.count("a"), 3);
        assert_eq!(model.count("aa"), 3);
        assert_eq!(model.distinct_grams(), 2);
        assert_eq!(model.store_kind(), store);
    }

    #[test_case(StoreKind::ProbeTable ; "probe table")]
    #[test_case(StoreKind::StandardMap ; "standard map")]
    fn test_counts_mixed_text(store: StoreKind) {
        let model = KGramModel::new(2, "abcab", store).unwrap();

        // Windows over "abcab" + "abca": ab bc ca ab ba
        assert_eq!(model.count("ab"), 2);
        assert_eq!(model.count("ba"), 1);
        assert_eq!(model.count("abc"), 1);
        assert_eq!(model.count("aba"), 1);
        assert_eq!(model.count("zz"), 0);
        assert_eq!(model.unique_chars(), 3);
    }

    #[test]
    fn test_order_zero_counts_characters() {
        let model = KGramModel::new(0, "abb", StoreKind::ProbeTable).unwrap();

        assert_eq!(model.count(""), 3);
        assert_eq!(model.count("a"), 1);
        assert_eq!(model.count("b"), 2);
    }

    #[test]
    fn test_empty_source_is_rejected() {
        assert_eq!(
            KGramModel::new(2, "", StoreKind::ProbeTable).unwrap_err(),
            ModelError::EmptySourceText
        );
        assert_eq!(
            KGramModel::new(2, "", StoreKind::StandardMap).unwrap_err(),
            ModelError::EmptySourceText
        );
    }

    #[test]
    fn test_log_probability_of_seen_text() {
        let model = KGramModel::new(1, "aaaa", StoreKind::ProbeTable).unwrap();
        // Every window: ln((4 + 1) / (4 + 1)) = 0
        assert_eq!(model.log_probability("aaaa"), 0.0);
    }

    #[test]
    fn test_log_probability_of_unseen_text() {
        let model = KGramModel::new(1, "ab", StoreKind::ProbeTable).unwrap();
        // Two windows ("z", "zz"): ln((0 + 1) / (0 + 2)) each
        let expected = 2.0 * (0.5f64).ln();
        assert_eq!(model.log_probability("zz"), expected);
    }

    #[test]
    fn test_log_probability_of_empty_sample_is_zero() {
        let model = KGramModel::new(3, "abc", StoreKind::StandardMap).unwrap();
        assert_eq!(model.log_probability(""), 0.0);
    }

    #[test]
    fn test_scoring_does_not_mutate_counts() {
        let model = KGramModel::new(2, "hello there", StoreKind::ProbeTable).unwrap();
        let before = model.distinct_grams();

        model.log_probability("completely different text");

        assert_eq!(model.distinct_grams(), before);
        assert_eq!(model.count("co"), 0);
    }

    #[test]
    fn test_invalid_table_config_surfaces() {
        let config = ProbeHashTableConfig::new().with_load_factor(2.0);
        let result = KGramModel::with_table_config(1, "abc", StoreKind::ProbeTable, &config);
        assert!(matches!(result, Err(ModelError::Store(_))));
    }

    #[test]
    fn test_small_table_grows_during_build() {
        let config = ProbeHashTableConfig::new()
            .with_initial_capacity(1)
            .with_load_factor(0.9)
            .with_growth_factor(1.5);
        let text = "the cat sat on the mat";
        let small =
            KGramModel::with_table_config(2, text, StoreKind::ProbeTable, &config).unwrap();
        let reference = KGramModel::new(2, text, StoreKind::StandardMap).unwrap();

        assert_eq!(small.distinct_grams(), reference.distinct_grams());
        assert_eq!(small.count("at"), reference.count("at"));
        assert_eq!(
            small.log_probability("a cat on a mat"),
            reference.log_probability("a cat on a mat")
        );
    }
}
