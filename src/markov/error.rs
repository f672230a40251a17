// Copyright (c) 2025 Quill Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for model construction and scoring.

use crate::data_structures::probe_hash_table::ProbeHashTableError;

/// Errors that can occur while building or scoring Markov models.
#[derive(Debug, thiserror::Error, PartialEq, Clone)]
pub enum ModelError {
    /// A model was requested over an empty source text
    #[error("Source text is empty; a model needs at least one character")]
    EmptySourceText,

    /// A sample of length zero cannot be normalized
    #[error("Sample text is empty; scores are normalized by its length")]
    EmptySample,

    /// A normalized score came out as NaN or infinite
    #[error("Score for speaker {speaker} is undefined: {score}")]
    UndefinedScore {
        /// Which speaker's model produced the score
        speaker: char,
        /// The offending value
        score: f64,
    },

    /// The backing store rejected an operation
    #[error("Count store error: {0}")]
    Store(#[from] ProbeHashTableError),
}

/// Result type for Markov model operations
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ModelError::EmptySample.to_string(),
            "Sample text is empty; scores are normalized by its length"
        );

        let err = ModelError::UndefinedScore {
            speaker: 'B',
            score: f64::NEG_INFINITY,
        };
        assert_eq!(err.to_string(), "Score for speaker B is undefined: -inf");
    }

    #[test]
    fn test_store_errors_convert() {
        let err: ModelError = ProbeHashTableError::KeyNotFound("ab".to_string()).into();
        assert!(matches!(err, ModelError::Store(_)));
    }
}
