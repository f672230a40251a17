// Copyright (c) 2025 Quill Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Two-speaker identification over normalized log-probabilities.

use std::fmt::{Display, Formatter};

use tracing::debug;

use crate::markov::error::{ModelError, Result};
use crate::markov::model::KGramModel;
use crate::markov::store::StoreKind;

/// One of the two candidate speakers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Speaker {
    /// The speaker behind the first reference text
    A,
    /// The speaker behind the second reference text
    B,
}

impl Speaker {
    fn label(self) -> char {
        match self {
            Speaker::A => 'A',
            Speaker::B => 'B',
        }
    }
}

impl Display for Speaker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Outcome of comparing two models on one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Identification {
    /// Log-probability of the sample under speaker A's model, per character
    pub score_a: f64,
    /// Log-probability of the sample under speaker B's model, per character
    pub score_b: f64,
    /// The more likely speaker; ties go to A
    pub verdict: Speaker,
}

/// Compares a sample against the models of two speakers.
#[derive(Debug, Clone)]
pub struct SpeakerClassifier {
    speaker_a: KGramModel,
    speaker_b: KGramModel,
}

impl SpeakerClassifier {
    /// Creates a classifier from two prebuilt models.
    pub fn new(speaker_a: KGramModel, speaker_b: KGramModel) -> Self {
        Self {
            speaker_a,
            speaker_b,
        }
    }

    /// Builds both models at order `k` over the given reference texts.
    pub fn from_texts(text_a: &str, text_b: &str, k: usize, store: StoreKind) -> Result<Self> {
        Ok(Self::new(
            KGramModel::new(k, text_a, store)?,
            KGramModel::new(k, text_b, store)?,
        ))
    }

    /// Returns speaker A's model.
    pub fn speaker_a(&self) -> &KGramModel {
        &self.speaker_a
    }

    /// Returns speaker B's model.
    pub fn speaker_b(&self) -> &KGramModel {
        &self.speaker_b
    }

    /// Scores `sample` under both models and picks the more likely speaker.
    ///
    /// Each score is the model's log-probability of `sample` divided by the
    /// sample's length in characters.
    ///
    /// # Errors
    ///
    /// * `ModelError::EmptySample` if `sample` is empty
    /// * `ModelError::UndefinedScore` if either score is not finite
    pub fn identify(&self, sample: &str) -> Result<Identification> {
        let length = sample.chars().count();
        if length == 0 {
            return Err(ModelError::EmptySample);
        }

        let score_a = normalized_score(&self.speaker_a, sample, length, Speaker::A)?;
        let score_b = normalized_score(&self.speaker_b, sample, length, Speaker::B)?;
        let verdict = if score_a >= score_b {
            Speaker::A
        } else {
            Speaker::B
        };

        debug!(score_a, score_b, %verdict, sample_chars = length, "Identified speaker");

        Ok(Identification {
            score_a,
            score_b,
            verdict,
        })
    }
}

fn normalized_score(
    model: &KGramModel,
    sample: &str,
    length: usize,
    speaker: Speaker,
) -> Result<f64> {
    let score = model.log_probability(sample) / length as f64;
    if score.is_finite() {
        Ok(score)
    } else {
        Err(ModelError::UndefinedScore {
            speaker: speaker.label(),
            score,
        })
    }
}
