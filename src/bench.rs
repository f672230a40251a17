//! Store timing comparison.
//!
//! Times end-to-end classification with each backing store across a range of
//! model orders, so the probe hash table can be compared with a standard map.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::error::{QuillError, QuillResult};
use crate::markov::{SpeakerClassifier, StoreKind};

/// Mean wall-clock time of one classification for a given store and order.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreTiming {
    /// Backing store that was timed
    pub store: StoreKind,
    /// Model order
    pub k: usize,
    /// Mean duration over all runs
    pub mean: Duration,
}

/// Times classification of `sample` for every order in `0..=max_k`.
///
/// Each (order, store) pair is run `runs` times; the probe table run and the
/// standard map run alternate within each repetition.
///
/// # Returns
///
/// One [`StoreTiming`] per order and store, probe table first, or an error if
/// `runs` is zero or any classification fails.
pub fn compare_stores(
    text_a: &str,
    text_b: &str,
    sample: &str,
    max_k: usize,
    runs: u32,
) -> QuillResult<Vec<StoreTiming>> {
    if runs == 0 {
        return Err(QuillError::Custom("runs must be at least 1".to_string()));
    }

    let stores = [StoreKind::ProbeTable, StoreKind::StandardMap];
    let mut timings = Vec::with_capacity((max_k + 1) * stores.len());

    for k in 0..=max_k {
        let mut totals = [Duration::ZERO; 2];
        for run in 1..=runs {
            for (total, store) in totals.iter_mut().zip(stores) {
                let started = Instant::now();
                SpeakerClassifier::from_texts(text_a, text_b, k, store)?.identify(sample)?;
                let elapsed = started.elapsed();
                debug!(k, run, %store, ?elapsed, "Timed classification");
                *total += elapsed;
            }
        }

        for (total, store) in totals.into_iter().zip(stores) {
            let mean = total / runs;
            info!(k, %store, ?mean, "Mean classification time");
            timings.push(StoreTiming { store, k, mean });
        }
    }

    Ok(timings)
}
