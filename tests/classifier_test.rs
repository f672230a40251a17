// Copyright (c) 2025 Quill Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for speaker identification through the public API.

use quill_lib::markov::{ModelError, Speaker, SpeakerClassifier, StoreKind};
use quill_lib::{classify, new_model};

const DICKENS: &str = "It was the best of times, it was the worst of times, it was the age of \
wisdom, it was the age of foolishness, it was the epoch of belief, it was the epoch of incredulity.";

const MELVILLE: &str = "Call me Ishmael. Some years ago, never mind how long precisely, having \
little or no money in my purse, and nothing particular to interest me on shore, I thought I would \
sail about a little and see the watery part of the world.";

const DICKENS_SAMPLE: &str = "it was the season of light, it was the season of darkness";
const MELVILLE_SAMPLE: &str = "I thought I would sail about and see the world";

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-12
}

#[test]
fn test_identifies_each_author() {
    for k in 0..5 {
        for use_custom_store in [true, false] {
            let dickens = classify(DICKENS, MELVILLE, DICKENS_SAMPLE, k, use_custom_store).unwrap();
            assert_eq!(dickens.verdict, Speaker::A, "k = {k}");

            let melville =
                classify(DICKENS, MELVILLE, MELVILLE_SAMPLE, k, use_custom_store).unwrap();
            assert_eq!(melville.verdict, Speaker::B, "k = {k}");
        }
    }
}

#[test]
fn test_known_scores() {
    let result = classify(DICKENS, MELVILLE, DICKENS_SAMPLE, 2, true).unwrap();
    assert!(close(result.score_a, -2.477_330_245_124_033_3));
    assert!(close(result.score_b, -3.085_465_491_782_814));

    let result = classify(DICKENS, MELVILLE, MELVILLE_SAMPLE, 1, false).unwrap();
    assert!(close(result.score_a, -2.958_848_604_245_339_2));
    assert!(close(result.score_b, -2.521_850_182_967_925_4));
}

#[test]
fn test_stores_agree_exactly() {
    for k in 0..6 {
        let custom = classify(DICKENS, MELVILLE, MELVILLE_SAMPLE, k, true).unwrap();
        let standard = classify(DICKENS, MELVILLE, MELVILLE_SAMPLE, k, false).unwrap();
        assert_eq!(custom.score_a.to_bits(), standard.score_a.to_bits());
        assert_eq!(custom.score_b.to_bits(), standard.score_b.to_bits());
        assert_eq!(custom.verdict, standard.verdict);
    }
}

#[test]
fn test_single_character_texts_with_large_order() {
    // "a" at order 5 windows as ("aa", "aa"), so its only key counts twice.
    let result = classify("a", "bc", "a", 5, true).unwrap();
    assert_eq!(result.score_a, 0.0);
    assert!(close(result.score_b, 0.5f64.ln()));
    assert_eq!(result.verdict, Speaker::A);
}

#[test]
fn test_prebuilt_models() {
    let a = new_model(3, DICKENS, true).unwrap();
    let b = new_model(3, MELVILLE, true).unwrap();
    assert_eq!(a.k(), 3);
    assert_eq!(a.text(), DICKENS);

    let classifier = SpeakerClassifier::new(a, b);
    let result = classifier.identify(DICKENS_SAMPLE).unwrap();
    assert_eq!(result.verdict, Speaker::A);
    assert_eq!(classifier.speaker_b().store_kind(), StoreKind::ProbeTable);
}

#[test]
fn test_empty_inputs_are_errors() {
    assert_eq!(
        new_model(2, "", true).unwrap_err(),
        ModelError::EmptySourceText
    );
    assert_eq!(
        classify(DICKENS, MELVILLE, "", 2, true).unwrap_err(),
        ModelError::EmptySample
    );
}
