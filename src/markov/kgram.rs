// Copyright (c) 2025 Quill Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Wrap-around k-gram windows.
//!
//! A text is treated as circular: its first `2k` characters (or the whole text,
//! if shorter) are appended to its end, and one `k`-window and one
//! `k + 1`-window are cut at every original position. Windows are clipped at
//! the end of the extended text, so a text shorter than `k` yields windows
//! shorter than `k`.

/// Iterator over `(k-gram, k+1-gram)` pairs, one per character of the text.
#[derive(Debug, Clone)]
pub struct KGrams {
    extended: Vec<char>,
    positions: usize,
    k: usize,
    next: usize,
}

impl KGrams {
    /// Creates the window iterator for `text` at order `k`.
    pub fn new(text: &str, k: usize) -> Self {
        let mut extended: Vec<char> = text.chars().collect();
        let positions = extended.len();
        let wrap = positions.min(k.saturating_mul(2));
        extended.extend_from_within(..wrap);

        Self {
            extended,
            positions,
            k,
            next: 0,
        }
    }

    fn window(&self, start: usize, width: usize) -> String {
        let end = start.saturating_add(width).min(self.extended.len());
        self.extended[start..end].iter().collect()
    }
}

impl Iterator for KGrams {
    type Item = (String, String);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.positions {
            return None;
        }
        let start = self.next;
        self.next += 1;
        Some((self.window(start, self.k), self.window(start, self.k + 1)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.positions - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for KGrams {}

/// Returns the `(k-gram, k+1-gram)` pairs of `text`.
pub fn windows(text: &str, k: usize) -> KGrams {
    KGrams::new(text, k)
}
