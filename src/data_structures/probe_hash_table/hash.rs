// Copyright (c) 2025 Quill Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Polynomial string hash for the probe hash table.
//!
//! Keys are hashed with Horner's rule over their code points. The running value
//! is reduced modulo the capacity after every step, which keeps it below
//! `capacity` and yields the same index as reducing the full polynomial once.

/// Base of the hash polynomial.
pub const POLYNOMIAL_BASE: u64 = 37;

/// Computes the home slot of `key` in a table of `capacity` slots.
///
/// # Arguments
///
/// * `key` - The key to hash.
/// * `capacity` - Number of slots; must be non-zero.
///
/// # Returns
///
/// An index in `0..capacity`. The empty string maps to 0.
pub fn polynomial_hash(key: &str, capacity: usize) -> usize {
    debug_assert!(capacity > 0, "capacity must be non-zero");
    let modulus = capacity as u64;
    key.chars().fold(0u64, |acc, ch| {
        (POLYNOMIAL_BASE * acc + u64::from(ch)) % modulus
    }) as usize
}

/// Yields the linear probe sequence for a home slot: `home, home+1, ...`
/// wrapping around, visiting every slot exactly once.
pub fn probe_sequence(home: usize, capacity: usize) -> impl Iterator<Item = usize> {
    (0..capacity).map(move |offset| (home + offset) % capacity)
}
