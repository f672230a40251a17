// Copyright (c) 2025 Quill Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration options for the probe hash table.

use serde::{Deserialize, Serialize};

use crate::data_structures::probe_hash_table::error::{ProbeHashTableError, Result};

/// Number of slots allocated by a default table.
pub const DEFAULT_INITIAL_CAPACITY: usize = 57;

/// Fraction of raw insertions to capacity that triggers a rehash.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.5;

/// Multiplier applied to the capacity on every rehash.
pub const DEFAULT_GROWTH_FACTOR: f64 = 2.0;

/// Configuration for the probe hash table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeHashTableConfig {
    /// Number of slots allocated at construction. Must be at least 1.
    pub initial_capacity: usize,

    /// Rehash threshold as a fraction of capacity, in (0, 1].
    /// Tombstones count towards this threshold until the next rehash.
    pub load_factor: f64,

    /// Capacity multiplier applied on rehash. Must be greater than 1.
    pub growth_factor: f64,
}

impl ProbeHashTableConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial number of slots.
    ///
    /// # Arguments
    ///
    /// * `initial_capacity` - The number of slots allocated at construction.
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Sets the load factor that triggers a rehash.
    ///
    /// # Arguments
    ///
    /// * `load_factor` - Threshold fraction in (0, 1].
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Sets the growth factor applied on rehash.
    ///
    /// # Arguments
    ///
    /// * `growth_factor` - Capacity multiplier, greater than 1.
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_growth_factor(mut self, growth_factor: f64) -> Self {
        self.growth_factor = growth_factor;
        self
    }

    /// Checks that every parameter is in range.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration can build a table
    /// * `Err(ProbeHashTableError::InvalidConfiguration)` naming the first bad parameter
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity < 1 {
            return Err(ProbeHashTableError::InvalidConfiguration(
                "initial_capacity must be at least 1".to_string(),
            ));
        }

        if !self.load_factor.is_finite() || self.load_factor <= 0.0 || self.load_factor > 1.0 {
            return Err(ProbeHashTableError::InvalidConfiguration(format!(
                "load_factor must be in (0, 1], got {}",
                self.load_factor
            )));
        }

        if !self.growth_factor.is_finite() || self.growth_factor <= 1.0 {
            return Err(ProbeHashTableError::InvalidConfiguration(format!(
                "growth_factor must be greater than 1, got {}",
                self.growth_factor
            )));
        }

        Ok(())
    }
}

impl Default for ProbeHashTableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ProbeHashTableConfig::default();
        assert_eq!(config.initial_capacity, 57);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = ProbeHashTableConfig::new()
            .with_initial_capacity(8)
            .with_load_factor(1.0)
            .with_growth_factor(1.5);

        assert_eq!(config.initial_capacity, 8);
        assert_eq!(config.load_factor, 1.0);
        assert_eq!(config.growth_factor, 1.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_parameters() {
        let base = ProbeHashTableConfig::new();

        assert!(base.clone().with_initial_capacity(0).validate().is_err());
        assert!(base.clone().with_load_factor(0.0).validate().is_err());
        assert!(base.clone().with_load_factor(1.01).validate().is_err());
        assert!(base.clone().with_load_factor(f64::NAN).validate().is_err());
        assert!(base.clone().with_growth_factor(1.0).validate().is_err());
        assert!(base.clone().with_growth_factor(f64::INFINITY).validate().is_err());
    }
}
