// Copyright (c) 2025 Quill Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Implementation of the open-addressed probe hash table.
//!
//! Slots live in a single `Vec`. A key is placed at the first slot in its
//! linear probe sequence that is either empty or already holds that key, so a
//! key never appears past an empty slot of its own sequence. Deletion only
//! flips a slot to a tombstone; slots return to `Empty` solely through a
//! rehash, which rebuilds the table from the live entries.

use tracing::debug;

use crate::data_structures::probe_hash_table::config::ProbeHashTableConfig;
use crate::data_structures::probe_hash_table::error::{ProbeHashTableError, Result};
use crate::data_structures::probe_hash_table::hash::{polynomial_hash, probe_sequence};

/// A single cell of the table.
#[derive(Debug, Clone)]
enum Slot<V> {
    /// Never written since the last construction or rehash
    Empty,

    /// Written at least once. `live == false` marks a tombstone.
    Occupied { key: String, value: V, live: bool },
}

impl<V> Slot<V> {
    /// True when this slot ends a probe for `key`: it is empty or holds `key`.
    fn stops_probe_for(&self, key: &str) -> bool {
        match self {
            Slot::Empty => true,
            Slot::Occupied { key: held, .. } => held == key,
        }
    }
}

/// A single-owner, open-addressed hash table from string keys to values.
///
/// Absent keys read as a caller-supplied default value, so a key explicitly set
/// to the default cannot be told apart from an absent key through [`get`].
/// Use [`lookup`] or [`contains_key`] when presence matters.
///
/// # Type Parameters
///
/// * `V` - The value type. Must implement `Clone` so deleted values can be
///   handed back and the default can be shared.
///
/// [`get`]: ProbeHashTable::get
/// [`lookup`]: ProbeHashTable::lookup
/// [`contains_key`]: ProbeHashTable::contains_key
#[derive(Debug, Clone)]
pub struct ProbeHashTable<V: Clone> {
    /// Slot storage; its length is the capacity
    slots: Vec<Slot<V>>,

    /// Load and growth parameters
    config: ProbeHashTableConfig,

    /// Value returned for absent keys
    default: V,

    /// Live entries
    len: usize,

    /// Occupied slots, tombstones included. Drives the rehash check.
    inserted: usize,

    /// Number of rehashes performed since construction
    rehashes: usize,
}

impl<V: Clone> ProbeHashTable<V> {
    /// Creates an empty table with the default configuration.
    ///
    /// # Arguments
    ///
    /// * `default` - Value returned by [`get`](Self::get) for absent keys.
    pub fn new(default: V) -> Self {
        Self::build(ProbeHashTableConfig::default(), default)
    }

    /// Creates an empty table with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Capacity, load factor and growth factor.
    /// * `default` - Value returned by [`get`](Self::get) for absent keys.
    ///
    /// # Returns
    ///
    /// The table, or `ProbeHashTableError::InvalidConfiguration` if any
    /// parameter is out of range.
    pub fn with_config(config: ProbeHashTableConfig, default: V) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, default))
    }

    fn build(config: ProbeHashTableConfig, default: V) -> Self {
        Self {
            slots: empty_slots(config.initial_capacity),
            config,
            default,
            len: 0,
            inserted: 0,
            rehashes: 0,
        }
    }

    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the table holds no live entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of occupied slots, tombstones included.
    pub fn inserted(&self) -> usize {
        self.inserted
    }

    /// Returns the number of rehashes performed so far.
    pub fn rehash_count(&self) -> usize {
        self.rehashes
    }

    /// Returns the value reported for absent keys.
    pub fn default_value(&self) -> &V {
        &self.default
    }

    /// Calculates the fraction of slots that are occupied, tombstones included.
    pub fn load(&self) -> f64 {
        self.inserted as f64 / self.capacity() as f64
    }

    /// Returns the home slot of `key` at the current capacity.
    pub fn hash(&self, key: &str) -> usize {
        polynomial_hash(key, self.capacity())
    }

    /// Finds the first slot in `key`'s probe sequence that is empty or holds `key`.
    fn probe(&self, key: &str) -> Option<usize> {
        probe_sequence(self.hash(key), self.capacity())
            .find(|&index| self.slots[index].stops_probe_for(key))
    }

    /// Finds the slot holding a live entry for `key`.
    fn find_live(&self, key: &str) -> Option<usize> {
        self.probe(key).filter(|&index| {
            matches!(self.slots[index], Slot::Occupied { live: true, .. })
        })
    }

    /// Associates `value` with `key`, replacing any previous value.
    ///
    /// Setting a key whose slot is a tombstone revives that slot in place.
    /// Filling an empty slot counts towards the load factor and may trigger a
    /// rehash before this call returns.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to set.
    /// * `value` - The value to associate with the key.
    pub fn set(&mut self, key: &str, value: V) {
        let index = loop {
            match self.probe(key) {
                Some(index) => break index,
                // Every slot holds some other key.
                None => self.rehash(),
            }
        };

        let slot = &mut self.slots[index];
        match slot {
            Slot::Empty => {
                *slot = Slot::Occupied {
                    key: key.to_owned(),
                    value,
                    live: true,
                };
                self.len += 1;
                self.inserted += 1;
            }
            Slot::Occupied {
                value: held, live, ..
            } => {
                *held = value;
                if !*live {
                    *live = true;
                    self.len += 1;
                }
            }
        }

        if self.needs_rehash() {
            self.rehash();
        }
    }

    /// Gets the value associated with `key`.
    ///
    /// # Returns
    ///
    /// The live value for `key`, or the table's default if the key was never
    /// set or has been deleted.
    pub fn get(&self, key: &str) -> &V {
        self.lookup(key).unwrap_or(&self.default)
    }

    /// Gets the value associated with `key`, distinguishing absence.
    ///
    /// # Returns
    ///
    /// `Some(value)` if `key` is live, `None` otherwise.
    pub fn lookup(&self, key: &str) -> Option<&V> {
        let index = self.find_live(key)?;
        match &self.slots[index] {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Empty => None,
        }
    }

    /// Checks if `key` holds a live entry.
    pub fn contains_key(&self, key: &str) -> bool {
        self.find_live(key).is_some()
    }

    /// Marks the entry for `key` as deleted.
    ///
    /// The slot becomes a tombstone and keeps counting towards the load factor
    /// until the next rehash.
    ///
    /// # Returns
    ///
    /// The removed value, or `ProbeHashTableError::KeyNotFound` if `key` is
    /// absent or already deleted.
    pub fn delete(&mut self, key: &str) -> Result<V> {
        let index = self
            .find_live(key)
            .ok_or_else(|| ProbeHashTableError::KeyNotFound(key.to_owned()))?;

        match &mut self.slots[index] {
            Slot::Occupied { value, live, .. } => {
                *live = false;
                self.len -= 1;
                Ok(value.clone())
            }
            Slot::Empty => Err(ProbeHashTableError::KeyNotFound(key.to_owned())),
        }
    }

    fn needs_rehash(&self) -> bool {
        self.inserted as f64 >= self.capacity() as f64 * self.config.load_factor
    }

    /// Rebuilds the table at a larger capacity, dropping tombstones.
    ///
    /// The new capacity is grown by the growth factor until the live entries
    /// alone sit below the load threshold, so the rebuild never re-triggers.
    fn rehash(&mut self) {
        let old_capacity = self.capacity();
        let mut new_capacity = grow(old_capacity, self.config.growth_factor);
        while self.len as f64 >= new_capacity as f64 * self.config.load_factor {
            new_capacity = grow(new_capacity, self.config.growth_factor);
        }

        let old_slots = std::mem::replace(&mut self.slots, empty_slots(new_capacity));
        let tombstones = self.inserted - self.len;
        self.len = 0;
        self.inserted = 0;

        for slot in old_slots {
            if let Slot::Occupied {
                key,
                value,
                live: true,
            } = slot
            {
                self.place(key, value);
            }
        }

        self.rehashes += 1;
        debug!(
            old_capacity,
            new_capacity,
            live = self.len,
            dropped_tombstones = tombstones,
            "Rehashed probe hash table"
        );
    }

    /// Inserts a key known to be absent without checking the load factor.
    fn place(&mut self, key: String, value: V) {
        if let Some(index) = self.probe(&key) {
            self.slots[index] = Slot::Occupied {
                key,
                value,
                live: true,
            };
            self.len += 1;
            self.inserted += 1;
        }
    }
}

impl<V: Clone + Default> Default for ProbeHashTable<V> {
    fn default() -> Self {
        Self::new(V::default())
    }
}

fn empty_slots<V>(capacity: usize) -> Vec<Slot<V>> {
    (0..capacity).map(|_| Slot::Empty).collect()
}

/// Computes `ceil(capacity * growth_factor)`, always strictly larger than `capacity`.
fn grow(capacity: usize, growth_factor: f64) -> usize {
    ((capacity as f64 * growth_factor).ceil() as usize).max(capacity + 1)
}
