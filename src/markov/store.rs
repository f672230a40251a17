// Copyright (c) 2025 Quill Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Frequency stores backing the Markov models.
//!
//! A model only needs a small map capability over n-gram counts. Two
//! implementations satisfy it: the open-addressed [`ProbeHashTable`] and a
//! standard `hashbrown::HashMap`. [`CountTable`] holds one of the two, chosen
//! once at construction by a [`StoreKind`].

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::data_structures::probe_hash_table::{
    ProbeHashTable, ProbeHashTableConfig, ProbeHashTableError, Result,
};

/// Map capability over n-gram counts. Absent grams count as zero.
pub trait CountStore {
    /// Returns the count for `gram`, or 0 if it is absent.
    fn count(&self, gram: &str) -> u64;

    /// Sets the count for `gram`.
    fn set(&mut self, gram: &str, count: u64);

    /// Checks whether `gram` holds a count.
    fn contains(&self, gram: &str) -> bool;

    /// Removes `gram`, returning its count.
    ///
    /// # Errors
    ///
    /// `ProbeHashTableError::KeyNotFound` if `gram` is absent.
    fn delete(&mut self, gram: &str) -> Result<u64>;

    /// Returns the number of grams holding a count.
    fn len(&self) -> usize;

    /// Returns whether no gram holds a count.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds one to the count for `gram`, starting absent grams at 1.
    fn increment(&mut self, gram: &str) {
        let next = if self.contains(gram) {
            self.count(gram) + 1
        } else {
            1
        };
        self.set(gram, next);
    }
}

impl CountStore for ProbeHashTable<u64> {
    fn count(&self, gram: &str) -> u64 {
        *self.get(gram)
    }

    fn set(&mut self, gram: &str, count: u64) {
        ProbeHashTable::set(self, gram, count);
    }

    fn contains(&self, gram: &str) -> bool {
        self.contains_key(gram)
    }

    fn delete(&mut self, gram: &str) -> Result<u64> {
        ProbeHashTable::delete(self, gram)
    }

    fn len(&self) -> usize {
        ProbeHashTable::len(self)
    }
}

impl CountStore for HashMap<String, u64> {
    fn count(&self, gram: &str) -> u64 {
        self.get(gram).copied().unwrap_or(0)
    }

    fn set(&mut self, gram: &str, count: u64) {
        match self.get_mut(gram) {
            Some(held) => *held = count,
            None => {
                self.insert(gram.to_owned(), count);
            }
        }
    }

    fn contains(&self, gram: &str) -> bool {
        self.contains_key(gram)
    }

    fn delete(&mut self, gram: &str) -> Result<u64> {
        self.remove(gram)
            .ok_or_else(|| ProbeHashTableError::KeyNotFound(gram.to_owned()))
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

/// Selects which store backs a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StoreKind {
    /// The open-addressed probe hash table
    #[default]
    #[serde(rename = "hashtable")]
    ProbeTable,

    /// A standard hash map
    #[serde(rename = "dict")]
    StandardMap,
}

impl StoreKind {
    /// Maps the `use_custom_store` flag of the entry points to a store kind.
    pub fn from_custom_flag(use_custom_store: bool) -> Self {
        if use_custom_store {
            StoreKind::ProbeTable
        } else {
            StoreKind::StandardMap
        }
    }

    /// Returns the name used in configuration and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::ProbeTable => "hashtable",
            StoreKind::StandardMap => "dict",
        }
    }
}

impl Display for StoreKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "hashtable" => Ok(StoreKind::ProbeTable),
            "dict" => Ok(StoreKind::StandardMap),
            other => Err(format!(
                "store must be either 'hashtable' or 'dict', got '{other}'"
            )),
        }
    }
}

/// A count store of either kind, fixed for its lifetime.
#[derive(Debug, Clone)]
pub enum CountTable {
    /// Counts held in a [`ProbeHashTable`] with default 0
    ProbeTable(ProbeHashTable<u64>),

    /// Counts held in a standard hash map
    StandardMap(HashMap<String, u64>),
}

impl CountTable {
    /// Creates an empty store of the given kind.
    ///
    /// # Arguments
    ///
    /// * `kind` - Which implementation to use.
    /// * `config` - Table parameters, used only by the probe table.
    pub fn new(kind: StoreKind, config: &ProbeHashTableConfig) -> Result<Self> {
        Ok(match kind {
            StoreKind::ProbeTable => {
                CountTable::ProbeTable(ProbeHashTable::with_config(config.clone(), 0)?)
            }
            StoreKind::StandardMap => CountTable::StandardMap(HashMap::new()),
        })
    }

    /// Returns which implementation backs this store.
    pub fn kind(&self) -> StoreKind {
        match self {
            CountTable::ProbeTable(_) => StoreKind::ProbeTable,
            CountTable::StandardMap(_) => StoreKind::StandardMap,
        }
    }
}

impl CountStore for CountTable {
    fn count(&self, gram: &str) -> u64 {
        match self {
            CountTable::ProbeTable(table) => CountStore::count(table, gram),
            CountTable::StandardMap(map) => CountStore::count(map, gram),
        }
    }

    fn set(&mut self, gram: &str, count: u64) {
        match self {
            CountTable::ProbeTable(table) => CountStore::set(table, gram, count),
            CountTable::StandardMap(map) => CountStore::set(map, gram, count),
        }
    }

    fn contains(&self, gram: &str) -> bool {
        match self {
            CountTable::ProbeTable(table) => CountStore::contains(table, gram),
            CountTable::StandardMap(map) => CountStore::contains(map, gram),
        }
    }

    fn delete(&mut self, gram: &str) -> Result<u64> {
        match self {
            CountTable::ProbeTable(table) => CountStore::delete(table, gram),
            CountTable::StandardMap(map) => CountStore::delete(map, gram),
        }
    }

    fn len(&self) -> usize {
        match self {
            CountTable::ProbeTable(table) => CountStore::len(table),
            CountTable::StandardMap(map) => CountStore::len(map),
        }
    }
}
