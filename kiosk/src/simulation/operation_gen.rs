//! Seeded random generation of catalog operations.
//!
//! Titles, authors and publishers are drawn from small pools so that
//! duplicate inserts, hits on existing keys and key collisions during a
//! rebuild all happen regularly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{Book, SortOrder};

const TITLES: &[&str] = &[
    "Dune", "1984", "Emma", "Beloved", "Ulysses", "Solaris", "Middlemarch", "Hamlet", "Ivanhoe",
    "Kindred", "Lolita", "Nostromo", "Persuasion", "Rebecca", "Walden", "",
];
const AUTHORS: &[&str] = &[
    "Frank Herbert",
    "George Orwell",
    "Jane Austen",
    "Toni Morrison",
    "James Joyce",
    "Stanislaw Lem",
    "",
];
const PUBLISHERS: &[&str] = &["Penguin", "Vintage", "Chilton Books", "John Murray", ""];

/// A single operation against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Insert(Book),
    Delete(String),
    Search(String),
    Rekey(SortOrder),
}

/// Relative weights of each operation kind.
#[derive(Debug, Clone)]
pub struct OperationGenConfig {
    pub insert_weight: u32,
    pub delete_weight: u32,
    pub search_weight: u32,
    pub rekey_weight: u32,
    /// Probability that a delete or search targets a key known to exist.
    pub existing_key_rate: f64,
}

impl Default for OperationGenConfig {
    fn default() -> Self {
        Self {
            insert_weight: 50,
            delete_weight: 25,
            search_weight: 20,
            rekey_weight: 5,
            existing_key_rate: 0.8,
        }
    }
}

/// Reproducible generator of catalog operations.
pub struct OperationGenerator {
    rng: StdRng,
    config: OperationGenConfig,
}

impl OperationGenerator {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, OperationGenConfig::default())
    }

    #[must_use]
    pub fn with_config(seed: u64, config: OperationGenConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            config,
        }
    }

    /// Generate the next operation.
    ///
    /// `existing_keys` are keys currently indexed; deletes and searches
    /// mostly pick from them.
    pub fn next_operation(&mut self, existing_keys: &[String]) -> Operation {
        let OperationGenConfig {
            insert_weight,
            delete_weight,
            search_weight,
            rekey_weight,
            ..
        } = self.config;
        let total = insert_weight + delete_weight + search_weight + rekey_weight;
        let mut roll = self.rng.random_range(0..total.max(1));

        if roll < insert_weight {
            return Operation::Insert(self.random_book());
        }
        roll -= insert_weight;
        if roll < delete_weight {
            return Operation::Delete(self.random_key(existing_keys));
        }
        roll -= delete_weight;
        if roll < search_weight {
            return Operation::Search(self.random_key(existing_keys));
        }

        let order = SortOrder::ALL[self.rng.random_range(0..SortOrder::ALL.len())];
        Operation::Rekey(order)
    }

    fn random_book(&mut self) -> Book {
        Book::new(
            self.pick(TITLES),
            self.pick(AUTHORS),
            self.rng.random_range(0..=1500),
            self.pick(PUBLISHERS),
        )
    }

    fn random_key(&mut self, existing_keys: &[String]) -> String {
        if !existing_keys.is_empty() && self.rng.random_bool(self.config.existing_key_rate) {
            return existing_keys[self.rng.random_range(0..existing_keys.len())].clone();
        }
        // Mostly misses, but a pool title can still hit under title order.
        self.pick(TITLES).to_string()
    }

    fn pick(&mut self, pool: &[&'static str]) -> &'static str {
        pool[self.rng.random_range(0..pool.len())]
    }
}
