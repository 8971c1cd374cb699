//! Main simulator harness for deterministic simulation testing.
//!
//! Drives a catalog index with generated operations while maintaining a
//! `BTreeMap` reference model keyed the same way, and checks invariants
//! after every operation.

use std::collections::BTreeMap;

use super::invariants::{InvariantChecker, InvariantViolation};
use super::operation_gen::{Operation, OperationGenConfig, OperationGenerator};
use crate::index::{Insertion, KeySelector, KeyedTree};
use crate::types::{Book, SortOrder};

/// Configuration for the simulator.
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Random seed for reproducibility.
    pub seed: u64,
    /// Operation generation configuration.
    pub operation_config: OperationGenConfig,
    /// Run the full structural check after every operation rather than only
    /// after mutations.
    pub check_every_operation: bool,
}

impl SimulatorConfig {
    /// Create a new simulator config with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            operation_config: OperationGenConfig::default(),
            check_every_operation: false,
        }
    }

    /// Set the operation generation configuration.
    #[must_use]
    pub const fn with_operation_config(mut self, config: OperationGenConfig) -> Self {
        self.operation_config = config;
        self
    }

    /// Check invariants after reads as well as writes.
    #[must_use]
    pub const fn checking_every_operation(mut self) -> Self {
        self.check_every_operation = true;
        self
    }
}

/// Results from a simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationStats {
    pub operations: usize,
    pub inserted: usize,
    pub duplicates: usize,
    pub deleted: usize,
    pub delete_misses: usize,
    pub search_hits: usize,
    pub search_misses: usize,
    pub rekeys: usize,
    pub displaced: usize,
    pub final_len: usize,
}

/// Results from a simulation run.
#[derive(Debug)]
pub struct SimulationResult {
    /// The seed used for this simulation.
    pub seed: u64,
    pub stats: SimulationStats,
    /// Invariant violations detected.
    pub invariant_violations: Vec<InvariantViolation>,
}

impl SimulationResult {
    /// Check if the simulation passed (no invariant violations).
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.invariant_violations.is_empty()
    }
}

/// The main simulator harness.
pub struct Simulator {
    config: SimulatorConfig,
    generator: OperationGenerator,
    checker: InvariantChecker,
    tree: KeyedTree<Book>,
    model: BTreeMap<String, Book>,
    model_selector: KeySelector<Book>,
    stats: SimulationStats,
}

impl Simulator {
    /// Create a new simulator with the given configuration.
    #[must_use]
    pub fn new(config: SimulatorConfig) -> Self {
        let generator = OperationGenerator::with_config(config.seed, config.operation_config.clone());

        Self {
            config,
            generator,
            checker: InvariantChecker::new(),
            tree: KeyedTree::new(SortOrder::Title.key_selector()),
            model: BTreeMap::new(),
            model_selector: SortOrder::Title.key_selector(),
            stats: SimulationStats {
                operations: 0,
                inserted: 0,
                duplicates: 0,
                deleted: 0,
                delete_misses: 0,
                search_hits: 0,
                search_misses: 0,
                rekeys: 0,
                displaced: 0,
                final_len: 0,
            },
        }
    }

    /// Run the simulation for a given number of operations.
    pub fn run(&mut self, operation_count: usize) -> SimulationResult {
        tracing::debug!(seed = self.config.seed, operation_count, "starting simulation");

        for _ in 0..operation_count {
            let keys: Vec<String> = self.model.keys().cloned().collect();
            let operation = self.generator.next_operation(&keys);
            self.apply(operation);
        }

        self.stats.final_len = self.tree.len();
        let invariant_violations = self.checker.take_violations();
        if !invariant_violations.is_empty() {
            tracing::warn!(
                seed = self.config.seed,
                violations = invariant_violations.len(),
                "simulation found invariant violations"
            );
        }

        SimulationResult {
            seed: self.config.seed,
            stats: self.stats.clone(),
            invariant_violations,
        }
    }

    /// The index under test.
    #[must_use]
    pub const fn tree(&self) -> &KeyedTree<Book> {
        &self.tree
    }

    fn apply(&mut self, operation: Operation) {
        let index = self.stats.operations;
        self.stats.operations += 1;

        let mutated = match operation {
            Operation::Insert(book) => {
                self.insert(book, index);
                true
            }
            Operation::Delete(key) => {
                self.delete(&key, index);
                true
            }
            Operation::Search(key) => {
                self.search(&key, index);
                false
            }
            Operation::Rekey(order) => {
                self.rekey(order, index);
                true
            }
        };

        if mutated || self.config.check_every_operation {
            self.checker.check_structure(&self.tree, index);
            self.checker.check_against_model(&self.tree, &self.model, index);
        }
    }

    fn insert(&mut self, book: Book, index: usize) {
        let key = self.model_selector.key(&book);
        let expect_duplicate = self.model.contains_key(&key);

        match self.tree.insert(book.clone()) {
            Insertion::Inserted if !expect_duplicate => {
                self.model.insert(key, book);
                self.stats.inserted += 1;
            }
            Insertion::Duplicate(rejected) if expect_duplicate => {
                if rejected != book {
                    self.mismatch("Duplicate insert handed back a different record", index, &key);
                }
                self.stats.duplicates += 1;
            }
            _ => self.mismatch("Insert outcome disagrees with model", index, &key),
        }
    }

    fn delete(&mut self, key: &str, index: usize) {
        let expected = self.model.remove(key);
        let removed = self.tree.delete(key);
        if removed != expected {
            self.mismatch("Delete returned a different record than the model", index, key);
        }
        if removed.is_some() {
            self.stats.deleted += 1;
        } else {
            self.stats.delete_misses += 1;
        }
    }

    fn search(&mut self, key: &str, index: usize) {
        let found = self.tree.search(key);
        let agrees = found == self.model.get(key);
        let hit = found.is_some();
        if !agrees {
            self.mismatch("Search disagrees with model", index, key);
        }
        if hit {
            self.stats.search_hits += 1;
        } else {
            self.stats.search_misses += 1;
        }
    }

    fn rekey(&mut self, order: SortOrder, index: usize) {
        let before = self.tree.len();
        let rekey = self.tree.change_key(order.primary(), order.fallback());

        // The model rebuilds the same way: old key order, first key wins.
        self.model_selector = order.key_selector();
        let snapshot = std::mem::take(&mut self.model);
        let mut expected_displaced = 0;
        for book in snapshot.into_values() {
            let key = self.model_selector.key(&book);
            if self.model.contains_key(&key) {
                expected_displaced += 1;
            } else {
                self.model.insert(key, book);
            }
        }

        if rekey.displaced.len() != expected_displaced
            || rekey.reindexed + rekey.displaced.len() != before
        {
            self.checker.add_violation(InvariantViolation {
                description: "Rebuild lost or invented records".to_string(),
                operation_index: index,
                context: format!(
                    "{before} before, {} reindexed, {} displaced, model displaced {expected_displaced}",
                    rekey.reindexed,
                    rekey.displaced.len()
                ),
            });
        }

        self.stats.rekeys += 1;
        self.stats.displaced += rekey.displaced.len();
    }

    fn mismatch(&mut self, description: &str, operation_index: usize, key: &str) {
        self.checker.add_violation(InvariantViolation {
            description: description.to_string(),
            operation_index,
            context: format!("key {key:?}"),
        });
    }
}
