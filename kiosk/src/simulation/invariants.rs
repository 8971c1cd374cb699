//! Invariant checking for deterministic simulation testing.
//!
//! Two kinds of checks run after each operation: structural checks on the
//! tree itself (ordering, balance, cached heights and keys, record count),
//! and a comparison against a reference model of what the catalog should
//! contain.

use std::collections::BTreeMap;

use crate::index::{KeyedTree, Node, height};

/// An invariant violation detected during simulation.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violation.
    pub description: String,
    /// Operation index where it was detected.
    pub operation_index: usize,
    /// Additional context.
    pub context: String,
}

impl InvariantViolation {
    fn new(description: &str, operation_index: usize, context: String) -> Self {
        Self {
            description: description.to_string(),
            operation_index,
            context,
        }
    }
}

/// Run every structural check on `tree` and return what failed.
#[must_use]
pub fn check_tree<R>(tree: &KeyedTree<R>, operation_index: usize) -> Vec<InvariantViolation> {
    let mut checker = InvariantChecker::new();
    checker.check_structure(tree, operation_index);
    checker.violations
}

/// Checker for index invariants.
#[derive(Debug, Default)]
pub struct InvariantChecker {
    /// Detected violations.
    violations: Vec<InvariantViolation>,
}

impl InvariantChecker {
    /// Create a new invariant checker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    /// Get all violations.
    #[must_use]
    pub fn violations(&self) -> &[InvariantViolation] {
        &self.violations
    }

    /// Check if any violations were detected.
    #[must_use]
    pub const fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Take the recorded violations, leaving the checker empty.
    pub fn take_violations(&mut self) -> Vec<InvariantViolation> {
        std::mem::take(&mut self.violations)
    }

    /// Check ordering, balance, heights, cached keys and the record count.
    pub fn check_structure<R>(&mut self, tree: &KeyedTree<R>, operation_index: usize) {
        let mut nodes = 0;
        if let Some(root) = tree.root() {
            self.check_subtree(tree, root, operation_index, &mut nodes);
        }

        if nodes != tree.len() {
            self.violations.push(InvariantViolation::new(
                "Node count differs from tree length",
                operation_index,
                format!("counted {nodes} nodes, len() is {}", tree.len()),
            ));
        }

        let canonical = tree.records().len();
        if canonical != tree.len() {
            self.violations.push(InvariantViolation::new(
                "Canonical sequence differs from tree length",
                operation_index,
                format!("{canonical} records, len() is {}", tree.len()),
            ));
        }

        let keys: Vec<&str> = tree.entries().map(|(key, _)| key).collect();
        if let Some(pair) = keys.windows(2).find(|pair| pair[0] >= pair[1]) {
            self.violations.push(InvariantViolation::new(
                "In-order keys are not strictly ascending",
                operation_index,
                format!("{:?} precedes {:?}", pair[0], pair[1]),
            ));
        }
    }

    fn check_subtree<R>(
        &mut self,
        tree: &KeyedTree<R>,
        node: &Node<R>,
        operation_index: usize,
        nodes: &mut usize,
    ) {
        *nodes += 1;

        let expected_height = 1 + height(node.left()).max(height(node.right()));
        if node.height() != expected_height {
            self.violations.push(InvariantViolation::new(
                "Cached height is stale",
                operation_index,
                format!(
                    "node {:?} stores {}, expected {expected_height}",
                    node.key(),
                    node.height()
                ),
            ));
        }

        if node.balance_factor().abs() > 1 {
            self.violations.push(InvariantViolation::new(
                "Node is out of balance",
                operation_index,
                format!(
                    "node {:?} has balance factor {}",
                    node.key(),
                    node.balance_factor()
                ),
            ));
        }

        let key = tree.key_of(node.record());
        if key != node.key() {
            self.violations.push(InvariantViolation::new(
                "Cached key differs from the active selector",
                operation_index,
                format!("node stores {:?}, selector gives {key:?}", node.key()),
            ));
        }

        for (child, side) in [(node.left(), "left"), (node.right(), "right")] {
            let Some(child) = child else { continue };
            let ordered = if side == "left" {
                child.key() < node.key()
            } else {
                child.key() > node.key()
            };
            if !ordered {
                self.violations.push(InvariantViolation::new(
                    "Child is on the wrong side of its parent",
                    operation_index,
                    format!("{side} child {:?} of {:?}", child.key(), node.key()),
                ));
            }
            self.check_subtree(tree, child, operation_index, nodes);
        }
    }

    /// Check that the tree holds exactly the model's `(key, record)` pairs.
    pub fn check_against_model<R: PartialEq + std::fmt::Debug>(
        &mut self,
        tree: &KeyedTree<R>,
        model: &BTreeMap<String, R>,
        operation_index: usize,
    ) {
        if tree.len() != model.len() {
            self.violations.push(InvariantViolation::new(
                "Tree and model sizes differ",
                operation_index,
                format!("tree has {}, model has {}", tree.len(), model.len()),
            ));
            return;
        }

        let mismatch = tree
            .entries()
            .zip(model.iter())
            .find(|((key, record), (model_key, model_record))| {
                key != model_key || *record != *model_record
            });
        if let Some(((key, record), (model_key, model_record))) = mismatch {
            self.violations.push(InvariantViolation::new(
                "Tree contents differ from model",
                operation_index,
                format!("tree has {key:?} => {record:?}, model has {model_key:?} => {model_record:?}"),
            ));
        }
    }

    /// Record a violation found outside the built-in checks.
    pub fn add_violation(&mut self, violation: InvariantViolation) {
        self.violations.push(violation);
    }
}
