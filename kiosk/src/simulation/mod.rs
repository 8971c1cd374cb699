//! Deterministic simulation testing for the catalog index.
//!
//! A seeded generator produces a stream of inserts, deletes, searches and
//! re-keys. The simulator applies each one to a [`KeyedTree`](crate::index::KeyedTree)
//! and to a `BTreeMap` reference model, then checks the tree's structural
//! invariants and compares it with the model. Given the same seed, a run is
//! identical.
//!
//! # Usage
//!
//! ```
//! use kiosk::simulation::{Simulator, SimulatorConfig};
//!
//! let mut sim = Simulator::new(SimulatorConfig::new(12345));
//! let result = sim.run(500);
//!
//! assert!(result.invariant_violations.is_empty());
//! ```

mod invariants;
mod operation_gen;
mod simulator;

pub use invariants::{InvariantChecker, InvariantViolation, check_tree};
pub use operation_gen::{Operation, OperationGenConfig, OperationGenerator};
pub use simulator::{SimulationResult, SimulationStats, Simulator, SimulatorConfig};
