//! In-memory AVL index with a replaceable ordering key.
//!
//! The catalog keeps its records in a [`KeyedTree`]: an AVL tree whose nodes
//! are ordered by a string key computed from each record by the active
//! [`KeySelector`]. Swapping the selector rebuilds the whole tree.
//!
//! # Invariants
//!
//! - Left subtree keys < node key < right subtree keys
//! - Sibling subtree heights differ by at most 1
//! - `height = 1 + max(height(left), height(right))`, absent subtrees have height 0
//! - Keys are unique: inserting an existing key leaves the tree unchanged
//! - Empty keys are replaced by [`SENTINEL`] so they sort last
//!
//! # Usage
//!
//! ```
//! use kiosk::index::{KeySelector, KeyedTree};
//!
//! let mut tree = KeyedTree::new(KeySelector::new(|s: &String| s.clone()));
//! for word in ["Dune", "1984", "Emma"] {
//!     let _ = tree.insert(word.to_string());
//! }
//!
//! let ordered: Vec<&String> = tree.in_order().collect();
//! assert_eq!(ordered, ["1984", "Dune", "Emma"]);
//! ```

mod node;
mod selector;
mod tree;

pub use node::{Node, height};
pub use selector::{KeySelector, SENTINEL};
pub use tree::{InOrder, Insertion, KeyedTree, Rekey};
