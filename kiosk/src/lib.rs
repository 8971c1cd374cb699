// Test code is allowed to use expect() and unwrap() for convenience.
#![cfg_attr(test, allow(clippy::disallowed_methods, clippy::expect_used, clippy::unwrap_used))]

// Life of a kiosk session:
// 1. Configuration comes from the environment
// 2. The books file is parsed into records, in file order
// 3. Records are indexed by title in an AVL tree
// 4. The menu loop checks books in and out, and re-keys the tree to list
//    the catalog by title, author or publisher
//
// System components:
//  - Keyed AVL index (`index`)
//  - Loader for the delimited books file (`loader`)
//  - Menu session (`session`)

pub mod catalog;
pub mod config;
pub mod index;
pub mod loader;
pub mod session;
pub mod simulation;
pub mod types;

#[cfg(test)]
mod e2e_tests;
#[cfg(test)]
mod testing;

pub use catalog::{Catalog, catalog_from};
pub use session::{MenuChoice, Session};
