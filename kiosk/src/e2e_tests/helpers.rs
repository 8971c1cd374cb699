use std::io::Cursor;

use crate::catalog::{Catalog, catalog_from};
use crate::session::Session;
use crate::testing::sample_books;

/// Run a session over `catalog` with `input` as the keyboard.
///
/// Returns the catalog as the session left it and everything it printed.
pub fn run_session(catalog: Catalog, input: &str) -> (Catalog, String) {
    let mut session = Session::new(catalog, Cursor::new(input.to_string()), Vec::new());
    session.run().expect("session runs");
    let (catalog, output) = session.into_parts();
    (catalog, String::from_utf8(output).expect("utf-8 output"))
}

/// The sample shelf, indexed by title.
pub fn sample_catalog() -> Catalog {
    catalog_from(sample_books())
}

/// The listing lines (`Title: ...`) printed after the last sort heading.
pub fn last_listing(output: &str) -> Vec<&str> {
    let start = output.rfind("Books sorted by").expect("a listing was printed");
    output[start..]
        .lines()
        .skip(1)
        .skip_while(|line| line.is_empty())
        .take_while(|line| line.starts_with("Title: "))
        .collect()
}

/// Titles of the catalog in its current order.
pub fn titles(catalog: &Catalog) -> Vec<&str> {
    catalog.in_order().map(|b| b.title.as_str()).collect()
}
