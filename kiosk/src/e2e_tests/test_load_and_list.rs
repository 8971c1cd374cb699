use super::helpers::{last_listing, run_session};
use crate::catalog::catalog_from;
use crate::loader::load_books_from_path;
use crate::testing::sample_books_csv;

#[test]
fn test_load_file_then_list_by_title() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("books.csv");
    let mut contents = sample_books_csv();
    contents.push_str("\"Dune, Messiah\",Frank Herbert,256,\"Putnam, Inc.\"\n");
    std::fs::write(&path, contents).expect("write books");

    let books = load_books_from_path(&path, b',').expect("load");
    let (_, output) = run_session(catalog_from(books), "3\n6\n");

    let listing = last_listing(&output);
    assert_eq!(listing.len(), 8);
    assert_eq!(
        listing[3],
        "Title: Dune, Messiah, Author: Frank Herbert, Pages: 256, Publisher: Putnam, Inc."
    );
}

#[test]
fn test_empty_file_gives_empty_catalog() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("books.csv");
    std::fs::write(&path, "").expect("write books");

    let books = load_books_from_path(&path, b',').expect("load");
    let (catalog, output) = run_session(catalog_from(books), "3\n6\n");

    assert!(catalog.is_empty());
    assert!(last_listing(&output).is_empty());
}
