use super::helpers::{last_listing, run_session, sample_catalog};
use crate::catalog::catalog_from;
use crate::testing::sample_books;
use crate::types::Book;

#[test]
fn test_sort_by_title_lists_everything() {
    let (_, output) = run_session(sample_catalog(), "3\n6\n");

    assert!(output.contains("Books sorted by Title:"));
    let listing = last_listing(&output);
    assert_eq!(listing.len(), 7);
    assert_eq!(
        listing[0],
        "Title: 1984, Author: George Orwell, Pages: 328, Publisher: Secker & Warburg"
    );
    assert!(listing[6].starts_with("Title: Ulysses"));
}

#[test]
fn test_sort_by_author() {
    let (catalog, output) = run_session(sample_catalog(), "4\n6\n");

    assert!(output.contains("Books sorted by Author:"));
    let authors: Vec<&str> = catalog.in_order().map(|b| b.author.as_str()).collect();
    assert_eq!(
        authors,
        vec![
            "Frank Herbert",
            "George Eliot",
            "George Orwell",
            "James Joyce",
            "Jane Austen",
            "Stanislaw Lem",
            "Toni Morrison",
        ]
    );
    assert_eq!(last_listing(&output).len(), 7);
}

#[test]
fn test_sort_by_publisher() {
    let (catalog, output) = run_session(sample_catalog(), "5\n6\n");

    assert!(output.contains("Books sorted by Publisher:"));
    let listing = last_listing(&output);
    assert!(listing[0].ends_with("Publisher: Alfred A. Knopf"));
    assert!(listing[6].ends_with("Publisher: William Blackwood"));
    assert_eq!(catalog.len(), 7);
}

#[test]
fn test_books_without_author_sort_last_by_title() {
    let mut books = sample_books();
    books.push(Book::new("Beowulf", "", 200, "Penguin"));
    books.push(Book::new("Anonymous Letters", "", 90, "Penguin"));

    let (_, output) = run_session(catalog_from(books), "4\n6\n");

    let listing = last_listing(&output);
    assert_eq!(listing.len(), 9);
    assert!(listing[7].starts_with("Title: Anonymous Letters, Author: ,"));
    assert!(listing[8].starts_with("Title: Beowulf, Author: ,"));
}

#[test]
fn test_shared_author_is_reported() {
    let books = vec![
        Book::new("Emma", "Jane Austen", 474, "John Murray"),
        Book::new("Persuasion", "Jane Austen", 249, "John Murray"),
        Book::new("Dune", "Frank Herbert", 412, "Chilton Books"),
    ];

    let (catalog, output) = run_session(catalog_from(books), "4\n6\n");

    assert_eq!(catalog.len(), 2);
    assert!(output.contains("1 book(s) removed: another book listed above has the same author."));
}

#[test]
fn test_sort_round_trip_keeps_every_book() {
    let (catalog, output) = run_session(sample_catalog(), "4\n5\n3\n6\n");

    assert_eq!(catalog.len(), 7);
    let listing = last_listing(&output);
    assert_eq!(listing.len(), 7);
    assert!(listing[0].starts_with("Title: 1984"));
}
