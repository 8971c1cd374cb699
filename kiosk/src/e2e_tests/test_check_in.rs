use super::helpers::{run_session, sample_catalog, titles};

#[test]
fn test_check_in_new_book() {
    let input = "1\nKindred\nOctavia E. Butler\n264\nDoubleday\n6\n";
    let (catalog, output) = run_session(sample_catalog(), input);

    assert!(output.contains("Enter book title:"));
    assert!(output.contains("Enter book publisher:"));
    assert!(output.contains("Book \"Kindred\" inserted successfully!"));

    let book = catalog.search("Kindred").expect("checked in");
    assert_eq!(book.author, "Octavia E. Butler");
    assert_eq!(book.pages, 264);
    assert_eq!(book.publisher, "Doubleday");
    assert_eq!(catalog.len(), 8);
}

#[test]
fn test_check_in_invalid_pages_cancels() {
    let input = "1\nKindred\nOctavia E. Butler\nlots\n6\n";
    let (catalog, output) = run_session(sample_catalog(), input);

    assert!(output.contains("Invalid number of pages. Insertion cancelled."));
    assert!(!output.contains("Enter book publisher:"));
    assert!(!catalog.contains("Kindred"));
    assert_eq!(catalog.len(), 7);
}

#[test]
fn test_check_in_negative_pages_cancels() {
    let input = "1\nKindred\nOctavia E. Butler\n-3\n6\n";
    let (catalog, output) = run_session(sample_catalog(), input);

    assert!(output.contains("Invalid number of pages. Insertion cancelled."));
    assert!(!catalog.contains("Kindred"));
}

#[test]
fn test_check_in_duplicate_title_is_rejected() {
    let input = "1\nDune\nBrian Herbert\n100\nTor\n6\n";
    let (catalog, output) = run_session(sample_catalog(), input);

    assert!(output.contains("A book with the same title is already checked in; \"Dune\" was not added."));
    assert_eq!(catalog.len(), 7);
    assert_eq!(catalog.search("Dune").map(|b| b.author.as_str()), Some("Frank Herbert"));
}

#[test]
fn test_check_in_lands_in_title_order() {
    let input = "1\nCarrie\nStephen King\n199\nDoubleday\n6\n";
    let (catalog, _) = run_session(sample_catalog(), input);

    assert_eq!(
        titles(&catalog),
        vec!["1984", "Beloved", "Carrie", "Dune", "Emma", "Middlemarch", "Solaris", "Ulysses"]
    );
}

#[test]
fn test_check_in_while_sorted_by_author() {
    let input = "4\n1\nKindred\nOctavia E. Butler\n264\nDoubleday\n4\n6\n";
    let (catalog, output) = run_session(sample_catalog(), input);

    assert!(catalog.contains("Octavia E. Butler"));
    let listing = super::helpers::last_listing(&output);
    assert_eq!(listing.len(), 8);
    assert!(listing[5].starts_with("Title: Kindred, Author: Octavia E. Butler"));
}

#[test]
fn test_check_in_keeps_answers_as_typed() {
    let input = "1\n  Kindred \nOctavia E. Butler\n 264 \nDoubleday\n2\nKindred\n6\n";
    let (catalog, output) = run_session(sample_catalog(), input);

    assert!(output.contains("Book \"  Kindred \" inserted successfully!"));
    assert!(output.contains("Book \"Kindred\" not found."));
    assert_eq!(catalog.search("  Kindred ").map(|b| b.pages), Some(264));
    assert_eq!(catalog.len(), 8);
}
