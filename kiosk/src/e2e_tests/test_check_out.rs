use super::helpers::{run_session, sample_catalog, titles};
use crate::types::SortOrder;

#[test]
fn test_check_out_existing_title() {
    let (catalog, output) = run_session(sample_catalog(), "2\nDune\n6\n");

    assert!(output.contains("Enter the title of the book to delete:"));
    assert!(output.contains("Book \"Dune\" deleted"));
    assert!(!catalog.contains("Dune"));
    assert_eq!(catalog.len(), 6);
    assert!(catalog.records().iter().all(|b| b.title != "Dune"));
}

#[test]
fn test_check_out_missing_title() {
    let (catalog, output) = run_session(sample_catalog(), "2\nThe Hobbit\n6\n");

    assert!(output.contains("Book \"The Hobbit\" not found."));
    assert_eq!(catalog.len(), 7);
}

#[test]
fn test_check_out_twice() {
    let (catalog, output) = run_session(sample_catalog(), "2\nEmma\n2\nEmma\n6\n");

    assert!(output.contains("Book \"Emma\" deleted"));
    assert!(output.contains("Book \"Emma\" not found."));
    assert_eq!(catalog.len(), 6);
}

#[test]
fn test_check_out_after_sorting_by_publisher() {
    let input = "5\n2\nSolaris\n6\n";
    let mut session = crate::session::Session::new(
        sample_catalog(),
        std::io::Cursor::new(input.to_string()),
        Vec::new(),
    );
    session.run().expect("session runs");

    assert_eq!(session.order(), SortOrder::Publisher);
    assert!(!session.catalog().contains("MON"));

    let (catalog, output) = session.into_parts();
    let output = String::from_utf8(output).expect("utf-8 output");
    assert!(output.contains("Book \"Solaris\" deleted"));
    assert_eq!(
        titles(&catalog),
        vec!["Beloved", "Dune", "Emma", "1984", "Ulysses", "Middlemarch"]
    );
}

#[test]
fn test_check_out_keeps_books_sharing_a_title() {
    // Under author order two books titled "Dune" can both be checked in.
    let input = "4\n1\nDune\nBrian Herbert\n336\nTor\n2\nEmma\n6\n";
    let (catalog, output) = run_session(sample_catalog(), input);

    assert!(output.contains("Book \"Dune\" inserted successfully!"));
    assert!(output.contains("Book \"Emma\" deleted"));
    assert!(!output.contains("removed"));
    assert_eq!(catalog.len(), 7);

    let mut dune_authors: Vec<&str> = catalog
        .in_order()
        .filter(|b| b.title == "Dune")
        .map(|b| b.author.as_str())
        .collect();
    dune_authors.sort_unstable();
    assert_eq!(dune_authors, vec!["Brian Herbert", "Frank Herbert"]);
}

#[test]
fn test_check_out_shared_title_removes_first_in_current_order() {
    let input = "4\n1\nDune\nBrian Herbert\n336\nTor\n2\nDune\n6\n";
    let (catalog, output) = run_session(sample_catalog(), input);

    assert!(output.contains("Book \"Dune\" deleted"));
    assert_eq!(catalog.len(), 7);
    assert!(!catalog.contains("Brian Herbert"));
    assert_eq!(catalog.search("Frank Herbert").map(|b| b.title.as_str()), Some("Dune"));
}

#[test]
fn test_check_out_untitled_book() {
    let input = "1\n\nAnonymous\n120\nFolio\n2\n\n6\n";
    let (catalog, output) = run_session(sample_catalog(), input);

    assert!(output.contains("Book \"\" inserted successfully!"));
    assert!(output.contains("Book \"\" deleted"));
    assert_eq!(catalog.len(), 7);
    assert!(catalog.in_order().all(|b| !b.title.is_empty()));
}

#[test]
fn test_check_out_everything() {
    let mut input = String::new();
    for book in crate::testing::sample_books() {
        input.push_str(&format!("2\n{}\n", book.title));
    }
    input.push_str("6\n");

    let (catalog, _) = run_session(sample_catalog(), &input);
    assert!(catalog.is_empty());
    assert!(catalog.records().is_empty());
    assert!(catalog.root().is_none());
}
