use super::helpers::{run_session, sample_catalog};

#[test]
fn test_invalid_choice_reprompts() {
    let (catalog, output) = run_session(sample_catalog(), "9\nhello\n6\n");

    assert_eq!(output.matches("Invalid choice. Please select again.").count(), 2);
    assert_eq!(output.matches("Choose an option:").count(), 3);
    assert!(output.trim_end().ends_with("Exit"));
    assert_eq!(catalog.len(), 7);
}

#[test]
fn test_end_of_input_ends_session() {
    let (catalog, output) = run_session(sample_catalog(), "");

    assert_eq!(output.matches("Choose an option:").count(), 1);
    assert_eq!(catalog.len(), 7);
}

#[test]
fn test_end_of_input_mid_check_in() {
    let (catalog, output) = run_session(sample_catalog(), "1\nKindred\n");

    assert!(output.contains("Enter book author:"));
    assert!(!catalog.contains("Kindred"));
}

#[test]
fn test_windows_line_endings() {
    let (catalog, output) = run_session(sample_catalog(), "2\r\nDune\r\n6\r\n");

    assert!(output.contains("Book \"Dune\" deleted"));
    assert!(!catalog.contains("Dune"));
}
