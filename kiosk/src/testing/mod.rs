use crate::types::Book;

/// A small shelf of books with distinct titles, authors and publishers.
///
/// Every ordering the menu offers indexes all of them without collisions.
pub fn sample_books() -> Vec<Book> {
    vec![
        Book::new("Dune", "Frank Herbert", 412, "Chilton Books"),
        Book::new("1984", "George Orwell", 328, "Secker & Warburg"),
        Book::new("Emma", "Jane Austen", 474, "John Murray"),
        Book::new("Beloved", "Toni Morrison", 324, "Alfred A. Knopf"),
        Book::new("Ulysses", "James Joyce", 730, "Shakespeare and Company"),
        Book::new("Middlemarch", "George Eliot", 880, "William Blackwood"),
        Book::new("Solaris", "Stanislaw Lem", 204, "MON"),
    ]
}

/// The sample shelf as the kiosk's books file, one comma-separated row per book.
pub fn sample_books_csv() -> String {
    sample_books()
        .iter()
        .map(|b| format!("{},{},{},{}\n", b.title, b.author, b.pages, b.publisher))
        .collect()
}
