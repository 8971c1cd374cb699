//! The kiosk catalog: books indexed by the active sort order.

use crate::index::{Insertion, KeyedTree};
use crate::types::{Book, SortOrder};

/// Books indexed by an AVL tree under a replaceable sort key.
pub type Catalog = KeyedTree<Book>;

/// Build a title-ordered catalog from `books`, in the order given.
///
/// Books whose title is already in the catalog are skipped.
pub fn catalog_from(books: impl IntoIterator<Item = Book>) -> Catalog {
    let mut catalog = Catalog::new(SortOrder::Title.key_selector());
    let mut skipped = 0usize;

    for book in books {
        if let Insertion::Duplicate(book) = catalog.insert(book) {
            tracing::warn!(title = %book.title, "skipping book with a duplicate title");
            skipped += 1;
        }
    }

    tracing::debug!(indexed = catalog.len(), skipped, "built catalog");
    catalog
}
