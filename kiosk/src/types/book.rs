//! The record indexed by the kiosk catalog.

use std::fmt;

use serde::Deserialize;

/// A book on the kiosk shelves.
///
/// The title is the identity used by check-out in the default ordering.
/// Author and publisher may be empty; such books sort after every book
/// that has the field when the catalog is ordered by it.
///
/// Deserializes from a books file record, fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub pages: u32,
    pub publisher: String,
}

impl Book {
    /// Create a new book.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        pages: u32,
        publisher: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            pages,
            publisher: publisher.into(),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, Pages: {}, Publisher: {}",
            self.title, self.author, self.pages, self.publisher
        )
    }
}
