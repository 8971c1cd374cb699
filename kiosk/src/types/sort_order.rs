//! Orderings the kiosk menu can switch the catalog to.

use std::fmt;

use crate::index::KeySelector;
use crate::types::Book;

/// A catalog ordering offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Title,
    Author,
    Publisher,
}

impl SortOrder {
    pub const ALL: [Self; 3] = [Self::Title, Self::Author, Self::Publisher];

    /// The field books are primarily ordered by.
    #[must_use]
    pub fn primary(self) -> fn(&Book) -> String {
        match self {
            Self::Title => |b: &Book| b.title.clone(),
            Self::Author => |b: &Book| b.author.clone(),
            Self::Publisher => |b: &Book| b.publisher.clone(),
        }
    }

    /// The key used, behind the sentinel, for books missing the primary
    /// field. Author and publisher orderings fall back to the title.
    #[must_use]
    pub fn fallback(self) -> Option<KeySelector<Book>> {
        match self {
            Self::Title => None,
            Self::Author | Self::Publisher => Some(KeySelector::new(Self::Title.primary())),
        }
    }

    /// The key selector that orders books this way.
    ///
    /// Books missing the primary field are grouped last and sorted by their
    /// fallback key among themselves.
    #[must_use]
    pub fn key_selector(self) -> KeySelector<Book> {
        KeySelector::composite(self.primary(), self.fallback())
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Title => "Title",
            Self::Author => "Author",
            Self::Publisher => "Publisher",
        };
        f.write_str(name)
    }
}
