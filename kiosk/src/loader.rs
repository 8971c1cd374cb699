//! Reading the kiosk's books file.
//!
//! The file is delimited text with no header row, one book per record:
//!
//! ```text
//! title,author,pages,publisher
//! ```
//!
//! Parsing follows the usual CSV rules: fields may be wrapped in double
//! quotes, in which case the delimiter and line breaks are taken literally
//! and `""` stands for a single quote character. Fields are trimmed. Blank
//! lines are skipped.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::types::Book;

/// Number of fields in a record.
pub const FIELD_COUNT: usize = 4;

/// Error returned when reading the books file fails.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be opened.
    Io(std::io::Error),
    /// The file could not be parsed, or a field has the wrong type (such as
    /// a page count that is not a non-negative integer).
    Csv(csv::Error),
    /// A record does not have exactly [`FIELD_COUNT`] fields.
    FieldCount { line: u64, found: usize },
}

impl LoadError {
    /// Whether the file simply does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Csv(e) => write!(f, "malformed books file: {e}"),
            Self::FieldCount { line, found } => {
                write!(f, "line {line}: expected {FIELD_COUNT} fields, found {found}")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Csv(e) => Some(e),
            Self::FieldCount { .. } => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}

/// Open and read a books file.
pub fn load_books_from_path(path: &Path, delimiter: u8) -> Result<Vec<Book>, LoadError> {
    let file = File::open(path)?;
    let books = load_books(file, delimiter)?;
    tracing::info!(count = books.len(), path = %path.display(), "loaded books");
    Ok(books)
}

/// Read books from delimited text, in file order.
pub fn load_books(reader: impl Read, delimiter: u8) -> Result<Vec<Book>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut books: Vec<Book> = Vec::new();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record)? {
        if is_blank(&record) {
            continue;
        }

        let mut book = parse_record(&record)?;
        if books.is_empty() {
            // Drop a byte order mark left on the first title.
            if let Some(title) = book.title.strip_prefix('\u{feff}') {
                book.title = title.trim_start().to_string();
            }
        }
        books.push(book);
    }

    Ok(books)
}

/// Convert one parsed record into a book.
pub fn parse_record(record: &StringRecord) -> Result<Book, LoadError> {
    if record.len() != FIELD_COUNT {
        return Err(LoadError::FieldCount {
            line: record.position().map_or(0, csv::Position::line),
            found: record.len(),
        });
    }
    let book: Book = record.deserialize(None)?;
    Ok(book)
}

fn is_blank(record: &StringRecord) -> bool {
    record.len() == 1 && record[0].is_empty()
}
