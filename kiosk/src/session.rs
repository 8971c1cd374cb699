//! The interactive kiosk menu.
//!
//! A [`Session`] reads menu choices and prompt answers line by line from any
//! `BufRead` and writes everything it shows to any `Write`, so the same code
//! drives the terminal and the tests.

use std::io::{self, BufRead, Write};

use crate::catalog::Catalog;
use crate::index::Insertion;
use crate::types::{Book, SortOrder};

const MENU: &str = "\nChoose an option:
1. Insert a new book(Check-in)
2. Delete a book by title(Check-out)
3. Sort the books by Title
4. Sort the books by Author
5. Sort the books by Publisher
6. Exit";

/// A choice from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CheckIn,
    CheckOut,
    Sort(SortOrder),
    Exit,
}

impl MenuChoice {
    /// Parse a menu line. Surrounding whitespace is ignored.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "1" => Some(Self::CheckIn),
            "2" => Some(Self::CheckOut),
            "3" => Some(Self::Sort(SortOrder::Title)),
            "4" => Some(Self::Sort(SortOrder::Author)),
            "5" => Some(Self::Sort(SortOrder::Publisher)),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// An interactive session over a catalog.
pub struct Session<I, O> {
    catalog: Catalog,
    order: SortOrder,
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Session<I, O> {
    /// Start a session over a title-ordered catalog.
    pub const fn new(catalog: Catalog, input: I, output: O) -> Self {
        Self {
            catalog,
            order: SortOrder::Title,
            input,
            output,
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The ordering the catalog is currently indexed by.
    #[must_use]
    pub const fn order(&self) -> SortOrder {
        self.order
    }

    /// End the session, returning the catalog and the output sink.
    pub fn into_parts(self) -> (Catalog, O) {
        (self.catalog, self.output)
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(line) = self.read_line()? else {
                tracing::debug!("input closed, ending session");
                return Ok(());
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::CheckIn) => self.check_in()?,
                Some(MenuChoice::CheckOut) => self.check_out()?,
                Some(MenuChoice::Sort(order)) => self.sort(order)?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exit")?;
                    return Ok(());
                }
                None => writeln!(self.output, "Invalid choice. Please select again.")?,
            }
            self.output.flush()?;
        }
    }

    fn check_in(&mut self) -> io::Result<()> {
        let Some(title) = self.prompt("Enter book title:")? else {
            return Ok(());
        };
        let Some(author) = self.prompt("Enter book author:")? else {
            return Ok(());
        };
        let Some(pages) = self.prompt("Enter number of pages:")? else {
            return Ok(());
        };
        let Ok(pages) = pages.trim().parse::<u32>() else {
            writeln!(self.output, "Invalid number of pages. Insertion cancelled.")?;
            return Ok(());
        };
        let Some(publisher) = self.prompt("Enter book publisher:")? else {
            return Ok(());
        };

        let book = Book::new(title.clone(), author, pages, publisher);
        match self.catalog.insert(book) {
            Insertion::Inserted => {
                tracing::info!(title = %title, "checked in");
                writeln!(self.output, "Book \"{title}\" inserted successfully!")?;
            }
            Insertion::Duplicate(book) => {
                tracing::info!(title = %book.title, order = %self.order, "rejected duplicate check-in");
                writeln!(
                    self.output,
                    "A book with the same {} is already checked in; \"{}\" was not added.",
                    self.order.to_string().to_lowercase(),
                    book.title
                )?;
            }
        }
        Ok(())
    }

    fn check_out(&mut self) -> io::Result<()> {
        let Some(title) = self.prompt("Enter the title of the book to delete:")? else {
            return Ok(());
        };

        // Deletion goes by the active key, whatever the ordering.
        let key = self.find_by_title(&title).map(|book| self.catalog.key_of(book));
        if key.and_then(|key| self.catalog.delete(&key)).is_some() {
            tracing::info!(title = %title, order = %self.order, "checked out");
            writeln!(self.output, "Book \"{title}\" deleted")
        } else {
            writeln!(self.output, "Book \"{title}\" not found.")
        }
    }

    /// The first book titled `title` in the current order.
    fn find_by_title(&self, title: &str) -> Option<&Book> {
        if self.order == SortOrder::Title && !title.is_empty() {
            return self.catalog.search(title);
        }
        self.catalog.in_order().find(|book| book.title == title)
    }

    fn sort(&mut self, order: SortOrder) -> io::Result<()> {
        let displaced = self.rekey(order);

        writeln!(self.output, "\nBooks sorted by {order}:\n")?;
        for book in self.catalog.in_order() {
            writeln!(self.output, "{book}")?;
        }
        if displaced > 0 {
            writeln!(
                self.output,
                "\n{displaced} book(s) removed: another book listed above has the same {}.",
                order.to_string().to_lowercase()
            )?;
        }
        Ok(())
    }

    /// Rebuild the catalog under `order`, returning how many books were lost
    /// to key collisions.
    fn rekey(&mut self, order: SortOrder) -> usize {
        let rekey = self.catalog.change_key(order.primary(), order.fallback());
        self.order = order;
        for book in &rekey.displaced {
            tracing::warn!(title = %book.title, %order, "book dropped by re-key");
        }
        rekey.displaced.len()
    }

    /// Ask `question` and return the answer as typed, without its line ending.
    fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
