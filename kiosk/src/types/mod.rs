//! Domain types shared by the index, the loader and the menu session.

mod book;
mod sort_order;

pub use book::Book;
pub use sort_order::SortOrder;
