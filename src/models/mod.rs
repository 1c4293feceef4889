//! Data models for the catalog

pub mod author;
pub mod book;
pub mod form;

// Re-export commonly used types
pub use author::Author;
pub use book::{Book, BookForm, BookListEntry, BookWithAuthor, NewBook, RejectedForm};
pub use form::FieldError;
