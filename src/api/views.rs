//! Server-rendered views.
//!
//! Book fields are escaped before they are stored, so templates print them
//! with `|safe`; everything else goes through askama's own escaping.

use askama::Template;

use crate::models::{Author, BookForm, BookListEntry, BookWithAuthor, FieldError};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexView {
    pub title: String,
    pub book_count: i64,
    pub author_count: i64,
}

#[derive(Template)]
#[template(path = "book_list.html")]
pub struct BookListView {
    pub title: String,
    pub book_list: Vec<BookListEntry>,
}

#[derive(Template)]
#[template(path = "book_detail.html")]
pub struct BookDetailView {
    pub title: String,
    pub book: BookWithAuthor,
}

#[derive(Template)]
#[template(path = "book_form.html")]
pub struct BookFormView {
    pub title: String,
    pub authors: Vec<AuthorOption>,
    pub book: BookForm,
    pub errors: Vec<FieldError>,
}

impl BookFormView {
    pub fn new(title: &str, authors: Vec<Author>, book: BookForm, errors: Vec<FieldError>) -> Self {
        let authors = authors
            .into_iter()
            .map(|a| AuthorOption {
                selected: a.id == book.author,
                name: a.name(),
                id: a.id,
            })
            .collect();
        Self {
            title: title.to_string(),
            authors,
            book,
            errors,
        }
    }
}

/// One entry of the author selector
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorOption {
    pub id: String,
    pub name: String,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "book_delete.html")]
pub struct BookDeleteView {
    pub title: String,
    pub book: BookWithAuthor,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorView {
    pub title: String,
    pub message: String,
    pub status: u16,
}
