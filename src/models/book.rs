//! Book model, list/detail projections and the submitted book form

use serde::Deserialize;
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::author::Author;
use super::form::{escape_html, FieldError};

/// Book row as stored
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    /// Author identifier
    #[sqlx(rename = "author_id")]
    pub author: String,
    pub summary: String,
    pub isbn: String,
}

impl Book {
    pub fn url(&self) -> String {
        book_url(self.id)
    }
}

/// Path of the detail page for a book
pub fn book_url(id: Uuid) -> String {
    format!("/catalog/book/{}", id)
}

/// Book projected to title and author, as shown in the book list.
/// `author` is `None` when the referenced author no longer exists.
#[derive(Debug, Clone, PartialEq)]
pub struct BookListEntry {
    pub id: Uuid,
    pub title: String,
    pub author: Option<Author>,
}

impl BookListEntry {
    pub fn url(&self) -> String {
        book_url(self.id)
    }
}

/// Book with its author resolved
#[derive(Debug, Clone, PartialEq)]
pub struct BookWithAuthor {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub isbn: String,
    pub author_id: String,
    pub author: Option<Author>,
}

impl BookWithAuthor {
    pub fn url(&self) -> String {
        book_url(self.id)
    }

    /// Form values used to pre-fill the update page
    pub fn to_form(&self) -> BookForm {
        BookForm {
            title: self.title.clone(),
            author: self.author_id.clone(),
            summary: self.summary.clone(),
            isbn: self.isbn.clone(),
        }
    }
}

/// Validated, escaped book fields ready to be persisted
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub summary: String,
    pub isbn: String,
}

/// Book form body submitted on create and update
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
pub struct BookForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title must not be empty."))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Author must not be empty."))]
    pub author: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Summary must not be empty."))]
    pub summary: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "ISBN must not be empty"))]
    pub isbn: String,
}

/// Fields in the order their errors are reported
const FIELDS: [&str; 4] = ["title", "author", "summary", "isbn"];

/// A submission that failed validation, with the sanitized values kept for re-display
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedForm {
    pub form: BookForm,
    pub errors: Vec<FieldError>,
}

impl BookForm {
    /// Trim, validate and escape every field.
    pub fn check(self) -> Result<NewBook, RejectedForm> {
        let trimmed = BookForm {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            summary: self.summary.trim().to_string(),
            isbn: self.isbn.trim().to_string(),
        };

        let mut errors = Vec::new();
        if let Err(validation) = trimmed.validate() {
            let field_errors = validation.field_errors();
            for field in FIELDS {
                if let Some(list) = field_errors.get(field) {
                    errors.extend(list.iter().map(|e| FieldError {
                        field,
                        message: e
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("Invalid value for {}", field)),
                    }));
                }
            }
        }

        let form = BookForm {
            title: escape_html(&trimmed.title),
            author: escape_html(&trimmed.author),
            summary: escape_html(&trimmed.summary),
            isbn: escape_html(&trimmed.isbn),
        };

        if !errors.is_empty() {
            return Err(RejectedForm { form, errors });
        }

        Ok(NewBook {
            title: form.title,
            author: form.author,
            summary: form.summary,
            isbn: form.isbn,
        })
    }
}
