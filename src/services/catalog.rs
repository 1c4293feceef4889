//! Catalog management service

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Author, Book, BookForm, BookListEntry, BookWithAuthor, FieldError, RejectedForm},
    repository::CatalogStore,
};

/// Book and author totals shown on the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSummary {
    pub book_count: i64,
    pub author_count: i64,
}

/// Outcome of a create or update submission
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// The book was stored
    Saved(Book),
    /// Validation failed; nothing was written
    Rejected {
        form: BookForm,
        errors: Vec<FieldError>,
        authors: Vec<Author>,
    },
}

/// Book identifiers come straight from the path; one that does not parse matches nothing.
fn parse_book_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Count books and authors concurrently
    pub async fn summary(&self) -> AppResult<CatalogSummary> {
        let (book_count, author_count) =
            tokio::try_join!(self.store.count_books(), self.store.count_authors())?;
        Ok(CatalogSummary {
            book_count,
            author_count,
        })
    }

    /// All books sorted by title, authors resolved
    pub async fn list_books(&self) -> AppResult<Vec<BookListEntry>> {
        self.store.list_books().await
    }

    /// All authors sorted by family name
    pub async fn list_authors(&self) -> AppResult<Vec<Author>> {
        self.store.list_authors().await
    }

    /// Look up a book, `None` when it does not exist
    pub async fn find_book(&self, id: &str) -> AppResult<Option<BookWithAuthor>> {
        match parse_book_id(id) {
            Some(id) => self.store.find_book(id).await,
            None => Ok(None),
        }
    }

    /// Get a book or fail with "Book not found"
    pub async fn get_book(&self, id: &str) -> AppResult<BookWithAuthor> {
        self.find_book(id)
            .await?
            .ok_or_else(AppError::book_not_found)
    }

    /// Load a book and the author list for the update form, concurrently
    pub async fn edit_book(&self, id: &str) -> AppResult<(BookWithAuthor, Vec<Author>)> {
        let (book, authors) = tokio::try_join!(self.find_book(id), self.store.list_authors())?;
        let book = book.ok_or_else(AppError::book_not_found)?;
        Ok((book, authors))
    }

    /// Validate a submitted form and store a new book
    pub async fn create_book(&self, form: BookForm) -> AppResult<Submission> {
        let book = match form.check() {
            Ok(book) => book,
            Err(rejected) => return self.reject(rejected).await,
        };

        let created = self.store.insert_book(&book).await?;
        tracing::info!("Catalog create: book id={} title={:?}", created.id, created.title);
        Ok(Submission::Saved(created))
    }

    /// Validate a submitted form and update the book in place
    pub async fn update_book(&self, id: &str, form: BookForm) -> AppResult<Submission> {
        let book = match form.check() {
            Ok(book) => book,
            Err(rejected) => return self.reject(rejected).await,
        };

        let id = parse_book_id(id).ok_or_else(AppError::book_not_found)?;
        let updated = self
            .store
            .update_book(id, &book)
            .await?
            .ok_or_else(AppError::book_not_found)?;
        tracing::info!("Catalog update: book id={}", updated.id);
        Ok(Submission::Saved(updated))
    }

    /// Delete a book if it exists. Returns whether anything was removed.
    pub async fn delete_book(&self, id: &str) -> AppResult<bool> {
        let Some(book) = self.find_book(id).await? else {
            tracing::debug!("Catalog delete: book {} already gone", id);
            return Ok(false);
        };

        let deleted = self.store.delete_book(book.id).await?;
        if deleted {
            tracing::info!("Catalog delete: book id={}", book.id);
        }
        Ok(deleted)
    }

    /// Check database connectivity
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }

    async fn reject(&self, rejected: RejectedForm) -> AppResult<Submission> {
        tracing::debug!("Catalog: rejected book form with {} error(s)", rejected.errors.len());
        let authors = self.store.list_authors().await?;
        Ok(Submission::Rejected {
            form: rejected.form,
            errors: rejected.errors,
            authors,
        })
    }
}
