//! Repository layer for database operations

pub mod authors;
pub mod books;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Author, Book, BookListEntry, BookWithAuthor, NewBook},
};

/// Catalog persistence operations used by the services.
///
/// Every call is independent and atomic on a single record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn count_books(&self) -> AppResult<i64>;

    async fn count_authors(&self) -> AppResult<i64>;

    /// All books projected to title and author, sorted by title
    async fn list_books(&self) -> AppResult<Vec<BookListEntry>>;

    /// One book with its author resolved, `None` if absent
    async fn find_book(&self, id: Uuid) -> AppResult<Option<BookWithAuthor>>;

    /// All authors sorted by family name
    async fn list_authors(&self) -> AppResult<Vec<Author>>;

    /// Insert a book and return it with its assigned id
    async fn insert_book(&self, book: &NewBook) -> AppResult<Book>;

    /// Replace the fields of an existing book, keeping its id
    async fn update_book(&self, id: Uuid, book: &NewBook) -> AppResult<Option<Book>>;

    /// Returns false when no book had this id
    async fn delete_book(&self, id: Uuid) -> AppResult<bool>;

    /// Check that the store answers
    async fn ping(&self) -> AppResult<()>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for Repository {
    async fn count_books(&self) -> AppResult<i64> {
        self.books_count().await
    }

    async fn count_authors(&self) -> AppResult<i64> {
        self.authors_count().await
    }

    async fn list_books(&self) -> AppResult<Vec<BookListEntry>> {
        self.books_list().await
    }

    async fn find_book(&self, id: Uuid) -> AppResult<Option<BookWithAuthor>> {
        self.books_get_by_id(id).await
    }

    async fn list_authors(&self) -> AppResult<Vec<Author>> {
        self.authors_list().await
    }

    async fn insert_book(&self, book: &NewBook) -> AppResult<Book> {
        self.books_create(book).await
    }

    async fn update_book(&self, id: Uuid, book: &NewBook) -> AppResult<Option<Book>> {
        self.books_update(id, book).await
    }

    async fn delete_book(&self, id: Uuid) -> AppResult<bool> {
        self.books_delete(id).await
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
