//! Book domain methods on Repository

use chrono::NaiveDate;
use sqlx::FromRow;
use uuid::Uuid;

use super::Repository;
use crate::{
    error::AppResult,
    models::{Author, Book, BookListEntry, BookWithAuthor, NewBook},
};

/// Book joined with its (possibly missing) author
#[derive(Debug, FromRow)]
struct BookAuthorRow {
    id: Uuid,
    title: String,
    summary: String,
    isbn: String,
    author_id: String,
    author_first_name: Option<String>,
    author_family_name: Option<String>,
    author_date_of_birth: Option<NaiveDate>,
    author_date_of_death: Option<NaiveDate>,
    author_found: bool,
}

impl BookAuthorRow {
    fn author(&self) -> Option<Author> {
        self.author_found.then(|| Author {
            id: self.author_id.clone(),
            first_name: self.author_first_name.clone().unwrap_or_default(),
            family_name: self.author_family_name.clone().unwrap_or_default(),
            date_of_birth: self.author_date_of_birth,
            date_of_death: self.author_date_of_death,
        })
    }
}

impl From<BookAuthorRow> for BookWithAuthor {
    fn from(row: BookAuthorRow) -> Self {
        let author = row.author();
        Self {
            id: row.id,
            title: row.title,
            summary: row.summary,
            isbn: row.isbn,
            author_id: row.author_id,
            author,
        }
    }
}

impl From<BookAuthorRow> for BookListEntry {
    fn from(row: BookAuthorRow) -> Self {
        let author = row.author();
        Self {
            id: row.id,
            title: row.title,
            author,
        }
    }
}

const SELECT_BOOK_WITH_AUTHOR: &str = r#"
    SELECT b.id, b.title, b.summary, b.isbn, b.author_id,
           a.first_name AS author_first_name,
           a.family_name AS author_family_name,
           a.date_of_birth AS author_date_of_birth,
           a.date_of_death AS author_date_of_death,
           (a.id IS NOT NULL) AS author_found
    FROM books b
    LEFT JOIN authors a ON a.id = b.author_id
"#;

impl Repository {
    /// Count books
    pub async fn books_count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// List all books with their authors, ordered by title
    pub async fn books_list(&self) -> AppResult<Vec<BookListEntry>> {
        let query = format!("{} ORDER BY b.title, b.id", SELECT_BOOK_WITH_AUTHOR);
        let rows = sqlx::query_as::<_, BookAuthorRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(BookListEntry::from).collect())
    }

    /// Get a book with its author
    pub async fn books_get_by_id(&self, id: Uuid) -> AppResult<Option<BookWithAuthor>> {
        let query = format!("{} WHERE b.id = $1", SELECT_BOOK_WITH_AUTHOR);
        let row = sqlx::query_as::<_, BookAuthorRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(BookWithAuthor::from))
    }

    /// Create a book; the database assigns the id
    pub async fn books_create(&self, book: &NewBook) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author_id, summary, isbn)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, author_id, summary, isbn
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.summary)
        .bind(&book.isbn)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a book in place
    pub async fn books_update(&self, id: Uuid, book: &NewBook) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = $2, author_id = $3, summary = $4, isbn = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, author_id, summary, isbn
            "#,
        )
        .bind(id)
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.summary)
        .bind(&book.isbn)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete a book
    pub async fn books_delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
