//! In-memory catalog store and request helpers for router tests

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use tower::ServiceExt;
use uuid::Uuid;

use library_catalog::{
    api,
    models::{Author, Book, BookListEntry, BookWithAuthor, NewBook},
    repository::CatalogStore,
    services::Services,
    AppError, AppResult, AppState,
};

#[derive(Default)]
pub struct MemoryStore {
    authors: Mutex<Vec<Author>>,
    books: Mutex<BTreeMap<Uuid, Book>>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn with_authors(authors: Vec<Author>) -> Arc<Self> {
        let store = Self::default();
        *store.authors.lock().unwrap() = authors;
        Arc::new(store)
    }

    /// Make every later call fail like a lost database connection
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn books(&self) -> Vec<Book> {
        self.books.lock().unwrap().values().cloned().collect()
    }

    pub fn seed_book(&self, title: &str, author: &str) -> Book {
        let book = Book {
            id: Uuid::new_v4(),
            title: title.to_string(),
            author: author.to_string(),
            summary: format!("About {}", title),
            isbn: "9780000000000".to_string(),
        };
        self.books.lock().unwrap().insert(book.id, book.clone());
        book
    }

    fn check(&self) -> AppResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn author(&self, id: &str) -> Option<Author> {
        self.authors.lock().unwrap().iter().find(|a| a.id == id).cloned()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn count_books(&self) -> AppResult<i64> {
        self.check()?;
        Ok(self.books.lock().unwrap().len() as i64)
    }

    async fn count_authors(&self) -> AppResult<i64> {
        self.check()?;
        Ok(self.authors.lock().unwrap().len() as i64)
    }

    async fn list_books(&self) -> AppResult<Vec<BookListEntry>> {
        self.check()?;
        let mut list: Vec<BookListEntry> = self
            .books()
            .into_iter()
            .map(|b| BookListEntry {
                author: self.author(&b.author),
                id: b.id,
                title: b.title,
            })
            .collect();
        list.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
        Ok(list)
    }

    async fn find_book(&self, id: Uuid) -> AppResult<Option<BookWithAuthor>> {
        self.check()?;
        let book = self.books.lock().unwrap().get(&id).cloned();
        Ok(book.map(|b| BookWithAuthor {
            author: self.author(&b.author),
            id: b.id,
            title: b.title,
            summary: b.summary,
            isbn: b.isbn,
            author_id: b.author,
        }))
    }

    async fn list_authors(&self) -> AppResult<Vec<Author>> {
        self.check()?;
        let mut authors = self.authors.lock().unwrap().clone();
        authors.sort_by(|a, b| a.family_name.cmp(&b.family_name));
        Ok(authors)
    }

    async fn insert_book(&self, book: &NewBook) -> AppResult<Book> {
        self.check()?;
        let stored = Book {
            id: Uuid::new_v4(),
            title: book.title.clone(),
            author: book.author.clone(),
            summary: book.summary.clone(),
            isbn: book.isbn.clone(),
        };
        self.books.lock().unwrap().insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update_book(&self, id: Uuid, book: &NewBook) -> AppResult<Option<Book>> {
        self.check()?;
        let mut books = self.books.lock().unwrap();
        Ok(books.get_mut(&id).map(|stored| {
            stored.title = book.title.clone();
            stored.author = book.author.clone();
            stored.summary = book.summary.clone();
            stored.isbn = book.isbn.clone();
            stored.clone()
        }))
    }

    async fn delete_book(&self, id: Uuid) -> AppResult<bool> {
        self.check()?;
        Ok(self.books.lock().unwrap().remove(&id).is_some())
    }

    async fn ping(&self) -> AppResult<()> {
        self.check()
    }
}

pub fn author(id: &str, first: &str, family: &str) -> Author {
    Author {
        id: id.to_string(),
        first_name: first.to_string(),
        family_name: family.to_string(),
        date_of_birth: None,
        date_of_death: None,
    }
}

/// Two authors, deliberately not in family-name order
pub fn store() -> Arc<MemoryStore> {
    MemoryStore::with_authors(vec![
        author("a2", "Frank", "Herbert"),
        author("a1", "Isaac", "Asimov"),
    ])
}

pub fn app(store: Arc<MemoryStore>) -> Router {
    let state = AppState {
        services: Arc::new(Services::new(store)),
    };
    api::router(state)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> TestResponse {
    post_with_type(app, uri, "application/x-www-form-urlencoded", body).await
}

pub async fn post_with_type(
    app: Router,
    uri: &str,
    content_type: &str,
    body: &str,
) -> TestResponse {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}
