//! Book pages: list, detail, create, update and delete

use askama::Template;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};

use crate::{
    error::AppResult,
    models::BookForm,
    services::catalog::Submission,
    AppState,
};

use super::{
    found, BookFormBody,
    views::{BookDeleteView, BookDetailView, BookFormView, BookListView},
    BOOK_LIST_PATH,
};

const CREATE_TITLE: &str = "Create Book";
const UPDATE_TITLE: &str = "Update Book";

/// GET /catalog/books
pub async fn book_list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let book_list = state.services.catalog.list_books().await?;
    let view = BookListView {
        title: "Book List".to_string(),
        book_list,
    };
    Ok(Html(view.render()?))
}

/// GET /catalog/book/:id
pub async fn book_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let book = state.services.catalog.get_book(&id).await?;
    let view = BookDetailView {
        title: book.title.clone(),
        book,
    };
    Ok(Html(view.render()?))
}

/// GET /catalog/book/create
pub async fn book_create_get(State(state): State<AppState>) -> AppResult<Html<String>> {
    let authors = state.services.catalog.list_authors().await?;
    let view = BookFormView::new(CREATE_TITLE, authors, BookForm::default(), Vec::new());
    Ok(Html(view.render()?))
}

/// POST /catalog/book/create
pub async fn book_create_post(
    State(state): State<AppState>,
    BookFormBody(form): BookFormBody,
) -> AppResult<Response> {
    let outcome = state.services.catalog.create_book(form).await?;
    submission_response(CREATE_TITLE, outcome)
}

/// GET /catalog/book/:id/delete
pub async fn book_delete_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let Some(book) = state.services.catalog.find_book(&id).await? else {
        return Ok(found(BOOK_LIST_PATH));
    };
    let view = BookDeleteView {
        title: "Delete Book".to_string(),
        book,
    };
    Ok(Html(view.render()?).into_response())
}

/// POST /catalog/book/:id/delete
pub async fn book_delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    state.services.catalog.delete_book(&id).await?;
    Ok(found(BOOK_LIST_PATH))
}

/// GET /catalog/book/:id/update
pub async fn book_update_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let (book, authors) = state.services.catalog.edit_book(&id).await?;
    let view = BookFormView::new(UPDATE_TITLE, authors, book.to_form(), Vec::new());
    Ok(Html(view.render()?))
}

/// POST /catalog/book/:id/update
pub async fn book_update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    BookFormBody(form): BookFormBody,
) -> AppResult<Response> {
    let outcome = state.services.catalog.update_book(&id, form).await?;
    submission_response(UPDATE_TITLE, outcome)
}

/// Redirect to the stored book, or show the form again with its errors
fn submission_response(title: &str, outcome: Submission) -> AppResult<Response> {
    match outcome {
        Submission::Saved(book) => Ok(found(&book.url())),
        Submission::Rejected {
            form,
            errors,
            authors,
        } => {
            let view = BookFormView::new(title, authors, form, errors);
            Ok(Html(view.render()?).into_response())
        }
    }
}
