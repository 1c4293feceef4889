//! HTTP handlers and routing for the catalog pages

pub mod books;
pub mod catalog;
pub mod health;
pub mod views;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Form, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, models::BookForm, AppState};

/// Book form body; unreadable bodies get the regular error page
pub struct BookFormBody(pub BookForm);

#[async_trait]
impl<S> FromRequest<S> for BookFormBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(form) = Form::<BookForm>::from_request(req, state).await?;
        Ok(BookFormBody(form))
    }
}

/// Where deletions and missing-book deletes land
pub const BOOK_LIST_PATH: &str = "/catalog/books";

/// 302 Found redirect
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location.to_string())]).into_response()
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(|| async { found("/catalog/") }))
        .route("/catalog", get(catalog::index))
        .route("/catalog/", get(catalog::index))
        .route("/catalog/books", get(books::book_list))
        .route(
            "/catalog/book/create",
            get(books::book_create_get).post(books::book_create_post),
        )
        .route("/catalog/book/:id", get(books::book_detail))
        .route(
            "/catalog/book/:id/delete",
            get(books::book_delete_get).post(books::book_delete_post),
        )
        .route(
            "/catalog/book/:id/update",
            get(books::book_update_get).post(books::book_update_post),
        )
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_sets_location() {
        let response = found("/catalog/books");
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(LOCATION).unwrap(),
            "/catalog/books"
        );
    }
}
