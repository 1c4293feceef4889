//! Catalog home page

use askama::Template;
use axum::{extract::State, response::Html};

use crate::{error::AppResult, AppState};

use super::views::IndexView;

/// GET /catalog/
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let summary = state.services.catalog.summary().await?;
    let view = IndexView {
        title: "Local Library Home".to_string(),
        book_count: summary.book_count,
        author_count: summary.author_count,
    };
    Ok(Html(view.render()?))
}
