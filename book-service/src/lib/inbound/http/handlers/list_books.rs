use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::BookData;
use crate::domain::book::models::BookFilter;
use crate::inbound::http::router::AppState;

pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<ListBooksQuery>,
) -> Result<ApiSuccess<Vec<BookData>>, ApiError> {
    state
        .book_service
        .list_books(query.into_filter())
        .await
        .map_err(ApiError::from)
        .map(|books| {
            ApiSuccess::new(StatusCode::OK, books.iter().map(BookData::from).collect())
        })
}

/// Optional exact-match filters; when both are given they combine with AND.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBooksQuery {
    author: Option<String>,
    publication_year: Option<i32>,
}

impl ListBooksQuery {
    fn into_filter(self) -> BookFilter {
        BookFilter {
            author: self.author,
            publication_year: self.publication_year,
        }
    }
}
