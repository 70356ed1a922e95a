use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::book::models::BookId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    Extension(caller): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<DeleteBookResponseData>, ApiError> {
    let book_id = BookId::from_string(&book_id)
        .map_err(|_| ApiError::NotFound("Book not found".to_string()))?;

    state
        .book_service
        .delete_book(&book_id, &caller.user_id)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                DeleteBookResponseData {
                    message: "Book deleted successfully".to_string(),
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteBookResponseData {
    pub message: String,
}
