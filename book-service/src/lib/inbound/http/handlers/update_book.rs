use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::BookData;
use crate::domain::book::models::AuthorName;
use crate::domain::book::models::BookId;
use crate::domain::book::models::BookTitle;
use crate::domain::book::models::PublicationYear;
use crate::domain::book::models::UpdateBookCommand;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::FieldViolation;
use crate::inbound::http::validation::Violations;

pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(body): Json<UpdateBookRequest>,
) -> Result<ApiSuccess<UpdateBookResponseData>, ApiError> {
    // An id that does not even parse cannot name a stored book
    let book_id = BookId::from_string(&book_id)
        .map_err(|_| ApiError::NotFound("Book not found".to_string()))?;

    let command = body.try_into_command().map_err(ApiError::Validation)?;

    state
        .book_service
        .update_book(&book_id, &caller.user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref book| {
            ApiSuccess::new(
                StatusCode::OK,
                UpdateBookResponseData {
                    message: "Book updated successfully".to_string(),
                    book: book.into(),
                },
            )
        })
}

/// HTTP request body for updating a book (raw JSON)
///
/// All fields optional; each present field is validated by the same rule
/// the create endpoint applies.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookRequest {
    title: Option<String>,
    author: Option<String>,
    publication_year: Option<i32>,
}

impl UpdateBookRequest {
    fn try_into_command(self) -> Result<UpdateBookCommand, Vec<FieldViolation>> {
        let mut violations = Violations::new();

        let title = self
            .title
            .and_then(|t| violations.capture("title", BookTitle::new(t)));
        let author = self
            .author
            .and_then(|a| violations.capture("author", AuthorName::new(a)));
        let publication_year = self
            .publication_year
            .and_then(|y| violations.capture("publicationYear", PublicationYear::new(y)));

        if violations.is_empty() {
            Ok(UpdateBookCommand {
                title,
                author,
                publication_year,
            })
        } else {
            Err(violations.into_inner())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateBookResponseData {
    pub message: String,
    pub book: BookData,
}
