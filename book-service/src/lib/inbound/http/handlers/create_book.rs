use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::BookData;
use crate::domain::book::models::AuthorName;
use crate::domain::book::models::BookTitle;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::PublicationYear;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::FieldViolation;
use crate::inbound::http::validation::Violations;

pub async fn create_book(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(body): Json<CreateBookRequest>,
) -> Result<ApiSuccess<BookData>, ApiError> {
    let command = body.try_into_command().map_err(ApiError::Validation)?;

    state
        .book_service
        .create_book(command, caller.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::CREATED, book.into()))
}

/// HTTP request body for creating a book (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    title: Option<String>,
    author: Option<String>,
    publication_year: Option<i32>,
}

impl CreateBookRequest {
    /// Field rules, in order: title non-empty, author non-empty,
    /// publication year within bounds. Every failing field is reported.
    fn try_into_command(self) -> Result<CreateBookCommand, Vec<FieldViolation>> {
        let mut violations = Violations::new();

        let title = violations.capture("title", BookTitle::new(self.title.unwrap_or_default()));
        let author = violations.capture("author", AuthorName::new(self.author.unwrap_or_default()));
        let publication_year = match self.publication_year {
            Some(year) => violations.capture("publicationYear", PublicationYear::new(year)),
            None => {
                violations.missing("publicationYear");
                None
            }
        };

        match (title, author, publication_year) {
            (Some(title), Some(author), Some(publication_year)) => Ok(CreateBookCommand {
                title,
                author,
                publication_year,
            }),
            _ => Err(violations.into_inner()),
        }
    }
}
