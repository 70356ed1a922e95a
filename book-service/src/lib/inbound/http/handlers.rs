use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::user::errors::UserError;
use crate::inbound::http::validation::FieldViolation;

pub mod create_book;
pub mod delete_book;
pub mod list_books;
pub mod login;
pub mod register;
pub mod update_book;

/// Successful response: a status code and a JSON body.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Error taxonomy exposed by the HTTP surface.
///
/// Bodies are always `{message}` or, for validation failures, `{errors}`.
/// Internal causes are logged server-side and never leak to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Validation(Vec<FieldViolation>),
    Conflict(String),
    InvalidCredentials,
    Unauthenticated,
    Forbidden(String),
    NotFound(String),
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            ApiError::Conflict(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response()
            }
            ApiError::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Invalid credentials" })),
            )
                .into_response(),
            ApiError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Authentication required" })),
            )
                .into_response(),
            ApiError::Forbidden(message) => {
                (StatusCode::FORBIDDEN, Json(json!({ "message": message }))).into_response()
            }
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
            }
            ApiError::InternalServerError(cause) => {
                tracing::error!(error = %cause, "Request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidCredentials => ApiError::InvalidCredentials,
            UserError::InvalidUserId(_)
            | UserError::InvalidName(_)
            | UserError::InvalidEmail(_)
            | UserError::Password(_)
            | UserError::DatabaseError(_)
            | UserError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<BookError> for ApiError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::NotFound(_) | BookError::InvalidBookId(_) => {
                ApiError::NotFound("Book not found".to_string())
            }
            BookError::Forbidden => ApiError::Forbidden(err.to_string()),
            BookError::InvalidTitle(_)
            | BookError::InvalidAuthor(_)
            | BookError::InvalidPublicationYear(_)
            | BookError::DatabaseError(_)
            | BookError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

/// Wire representation of a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookData {
    pub id: String,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Book> for BookData {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.to_string(),
            title: book.title.as_str().to_string(),
            author: book.author.as_str().to_string(),
            publication_year: book.publication_year.as_i32(),
            owner_id: book.owner_id.to_string(),
            created_at: book.created_at,
        }
    }
}
