use thiserror::Error;

/// Error for BookId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for BookTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookTitleError {
    #[error("Title is required")]
    Empty,
}

/// Error for AuthorName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthorNameError {
    #[error("Author is required")]
    Empty,
}

/// Error for PublicationYear validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PublicationYearError {
    #[error("Invalid publication year: must be between {min} and {max}")]
    OutOfRange { min: i32, max: i32, actual: i32 },
}

/// Top-level error for all book-related operations
#[derive(Debug, Clone, Error)]
pub enum BookError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid book ID: {0}")]
    InvalidBookId(#[from] BookIdError),

    #[error("Invalid title: {0}")]
    InvalidTitle(#[from] BookTitleError),

    #[error("Invalid author: {0}")]
    InvalidAuthor(#[from] AuthorNameError),

    #[error("Invalid publication year: {0}")]
    InvalidPublicationYear(#[from] PublicationYearError),

    // Domain-level errors
    #[error("Book not found")]
    NotFound(String),

    #[error("Not authorized to modify this book")]
    Forbidden,

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
