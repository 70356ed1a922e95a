use std::fmt;

use chrono::DateTime;
use chrono::Datelike;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::book::errors::AuthorNameError;
use crate::domain::book::errors::BookIdError;
use crate::domain::book::errors::BookTitleError;
use crate::domain::book::errors::PublicationYearError;
use crate::domain::user::models::UserId;

/// Book aggregate entity.
///
/// Every book is owned by the user that created it; only the owner may
/// update or delete it.
#[derive(Debug, Clone)]
pub struct Book {
    pub id: BookId,
    pub title: BookTitle,
    pub author: AuthorName,
    pub publication_year: PublicationYear,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Book unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookId(pub Uuid);

impl BookId {
    /// Generate a new random book ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a book ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, BookIdError> {
        Uuid::parse_str(s)
            .map(BookId)
            .map_err(|e| BookIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Title value type, non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookTitle(String);

impl BookTitle {
    /// # Errors
    /// * `Empty` - Title is the empty string
    pub fn new(title: String) -> Result<Self, BookTitleError> {
        if title.is_empty() {
            Err(BookTitleError::Empty)
        } else {
            Ok(Self(title))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Author value type, non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorName(String);

impl AuthorName {
    /// # Errors
    /// * `Empty` - Author is the empty string
    pub fn new(author: String) -> Result<Self, AuthorNameError> {
        if author.is_empty() {
            Err(AuthorNameError::Empty)
        } else {
            Ok(Self(author))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Publication year value type.
///
/// Bounded to 1000..=current year, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicationYear(i32);

impl PublicationYear {
    const MIN: i32 = 1000;

    /// Create a validated publication year.
    ///
    /// # Errors
    /// * `OutOfRange` - Year is before 1000 or after the current year
    pub fn new(year: i32) -> Result<Self, PublicationYearError> {
        let max = Utc::now().year();
        if year < Self::MIN || year > max {
            Err(PublicationYearError::OutOfRange {
                min: Self::MIN,
                max,
                actual: year,
            })
        } else {
            Ok(Self(year))
        }
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for PublicationYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new book with domain types.
///
/// The owner is not part of the command; it is always the authenticated
/// caller.
#[derive(Debug)]
pub struct CreateBookCommand {
    pub title: BookTitle,
    pub author: AuthorName,
    pub publication_year: PublicationYear,
}

/// Command to update an existing book with optional validated fields.
///
/// All fields are optional to support partial updates.
/// Only provided fields will be updated.
#[derive(Debug, Default)]
pub struct UpdateBookCommand {
    pub title: Option<BookTitle>,
    pub author: Option<AuthorName>,
    pub publication_year: Option<PublicationYear>,
}

/// Exact-match listing filters, combinable (AND).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub author: Option<String>,
    pub publication_year: Option<i32>,
}
