use async_trait::async_trait;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookFilter;
use crate::domain::book::models::BookId;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::UpdateBookCommand;
use crate::domain::user::models::UserId;

/// Port for book domain service operations.
#[async_trait]
pub trait BookServicePort: Send + Sync + 'static {
    /// List books matching the given exact-match filters.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_books(&self, filter: BookFilter) -> Result<Vec<Book>, BookError>;

    /// Create a new book owned by the acting user.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_book(
        &self,
        command: CreateBookCommand,
        owner: UserId,
    ) -> Result<Book, BookError>;

    /// Apply a partial update to a book owned by the acting user.
    ///
    /// Only the fields present in the command change; the rest keep their
    /// stored values.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `Forbidden` - Acting user is not the book's owner
    /// * `DatabaseError` - Database operation failed
    async fn update_book(
        &self,
        id: &BookId,
        acting_user: &UserId,
        command: UpdateBookCommand,
    ) -> Result<Book, BookError>;

    /// Delete a book owned by the acting user.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `Forbidden` - Acting user is not the book's owner
    /// * `DatabaseError` - Database operation failed
    async fn delete_book(&self, id: &BookId, acting_user: &UserId) -> Result<(), BookError>;
}

/// Persistence operations for the book aggregate.
#[async_trait]
pub trait BookRepository: Send + Sync + 'static {
    /// Persist new book to storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, book: Book) -> Result<Book, BookError>;

    /// Retrieve book by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError>;

    /// Retrieve books matching the filter, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list(&self, filter: &BookFilter) -> Result<Vec<Book>, BookError>;

    /// Update existing book in storage.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, book: Book) -> Result<Book, BookError>;

    /// Remove book from storage.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &BookId) -> Result<(), BookError>;
}
