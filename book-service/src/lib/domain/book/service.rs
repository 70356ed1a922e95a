use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookFilter;
use crate::domain::book::models::BookId;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::UpdateBookCommand;
use crate::domain::book::ports::BookRepository;
use crate::domain::book::ports::BookServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for book operations.
///
/// Owns the ownership rule: mutation is restricted to the user referenced
/// as the book's owner. The read-check-write sequence in update/delete is
/// not atomic across requests; concurrent mutations of the same book are
/// serialized only by the store.
pub struct BookService<BR>
where
    BR: BookRepository,
{
    repository: Arc<BR>,
}

impl<BR> BookService<BR>
where
    BR: BookRepository,
{
    pub fn new(repository: Arc<BR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<BR> BookServicePort for BookService<BR>
where
    BR: BookRepository,
{
    async fn list_books(&self, filter: BookFilter) -> Result<Vec<Book>, BookError> {
        self.repository.list(&filter).await
    }

    async fn create_book(
        &self,
        command: CreateBookCommand,
        owner: UserId,
    ) -> Result<Book, BookError> {
        let book = Book {
            id: BookId::new(),
            title: command.title,
            author: command.author,
            publication_year: command.publication_year,
            owner_id: owner,
            created_at: Utc::now(),
        };

        self.repository.create(book).await
    }

    async fn update_book(
        &self,
        id: &BookId,
        acting_user: &UserId,
        command: UpdateBookCommand,
    ) -> Result<Book, BookError> {
        let mut book = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound(id.to_string()))?;

        if book.owner_id != *acting_user {
            return Err(BookError::Forbidden);
        }

        if let Some(new_title) = command.title {
            book.title = new_title;
        }

        if let Some(new_author) = command.author {
            book.author = new_author;
        }

        if let Some(new_publication_year) = command.publication_year {
            book.publication_year = new_publication_year;
        }

        self.repository.update(book).await
    }

    async fn delete_book(&self, id: &BookId, acting_user: &UserId) -> Result<(), BookError> {
        let book = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound(id.to_string()))?;

        if book.owner_id != *acting_user {
            return Err(BookError::Forbidden);
        }

        self.repository.delete(id).await
    }
}
