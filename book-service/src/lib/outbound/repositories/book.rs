use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::AuthorName;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookFilter;
use crate::domain::book::models::BookId;
use crate::domain::book::models::BookTitle;
use crate::domain::book::models::PublicationYear;
use crate::domain::book::ports::BookRepository;
use crate::domain::user::models::UserId;

pub struct PostgresBookRepository {
    pool: PgPool,
}

impl PostgresBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: Uuid,
    title: String,
    author: String,
    publication_year: i32,
    owner_id: Uuid,
    created_at: DateTime<Utc>,
}

impl BookRow {
    fn try_into_book(self) -> Result<Book, BookError> {
        Ok(Book {
            id: BookId(self.id),
            title: BookTitle::new(self.title)?,
            author: AuthorName::new(self.author)?,
            publication_year: PublicationYear::new(self.publication_year)?,
            owner_id: UserId(self.owner_id),
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl BookRepository for PostgresBookRepository {
    async fn create(&self, book: Book) -> Result<Book, BookError> {
        sqlx::query(
            r#"
            INSERT INTO books (id, title, author, publication_year, owner_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(book.id.0)
        .bind(book.title.as_str())
        .bind(book.author.as_str())
        .bind(book.publication_year.as_i32())
        .bind(book.owner_id.0)
        .bind(book.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        Ok(book)
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, author, publication_year, owner_id, created_at
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        row.map(BookRow::try_into_book).transpose()
    }

    async fn list(&self, filter: &BookFilter) -> Result<Vec<Book>, BookError> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, author, publication_year, owner_id, created_at
            FROM books
            WHERE ($1::text IS NULL OR author = $1)
              AND ($2::int4 IS NULL OR publication_year = $2)
            ORDER BY created_at DESC
            "#,
        )
        .bind(filter.author.as_deref())
        .bind(filter.publication_year)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(BookRow::try_into_book).collect()
    }

    async fn update(&self, book: Book) -> Result<Book, BookError> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = $2, author = $3, publication_year = $4
            WHERE id = $1
            "#,
        )
        .bind(book.id.0)
        .bind(book.title.as_str())
        .bind(book.author.as_str())
        .bind(book.publication_year.as_i32())
        .execute(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(BookError::NotFound(book.id.to_string()));
        }

        Ok(book)
    }

    async fn delete(&self, id: &BookId) -> Result<(), BookError> {
        let result = sqlx::query(
            r#"
            DELETE FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(BookError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
