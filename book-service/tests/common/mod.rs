use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::TokenIssuer;
use book_service::domain::book::errors::BookError;
use book_service::domain::book::models::Book;
use book_service::domain::book::models::BookFilter;
use book_service::domain::book::models::BookId;
use book_service::domain::book::ports::BookRepository;
use book_service::domain::book::ports::BookServicePort;
use book_service::domain::book::service::BookService;
use book_service::domain::user::errors::UserError;
use book_service::domain::user::models::User;
use book_service::domain::user::models::UserId;
use book_service::domain::user::ports::UserRepository;
use book_service::domain::user::ports::UserServicePort;
use book_service::domain::user::service::UserService;
use book_service::inbound::http::router::create_router;
use serde_json::json;

const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over in-memory stores
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub token_issuer: TokenIssuer,
    pub user_store: Arc<InMemoryUserRepository>,
    pub book_store: Arc<InMemoryBookRepository>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let user_store = Arc::new(InMemoryUserRepository::default());
        let book_store = Arc::new(InMemoryBookRepository::default());

        let user_service: Arc<dyn UserServicePort> =
            Arc::new(UserService::new(Arc::clone(&user_store)));
        let book_service: Arc<dyn BookServicePort> =
            Arc::new(BookService::new(Arc::clone(&book_store)));
        let token_issuer = Arc::new(TokenIssuer::new(JWT_SECRET, 24));

        let router = create_router(user_service, book_service, token_issuer);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            token_issuer: TokenIssuer::new(JWT_SECRET, 24),
            user_store,
            book_store,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PATCH request with Bearer token
    pub fn patch_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .patch(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register a user and log in, returning the bearer token
    pub async fn register_and_login(&self, name: &str, email: &str, password: &str) -> String {
        let response = self
            .post("/api/users/register")
            .json(&json!({ "name": name, "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute register request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let response = self
            .post("/api/users/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute login request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["token"].as_str().expect("Missing token").to_string()
    }

    /// Create a book through the API, returning its id
    pub async fn create_book(
        &self,
        token: &str,
        title: &str,
        author: &str,
        publication_year: i32,
    ) -> String {
        let response = self
            .post_authenticated("/api/books", token)
            .json(&json!({
                "title": title,
                "author": author,
                "publicationYear": publication_year
            }))
            .send()
            .await
            .expect("Failed to execute create book request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["id"].as_str().expect("Missing book id").to_string()
    }

    /// User id embedded in a token issued by this app
    pub fn user_id_of(&self, token: &str) -> String {
        self.token_issuer
            .verify(token)
            .expect("Failed to verify token")
            .sub
    }
}

/// In-memory stand-in for the Postgres user store
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn count_by_email(&self, email: &str) -> usize {
        self.users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.email.as_str() == email)
            .count()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email.as_str() == user.email.as_str()) {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == *id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email.as_str() == email)
            .cloned())
    }
}

/// In-memory stand-in for the Postgres book store
#[derive(Default)]
pub struct InMemoryBookRepository {
    books: Mutex<Vec<Book>>,
}

impl InMemoryBookRepository {
    pub fn get(&self, id: &BookId) -> Option<Book> {
        self.books
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == *id)
            .cloned()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn create(&self, book: Book) -> Result<Book, BookError> {
        self.books.lock().unwrap().push(book.clone());
        Ok(book)
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError> {
        Ok(self
            .books
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == *id)
            .cloned())
    }

    async fn list(&self, filter: &BookFilter) -> Result<Vec<Book>, BookError> {
        Ok(self
            .books
            .lock()
            .unwrap()
            .iter()
            .filter(|b| {
                filter
                    .author
                    .as_ref()
                    .map_or(true, |author| b.author.as_str() == author)
                    && filter
                        .publication_year
                        .map_or(true, |year| b.publication_year.as_i32() == year)
            })
            .cloned()
            .collect())
    }

    async fn update(&self, book: Book) -> Result<Book, BookError> {
        let mut books = self.books.lock().unwrap();
        match books.iter_mut().find(|b| b.id == book.id) {
            Some(stored) => {
                *stored = book.clone();
                Ok(book)
            }
            None => Err(BookError::NotFound(book.id.to_string())),
        }
    }

    async fn delete(&self, id: &BookId) -> Result<(), BookError> {
        let mut books = self.books.lock().unwrap();
        let before = books.len();
        books.retain(|b| b.id != *id);
        if books.len() == before {
            return Err(BookError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
