//! Authentication utilities library
//!
//! Provides the authentication infrastructure for the book service:
//! - Password hashing (Argon2id)
//! - Signed bearer token issuing and verification
//!
//! The service wires these into its own domain and HTTP layers; nothing in
//! here knows about users or books beyond an opaque subject string.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::TokenIssuer;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!", 24);
//! let token = issuer.issue("user123").unwrap();
//! let claims = issuer.verify(&token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenIssuer;
