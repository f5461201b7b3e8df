//! Authentication library for the site backend.
//!
//! Provides the credential and token primitives the HTTP service composes:
//! - Password hashing (Argon2id)
//! - JWT bearer token encoding and validation
//! - An `Authenticator` coordinating both for login flows
//!
//! Tokens carry exactly the identity triple (subject id, email, role) and no
//! expiry claim: encoding is a pure function of the claims and the signing
//! secret, so a token stays valid until the secret is rotated. The secret is
//! always injected at construction, never read from ambient process state.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::new("user-id", "alice@example.com", "user");
//! let token = handler.encode(&claims).unwrap();
//! let decoded: Claims = handler.decode(&token).unwrap();
//! assert_eq!(decoded, claims);
//! ```
//!
//! ## Complete Login Flow
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let claims = Claims::new("user-id", "alice@example.com", "user");
//! let result = auth.authenticate("password123", &hash, &claims).unwrap();
//!
//! // Validate token on a later request
//! let decoded: Claims = auth.validate_token(&result.access_token).unwrap();
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
