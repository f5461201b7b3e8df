use thiserror::Error;

/// Error type for password hashing.
///
/// Verification has no error path: a malformed stored hash verifies as false.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
