use thiserror::Error;

/// Error type for JWT operations.
///
/// Decode failures are collapsed into a single `InvalidToken` variant so the
/// caller cannot distinguish a malformed token from a wrong-secret one.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is invalid")]
    InvalidToken,
}
