use thiserror::Error;

/// Authentication failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No bearer credential was presented.
    #[error("missing bearer credential")]
    MissingCredential,

    /// Signature mismatch, malformed token, or expired token. One variant on
    /// purpose: callers get no hint which check failed.
    #[error("invalid token")]
    InvalidToken,

    #[error("password hashing failed: {0}")]
    Hashing(String),

    #[error("token encoding failed: {0}")]
    Encoding(String),
}
