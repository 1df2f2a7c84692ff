//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures (validation,
/// uniqueness, ownership-scoped lookups). Transport status mapping lives in
/// the API layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A vendor with the same email already exists.
    #[error("email already registered")]
    DuplicateEmail,

    /// Login failed. One variant for unknown email and wrong password, so the
    /// response never reveals whether an account exists.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Not found within the caller's ownership scope. Indistinguishable from
    /// true absence.
    #[error("not found")]
    NotFound,

    /// Infrastructure failure. The detail is logged, never returned to
    /// clients.
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
