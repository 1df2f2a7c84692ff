//! `souk-auth` — credential primitives: password hashing and bearer tokens.
//!
//! This crate is intentionally decoupled from HTTP and storage.

pub mod error;
pub mod password;
pub mod token;

pub use error::AuthError;
pub use password::{hash_password, verify_password};
pub use token::{TOKEN_TTL_HOURS, TokenClaims, TokenService};
