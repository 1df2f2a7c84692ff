//! `souk-store` — owner-scoped persistence abstraction.
//!
//! Every read and mutation goes through [`OwnedStore`], which takes the owning
//! vendor on every call. Services built on top cannot forget the owner filter.

pub mod owned;

pub use owned::{Document, InMemoryOwnedStore, OwnedStore};
