use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use souk_core::VendorId;

/// A registered marketplace tenant.
///
/// # Invariants
/// - Exactly one vendor per email (enforced by the directory's atomic
///   check-and-insert).
/// - `password_hash` is a one-way argon2 PHC string; the plaintext is never
///   stored or logged.
/// - Created once at registration; never updated or deleted by this core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Vendor {
    /// Build a new record with a fresh id. `email` is expected to be
    /// normalized (trimmed, lowercased) by the caller.
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: VendorId::new(),
            name,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
