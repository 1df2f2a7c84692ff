use souk_auth::{hash_password, verify_password};
use souk_core::{DomainError, DomainResult, VendorId};

use crate::{Vendor, VendorDirectory};

/// Registration and login over the vendor directory.
///
/// Password hashing and verification are CPU-bound and run on the blocking
/// pool so they never stall unrelated requests.
pub struct CredentialService<D> {
    directory: D,
}

impl<D: VendorDirectory> CredentialService<D> {
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    /// Register a new vendor, hashing the password and persisting the record.
    ///
    /// Fails with [`DomainError::DuplicateEmail`] if the (normalized) email is
    /// already registered.
    pub async fn register(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> DomainResult<VendorId> {
        let email = email.trim().to_lowercase();

        let hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| DomainError::internal(format!("hash task failed: {e}")))?
            .map_err(|e| DomainError::internal(e.to_string()))?;

        let vendor = Vendor::new(name.trim().to_string(), email, hash);
        let id = vendor.id;
        self.directory.insert_unique(vendor)?;

        tracing::info!(vendor_id = %id, "vendor registered");
        Ok(id)
    }

    /// Check an email/password pair and return the vendor's id.
    ///
    /// Fails with a single undifferentiated [`DomainError::InvalidCredentials`]
    /// for both an unknown email and a wrong password.
    pub async fn verify_credentials(&self, email: &str, password: &str) -> DomainResult<VendorId> {
        let email = email.trim().to_lowercase();
        let Some(vendor) = self.directory.find_by_email(&email) else {
            return Err(DomainError::InvalidCredentials);
        };

        let password = password.to_string();
        let hash = vendor.password_hash;
        let verified = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(|e| DomainError::internal(format!("verify task failed: {e}")))?;

        if verified {
            Ok(vendor.id)
        } else {
            Err(DomainError::InvalidCredentials)
        }
    }
}
