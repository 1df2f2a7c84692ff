use std::sync::{Arc, RwLock};

use souk_core::{DomainError, VendorId};

use crate::Vendor;

/// Persistence boundary for vendor records, keyed by unique email.
pub trait VendorDirectory: Send + Sync {
    /// Insert a new vendor, failing with [`DomainError::DuplicateEmail`] if
    /// the email is already taken. Check and insert happen under one lock, so
    /// two concurrent registrations for the same email cannot both succeed.
    fn insert_unique(&self, vendor: Vendor) -> Result<(), DomainError>;

    fn find_by_email(&self, email: &str) -> Option<Vendor>;

    fn find_by_id(&self, id: VendorId) -> Option<Vendor>;
}

impl<S> VendorDirectory for Arc<S>
where
    S: VendorDirectory + ?Sized,
{
    fn insert_unique(&self, vendor: Vendor) -> Result<(), DomainError> {
        (**self).insert_unique(vendor)
    }

    fn find_by_email(&self, email: &str) -> Option<Vendor> {
        (**self).find_by_email(email)
    }

    fn find_by_id(&self, id: VendorId) -> Option<Vendor> {
        (**self).find_by_id(id)
    }
}

/// In-memory vendor directory for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryVendorDirectory {
    inner: RwLock<Vec<Vendor>>,
}

impl InMemoryVendorDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VendorDirectory for InMemoryVendorDirectory {
    fn insert_unique(&self, vendor: Vendor) -> Result<(), DomainError> {
        let mut vendors = self
            .inner
            .write()
            .map_err(|_| DomainError::internal("vendor directory lock poisoned"))?;

        if vendors.iter().any(|v| v.email == vendor.email) {
            return Err(DomainError::DuplicateEmail);
        }
        vendors.push(vendor);
        Ok(())
    }

    fn find_by_email(&self, email: &str) -> Option<Vendor> {
        let vendors = self.inner.read().ok()?;
        vendors.iter().find(|v| v.email == email).cloned()
    }

    fn find_by_id(&self, id: VendorId) -> Option<Vendor> {
        let vendors = self.inner.read().ok()?;
        vendors.iter().find(|v| v.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor(email: &str) -> Vendor {
        Vendor::new("Acme".to_string(), email.to_string(), "hash".to_string())
    }

    #[test]
    fn insert_then_find_by_email_and_id() {
        let directory = InMemoryVendorDirectory::new();
        let v = vendor("a@x.com");

        directory.insert_unique(v.clone()).unwrap();
        assert_eq!(directory.find_by_email("a@x.com"), Some(v.clone()));
        assert_eq!(directory.find_by_id(v.id), Some(v));
        assert_eq!(directory.find_by_email("b@x.com"), None);
    }

    #[test]
    fn duplicate_email_is_rejected_regardless_of_other_fields() {
        let directory = InMemoryVendorDirectory::new();
        directory.insert_unique(vendor("a@x.com")).unwrap();

        let other = Vendor::new(
            "Other Name".to_string(),
            "a@x.com".to_string(),
            "other-hash".to_string(),
        );
        assert_eq!(
            directory.insert_unique(other),
            Err(DomainError::DuplicateEmail)
        );
    }
}
