use souk_core::VendorId;

/// Authenticated vendor context for a request.
///
/// This is immutable and must be present for all protected routes; the auth
/// middleware inserts it after verifying the bearer token.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VendorContext {
    vendor_id: VendorId,
}

impl VendorContext {
    pub fn new(vendor_id: VendorId) -> Self {
        Self { vendor_id }
    }

    pub fn vendor_id(&self) -> VendorId {
        self.vendor_id
    }
}
