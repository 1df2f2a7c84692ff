//! `souk-vendors` — the credential store: vendor records, unique-email
//! persistence, and the registration/login service.

pub mod directory;
pub mod service;
pub mod vendor;

pub use directory::{InMemoryVendorDirectory, VendorDirectory};
pub use service::CredentialService;
pub use vendor::Vendor;
