//! Signed, time-bound vendor bearer tokens.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use souk_core::VendorId;

use crate::AuthError;

/// Token lifetime in hours. Expiry is the only invalidation mechanism; there
/// is no revocation list, so an issued token stays valid for its full
/// lifetime.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// JWT claims carried by a vendor bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Vendor identity.
    pub sub: VendorId,
    /// Issued-at (unix seconds).
    pub iat: i64,
    /// Expiration (unix seconds).
    pub exp: i64,
}

/// Issues and verifies HS256-signed vendor tokens.
///
/// Holds the symmetric secret; construct one per process from configuration
/// and pass it to whatever needs it (never an ambient global).
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Issue a signed token for `vendor_id` expiring [`TOKEN_TTL_HOURS`]
    /// after `now`.
    pub fn issue(&self, vendor_id: VendorId, now: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = TokenClaims {
            sub: vendor_id,
            iat: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::Encoding(e.to_string()))
    }

    /// Verify signature and expiry, returning the vendor identity claim.
    pub fn verify(&self, token: &str) -> Result<VendorId, AuthError> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<TokenClaims>(token, &self.decoding, &validation)
            .map(|data| data.claims.sub)
            .map_err(|_| AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_then_verify_yields_the_same_vendor() {
        let service = TokenService::new(b"test-secret");
        let vendor_id = VendorId::new();

        let token = service.issue(vendor_id, Utc::now()).unwrap();
        assert_eq!(service.verify(&token).unwrap(), vendor_id);
    }

    #[test]
    fn expired_token_fails_verification() {
        let service = TokenService::new(b"test-secret");
        // Issued two days ago, so the 24h expiry is well past any leeway.
        let issued_at = Utc::now() - Duration::hours(48);

        let token = service.issue(VendorId::new(), issued_at).unwrap();
        assert_eq!(service.verify(&token), Err(AuthError::InvalidToken));
    }

    #[test]
    fn token_signed_with_a_different_secret_fails() {
        let issuer = TokenService::new(b"secret-a");
        let verifier = TokenService::new(b"secret-b");

        let token = issuer.issue(VendorId::new(), Utc::now()).unwrap();
        assert_eq!(verifier.verify(&token), Err(AuthError::InvalidToken));
    }

    #[test]
    fn malformed_token_fails() {
        let service = TokenService::new(b"test-secret");
        assert_eq!(service.verify("not.a.jwt"), Err(AuthError::InvalidToken));
        assert_eq!(service.verify(""), Err(AuthError::InvalidToken));
    }
}
