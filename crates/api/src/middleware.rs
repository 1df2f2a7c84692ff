use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, middleware::Next, response::Response};

use souk_auth::{AuthError, TokenService};

use crate::app::errors;
use crate::context::VendorContext;

#[derive(Clone)]
pub struct AuthState {
    pub tokens: Arc<TokenService>,
}

/// Auth gate for protected routes.
///
/// Extracts and verifies the bearer token, then injects the resolved vendor
/// identity into the request extensions. Rejection short-circuits the
/// pipeline: no resource handler runs.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let vendor_id = match extract_bearer(req.headers()).and_then(|t| state.tokens.verify(t)) {
        Ok(id) => id,
        Err(e) => return errors::auth_error_to_response(e),
    };

    req.extensions_mut().insert(VendorContext::new(vendor_id));

    next.run(req).await
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, AuthError> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or(AuthError::MissingCredential)?;

    let header = header.to_str().map_err(|_| AuthError::MissingCredential)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MissingCredential)?
        .trim();
    if token.is_empty() {
        return Err(AuthError::MissingCredential);
    }

    Ok(token)
}
