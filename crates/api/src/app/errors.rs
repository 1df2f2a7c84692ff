use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use souk_auth::AuthError;
use souk_core::DomainError;

/// Map a domain failure to a fixed status code and opaque message.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::DuplicateEmail => json_error(
            StatusCode::BAD_REQUEST,
            "duplicate_email",
            "email already registered",
        ),
        DomainError::InvalidCredentials => json_error(
            StatusCode::BAD_REQUEST,
            "invalid_credentials",
            "invalid email or password",
        ),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Internal(detail) => {
            tracing::error!(%detail, "internal error");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "internal error",
            )
        }
    }
}

pub fn auth_error_to_response(err: AuthError) -> axum::response::Response {
    match err {
        AuthError::MissingCredential => json_error(
            StatusCode::UNAUTHORIZED,
            "missing_credential",
            "missing bearer credential",
        ),
        AuthError::InvalidToken => json_error(
            StatusCode::UNAUTHORIZED,
            "invalid_token",
            "invalid or expired token",
        ),
        AuthError::Hashing(detail) | AuthError::Encoding(detail) => {
            tracing::error!(%detail, "auth internal error");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "internal error",
            )
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
