use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::{timestamp_now, ValidationResponse};

/// Reasons a credential check can fail
///
/// Both variants are reported to the caller as 401 Unauthorized with a
/// `{"valid": false, "error": ...}` body, which is what the calling policy
/// engine treats as a deny decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialError {
    /// No X-API-Key header, or an empty one
    Missing,
    /// A key that is not provisioned in the registry
    Invalid,
}

impl CredentialError {
    pub fn message(self) -> &'static str {
        match self {
            CredentialError::Missing => "Missing API key",
            CredentialError::Invalid => "Invalid API key",
        }
    }

    pub fn status_code(self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }
}

impl std::fmt::Display for CredentialError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for CredentialError {}

impl IntoResponse for CredentialError {
    fn into_response(self) -> Response {
        let body = Json(ValidationResponse {
            valid: false,
            user_id: None,
            error: Some(self.message().to_string()),
            timestamp: timestamp_now(),
        });

        (self.status_code(), body).into_response()
    }
}
