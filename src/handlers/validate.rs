use crate::error::CredentialError;
use crate::models::ValidationResponse;
use crate::routes;
use crate::state::AppState;
use crate::validation::{redact, validate, API_KEY_HEADER};
use axum::{extract::State, http::HeaderMap, http::StatusCode, Json};

/// GET /validate handler - Check the API key in the X-API-Key header
///
/// Returns 200 with the owning user id when the key is provisioned,
/// 401 when the header is missing, empty or carries an unknown key.
#[utoipa::path(
    get,
    path = routes::VALIDATE,
    params(
        ("X-API-Key" = Option<String>, Header, description = "Client API key to validate")
    ),
    responses(
        (status = 200, description = "API key is valid", body = ValidationResponse),
        (status = 401, description = "API key is missing or invalid", body = ValidationResponse)
    ),
    tag = "validation"
)]
pub async fn validate_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<(StatusCode, Json<ValidationResponse>), CredentialError> {
    // Keys are compared byte for byte, so a header that isn't UTF-8 is rejected
    // outright rather than decoded into something that could collide with a key.
    let credential = match headers
        .get(API_KEY_HEADER)
        .map(|value| std::str::from_utf8(value.as_bytes()))
        .transpose()
    {
        Ok(credential) => credential,
        Err(_) => {
            let err = CredentialError::Invalid;
            let lossy = headers
                .get(API_KEY_HEADER)
                .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());
            tracing::warn!(key = %redact(lossy.as_deref()), "Validation failed: {}", err);
            return Err(err);
        }
    };

    match validate(&state.registry, credential) {
        Ok(record) => {
            tracing::info!(
                key = %redact(credential),
                user_id = %record.user_id,
                "Validation successful"
            );
            Ok((StatusCode::OK, Json(ValidationResponse::accepted(&record.user_id))))
        }
        Err(err) => {
            tracing::warn!(key = %redact(credential), "Validation failed: {}", err);
            Err(err)
        }
    }
}
