use crate::error::CredentialError;
use crate::registry::{CredentialRecord, Registry};

/// Header carrying the client API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Number of leading characters of a credential that may appear in logs
pub const REDACTED_PREFIX_LEN: usize = 12;

/// Check a presented credential against the registry.
///
/// An absent or empty credential is [`CredentialError::Missing`]; any other
/// credential not provisioned in the registry is [`CredentialError::Invalid`].
pub fn validate<'a>(
    registry: &'a Registry,
    credential: Option<&str>,
) -> Result<&'a CredentialRecord, CredentialError> {
    match credential {
        None | Some("") => Err(CredentialError::Missing),
        Some(key) => registry.lookup(key).ok_or(CredentialError::Invalid),
    }
}

/// Shorten a credential for logging so the full secret never reaches the logs.
///
/// Absent and empty credentials both log as `<none>`.
pub fn redact(credential: Option<&str>) -> String {
    match credential {
        None | Some("") => "<none>".to_string(),
        Some(key) => {
            let prefix: String = key.chars().take(REDACTED_PREFIX_LEN).collect();
            format!("{}...", prefix)
        }
    }
}
