use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Warning attached to the key listing so nobody mistakes it for a production API
pub const KEYS_WARNING: &str = "This endpoint is for testing only";

/// Current time as an ISO 8601 / RFC 3339 string in UTC
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Response body for GET /validate
///
/// `user_id` is only present for a valid key, `error` only for a rejected one.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ValidationResponse {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: String,
}

impl ValidationResponse {
    pub fn accepted(user_id: impl Into<String>) -> Self {
        Self {
            valid: true,
            user_id: Some(user_id.into()),
            error: None,
            timestamp: timestamp_now(),
        }
    }
}

/// Response type for health check endpoint
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
}

/// Response type for the test-only key listing
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct KeysResponse {
    pub keys: Vec<String>,
    pub count: usize,
    pub warning: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_timestamp_is_rfc3339_utc() {
        let ts = timestamp_now();
        assert!(ts.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[test]
    fn test_accepted_omits_error() {
        let json = serde_json::to_value(ValidationResponse::accepted("user-001")).unwrap();

        assert_eq!(json["valid"], true);
        assert_eq!(json["user_id"], "user-001");
        assert!(json.get("error").is_none());
    }
}
