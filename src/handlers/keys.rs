use crate::models::{KeysResponse, KEYS_WARNING};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /keys handler - List every provisioned API key
///
/// Test-only. This discloses every valid credential and must never be
/// exposed by a production deployment.
#[utoipa::path(
    get,
    path = routes::KEYS,
    responses(
        (status = 200, description = "All provisioned API keys", body = KeysResponse)
    ),
    tag = "testing"
)]
pub async fn keys_handler(State(state): State<AppState>) -> (StatusCode, Json<KeysResponse>) {
    let keys: Vec<String> = state.registry.keys().map(str::to_string).collect();

    tracing::warn!("Listed {} API keys via test-only endpoint", keys.len());

    (
        StatusCode::OK,
        Json(KeysResponse {
            count: keys.len(),
            keys,
            warning: KEYS_WARNING.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, SERVICE_NAME};
    use crate::registry::Registry;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    fn setup_test_app() -> Router {
        let config = Config {
            service_name: SERVICE_NAME.to_string(),
            service_port: 8080,
            service_host: "0.0.0.0".to_string(),
        };

        Router::new()
            .route(crate::routes::KEYS, get(keys_handler))
            .with_state(AppState::new(config, Registry::builtin().unwrap()))
    }

    async fn read_keys(response: axum::response::Response) -> KeysResponse {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_keys_endpoint_lists_registry() {
        let app = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/keys")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let response_json = read_keys(response).await;
        assert_eq!(response_json.keys, vec!["client-key-123", "client-key-456"]);
        assert_eq!(response_json.count, 2);
        assert_eq!(response_json.warning, "This endpoint is for testing only");
    }

    #[tokio::test]
    async fn test_keys_endpoint_ignores_headers_and_body() {
        let app = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/keys")
                    .header("X-API-Key", "client-key-123")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"filter": "client-key-456"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let response_json = read_keys(response).await;
        assert_eq!(response_json.count, 2);
        assert_eq!(response_json.keys.len(), response_json.count);
    }
}
