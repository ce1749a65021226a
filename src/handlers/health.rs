use crate::models::{timestamp_now, HealthResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /health handler - Health check endpoint
///
/// Liveness only: the registry lives in memory, so there is nothing
/// downstream to probe and the service always reports healthy.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    tracing::debug!("Health check passed");
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            service: state.config.service_name.clone(),
            timestamp: timestamp_now(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::registry::Registry;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    fn setup_test_app() -> Router {
        let config = Config {
            service_name: crate::config::SERVICE_NAME.to_string(),
            service_port: 8080,
            service_host: "0.0.0.0".to_string(),
        };

        let state = AppState::new(config, Registry::builtin().unwrap());

        Router::new()
            .route(crate::routes::HEALTH, get(health_handler))
            .route(crate::routes::VALIDATE, get(crate::handlers::validate_handler))
            .with_state(state)
    }

    async fn get_health(app: Router) -> (StatusCode, HealthResponse) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health_endpoint_healthy() {
        let app = setup_test_app();

        let (status, response_json) = get_health(app).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response_json.status, "healthy");
        assert_eq!(response_json.service, "mock-api-key-backend");
        assert!(!response_json.timestamp.is_empty());
    }

    #[tokio::test]
    async fn test_health_unaffected_by_prior_requests() {
        let app = setup_test_app();

        // A burst of rejected validations must not change the health report
        for _ in 0..5 {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method("GET")
                        .uri("/validate")
                        .header("X-API-Key", "bogus")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }

        let (status, response_json) = get_health(app).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(response_json.status, "healthy");
    }
}
