use utoipa::OpenApi;

use crate::handlers;
use crate::models::{HealthResponse, KeysResponse, ValidationResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "mock-api-key-backend API",
        version = "1.0.0",
        description = "Mock API key validation backend for external authorization lookups"
    ),
    paths(
        handlers::health::health_handler,
        handlers::validate::validate_handler,
        handlers::keys::keys_handler
    ),
    components(
        schemas(
            ValidationResponse,
            HealthResponse,
            KeysResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "validation", description = "API key validation"),
        (name = "testing", description = "Test-only endpoints, never expose in production")
    )
)]
pub struct ApiDoc;
