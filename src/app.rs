use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{health_handler, keys_handler, validate_handler};
use crate::middleware::request_id_layer;
use crate::routes;
use crate::state::AppState;

/// Build the application router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(routes::VALIDATE, get(validate_handler))
        .route(routes::HEALTH, get(health_handler))
        .route(routes::KEYS, get(keys_handler))
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_layer))
}
