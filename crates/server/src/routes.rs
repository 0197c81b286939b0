use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::{Health, LIVENESS_MESSAGE};

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod auth;
pub mod bookings;
pub mod services;

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Liveness text")))]
pub async fn root() -> &'static str {
    LIVENESS_MESSAGE
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router. Only `GET /bookings` sits behind the
/// bearer guard.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    // Protected routes
    let protected = Router::new()
        .route("/bookings", get(bookings::list))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_bearer_token));

    // Public routes
    let public = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/jwt", post(auth::issue_token))
        .route("/services", get(services::list))
        .route("/services/:id", get(services::get))
        .route("/bookings", post(bookings::create))
        .route("/booking/:id", axum::routing::delete(bookings::delete).patch(bookings::update_status));

    public
        .merge(protected)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx are logged at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
