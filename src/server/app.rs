//! Application setup and router configuration.

use crate::config::ServerConfig;
use crate::pipeline::QuizPipeline;
use crate::server::routes::{
    generate_quiz_handler, health_handler, history_handler, quiz_detail_handler,
};
use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: QuizPipeline,
}

/// Builds the CORS layer for the configured frontend origins
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    if origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(AllowOrigin::any());
    }

    // Browsers send origins without a trailing slash
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin.trim_end_matches('/')).ok())
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}

/// Path prefix used by the browser frontend
pub const API_PREFIX: &str = "/api";

/// The quiz routes, each with and without its trailing slash
fn quiz_routes() -> Router<AppState> {
    Router::new()
        .route("/generate-quiz/", post(generate_quiz_handler))
        .route("/generate-quiz", post(generate_quiz_handler))
        .route("/history/", get(history_handler))
        .route("/history", get(history_handler))
        .route("/history/:id/", get(quiz_detail_handler))
        .route("/history/:id", get(quiz_detail_handler))
}

/// Build the Axum application router
///
/// The quiz routes are served both at the root and under [`API_PREFIX`].
pub fn build_app(pipeline: QuizPipeline, config: &ServerConfig) -> Router {
    let routes = quiz_routes();

    Router::new()
        .merge(routes.clone())
        .nest(API_PREFIX, routes)
        .route("/health", get(health_handler))
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { pipeline })
}
