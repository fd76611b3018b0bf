//! Route configuration and setup

use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use facelog_core::Config;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Setup all application routes
///
/// Artifacts are served straight from the static directory, so
/// `image_url` values in responses resolve against this same server.
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Router<()> {
    Router::new()
        .route("/upload", post(handlers::upload::upload))
        .route("/attendance", get(handlers::attendance::list_attendance))
        .nest_service("/static", ServeDir::new(config.static_dir()))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes()))
        .layer(RequestBodyLimitLayer::new(config.max_upload_bytes()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
