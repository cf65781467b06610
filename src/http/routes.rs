//! Axum router configuration

use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

use super::handlers::{classify_videos, health_check, help, list_videos, version_check};
use super::stream::stream_video;

/// Create the Axum router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        // Catalog API
        .route("/api/v1/videos", get(list_videos))
        .route("/api/v1/stream/{name}", get(stream_video))
        .route("/api/v1/classify", get(classify_videos))
        .route("/help", get(help))
        // Health and version endpoints
        .route("/health", get(health_check))
        .route("/version", get(version_check))
        .layer(TraceLayer::new_for_http());

    if state.config.cors_enabled {
        router = router.layer(cors_layer());
    }

    router.with_state(state)
}

/// Browsers need `Range` allowed to seek in cross-origin video elements.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([
            header::ACCEPT,
            header::RANGE,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .expose_headers([header::CONTENT_RANGE, header::ACCEPT_RANGES, header::CONTENT_LENGTH])
        .max_age(Duration::from_secs(3600))
}
