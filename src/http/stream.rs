//! Video payload streaming
//!
//! Byte ranges, conditional requests and `HEAD` are handled by
//! `tower_http::services::ServeFile`; this module only resolves the path.

use axum::{
    extract::{Path, Request, State},
    response::{IntoResponse, Response},
};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::services::ServeFile;

use super::handlers::{run_blocking, HttpError};
use crate::state::AppState;

/// Stream a video payload
/// GET /api/v1/stream/{name}
pub async fn stream_video(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    request: Request,
) -> Result<Response, HttpError> {
    let video_path = resolve_video_path(&state, name).await?;
    tracing::debug!("Streaming {:?}", video_path);

    match ServeFile::new(&video_path).oneshot(request).await {
        Ok(response) => Ok(response.into_response()),
        Err(never) => match never {},
    }
}

/// Resolve the payload path on the blocking pool
async fn resolve_video_path(state: &AppState, name: String) -> Result<PathBuf, HttpError> {
    run_blocking(state, move |catalog| catalog.video_path(&name)).await
}
