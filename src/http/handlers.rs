//! HTTP request handlers
//!
//! Implements the catalog listing, classification and help endpoints.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::catalog::{filter_by_taxonomy, Catalog, VideoRecord};
use crate::error::CatalogError;
use crate::state::AppState;

/// HTTP error type
#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    InternalError(String),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::InternalError(msg) => {
                tracing::error!("Request failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, body).into_response()
    }
}

impl From<CatalogError> for HttpError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::InvalidName(name) => {
                HttpError::BadRequest(format!("Invalid video name: {:?}", name))
            }
            CatalogError::VideoNotFound(_) => HttpError::NotFound("Video not found".to_string()),
            _ => HttpError::InternalError(err.to_string()),
        }
    }
}

/// Query parameters for the classify endpoint
#[derive(Debug, Default, Deserialize)]
pub struct ClassifyQuery {
    pub rank: Option<String>,
    pub value: Option<String>,
}

/// Description of one API endpoint, served by `/help`
#[derive(Debug, Clone, Serialize)]
pub struct ApiEndpoint {
    pub path: &'static str,
    pub method: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<&'static str>,
}

/// Run a catalog operation on the blocking pool
pub(super) async fn run_blocking<T, F>(state: &AppState, op: F) -> Result<T, HttpError>
where
    T: Send + 'static,
    F: FnOnce(&Catalog) -> Result<T, CatalogError> + Send + 'static,
{
    let catalog = state.catalog.clone();
    let value = tokio::task::spawn_blocking(move || op(&catalog))
        .await
        .map_err(|e| HttpError::InternalError(e.to_string()))??;
    Ok(value)
}

/// Scan the catalog on the blocking pool
async fn scan_catalog(state: &AppState) -> Result<Vec<VideoRecord>, HttpError> {
    run_blocking(state, Catalog::scan).await
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

/// Version information endpoint
pub async fn version_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "online",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// All videos in the catalog
/// GET /api/v1/videos
pub async fn list_videos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<VideoRecord>>, HttpError> {
    let records = scan_catalog(&state).await?;
    tracing::debug!("Listing {} videos", records.len());
    Ok(Json(records))
}

/// Videos whose taxonomy matches a rank and value
/// GET /api/v1/classify?rank=class&value=Mammalia
pub async fn classify_videos(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ClassifyQuery>,
) -> Result<Json<Vec<VideoRecord>>, HttpError> {
    let (rank, value) = match (query.rank, query.value) {
        (Some(rank), Some(value)) if !rank.is_empty() && !value.is_empty() => (rank, value),
        _ => {
            return Err(HttpError::BadRequest(
                "Both 'rank' and 'value' parameters are required".to_string(),
            ))
        }
    };

    let records = scan_catalog(&state).await?;
    let filtered = filter_by_taxonomy(&records, &rank, &value);
    tracing::debug!(
        "Classify {}={}: {} of {} videos",
        rank,
        value,
        filtered.len(),
        records.len()
    );
    Ok(Json(filtered))
}

/// Endpoint descriptions
pub fn api_endpoints() -> Vec<ApiEndpoint> {
    vec![
        ApiEndpoint {
            path: "/api/v1/videos",
            method: "GET",
            description: "Returns a list of all available videos with their titles and descriptions.",
            parameters: None,
        },
        ApiEndpoint {
            path: "/api/v1/stream/{filename}",
            method: "GET",
            description: "Streams the requested video file.",
            parameters: Some("{filename}: The name of the video file to stream."),
        },
        ApiEndpoint {
            path: "/api/v1/classify?rank=rankName&value=rankValue",
            method: "GET",
            description: "Filters videos based on their taxonomic classification. For example, /api/v1/classify?rank=class&value=elementary",
            parameters: Some("rank: The taxonomic rank to filter by (class, order, family, tribe, or genus). value: The specific taxonomic value to filter for."),
        },
        ApiEndpoint {
            path: "/help",
            method: "GET",
            description: "Provides information about all available API endpoints.",
            parameters: None,
        },
    ]
}

/// API help endpoint
/// GET /help
pub async fn help() -> Json<Vec<ApiEndpoint>> {
    Json(api_endpoints())
}
