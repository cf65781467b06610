//! End-to-end tests through the router

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use tower::util::ServiceExt;

use crate::config::{CatalogConfig, ServerConfig};
use crate::http::create_router;
use crate::integration::fixtures::{TestLibrary, TestVideo};
use crate::state::AppState;

async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn filenames(json: &serde_json::Value) -> Vec<String> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|v| v["filename"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_list_entry_without_metadata() {
    let library = TestLibrary::new(&[TestVideo::bare("video1")]);
    let response = get(create_router(library.state()), "/api/v1/videos").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!([{
            "title": "",
            "author": "",
            "description": "",
            "filename": "video1",
            "classification": "",
            "taxonomy": {"class": "", "order": "", "family": "", "tribe": "", "genus": ""}
        }])
    );
}

#[tokio::test]
async fn test_list_videos() {
    let library = TestLibrary::animals();
    let response = get(create_router(library.state()), "/api/v1/videos").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let json = body_json(response).await;
    assert_eq!(filenames(&json), vec!["lion", "robin", "wolf"]);
    assert_eq!(json[0]["title"], "The Lion");
    assert_eq!(json[0]["taxonomy"]["genus"], "Panthera");
    assert_eq!(json[2]["author"], "");
}

#[tokio::test]
async fn test_list_empty_library_is_empty_array() {
    let library = TestLibrary::new(&[]);
    let response = get(create_router(library.state()), "/api/v1/videos").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"[]");
}

#[tokio::test]
async fn test_list_missing_root_is_internal_error() {
    let config = ServerConfig {
        catalog: CatalogConfig::with_root("/definitely/not/a/video/root"),
        ..Default::default()
    };
    let app = create_router(std::sync::Arc::new(AppState::new(config)));
    let response = get(app, "/api/v1/videos").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_classify_requires_both_parameters() {
    let library = TestLibrary::animals();
    for uri in [
        "/api/v1/classify",
        "/api/v1/classify?rank=class",
        "/api/v1/classify?value=Aves",
        "/api/v1/classify?rank=&value=Aves",
        "/api/v1/classify?rank=class&value=",
    ] {
        let response = get(create_router(library.state()), uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
        let body = String::from_utf8(body_bytes(response).await).unwrap();
        assert_eq!(body, "Both 'rank' and 'value' parameters are required");
    }
}

#[tokio::test]
async fn test_classify_is_case_insensitive() {
    let library = TestLibrary::animals();

    let upper = body_json(
        get(
            create_router(library.state()),
            "/api/v1/classify?rank=CLASS&value=Mammalia",
        )
        .await,
    )
    .await;
    let lower = body_json(
        get(
            create_router(library.state()),
            "/api/v1/classify?rank=class&value=mammalia",
        )
        .await,
    )
    .await;

    assert_eq!(upper, lower);
    assert_eq!(filenames(&upper), vec!["lion", "wolf"]);
}

#[tokio::test]
async fn test_classify_by_family() {
    let library = TestLibrary::animals();
    let response = get(
        create_router(library.state()),
        "/api/v1/classify?rank=family&value=turdidae",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(filenames(&body_json(response).await), vec!["robin"]);
}

#[tokio::test]
async fn test_classify_unknown_rank_is_empty() {
    let library = TestLibrary::animals();
    let response = get(
        create_router(library.state()),
        "/api/v1/classify?rank=kingdom&value=Animalia",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"[]");
}

#[tokio::test]
async fn test_stream_full_payload() {
    let library = TestLibrary::animals();
    let response = get(create_router(library.state()), "/api/v1/stream/lion").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "video/mp4"
    );
    assert_eq!(body_bytes(response).await, b"0123456789abcdef");
}

#[tokio::test]
async fn test_stream_byte_range() {
    let library = TestLibrary::animals();
    let request = Request::builder()
        .uri("/api/v1/stream/lion")
        .header(header::RANGE, "bytes=4-7")
        .body(Body::empty())
        .unwrap();
    let response = create_router(library.state())
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);
    assert_eq!(
        response.headers().get(header::CONTENT_RANGE).unwrap(),
        "bytes 4-7/16"
    );
    assert_eq!(body_bytes(response).await, b"4567");
}

#[tokio::test]
async fn test_stream_ignores_catalog_membership() {
    // robin has no payload; a payload dropped in later is streamable without a rescan
    let library = TestLibrary::animals();
    let app = create_router(library.state());
    let response = get(app.clone(), "/api/v1/stream/robin").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    std::fs::write(library.root.path().join("robin").join("robin.mp4"), b"tweet").unwrap();
    let response = get(app, "/api/v1/stream/robin").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"tweet");
}

#[tokio::test]
async fn test_stream_missing_video() {
    let library = TestLibrary::animals();
    let response = get(create_router(library.state()), "/api/v1/stream/tiger").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_bytes(response).await, b"Video not found");
}

#[tokio::test]
async fn test_stream_rejects_traversal() {
    let library = TestLibrary::animals();
    for uri in ["/api/v1/stream/..", "/api/v1/stream/..%2Flion%2Flion"] {
        let response = get(create_router(library.state()), uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
    }
}

#[tokio::test]
async fn test_help_lists_endpoints() {
    let library = TestLibrary::new(&[]);
    let response = get(create_router(library.state()), "/help").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let paths: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["path"].as_str().unwrap())
        .collect();
    assert!(paths.contains(&"/api/v1/videos"));
    assert!(paths.contains(&"/help"));
}

#[tokio::test]
async fn test_health_and_version() {
    let library = TestLibrary::new(&[]);
    let response = get(create_router(library.state()), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"OK");

    let response = get(create_router(library.state()), "/version").await;
    let json = body_json(response).await;
    assert_eq!(json["status"], "online");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}
