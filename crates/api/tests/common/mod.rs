use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

use keepsake_api::config::ServerConfig;
use keepsake_api::router::build_app_router;
use keepsake_api::state::AppState;
use keepsake_assets::AssetStore;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config(upload_dir: &std::path::Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_dir: upload_dir.to_path_buf(),
    }
}

/// A test application: the production router plus the temp directory
/// backing its asset store (kept alive so stored files can be asserted on).
pub struct TestApp {
    pub router: Router,
    pub upload_dir: TempDir,
}

impl TestApp {
    /// Files currently in the upload directory whose names start with `prefix`.
    pub fn stored_files(&self, prefix: &str) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.upload_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .filter(|n| n.starts_with(prefix))
            .collect();
        names.sort();
        names
    }

    /// Whether a stored filename exists on disk.
    pub fn file_exists(&self, filename: &str) -> bool {
        self.upload_dir.path().join(filename).exists()
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and a fresh temp upload directory.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub async fn build_test_app(pool: SqlitePool) -> TestApp {
    let upload_dir = TempDir::new().expect("create temp upload dir");
    let config = test_config(upload_dir.path());
    let assets = AssetStore::open(upload_dir.path())
        .await
        .expect("open asset store");

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        assets: Arc::new(assets),
    };

    TestApp {
        router: build_app_router(state, &config),
        upload_dir,
    }
}

/// Issue a GET request.
pub async fn get(app: Router, path: &str) -> Response {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Issue a request with a JSON body.
pub async fn send_json(app: Router, method: Method, path: &str, json: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Issue a bodyless request (DELETE and friends).
pub async fn send(app: Router, method: Method, path: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Boundary used by [`multipart_body`].
pub const BOUNDARY: &str = "keepsake-test-boundary";

/// Build a `multipart/form-data` body from `(field, filename, bytes)` parts.
pub fn multipart_body(parts: &[(&str, &str, &[u8])]) -> Body {
    let mut body = Vec::new();
    for (field, filename, bytes) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    Body::from(body)
}

/// POST a multipart upload built from `(field, filename, bytes)` parts.
pub async fn post_multipart(app: Router, path: &str, parts: &[(&str, &str, &[u8])]) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(multipart_body(parts))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Encode a small solid-color PNG of the given dimensions.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([180, 40, 90]));
    let mut out = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut out, image::ImageFormat::Png)
        .unwrap();
    out.into_inner()
}
