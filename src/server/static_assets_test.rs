use std::borrow::Cow;
use std::collections::HashMap;

use axum::http::{StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;

use super::static_assets::{AssetSource, asset_response};

const INDEX: &[u8] = b"<!DOCTYPE html><html><body></body></html>";

/// In-memory stand-in for the Trunk dist/ directory.
#[derive(Default)]
pub(super) struct MemoryAssets(HashMap<&'static str, &'static [u8]>);

impl MemoryAssets {
    pub(super) fn with(mut self, path: &'static str, data: &'static [u8]) -> Self {
        self.0.insert(path, data);
        self
    }

    pub(super) fn built() -> Self {
        Self::default()
            .with("index.html", INDEX)
            .with("bookshelf-frontend-1a2b3c.js", b"export default function init() {}")
            .with("bookshelf-frontend-1a2b3c_bg.wasm", b"\0asm")
            .with("style-4d5e6f.css", b"body { margin: 0; }")
    }
}

impl AssetSource for MemoryAssets {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        self.0.get(path).map(|data| Cow::Borrowed(*data))
    }
}

fn header_value(response: &Response, name: header::HeaderName) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

#[tokio::test]
async fn test_root_serves_index_html() {
    let response = asset_response(&MemoryAssets::built(), "/");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        header_value(&response, header::CACHE_CONTROL).as_deref(),
        Some("no-cache")
    );
    assert!(
        header_value(&response, header::CONTENT_TYPE)
            .unwrap()
            .starts_with("text/html")
    );
    assert_eq!(body_bytes(response).await, INDEX);
}

#[tokio::test]
async fn test_explicit_index_is_not_cached() {
    let response = asset_response(&MemoryAssets::built(), "/index.html");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        header_value(&response, header::CACHE_CONTROL).as_deref(),
        Some("no-cache")
    );
}

#[tokio::test]
async fn test_exact_asset_match_uses_guessed_mime() {
    let assets = MemoryAssets::built();

    let response = asset_response(&assets, "/style-4d5e6f.css");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        header_value(&response, header::CONTENT_TYPE).as_deref(),
        Some("text/css")
    );
    assert_eq!(
        header_value(&response, header::CACHE_CONTROL).as_deref(),
        Some("public, max-age=31536000")
    );
    assert_eq!(body_bytes(response).await, b"body { margin: 0; }");

    let response = asset_response(&assets, "/bookshelf-frontend-1a2b3c_bg.wasm");
    assert_eq!(
        header_value(&response, header::CONTENT_TYPE).as_deref(),
        Some("application/wasm")
    );
}

#[tokio::test]
async fn test_spa_fallback_for_client_routes() {
    let assets = MemoryAssets::built();
    for route in ["/about", "/add-book", "/no/such/page"] {
        let response = asset_response(&assets, route);
        // Should serve index.html (200) for SPA routing
        assert_eq!(response.status(), StatusCode::OK, "route {route}");
        assert_eq!(
            header_value(&response, header::CACHE_CONTROL).as_deref(),
            Some("no-cache")
        );
        assert_eq!(body_bytes(response).await, INDEX);
    }
}

#[tokio::test]
async fn test_api_routes_return_404() {
    let assets = MemoryAssets::built();
    for path in ["/api", "/api/", "/api/v1/books"] {
        let response = asset_response(&assets, path);
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "path {path}");
    }
}

#[tokio::test]
async fn test_path_merely_starting_with_api_is_a_client_route() {
    let response = asset_response(&MemoryAssets::built(), "/apiary");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_missing_index_returns_500() {
    let response = asset_response(&MemoryAssets::default(), "/");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(body.contains("trunk build --release"));
}

#[tokio::test]
async fn test_existing_asset_served_even_without_index() {
    let assets = MemoryAssets::default().with("style.css", b"p {}");
    let response = asset_response(&assets, "/style.css");
    assert_eq!(response.status(), StatusCode::OK);
}
