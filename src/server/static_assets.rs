//! Embedded frontend assets for production builds.
//!
//! In release mode: Assets are embedded into the binary at compile time.
//! In debug mode: rust-embed reads from filesystem (dist/) at runtime.

use std::borrow::Cow;

use axum::{
    extract::State,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;
use tracing::{debug, warn};

use super::state::AppState;

const INDEX_HTML: &str = "index.html";

/// Where the frontend files come from.
pub trait AssetSource: Send + Sync {
    /// Look up a file by its path relative to the dist root.
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>>;
}

/// Embedded frontend assets (WASM, JS, CSS, HTML, etc.)
///
/// Folder points to Trunk's output directory.
#[derive(RustEmbed)]
#[folder = "dist/"]
#[include = "*.html"]
#[include = "*.js"]
#[include = "*.wasm"]
#[include = "*.css"]
#[include = "snippets/**/*"]
struct FrontendAssets;

/// The Trunk build compiled into (or read next to) the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedAssets;

impl AssetSource for EmbeddedAssets {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        FrontendAssets::get(path).map(|file| file.data)
    }
}

/// Serve frontend assets with SPA fallback routing.
pub async fn serve_frontend<A: AssetSource>(
    State(state): State<AppState<A>>,
    uri: Uri,
) -> Response {
    asset_response(state.assets(), uri.path())
}

/// Resolve a request path against `assets`.
///
/// Routing logic:
/// 1. Paths under api/ are never part of the frontend: 404
/// 2. Root path and index.html are served uncached
/// 3. Exact file match (e.g., /style.css, /app.wasm) with a long cache
/// 4. Fallback to index.html for client-side routes (e.g., /about, /add-book)
/// 5. 500 if index.html is missing (frontend was never built)
pub fn asset_response<A: AssetSource + ?Sized>(assets: &A, path: &str) -> Response {
    let path = path.trim_start_matches('/');

    if path == "api" || path.starts_with("api/") {
        return StatusCode::NOT_FOUND.into_response();
    }

    let asset_path = if path.is_empty() { INDEX_HTML } else { path };

    if asset_path != INDEX_HTML {
        if let Some(data) = assets.get(asset_path) {
            let mime = mime_guess::from_path(asset_path).first_or_octet_stream();
            debug!(path = asset_path, mime = %mime, "serving asset");
            return (
                [
                    (header::CONTENT_TYPE, mime.to_string()),
                    // Trunk hashes asset file names
                    (header::CACHE_CONTROL, "public, max-age=31536000".to_string()),
                ],
                data,
            )
                .into_response();
        }
    }

    match assets.get(INDEX_HTML) {
        Some(index) => (
            [
                (header::CONTENT_TYPE, "text/html; charset=utf-8"),
                (header::CACHE_CONTROL, "no-cache"),
            ],
            index,
        )
            .into_response(),
        None => {
            warn!(path, "index.html missing from frontend assets");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Frontend assets not found. Run 'trunk build --release' first.",
            )
                .into_response()
        }
    }
}
