//! HTTP route configuration.

use axum::Router;
use axum::routing::get;

use super::handlers;
use super::state::AppState;
use super::static_assets::{AssetSource, serve_frontend};

/// Create the router: health check plus the frontend with SPA fallback.
pub fn create_router<A: AssetSource + 'static>(state: AppState<A>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .fallback(serve_frontend::<A>)
        .with_state(state)
}
