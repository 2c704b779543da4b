//! Application state for the HTTP server.

use std::sync::Arc;

use super::static_assets::AssetSource;

/// Shared application state.
///
/// Generic over `A: AssetSource` so tests can serve in-memory assets instead
/// of the embedded Trunk build.
pub struct AppState<A: AssetSource> {
    assets: Arc<A>,
}

// Manual Clone impl - only the Arc needs cloning, not A
impl<A: AssetSource> Clone for AppState<A> {
    fn clone(&self) -> Self {
        Self {
            assets: Arc::clone(&self.assets),
        }
    }
}

impl<A: AssetSource> AppState<A> {
    pub fn new(assets: A) -> Self {
        Self {
            assets: Arc::new(assets),
        }
    }

    /// Get a reference to the asset source.
    pub fn assets(&self) -> &A {
        &self.assets
    }
}
