//! HTTP host for the bookshelf frontend.

mod error;
mod handlers;
pub mod routes;
#[cfg(test)]
mod routes_test;
mod state;
pub mod static_assets;
#[cfg(test)]
mod static_assets_test;

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{ServerError, ServerResult};
pub use handlers::HealthResponse;
pub use state::AppState;
pub use static_assets::{AssetSource, EmbeddedAssets};

/// Environment variable overriding the bind address.
pub const HOST_ENV: &str = "BOOKSHELF_HOST";
/// Environment variable overriding the port.
pub const PORT_ENV: &str = "BOOKSHELF_PORT";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
        }
    }
}

impl Config {
    /// Defaults overridden by `BOOKSHELF_HOST` / `BOOKSHELF_PORT`.
    ///
    /// Unparseable values are ignored with a warning.
    pub fn new() -> Self {
        let mut config = Self::default();
        if let Some(host) = env_override(HOST_ENV) {
            config.host = host;
        }
        if let Some(port) = env_override(PORT_ENV) {
            config.port = port;
        }
        config
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn env_override<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring invalid environment override");
            None
        }
    }
}

/// Initialize tracing subscriber with env filter
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookshelf=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Run the server with the given configuration, serving `assets`.
pub async fn run<A: AssetSource + 'static>(config: Config, assets: A) -> ServerResult<()> {
    let app = routes::create_router(AppState::new(assets)).layer(TraceLayer::new_for_http());

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!("bookshelf listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
