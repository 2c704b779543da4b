//! bookshelf server binary.
//!
//! Serves the Trunk-built frontend embedded by rust-embed.

use std::net::IpAddr;

use bookshelf::server::{self, Config, EmbeddedAssets, ServerError};
use clap::Parser;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("bookshelf server stopped")]
    #[diagnostic(code(bookshelf::binary::server))]
    Server(
        #[from]
        #[diagnostic_source]
        ServerError,
    ),
}

#[derive(Parser)]
#[command(name = "bookshelf-server")]
#[command(author, version, about = "Bookshelf web server", long_about = None)]
struct Cli {
    /// Host address to bind to (default: BOOKSHELF_HOST env or 0.0.0.0)
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on (default: BOOKSHELF_PORT env or 3000)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    server::init_tracing();

    let mut config = Config::new();
    if let Some(host) = cli.host {
        config = config.with_host(host);
    }
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }

    server::run(config, EmbeddedAssets)
        .await
        .map_err(BinaryError::from)?;

    Ok(())
}
