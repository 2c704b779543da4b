//! Server error types.

use std::net::SocketAddr;

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while starting or running the HTTP server.
#[derive(Error, Diagnostic, Debug)]
pub enum ServerError {
    #[error("Failed to bind to {addr}")]
    #[diagnostic(
        code(bookshelf::server::bind),
        help("Is another process already listening on this port? Try --port or BOOKSHELF_PORT.")
    )]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(bookshelf::server::serve))]
    Serve(#[from] std::io::Error),
}

pub type ServerResult<T> = Result<T, ServerError>;
