//! Startup errors for the name service.
//!
//! Request handling has no failure path; every error here surfaces before or
//! while the listener is running and terminates the process.

use std::io;

use thiserror::Error;

/// Errors that can occur while configuring or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The `PORT` environment variable was set to something that is not a port.
    #[error("Invalid PORT value: {value:?}")]
    InvalidPort { value: String },

    /// The listener could not bind the configured address.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// The server loop terminated with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[source] io::Error),
}
