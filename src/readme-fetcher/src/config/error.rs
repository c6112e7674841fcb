//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while building a client from configuration.
///
/// Messages are taken from the client error's causes; octocrab's own
/// `Display` carries a backtrace.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configured API base URI could not be used.
    #[error("Invalid API base URI '{uri}': {message}")]
    InvalidBaseUri { uri: String, message: String },

    /// GitHub API client initialization errors.
    #[error("Failed to build GitHub client: {message}")]
    Client { message: String },
}
