//! README fetch error types.

use crate::service::ServiceError;
use thiserror::Error;

/// Reasons a README fetch can fail.
///
/// The display text of each variant is the message reported to callers in
/// [`FetchResult::error`](super::FetchResult::error).
#[derive(Debug, Error)]
pub enum FetchError {
    /// The locator does not reduce to an owner/name path.
    #[error("Invalid GitHub URL format. Use: https://github.com/username/repository")]
    InvalidLocator,

    /// The platform could not resolve the repository.
    #[error("Repository not found: {0}")]
    RepositoryNotFound(#[source] ServiceError),

    /// The repository exists but none of the README variants do.
    #[error("README.md not found in this repository")]
    ReadmeNotFound { repo_name: String },

    /// Any other failure: transport faults, undecodable content.
    #[error("An error occurred: {0}")]
    Unexpected(String),
}

impl FetchError {
    /// Returns the repository name when the failure happened after the
    /// repository was resolved.
    pub fn repo_name(&self) -> Option<&str> {
        match self {
            Self::ReadmeNotFound { repo_name } => Some(repo_name),
            _ => None,
        }
    }
}

impl From<std::string::FromUtf8Error> for FetchError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        Self::Unexpected(error.to_string())
    }
}
