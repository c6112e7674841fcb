//! Access to the hosted source-control platform.
//!
//! The fetcher only needs two lookups from the platform, expressed by
//! [`RepositoryService`]. [`GitHubService`](crate::github::GitHubService) is
//! the production implementation; tests supply their own.

mod error;
mod repository;

pub use error::ServiceError;
pub use repository::RepositoryInfo;

use crate::locator::RepoPath;
use async_trait::async_trait;

/// Lookups the README fetcher performs against the platform.
#[async_trait]
pub trait RepositoryService: Send + Sync {
    /// Resolves a repository by its owner/name path.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Api`] if the platform cannot resolve the path
    /// (missing, private, ...), or another variant if the request itself
    /// failed.
    async fn repository(&self, path: &RepoPath) -> Result<RepositoryInfo, ServiceError>;

    /// Fetches the raw bytes of a file at `file` in the repository root.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Api`] if the file does not exist.
    async fn file_contents(
        &self,
        repository: &RepositoryInfo,
        file: &str,
    ) -> Result<Vec<u8>, ServiceError>;
}
