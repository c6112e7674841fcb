//! README fetching.
//!
//! This module resolves a locator to a repository and tries the
//! conventional README file names in order, reporting the outcome as a
//! [`FetchResult`].

mod error;
mod result;

pub use error::FetchError;
pub use result::{FetchResult, Readme};

use crate::config::{ConfigError, FetcherConfig};
use crate::github::GitHubService;
use crate::locator::normalize_locator;
use crate::service::{RepositoryInfo, RepositoryService};
use tracing::{debug, info, info_span, warn, Instrument};

/// README file names to try, in order. The first one present wins.
///
/// Repository paths are case-sensitive, so each spelling is a separate
/// lookup.
pub const README_CANDIDATES: [&str; 4] = ["README.md", "readme.md", "README.MD", "Readme.md"];

/// Fetches README files through a [`RepositoryService`].
///
/// Holds no state between calls, so one fetcher can serve concurrent
/// callers.
#[derive(Debug, Clone)]
pub struct ReadmeFetcher<S = GitHubService> {
    service: S,
}

impl ReadmeFetcher<GitHubService> {
    /// Builds a fetcher backed by the GitHub API.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the GitHub client cannot be built.
    pub fn github(config: &FetcherConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(GitHubService::new(config)?))
    }
}

impl<S: RepositoryService> ReadmeFetcher<S> {
    /// Creates a fetcher over the given service.
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Returns the underlying service.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Fetches the README of the repository identified by `locator`.
    ///
    /// Never fails: every error is reported through the returned
    /// [`FetchResult`]. Use [`try_fetch_readme`](Self::try_fetch_readme) to
    /// get the error as a value instead.
    pub async fn fetch_readme(&self, locator: &str) -> FetchResult {
        FetchResult::from(self.try_fetch_readme(locator).await)
    }

    /// Fetches the README of the repository identified by `locator`.
    ///
    /// # Errors
    ///
    /// - [`FetchError::InvalidLocator`] if the locator has fewer than two
    ///   path segments. The service is not contacted.
    /// - [`FetchError::RepositoryNotFound`] if the platform rejects the
    ///   repository lookup.
    /// - [`FetchError::ReadmeNotFound`] if no README variant exists.
    /// - [`FetchError::Unexpected`] for transport failures and README
    ///   content that is not valid UTF-8.
    pub async fn try_fetch_readme(&self, locator: &str) -> Result<Readme, FetchError> {
        let span = info_span!("fetch_readme", locator = %locator.trim());

        async {
            let Some(path) = normalize_locator(locator) else {
                warn!("Could not parse locator");
                return Err(FetchError::InvalidLocator);
            };
            debug!(repo = %path, "Resolving repository");

            let repository = match self.service.repository(&path).await {
                Ok(repository) => repository,
                Err(e) if e.is_lookup_failure() => {
                    warn!(repo = %path, error = %e, "Repository not found");
                    return Err(FetchError::RepositoryNotFound(e));
                }
                Err(e) => return Err(FetchError::Unexpected(e.to_string())),
            };

            let Some((file_name, bytes)) = self.find_readme(&repository).await? else {
                warn!(repo = %repository.path, "No README found");
                return Err(FetchError::ReadmeNotFound {
                    repo_name: repository.name,
                });
            };

            let content = String::from_utf8(bytes)?;
            info!(
                repo = %repository.path,
                file = file_name,
                bytes = content.len(),
                "README found"
            );

            Ok(Readme {
                file_name,
                content,
                repository,
            })
        }
        .instrument(span)
        .await
    }

    /// Tries each README candidate in order, stopping at the first hit.
    async fn find_readme(
        &self,
        repository: &RepositoryInfo,
    ) -> Result<Option<(&'static str, Vec<u8>)>, FetchError> {
        for candidate in README_CANDIDATES {
            match self.service.file_contents(repository, candidate).await {
                Ok(bytes) => return Ok(Some((candidate, bytes))),
                Err(e) if e.is_lookup_failure() => {
                    debug!(file = candidate, error = %e, "README candidate missing");
                }
                Err(e) => return Err(FetchError::Unexpected(e.to_string())),
            }
        }
        Ok(None)
    }
}
