//! Resolved repository information.

use crate::locator::RepoPath;
use serde::Serialize;

/// A repository as resolved by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryInfo {
    /// Canonical owner/name path, used for content lookups.
    pub path: RepoPath,

    /// Repository short name.
    pub name: String,

    /// Repository description, if set.
    pub description: Option<String>,

    /// Web URL of the repository.
    pub html_url: Option<String>,
}
