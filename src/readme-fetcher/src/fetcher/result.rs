//! Uniform fetch result.

use super::error::FetchError;
use crate::service::RepositoryInfo;
use serde::Serialize;

/// A README that was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readme {
    /// The README variant that matched, e.g. `readme.md`.
    pub file_name: &'static str,

    /// Decoded README text, exactly as stored.
    pub content: String,

    /// The repository the README belongs to.
    pub repository: RepositoryInfo,
}

/// Outcome of a README fetch, reported as data rather than as an error.
///
/// Exactly one of `content` (when `success` is true) or `error` (when it is
/// false) is set. `repo_name` is also set on the "README not found" failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchResult {
    /// Whether a README was found.
    pub success: bool,

    /// README text.
    pub content: Option<String>,

    /// Human-readable failure message.
    pub error: Option<String>,

    /// Short name of the resolved repository.
    pub repo_name: Option<String>,

    /// Repository description, only on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_description: Option<String>,

    /// Repository web URL, only on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
}

impl FetchResult {
    /// Builds a successful result from a found README.
    #[must_use]
    pub fn found(readme: Readme) -> Self {
        Self {
            success: true,
            content: Some(readme.content),
            error: None,
            repo_name: Some(readme.repository.name),
            repo_description: readme.repository.description,
            repo_url: readme.repository.html_url,
        }
    }

    /// Builds a failed result from an error.
    #[must_use]
    pub fn failed(error: &FetchError) -> Self {
        Self {
            success: false,
            content: None,
            error: Some(error.to_string()),
            repo_name: error.repo_name().map(str::to_owned),
            repo_description: None,
            repo_url: None,
        }
    }
}

impl From<Result<Readme, FetchError>> for FetchResult {
    fn from(result: Result<Readme, FetchError>) -> Self {
        match result {
            Ok(readme) => Self::found(readme),
            Err(error) => Self::failed(&error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::RepoPath;
    use crate::service::ServiceError;

    fn flask() -> RepositoryInfo {
        RepositoryInfo {
            path: RepoPath::new("pallets", "flask"),
            name: "flask".to_string(),
            description: Some("The Python micro framework".to_string()),
            html_url: Some("https://github.com/pallets/flask".to_string()),
        }
    }

    #[test]
    fn found_populates_repository_fields() {
        let result = FetchResult::found(Readme {
            file_name: "README.md",
            content: "# Flask\n".to_string(),
            repository: flask(),
        });

        assert!(result.success);
        assert_eq!(result.content.as_deref(), Some("# Flask\n"));
        assert_eq!(result.error, None);
        assert_eq!(result.repo_name.as_deref(), Some("flask"));
        assert_eq!(
            result.repo_description.as_deref(),
            Some("The Python micro framework")
        );
        assert_eq!(
            result.repo_url.as_deref(),
            Some("https://github.com/pallets/flask")
        );
    }

    #[test]
    fn invalid_locator_has_only_error() {
        let result = FetchResult::failed(&FetchError::InvalidLocator);

        assert!(!result.success);
        assert_eq!(
            result.error.as_deref(),
            Some("Invalid GitHub URL format. Use: https://github.com/username/repository")
        );
        assert_eq!(result.content, None);
        assert_eq!(result.repo_name, None);
    }

    #[test]
    fn repository_not_found_wraps_service_error() {
        let result = FetchResult::failed(&FetchError::RepositoryNotFound(ServiceError::Api {
            status: 404,
            message: "Not Found".to_string(),
        }));

        assert_eq!(
            result.error.as_deref(),
            Some("Repository not found: 404 Not Found")
        );
        assert_eq!(result.repo_name, None);
    }

    #[test]
    fn readme_not_found_keeps_repo_name() {
        let result = FetchResult::failed(&FetchError::ReadmeNotFound {
            repo_name: "flask".to_string(),
        });

        assert_eq!(
            result.error.as_deref(),
            Some("README.md not found in this repository")
        );
        assert_eq!(result.repo_name.as_deref(), Some("flask"));
        assert_eq!(result.repo_description, None);
        assert_eq!(result.repo_url, None);
    }

    #[test]
    fn unexpected_error_is_wrapped() {
        let result = FetchResult::failed(&FetchError::Unexpected("connection reset".to_string()));
        assert_eq!(
            result.error.as_deref(),
            Some("An error occurred: connection reset")
        );
    }
}
