//! Fetcher configuration.
//!
//! Credentials are never read implicitly. Callers either build a
//! [`FetcherConfig`] themselves or call [`FetcherConfig::from_env`] once at
//! startup and pass the result to the fetcher.

mod error;

pub use error::ConfigError;

/// Environment variable holding the GitHub personal access token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Configuration for talking to GitHub.
#[derive(Debug, Clone, Default)]
pub struct FetcherConfig {
    /// Personal access token. Unauthenticated access when absent.
    token: Option<String>,
    /// Custom API base URI, e.g. for GitHub Enterprise.
    base_uri: Option<String>,
}

impl FetcherConfig {
    /// Creates an unauthenticated configuration against github.com.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration using the token from [`TOKEN_ENV`], if set.
    ///
    /// An empty or whitespace-only value is treated as unset.
    #[must_use]
    pub fn from_env() -> Self {
        let token = std::env::var(TOKEN_ENV).ok();
        Self::new().with_optional_token(token)
    }

    /// Sets the personal access token.
    #[must_use]
    pub fn with_token(self, token: impl Into<String>) -> Self {
        self.with_optional_token(Some(token.into()))
    }

    /// Sets or clears the personal access token.
    #[must_use]
    pub fn with_optional_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|token| !token.trim().is_empty());
        self
    }

    /// Sets a custom API base URI.
    #[must_use]
    pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = Some(base_uri.into());
        self
    }

    /// Returns the configured token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the configured API base URI.
    pub fn base_uri(&self) -> Option<&str> {
        self.base_uri.as_deref()
    }
}
