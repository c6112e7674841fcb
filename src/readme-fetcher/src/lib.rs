#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod fetcher;
pub mod github;
pub mod locator;
pub mod service;

pub use config::{ConfigError, FetcherConfig, TOKEN_ENV};
pub use fetcher::{FetchError, FetchResult, Readme, ReadmeFetcher, README_CANDIDATES};
pub use github::GitHubService;
pub use locator::{normalize_locator, RepoPath};
pub use service::{RepositoryInfo, RepositoryService, ServiceError};
