//! Repository locator normalization.
//!
//! Reduces the free-text locators accepted from callers to an owner/name
//! [`RepoPath`]. Accepted shapes:
//!
//! ```text
//! https://github.com/owner/repo
//! https://github.com/owner/repo/
//! github.com/owner/repo
//! owner/repo
//! ```

use serde::Serialize;
use std::fmt;

/// Scheme prefix stripped from locators. Only HTTPS is recognised.
const SCHEME_PREFIX: &str = "https://";

/// Host prefix stripped from locators.
const HOST_PREFIX: &str = "github.com/";

/// Two-segment `owner/name` identifier of a repository.
///
/// Segments are not validated; either may be empty if the locator was
/// something like `/repo`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RepoPath {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,
}

impl RepoPath {
    /// Creates a path from its two segments.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Splits a `owner/name` string, such as a repository's `full_name`.
    ///
    /// Returns `None` unless there are exactly two segments.
    pub fn from_full_name(full_name: &str) -> Option<Self> {
        let (owner, name) = full_name.split_once('/')?;
        if name.contains('/') {
            return None;
        }
        Some(Self::new(owner, name))
    }
}

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Normalizes a locator into an owner/name path.
///
/// The steps are applied in order:
/// 1. Trim surrounding whitespace.
/// 2. Strip one leading `https://`.
/// 3. Strip one leading `github.com/`.
/// 4. Strip all trailing `/`.
/// 5. Take the first two `/`-separated segments; anything after is ignored.
///
/// Returns `None` when fewer than two segments remain.
///
/// `http://` is not treated as a scheme, so `http://github.com/owner/repo`
/// comes out as `http:/` followed by an empty name.
pub fn normalize_locator(input: &str) -> Option<RepoPath> {
    let mut locator = input.trim();
    if let Some(rest) = locator.strip_prefix(SCHEME_PREFIX) {
        locator = rest;
    }
    if let Some(rest) = locator.strip_prefix(HOST_PREFIX) {
        locator = rest;
    }
    let locator = locator.trim_end_matches('/');

    let mut segments = locator.split('/');
    let owner = segments.next()?;
    let name = segments.next()?;
    Some(RepoPath::new(owner, name))
}
