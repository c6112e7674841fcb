//! GitHub-backed repository service.
//!
//! Wraps an [`Octocrab`] client behind [`RepositoryService`]. Requests go
//! out through octocrab's raw `_get` so the HTTP status alone decides
//! whether GitHub rejected a lookup; bodies are then decoded here into the
//! few fields the fetcher needs.

use crate::config::{ConfigError, FetcherConfig};
use crate::locator::RepoPath;
use crate::service::{RepositoryInfo, RepositoryService, ServiceError};
use async_trait::async_trait;
use base64::Engine;
use octocrab::Octocrab;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::error::Error as _;
use tracing::debug;

/// The only content encoding the contents API uses for file bodies.
const BASE64_ENCODING: &str = "base64";

/// Contents API `type` of a regular file.
const FILE_TYPE: &str = "file";

/// [`RepositoryService`] over the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubService {
    octocrab: Octocrab,
}

impl GitHubService {
    /// Builds a client from the provided configuration.
    ///
    /// Uses the personal token when one is configured and falls back to
    /// unauthenticated access (with GitHub's lower rate limits) otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the base URI is invalid or the client
    /// cannot be built.
    pub fn new(config: &FetcherConfig) -> Result<Self, ConfigError> {
        let mut builder = Octocrab::builder();
        if let Some(token) = config.token() {
            builder = builder.personal_token(token.to_owned());
        }
        if let Some(uri) = config.base_uri() {
            builder = builder
                .base_uri(uri)
                .map_err(|e| ConfigError::InvalidBaseUri {
                    uri: uri.to_owned(),
                    message: describe_error(&e),
                })?;
        }
        debug!(
            authenticated = config.token().is_some(),
            base_uri = config.base_uri().unwrap_or("default"),
            "Building GitHub client"
        );
        let octocrab = builder.build().map_err(|e| ConfigError::Client {
            message: describe_error(&e),
        })?;
        Ok(Self::from_octocrab(octocrab))
    }

    /// Wraps an already configured client.
    pub fn from_octocrab(octocrab: Octocrab) -> Self {
        Self { octocrab }
    }

    /// Issues a GET and decodes a successful JSON body.
    ///
    /// Any non-success status becomes [`ServiceError::Api`], whatever the
    /// body looks like.
    async fn get_json<T: DeserializeOwned>(&self, route: String) -> Result<T, ServiceError> {
        let response = self
            .octocrab
            ._get(route.as_str())
            .await
            .map_err(|e| ServiceError::Transport(describe_error(&e)))?;
        let status = response.status();
        let body = self
            .octocrab
            .body_to_string(response)
            .await
            .map_err(|e| ServiceError::Transport(describe_error(&e)))?;

        if !status.is_success() {
            debug!(route = %route, status = status.as_u16(), "GitHub rejected request");
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message: error_message(&body, status.canonical_reason()),
            });
        }

        serde_json::from_str(&body).map_err(|e| ServiceError::Decode(e.to_string()))
    }
}

#[async_trait]
impl RepositoryService for GitHubService {
    async fn repository(&self, path: &RepoPath) -> Result<RepositoryInfo, ServiceError> {
        let repo: RepositoryBody = self
            .get_json(format!("/repos/{}/{}", path.owner, path.name))
            .await?;

        let resolved = repo
            .full_name
            .as_deref()
            .and_then(RepoPath::from_full_name)
            .unwrap_or_else(|| path.clone());

        Ok(RepositoryInfo {
            path: resolved,
            name: repo.name,
            description: repo.description,
            html_url: repo.html_url,
        })
    }

    async fn file_contents(
        &self,
        repository: &RepositoryInfo,
        file: &str,
    ) -> Result<Vec<u8>, ServiceError> {
        let contents: ContentsBody = self
            .get_json(format!(
                "/repos/{}/{}/contents/{file}",
                repository.path.owner, repository.path.name
            ))
            .await?;

        let entry = select_file(contents, file)?;
        decode_content(entry.encoding.as_deref(), entry.content.as_deref())
    }
}

/// Fields of `GET /repos/{owner}/{repo}` the fetcher uses.
#[derive(Debug, Deserialize)]
struct RepositoryBody {
    name: String,
    full_name: Option<String>,
    description: Option<String>,
    html_url: Option<String>,
}

/// `GET /repos/{owner}/{repo}/contents/{path}` answers with a single entry
/// for files and symlinks, and with a listing for directories.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ContentsBody {
    Listing(Vec<ContentEntry>),
    Entry(ContentEntry),
}

#[derive(Debug, Deserialize)]
struct ContentEntry {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    path: String,
    encoding: Option<String>,
    content: Option<String>,
}

/// Picks the file out of a contents response.
///
/// A symlinked README resolves to its target, so the entry's path may differ
/// from the requested one; only entries inside a directory of that name are
/// rejected.
fn select_file(contents: ContentsBody, file: &str) -> Result<ContentEntry, ServiceError> {
    match contents {
        ContentsBody::Entry(entry)
            if entry.kind == FILE_TYPE && !entry.path.starts_with(&format!("{file}/")) =>
        {
            Ok(entry)
        }
        _ => Err(ServiceError::NotAFile {
            path: file.to_owned(),
        }),
    }
}

/// Extracts a readable message from an error response body.
///
/// GitHub sends `{"message": ...}`; proxies in front of it may send HTML or
/// nothing at all.
fn error_message(body: &str, reason: Option<&str>) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }

    if let Ok(error) = serde_json::from_str::<ErrorBody>(body) {
        return error.message;
    }
    match body.trim() {
        "" => reason.unwrap_or_default().to_owned(),
        text => text.to_owned(),
    }
}

/// Describes an octocrab error without the backtrace its `Display` appends.
fn describe_error(error: &octocrab::Error) -> String {
    let mut message = String::new();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            if !message.is_empty() {
                message.push_str(": ");
            }
            message.push_str(&text);
        }
        source = cause.source();
    }

    if message.is_empty() {
        let text = error.to_string();
        message = text
            .split("\nFound at")
            .next()
            .unwrap_or_default()
            .trim()
            .to_owned();
    }
    message
}

/// Decodes the `content` field of a contents API response into raw bytes.
///
/// GitHub wraps the base64 payload at 60 columns, so whitespace is removed
/// before decoding.
fn decode_content(encoding: Option<&str>, content: Option<&str>) -> Result<Vec<u8>, ServiceError> {
    match encoding {
        Some(BASE64_ENCODING) | None => {}
        Some(other) => {
            return Err(ServiceError::Decode(format!(
                "unsupported content encoding '{other}'"
            )))
        }
    }

    let content =
        content.ok_or_else(|| ServiceError::Decode("response has no content".to_string()))?;
    let cleaned: Vec<u8> = content
        .bytes()
        .filter(|byte| !byte.is_ascii_whitespace())
        .collect();

    base64::engine::general_purpose::STANDARD
        .decode(cleaned)
        .map_err(|e| ServiceError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(kind: &str, path: &str) -> ContentEntry {
        ContentEntry {
            kind: kind.to_string(),
            path: path.to_string(),
            encoding: Some("base64".to_string()),
            content: Some("aGk=".to_string()),
        }
    }

    #[test]
    fn can_decode_wrapped_base64() {
        // "# Flask\n\nA web framework.\n" wrapped over two lines.
        let content = "IyBGbGFzawoKQSB3ZWIg\nZnJhbWV3b3JrLgo=\n";
        let bytes = decode_content(Some("base64"), Some(content)).unwrap();
        assert_eq!(bytes, b"# Flask\n\nA web framework.\n");
    }

    #[test]
    fn decodes_without_encoding_field() {
        let bytes = decode_content(None, Some("aGk=")).unwrap();
        assert_eq!(bytes, b"hi");
    }

    #[test]
    fn rejects_unsupported_encoding() {
        // Files over 1 MB are reported with encoding "none" and no body.
        let result = decode_content(Some("none"), Some(""));
        assert!(matches!(result, Err(ServiceError::Decode(_))));
    }

    #[test]
    fn rejects_missing_content() {
        let result = decode_content(Some("base64"), None);
        assert!(matches!(result, Err(ServiceError::Decode(_))));
    }

    #[test]
    fn rejects_invalid_base64() {
        let result = decode_content(Some("base64"), Some("not base64!"));
        assert!(matches!(result, Err(ServiceError::Decode(_))));
    }

    #[test]
    fn keeps_non_utf8_bytes() {
        let bytes = decode_content(Some("base64"), Some("//79")).unwrap();
        assert_eq!(bytes, vec![0xff, 0xfe, 0xfd]);
    }

    #[test]
    fn selects_requested_file() {
        let selected = select_file(ContentsBody::Entry(entry("file", "README.md")), "README.md");
        assert_eq!(selected.unwrap().path, "README.md");
    }

    #[test]
    fn selects_symlink_target() {
        let selected = select_file(
            ContentsBody::Entry(entry("file", "docs/README.md")),
            "README.md",
        );
        assert_eq!(selected.unwrap().path, "docs/README.md");
    }

    #[test]
    fn rejects_directories() {
        let listing = ContentsBody::Listing(vec![entry("file", "readme.md/intro.md")]);
        assert!(matches!(
            select_file(listing, "readme.md"),
            Err(ServiceError::NotAFile { .. })
        ));

        let nested = ContentsBody::Entry(entry("file", "readme.md/intro.md"));
        assert!(matches!(
            select_file(nested, "readme.md"),
            Err(ServiceError::NotAFile { .. })
        ));
    }

    #[test]
    fn rejects_submodules() {
        let submodule = ContentsBody::Entry(entry("submodule", "README.md"));
        assert!(matches!(
            select_file(submodule, "README.md"),
            Err(ServiceError::NotAFile { .. })
        ));
    }

    #[test]
    fn can_parse_contents_shapes() {
        let file: ContentsBody =
            serde_json::from_str(r#"{"type":"file","path":"README.md","content":"aGk="}"#)
                .unwrap();
        assert!(matches!(file, ContentsBody::Entry(_)));

        let listing: ContentsBody =
            serde_json::from_str(r#"[{"type":"file","path":"docs/a.md"}]"#).unwrap();
        assert!(matches!(listing, ContentsBody::Listing(_)));
    }

    #[test]
    fn error_message_prefers_github_message() {
        let body = r#"{"message":"Not Found","documentation_url":"https://docs.github.com"}"#;
        assert_eq!(error_message(body, Some("Not Found")), "Not Found");
    }

    #[test]
    fn error_message_falls_back_to_body_text() {
        assert_eq!(
            error_message("<html>Bad Gateway</html>\n", Some("Bad Gateway")),
            "<html>Bad Gateway</html>"
        );
    }

    #[test]
    fn error_message_falls_back_to_reason() {
        assert_eq!(error_message("", Some("Bad Gateway")), "Bad Gateway");
        assert_eq!(error_message("  ", None), "");
    }
}
