//! Repository service error types.

use thiserror::Error;

/// Errors returned by a [`RepositoryService`](super::RepositoryService).
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The platform answered with an error status (not found, forbidden, ...).
    #[error("{status} {message}")]
    Api { status: u16, message: String },

    /// The path exists but is not a single file.
    #[error("'{path}' is not a file")]
    NotAFile { path: String },

    /// The request did not produce a platform response.
    #[error("{0}")]
    Transport(String),

    /// The response payload could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ServiceError {
    /// Returns true if the platform itself rejected the lookup.
    ///
    /// These are the failures a caller may treat as "not there" rather than
    /// as a fault.
    #[must_use]
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, Self::Api { .. } | Self::NotAFile { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_classify_lookup_failures() {
        let not_found = ServiceError::Api {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert!(not_found.is_lookup_failure());

        let forbidden = ServiceError::Api {
            status: 403,
            message: "Forbidden".to_string(),
        };
        assert!(forbidden.is_lookup_failure());

        assert!(ServiceError::NotAFile {
            path: "readme.md".to_string()
        }
        .is_lookup_failure());
        assert!(!ServiceError::Transport("connection reset".to_string()).is_lookup_failure());
        assert!(!ServiceError::Decode("bad base64".to_string()).is_lookup_failure());
    }

    #[test]
    fn api_error_displays_status_and_message() {
        let error = ServiceError::Api {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(error.to_string(), "404 Not Found");
    }
}
