//! Error types for the Wistia API client.
//!
//! Every failure surfaced by this crate is one of the variants of [`Error`].
//! HTTP status codes returned by the provider are translated by
//! [`Error::from_status`], which is a pure function of the status code, the
//! response body and the resource the request was addressing.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Wistia operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The resource a request was addressing.
///
/// Used to refine [`Error::NotFound`] for messaging; all variants are
/// handled the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// A project, by hashed ID
    Project(String),
    /// A media item (usually a video), by hashed ID
    Media(String),
    /// Captions in one language on a media item
    Caption {
        /// Hashed ID of the media
        media_id: String,
        /// Language code of the captions
        language: String,
    },
    /// Any other endpoint, by request path
    Endpoint(String),
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Project(id) => write!(f, "project `{}`", id),
            Resource::Media(id) => write!(f, "media `{}`", id),
            Resource::Caption { media_id, language } => {
                write!(f, "`{}` captions on media `{}`", language, media_id)
            }
            Resource::Endpoint(path) => write!(f, "endpoint `{}`", path),
        }
    }
}

/// The main error type for all Wistia API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// No API token was configured and none was found in the environment
    #[error("No API token configured; call `configure` or set `{env_var}`")]
    MissingCredentials {
        /// Environment variable that was consulted
        env_var: String,
    },

    /// The token was rejected (401/403)
    #[error("Unauthorized (status {status}): {message}")]
    Unauthorized {
        /// HTTP status code
        status: u16,
        /// Message returned by the provider
        message: String,
    },

    /// The addressed resource does not exist, or was deleted (404)
    #[error("Not found: {0} does not exist, or was deleted from Wistia")]
    NotFound(Resource),

    /// The request parameters were rejected (400/422)
    #[error("Bad request (status {status}): {message}")]
    BadRequest {
        /// HTTP status code
        status: u16,
        /// Message returned by the provider
        message: String,
    },

    /// Rate limited by the API (429)
    #[error("Rate limited{}", .retry_after_secs.map(|s| format!("; retry after {} seconds", s)).unwrap_or_default())]
    RateLimited {
        /// Seconds to wait before retrying, when the provider says so
        retry_after_secs: Option<u64>,
    },

    /// The provider returned a body that does not match the expected shape
    #[error("Malformed response: field `{field}`: {message}")]
    MalformedResponse {
        /// The offending field (or the enclosing key when unknown)
        field: String,
        /// What was wrong with it
        message: String,
    },

    /// Any other API failure, including transport errors and timeouts
    #[error("API error{}: {message}", .status.map(|s| format!(" (status {})", s)).unwrap_or_default())]
    Api {
        /// HTTP status code, absent for transport-level failures
        status: Option<u16>,
        /// Human-readable error message
        message: String,
    },

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A configured base URL could not be parsed or joined
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// Returns `true` if this error is potentially transient and the
    /// operation could be retried by the caller.
    ///
    /// The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::RateLimited { .. } => true,
            Error::Api { status, .. } => status.map_or(true, |s| s >= 500),
            _ => false,
        }
    }

    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Unauthorized { .. } | Error::MissingCredentials { .. })
    }

    /// Returns `true` if the addressed resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Map a non-success HTTP status and its parsed body to an error.
    ///
    /// `resource` is what the request was addressing; it only refines the
    /// message of [`Error::NotFound`].
    pub fn from_status(status: u16, body: &Value, resource: Resource) -> Self {
        match status {
            404 => Error::NotFound(resource),
            401 | 403 => Error::Unauthorized {
                status,
                message: error_message(body).unwrap_or_else(|| "Invalid or missing API token".to_string()),
            },
            400 | 422 => Error::BadRequest {
                status,
                message: error_message(body).unwrap_or_else(|| "Request was rejected".to_string()),
            },
            429 => Error::RateLimited {
                retry_after_secs: body
                    .get("retry-after")
                    .or_else(|| body.get("retry_after"))
                    .and_then(|v| v.as_u64()),
            },
            _ => Error::Api {
                status: Some(status),
                message: error_message(body).unwrap_or_else(|| "Unexpected API response".to_string()),
            },
        }
    }

    /// Build a [`Error::MalformedResponse`] for a field.
    pub(crate) fn malformed(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::MalformedResponse {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("request timed out: {}", err)
        } else if err.is_connect() {
            format!("connection failed: {}", err)
        } else {
            err.to_string()
        };

        Error::Api {
            status: err.status().map(|s| s.as_u16()),
            message,
        }
    }
}

/// Pull the provider's message out of an error body.
///
/// Wistia uses a few shapes: `{"error": "..."}`, `{"error": {"message":
/// "..."}}`, `{"errors": ["...", ...]}` and `{"message": "..."}`.
fn error_message(body: &Value) -> Option<String> {
    if let Some(error) = body.get("error") {
        if let Some(s) = error.as_str() {
            return Some(s.to_string());
        }
        if let Some(s) = error.get("message").and_then(|m| m.as_str()) {
            return Some(s.to_string());
        }
    }

    if let Some(errors) = body.get("errors").and_then(|e| e.as_array()) {
        let joined = errors
            .iter()
            .filter_map(|e| e.as_str().or_else(|| e.get("message").and_then(|m| m.as_str())))
            .map(String::from)
            .collect::<Vec<_>>()
            .join("; ");
        if !joined.is_empty() {
            return Some(joined);
        }
    }

    body.get("message")
        .and_then(|m| m.as_str())
        .map(String::from)
        .or_else(|| body.as_str().filter(|s| !s.is_empty()).map(String::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_not_found_maps_resource() {
        let err = Error::from_status(404, &Value::Null, Resource::Project("abc123".into()));
        assert!(err.is_not_found());
        assert!(err.to_string().contains("project `abc123`"));
    }

    #[test]
    fn test_auth_statuses() {
        for status in [401, 403] {
            let err = Error::from_status(status, &json!({"error": "Invalid credentials"}), Resource::Endpoint("medias.json".into()));
            match err {
                Error::Unauthorized { status: s, message } => {
                    assert_eq!(s, status);
                    assert_eq!(message, "Invalid credentials");
                }
                other => panic!("Expected Unauthorized, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_bad_request_carries_provider_message() {
        let body = json!({"error": {"message": "per_page must be <= 100"}});
        match Error::from_status(422, &body, Resource::Endpoint("medias.json".into())) {
            Error::BadRequest { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "per_page must be <= 100");
            }
            other => panic!("Expected BadRequest, got {:?}", other),
        }

        let body = json!({"errors": ["name can't be blank", {"message": "bad color"}]});
        match Error::from_status(400, &body, Resource::Endpoint("projects.json".into())) {
            Error::BadRequest { message, .. } => assert_eq!(message, "name can't be blank; bad color"),
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_rate_limited() {
        let err = Error::from_status(429, &json!({"retry-after": 30}), Resource::Endpoint("medias.json".into()));
        assert!(matches!(err, Error::RateLimited { retry_after_secs: Some(30) }));
        assert!(err.is_retryable());

        let err = Error::from_status(429, &Value::Null, Resource::Endpoint("medias.json".into()));
        assert!(matches!(err, Error::RateLimited { retry_after_secs: None }));
    }

    #[test]
    fn test_unmapped_server_error_is_api_error() {
        let err = Error::from_status(503, &Value::Null, Resource::Media("v1".into()));
        match &err {
            Error::Api { status, .. } => assert_eq!(*status, Some(503)),
            other => panic!("Expected Api error, got {:?}", other),
        }
        assert!(err.is_retryable());
        assert!(!err.is_auth_error());
    }

    #[test]
    fn test_error_classifiers() {
        assert!(Error::MissingCredentials { env_var: "WISTIA_API_TOKEN".into() }.is_auth_error());
        assert!(!Error::InvalidInput("bad".into()).is_retryable());
        assert!(!Error::from_status(418, &Value::Null, Resource::Endpoint("x".into())).is_retryable());
    }

    #[test]
    fn test_malformed_message_names_field() {
        let err = Error::malformed("hashedId", "missing field");
        assert!(err.to_string().contains("`hashedId`"));
    }
}
