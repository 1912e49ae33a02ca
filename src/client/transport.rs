//! Session factory and the HTTP transport behind it.
//!
//! A [`Connector`] hands out one [`Transport`] per top-level operation. The
//! default [`HttpConnector`] builds a fresh `reqwest` blocking client each
//! time, so no connection state is shared between operations. Tests swap in
//! a connector that replays canned responses.

use std::path::PathBuf;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, RETRY_AFTER};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use url::Url;

use super::config::ClientConfig;
use crate::{Error, Result};

/// A fully resolved API call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL, without the query string
    pub url: Url,
    /// Query parameters, in the order they are sent
    pub query: Vec<(String, String)>,
    /// Request body
    pub body: RequestBody,
}

impl ApiRequest {
    /// Value of the first query parameter called `name`.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Body of an [`ApiRequest`].
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// No body
    Empty,
    /// JSON document
    Json(Value),
    /// URL-encoded form
    Form(Vec<(String, String)>),
    /// Multipart form with a file part called `file`
    File {
        /// Local file to send
        path: PathBuf,
        /// Additional text fields
        fields: Vec<(String, String)>,
    },
}

/// Raw response of an API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
    /// Seconds from a `Retry-After` header, when one was sent
    pub retry_after: Option<u64>,
}

impl ApiResponse {
    /// A response without a `Retry-After` header.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            retry_after: None,
        }
    }

    /// Set the `Retry-After` delay in seconds.
    pub fn with_retry_after(mut self, seconds: u64) -> Self {
        self.retry_after = Some(seconds);
        self
    }

    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests for a single session.
pub trait Transport {
    /// Send one request and return the raw response.
    ///
    /// Non-2xx statuses are returned as responses, not errors; only failures
    /// to get a response at all (connect, timeout, I/O) are errors.
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse>;
}

/// Creates a [`Transport`] per operation.
pub trait Connector: Send + Sync {
    /// Open a transport that authenticates with `token`, or sends no
    /// credentials when it is `None`.
    fn connect(&self, token: Option<&SecretString>, config: &ClientConfig) -> Result<Box<dyn Transport>>;
}

/// The default connector, backed by `reqwest`'s blocking client.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpConnector;

impl Connector for HttpConnector {
    fn connect(&self, token: Option<&SecretString>, config: &ClientConfig) -> Result<Box<dyn Transport>> {
        let mut headers = HeaderMap::new();
        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
                .map_err(|_| Error::InvalidInput("API token contains invalid header characters".to_string()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Box::new(HttpTransport { client }))
    }
}

struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl Transport for HttpTransport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone());

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(ref body) => builder.json(body),
            RequestBody::Form(ref fields) => builder.form(fields),
            RequestBody::File { ref path, ref fields } => {
                let mut form = reqwest::blocking::multipart::Form::new();
                for (name, value) in fields {
                    form = form.text(name.clone(), value.clone());
                }
                let form = form.file("file", path).map_err(|e| {
                    Error::InvalidInput(format!("cannot read {}: {}", path.display(), e))
                })?;
                builder.multipart(form)
            }
        };

        let response = builder.send()?;
        let status = response.status().as_u16();
        // Only the delay-seconds form is understood, not an HTTP date
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok());
        let body = response.text()?;

        Ok(ApiResponse {
            status,
            body,
            retry_after,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_param_lookup() {
        let request = ApiRequest {
            method: Method::GET,
            url: Url::parse("https://api.wistia.com/v1/medias.json").unwrap(),
            query: vec![
                ("page".to_string(), "2".to_string()),
                ("per_page".to_string(), "100".to_string()),
            ],
            body: RequestBody::Empty,
        };

        assert_eq!(request.query_param("page"), Some("2"));
        assert_eq!(request.query_param("sort_by"), None);
    }

    #[test]
    fn test_http_connector_rejects_bad_token() {
        let token = SecretString::from("bad\ntoken");
        let result = HttpConnector.connect(Some(&token), &ClientConfig::default());
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_http_connector_builds_without_token() {
        assert!(HttpConnector.connect(None, &ClientConfig::default()).is_ok());
    }

    #[test]
    fn test_success_range() {
        let ok = ApiResponse::new(204, "");
        let missing = ApiResponse::new(404, "");
        assert!(ok.is_success());
        assert!(!missing.is_success());
    }
}
