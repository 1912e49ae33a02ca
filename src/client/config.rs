//! Client configuration options.

use std::time::Duration;

/// Default Data API base URL.
pub const DATA_API_URL: &str = "https://api.wistia.com/v1/";
/// Default Upload API base URL.
pub const UPLOAD_API_URL: &str = "https://upload.wistia.com/";
/// Default Embed API base URL.
pub const EMBED_API_URL: &str = "https://fast.wistia.com/embed/";

/// Configuration for the Wistia client.
///
/// # Example
///
/// ```
/// use wistia_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(120))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Base URL of the Data API (projects, medias, captions, ...)
    pub data_api_url: String,
    /// Base URL of the Upload API
    pub upload_url: String,
    /// Base URL of the public Embed API
    pub embed_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            user_agent: format!("wistia-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            data_api_url: DATA_API_URL.to_string(),
            upload_url: UPLOAD_API_URL.to_string(),
            embed_url: EMBED_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Point the Data API at another host, e.g. a proxy or test server.
    pub fn with_data_api_url(mut self, url: impl Into<String>) -> Self {
        self.data_api_url = with_trailing_slash(url.into());
        self
    }

    /// Point the Upload API at another host.
    pub fn with_upload_url(mut self, url: impl Into<String>) -> Self {
        self.upload_url = with_trailing_slash(url.into());
        self
    }

    /// Point the Embed API at another host.
    pub fn with_embed_url(mut self, url: impl Into<String>) -> Self {
        self.embed_url = with_trailing_slash(url.into());
        self
    }
}

// Relative joins replace the last path segment unless the base ends in `/`.
fn with_trailing_slash(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert!(config.user_agent.starts_with("wistia-rs/"));
        assert_eq!(config.data_api_url, "https://api.wistia.com/v1/");
    }

    #[test]
    fn test_base_urls_get_trailing_slash() {
        let config = ClientConfig::new()
            .with_data_api_url("http://localhost:8080/v1")
            .with_embed_url("http://localhost:8080/embed/");

        assert_eq!(config.data_api_url, "http://localhost:8080/v1/");
        assert_eq!(config.embed_url, "http://localhost:8080/embed/");
    }
}
