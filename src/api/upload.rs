//! Upload service.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::client::{ClientInner, RequestBody};
use crate::error::Resource;
use crate::models::decode::decode;
use crate::models::{UploadOptions, UploadResponse};
use crate::{Error, Result};

/// Service for adding media through the Upload API.
///
/// # Example
///
/// ```no_run
/// use wistia_rs::models::UploadOptions;
///
/// # fn example(client: wistia_rs::WistiaClient) -> wistia_rs::Result<()> {
/// let uploaded = client.upload().link(
///     "https://example.com/videos/keynote.mp4",
///     &UploadOptions::new().with_project("pv1abc2def"),
/// )?;
/// println!("uploaded as {}", uploaded.hashed_id);
/// # Ok(())
/// # }
/// ```
pub struct UploadService {
    inner: Arc<ClientInner>,
}

impl UploadService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Have the provider fetch and host the media at a public URL.
    ///
    /// Without a name in `options`, the media is named after the last path
    /// segment of `url`.
    pub fn link(&self, url: &str, options: &UploadOptions) -> Result<UploadResponse> {
        if url.trim().is_empty() {
            return Err(Error::InvalidInput("upload URL is empty".to_string()));
        }

        let mut fields = options.to_fields(last_segment(url));
        fields.insert(0, ("url".to_string(), url.to_string()));

        self.send(RequestBody::Form(fields))
    }

    /// Upload a local file.
    ///
    /// Without a name in `options`, the media is named after the file.
    pub fn file(&self, path: impl AsRef<Path>, options: &UploadOptions) -> Result<UploadResponse> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| Error::InvalidInput(format!("not a file path: {}", path.display())))?;

        let fields = options.to_fields(file_name);
        self.send(RequestBody::File {
            path: path.to_path_buf(),
            fields,
        })
    }

    fn send(&self, body: RequestBody) -> Result<UploadResponse> {
        let session = self.inner.upload_session()?;

        let body = session.post("", body, Resource::Endpoint("upload".into()))?;
        let uploaded: UploadResponse = decode(body, "upload")?;

        info!(hashed_id = %uploaded.hashed_id, name = %uploaded.name, "Upload accepted");
        Ok(uploaded)
    }
}

fn last_segment(url: &str) -> &str {
    let path = url.split(&['?', '#'][..]).next().unwrap_or(url);
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("https://example.com/videos/keynote.mp4"), "keynote.mp4");
        assert_eq!(last_segment("https://example.com/videos/keynote.mp4?sig=abc"), "keynote.mp4");
        assert_eq!(last_segment("https://example.com/videos/"), "videos");
    }
}
