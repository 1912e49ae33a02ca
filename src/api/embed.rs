//! Public embed data service.

use std::sync::Arc;

use super::checked_id;
use crate::client::ClientInner;
use crate::error::Resource;
use crate::models::decode::decode;
use crate::models::MediaEmbed;
use crate::{Error, Result};

/// Service for the public data the player loads for a media.
///
/// These calls need no token and do not add to the request count.
///
/// # Example
///
/// ```no_run
/// # fn example(client: wistia_rs::WistiaClient) -> wistia_rs::Result<()> {
/// let embed = client.embed().get("abc1234567")?;
/// if let Some(url) = embed.asset_url("original") {
///     println!("download from {}", url);
/// }
/// # Ok(())
/// # }
/// ```
pub struct EmbedService {
    inner: Arc<ClientInner>,
}

impl EmbedService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the embed data of a media.
    ///
    /// # Errors
    ///
    /// The Embed API answers unknown media with a success status and an
    /// `error` flag in the body; that is reported as [`Error::NotFound`].
    pub fn get(&self, media_id: impl AsRef<str>) -> Result<MediaEmbed> {
        let id = checked_id(media_id.as_ref())?;
        let session = self.inner.embed_session()?;

        let mut body = session.get(&format!("medias/{}.json", id), &[], Resource::Media(id.to_string()))?;
        if body.get("error").is_some() {
            return Err(Error::NotFound(Resource::Media(id.to_string())));
        }

        let media = body
            .get_mut("media")
            .map(serde_json::Value::take)
            .ok_or_else(|| Error::malformed("media", "missing field"))?;
        decode(media, "media")
    }
}
