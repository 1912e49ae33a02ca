//! Player customizations service.

use std::sync::Arc;

use super::{checked_id, json_body};
use crate::client::ClientInner;
use crate::error::Resource;
use crate::models::decode::decode;
use crate::models::Customizations;
use crate::Result;

/// Service for the embed-time player options of a video.
///
/// # Example
///
/// ```no_run
/// use wistia_rs::models::{Customizations, Private};
///
/// # fn example(client: wistia_rs::WistiaClient) -> wistia_rs::Result<()> {
/// // Change the player color and hide comments; everything else is kept
/// let patch = Customizations::new()
///     .with_player_color("#e7fad1")
///     .with_private(Private::new().with_show_comments(false));
/// client.customizations().update("abc1234567", &patch)?;
/// # Ok(())
/// # }
/// ```
pub struct CustomizationsService {
    inner: Arc<ClientInner>,
}

impl CustomizationsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the customizations of a video.
    pub fn get(&self, video_id: impl AsRef<str>) -> Result<Customizations> {
        let id = checked_id(video_id.as_ref())?;
        let session = self.inner.data_session()?;

        let body = session.get(&path(id), &[], Resource::Media(id.to_string()))?;
        decode(body, "customizations")
    }

    /// Replace all customizations of a video with `customizations`.
    pub fn create(&self, video_id: impl AsRef<str>, customizations: &Customizations) -> Result<Customizations> {
        let id = checked_id(video_id.as_ref())?;
        let session = self.inner.data_session()?;

        let body = session.post(&path(id), json_body(customizations)?, Resource::Media(id.to_string()))?;
        decode(body, "customizations")
    }

    /// Merge `customizations` into those of a video. Only the fields set in
    /// the patch are sent, and only those change.
    pub fn update(&self, video_id: impl AsRef<str>, customizations: &Customizations) -> Result<Customizations> {
        let id = checked_id(video_id.as_ref())?;
        let session = self.inner.data_session()?;

        let body = session.put(&path(id), json_body(customizations)?, Resource::Media(id.to_string()))?;
        decode(body, "customizations")
    }

    /// Remove all customizations of a video.
    pub fn delete(&self, video_id: impl AsRef<str>) -> Result<()> {
        let id = checked_id(video_id.as_ref())?;
        let session = self.inner.data_session()?;

        session.delete(&path(id), Resource::Media(id.to_string()))?;
        Ok(())
    }
}

fn path(video_id: &str) -> String {
    format!("medias/{}/customizations.json", video_id)
}
