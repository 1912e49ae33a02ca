//! Media (video) models.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::customizations::Customizations;
use super::enums::{MediaStatus, MediaType};
use super::HashedId;

/// Asset type of the file that was originally uploaded.
pub const ORIGINAL_ASSET: &str = "OriginalFile";

/// Asset type of an audio-description track.
pub const AUDIO_DESCRIPTION_ASSET: &str = "AlternateAudioFile";

/// A media item, usually a video, and its derived assets.
///
/// Listings through a project's "show" endpoint carry a lighter shape than
/// the media endpoints; fields missing from it take their defaults (for
/// example `assets` is empty).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    /// Stable external identifier
    #[serde(alias = "hashedId")]
    pub hashed_id: HashedId,
    /// Numeric identifier
    #[serde(default)]
    pub id: u64,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Kind of media
    #[serde(default, rename = "type")]
    pub media_type: MediaType,
    /// Processing status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MediaStatus>,
    /// Length in seconds
    #[serde(default)]
    pub duration: f64,
    /// Processing progress, from 0.0 to 1.0
    #[serde(default)]
    pub progress: f64,
    /// Optional description (plain text or markdown)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When the media was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// When the media was last updated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    /// Thumbnail image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Thumbnail>,
    /// Project the media belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectRef>,
    /// Section of the project the media is filed under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Whether the media was archived
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    /// Derived files, in server order
    #[serde(default)]
    pub assets: Vec<Asset>,
    /// HTML embed snippet
    #[serde(default, rename = "embedCode", skip_serializing_if = "Option::is_none")]
    pub embed_code: Option<String>,
    /// Player customizations, when the response embeds them
    #[serde(default, alias = "embed_options", skip_serializing_if = "Option::is_none")]
    pub customizations: Option<Customizations>,
}

impl Media {
    /// Returns `true` if this media is a video.
    pub fn is_video(&self) -> bool {
        self.media_type == MediaType::Video
    }

    /// Returns `true` if an audio-description track is attached.
    pub fn has_audio_description(&self) -> bool {
        self.assets.iter().any(|a| a.asset_type == AUDIO_DESCRIPTION_ASSET)
    }

    /// The originally uploaded file, if listed.
    pub fn original_asset(&self) -> Option<&Asset> {
        self.assets.iter().find(|a| a.asset_type == ORIGINAL_ASSET)
    }
}

impl fmt::Display for Media {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {:?}, {:.1}s", self.name, self.hashed_id, self.media_type, self.duration)?;
        if let Some(status) = self.status {
            write!(f, ", {:?}", status)?;
        }
        Ok(())
    }
}

/// A file derived from (or uploaded as) a media item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Asset type, e.g. `OriginalFile` or `IphoneVideoFile`
    #[serde(rename = "type")]
    pub asset_type: String,
    /// Download URL
    #[serde(default)]
    pub url: String,
    /// Size in bytes
    #[serde(default)]
    pub file_size: u64,
    /// MIME type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Width in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Height in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// Thumbnail of a media item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thumbnail {
    /// Image URL
    pub url: String,
    /// Width in pixels
    #[serde(default)]
    pub width: u32,
    /// Height in pixels
    #[serde(default)]
    pub height: u32,
}

/// Reference to the project that owns a media item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRef {
    /// Numeric identifier
    #[serde(default)]
    pub id: u64,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Stable external identifier
    #[serde(alias = "hashedId")]
    pub hashed_id: HashedId,
}

/// Partial update for a media item; unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaUpdate {
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description (plain text or markdown)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Hashed ID of an image to use as the thumbnail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_still_media_id: Option<HashedId>,
}

impl MediaUpdate {
    /// An update that changes nothing yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rename the media.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replace the thumbnail with another image media.
    pub fn with_thumbnail(mut self, image_id: impl Into<HashedId>) -> Self {
        self.new_still_media_id = Some(image_id.into());
        self
    }
}

/// Aggregated viewing statistics of a media item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaStats {
    /// Numeric identifier
    #[serde(default)]
    pub id: u64,
    /// Stable external identifier
    #[serde(alias = "hashedId")]
    pub hashed_id: HashedId,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// The counters themselves
    #[serde(default)]
    pub stats: StatsSummary,
}

/// Counters reported by the stats endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    /// Times a page containing the player was loaded
    #[serde(default)]
    pub page_loads: u64,
    /// Unique visitors
    #[serde(default)]
    pub visitors: u64,
    /// Share of visitors that clicked play, in percent
    #[serde(default)]
    pub percent_of_visitors_clicking_play: f64,
    /// Plays
    #[serde(default)]
    pub plays: u64,
    /// Average share of the video watched, in percent
    #[serde(default)]
    pub average_percent_watched: f64,
}
