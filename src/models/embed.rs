//! Public embed data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::customizations::Customizations;
use super::HashedId;

/// Public embed data of a media item, as served to the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaEmbed {
    /// Stable external identifier
    pub hashed_id: HashedId,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Media type as reported by the player data
    #[serde(default, rename = "type")]
    pub media_type: String,
    /// When the media was created
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Length in seconds
    #[serde(default)]
    pub duration: f64,
    /// Delivery assets
    #[serde(default)]
    pub assets: Vec<EmbedAsset>,
    /// Caption tracks
    #[serde(default)]
    pub captions: Vec<serde_json::Value>,
    /// Player customizations
    #[serde(default, rename = "embed_options", skip_serializing_if = "Option::is_none")]
    pub embed_options: Option<Customizations>,
}

impl MediaEmbed {
    /// Direct URL of the asset of `kind` (e.g. `original`), with the `.bin`
    /// delivery suffix rewritten to a playable `/file.mp4`. When several
    /// assets share the kind, the last one listed wins.
    pub fn asset_url(&self, kind: &str) -> Option<String> {
        self.assets
            .iter()
            .rev()
            .find(|a| a.asset_type == kind)
            .map(|a| a.url.replacen(".bin", "/file.mp4", 1))
    }

    /// Number of assets of `kind`.
    pub fn asset_count(&self, kind: &str) -> usize {
        self.assets.iter().filter(|a| a.asset_type == kind).count()
    }

    /// Whether the captions plugin is switched on in the embed options.
    pub fn captions_enabled(&self) -> bool {
        self.embed_options
            .as_ref()
            .map(Customizations::captions_enabled)
            .unwrap_or(false)
    }
}

/// A delivery asset listed in embed data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedAsset {
    /// Asset kind, e.g. `original` or `alternate_audio`
    #[serde(rename = "type")]
    pub asset_type: String,
    /// Delivery URL
    #[serde(default)]
    pub url: String,
    /// Width in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Height in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Size in bytes
    #[serde(default)]
    pub size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::decode::decode;
    use serde_json::json;

    #[test]
    fn test_deserialize_embed() {
        let embed: MediaEmbed = decode(
            json!({
                "hashedId": "abc",
                "name": "Clip",
                "type": "Video",
                "createdAt": 1379604649,
                "duration": 12.5,
                "assets": [
                    {"type": "original", "url": "https://embed.wistia.com/deliveries/xyz.bin", "size": 100},
                    {"type": "alternate_audio", "url": "https://embed.wistia.com/deliveries/ad.bin"}
                ],
                "captions": [{"language": "eng"}],
                "embed_options": {"plugin": {"captions-v1": {"on": "true"}}}
            }),
            "media",
        )
        .unwrap();

        assert_eq!(embed.created_at.unwrap().timestamp(), 1379604649);
        assert_eq!(
            embed.asset_url("original").as_deref(),
            Some("https://embed.wistia.com/deliveries/xyz/file.mp4")
        );
        assert_eq!(embed.asset_count("alternate_audio"), 1);
        assert_eq!(embed.captions.len(), 1);
        assert!(embed.captions_enabled());
    }
}
