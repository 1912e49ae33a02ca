//! Player customization models.
//!
//! Customizations are sent as partial updates: only the fields that are set
//! are serialized, and the provider merges them into what it already has.
//! Keys this crate does not model are kept in `extra` so a fetched block
//! can be sent back without losing anything.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::decode::flexible_bool;

/// Embed-time player configuration of a media item.
///
/// # Example
///
/// ```
/// use wistia_rs::models::{Customizations, Private};
///
/// let patch = Customizations::new()
///     .with_player_color("#e7fad1")
///     .with_private(Private::new().with_show_comments(false));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customizations {
    /// Base color of the player, as a hex string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_color: Option<String>,
    /// Start playing as soon as the player loads
    #[serde(
        default,
        rename = "autoPlay",
        deserialize_with = "flexible_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub autoplay: Option<bool>,
    /// Show the controls before playback starts
    #[serde(default, deserialize_with = "flexible_bool", skip_serializing_if = "Option::is_none")]
    pub controls_visible_on_load: Option<bool>,
    /// What happens when the video ends (`default`, `reset`, `loop`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_video_behavior: Option<String>,
    /// Show the fullscreen button
    #[serde(default, deserialize_with = "flexible_bool", skip_serializing_if = "Option::is_none")]
    pub fullscreen_button: Option<bool>,
    /// Show the playbar
    #[serde(default, deserialize_with = "flexible_bool", skip_serializing_if = "Option::is_none")]
    pub playbar: Option<bool>,
    /// Show the large play button
    #[serde(default, deserialize_with = "flexible_bool", skip_serializing_if = "Option::is_none")]
    pub play_button: Option<bool>,
    /// Show the settings control
    #[serde(default, deserialize_with = "flexible_bool", skip_serializing_if = "Option::is_none")]
    pub settings_control: Option<bool>,
    /// Show the volume control
    #[serde(default, deserialize_with = "flexible_bool", skip_serializing_if = "Option::is_none")]
    pub volume_control: Option<bool>,
    /// URL of the thumbnail image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub still_url: Option<String>,
    /// Resize the player to fit its container
    #[serde(default, deserialize_with = "flexible_bool", skip_serializing_if = "Option::is_none")]
    pub video_foam: Option<bool>,
    /// Whether viewers must be offered an audio description
    #[serde(default, deserialize_with = "flexible_bool", skip_serializing_if = "Option::is_none")]
    pub audio_description_is_required: Option<bool>,
    /// Plugin configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin: Option<Plugin>,
    /// Visibility toggles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private: Option<Private>,
    /// Keys not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Customizations {
    /// An empty customization block; set only what should change.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the player color.
    pub fn with_player_color(mut self, color: impl Into<String>) -> Self {
        self.player_color = Some(color.into());
        self
    }

    /// Enable or disable autoplay.
    pub fn with_autoplay(mut self, enabled: bool) -> Self {
        self.autoplay = Some(enabled);
        self
    }

    /// Set the end-of-video behaviour.
    pub fn with_end_video_behavior(mut self, behavior: impl Into<String>) -> Self {
        self.end_video_behavior = Some(behavior.into());
        self
    }

    /// Require (or stop requiring) an audio description.
    pub fn with_audio_description_required(mut self, required: bool) -> Self {
        self.audio_description_is_required = Some(required);
        self
    }

    /// Set the plugin block.
    pub fn with_plugin(mut self, plugin: Plugin) -> Self {
        self.plugin = Some(plugin);
        self
    }

    /// Set the private block.
    pub fn with_private(mut self, private: Private) -> Self {
        self.private = Some(private);
        self
    }

    /// Set an arbitrary key that has no dedicated field.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Whether the captions plugin is switched on.
    pub fn captions_enabled(&self) -> bool {
        self.plugin
            .as_ref()
            .and_then(|p| p.captions_v1.as_ref())
            .and_then(|c| c.on)
            .unwrap_or(false)
    }
}

/// The `private` block of a customization: visibility toggles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Private {
    /// Show the comments panel
    #[serde(default, deserialize_with = "flexible_bool", skip_serializing_if = "Option::is_none")]
    pub show_comments: Option<bool>,
    /// Keys not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Private {
    /// An empty private block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show or hide comments.
    pub fn with_show_comments(mut self, show: bool) -> Self {
        self.show_comments = Some(show);
        self
    }
}

/// The `plugin` block of a customization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plugin {
    /// Captions plugin
    #[serde(default, rename = "captions-v1", skip_serializing_if = "Option::is_none")]
    pub captions_v1: Option<CaptionsPlugin>,
    /// Keys not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Plugin {
    /// Plugin block carrying only the captions plugin.
    pub fn captions(captions: CaptionsPlugin) -> Self {
        Self {
            captions_v1: Some(captions),
            extra: Map::new(),
        }
    }
}

/// Settings of the `captions-v1` plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionsPlugin {
    /// Captions are available in the player
    #[serde(default, deserialize_with = "flexible_bool", skip_serializing_if = "Option::is_none")]
    pub on: Option<bool>,
    /// Captions are shown without the viewer asking
    #[serde(default, deserialize_with = "flexible_bool", skip_serializing_if = "Option::is_none")]
    pub on_by_default: Option<bool>,
    /// Keys not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CaptionsPlugin {
    /// Captions plugin switched on or off.
    pub fn new(on: bool, on_by_default: bool) -> Self {
        Self {
            on: Some(on),
            on_by_default: Some(on_by_default),
            extra: Map::new(),
        }
    }
}
