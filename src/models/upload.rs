//! Upload API models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::media::Thumbnail;
use super::HashedId;

/// Optional fields for an upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadOptions {
    /// Project to upload into; the provider creates one when omitted
    pub project_id: Option<HashedId>,
    /// Display name; defaults to the file or URL's last path segment
    pub name: Option<String>,
    /// Description
    pub description: Option<String>,
    /// Contact to attribute the upload to; defaults to the account owner
    pub contact_id: Option<u64>,
}

impl UploadOptions {
    /// No options set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Upload into a project.
    pub fn with_project(mut self, project_id: impl Into<HashedId>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attribute the upload to a contact.
    pub fn with_contact(mut self, contact_id: u64) -> Self {
        self.contact_id = Some(contact_id);
        self
    }

    /// Form fields for the upload request, naming it `default_name` when no
    /// name was set.
    pub(crate) fn to_fields(&self, default_name: &str) -> Vec<(String, String)> {
        let mut fields = vec![(
            "name".to_string(),
            self.name.clone().unwrap_or_else(|| default_name.to_string()),
        )];
        if let Some(ref project) = self.project_id {
            fields.push(("project_id".to_string(), project.to_string()));
        }
        if let Some(ref description) = self.description {
            fields.push(("description".to_string(), description.clone()));
        }
        if let Some(contact) = self.contact_id {
            fields.push(("contact_id".to_string(), contact.to_string()));
        }
        fields
    }
}

/// Response of the Upload API for a newly created media.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Numeric identifier
    #[serde(default)]
    pub id: u64,
    /// Stable external identifier of the new media
    pub hashed_id: HashedId,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Media type as reported by the provider
    #[serde(default, rename = "type")]
    pub media_type: String,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When the media was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// When the media was last updated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    /// Processing progress, from 0.0 to 1.0
    #[serde(default)]
    pub progress: f64,
    /// Processing status as reported by the provider
    #[serde(default)]
    pub status: String,
    /// Thumbnail image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Thumbnail>,
    /// Length in seconds, once known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}
