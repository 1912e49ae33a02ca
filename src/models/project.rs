//! Project models.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::HashedId;

/// A named grouping of media in the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable external identifier
    pub hashed_id: HashedId,
    /// Numeric identifier
    #[serde(default)]
    pub id: u64,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Number of media in the project
    #[serde(default)]
    pub media_count: u32,
    /// When the project was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// When the project was last updated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    /// Whether anyone may upload to the project
    #[serde(default)]
    pub anonymous_can_upload: bool,
    /// Whether anyone may download media from the project
    #[serde(default)]
    pub anonymous_can_download: bool,
    /// Whether the project is publicly viewable
    #[serde(default)]
    pub public: bool,
    /// Identifier used in the public project URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] ({} media)", self.name, self.hashed_id, self.media_count)
    }
}

/// Fields for a new project.
///
/// # Example
///
/// ```
/// use wistia_rs::models::NewProject;
///
/// let project = NewProject::new("Launch videos").with_public(true);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Email of the project's administrator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_email: Option<String>,
    /// Whether anyone may upload to the project
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anonymous_can_upload: Option<bool>,
    /// Whether anyone may download media from the project
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anonymous_can_download: Option<bool>,
    /// Whether the project is publicly viewable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
}

impl NewProject {
    /// Start a new project with a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Set the administrator's email.
    pub fn with_admin_email(mut self, email: impl Into<String>) -> Self {
        self.admin_email = Some(email.into());
        self
    }

    /// Allow or forbid public uploads.
    pub fn with_public_upload(mut self, enabled: bool) -> Self {
        self.anonymous_can_upload = Some(enabled);
        self
    }

    /// Allow or forbid public downloads.
    pub fn with_public_download(mut self, enabled: bool) -> Self {
        self.anonymous_can_download = Some(enabled);
        self
    }

    /// Make the project public or private.
    pub fn with_public(mut self, public: bool) -> Self {
        self.public = Some(public);
        self
    }
}

/// Partial update for an existing project; unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether anyone may upload to the project
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anonymous_can_upload: Option<bool>,
    /// Whether anyone may download media from the project
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anonymous_can_download: Option<bool>,
    /// Whether the project is publicly viewable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
}

impl ProjectUpdate {
    /// An update that changes nothing yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rename the project.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Allow or forbid public uploads.
    pub fn with_public_upload(mut self, enabled: bool) -> Self {
        self.anonymous_can_upload = Some(enabled);
        self
    }

    /// Allow or forbid public downloads.
    pub fn with_public_download(mut self, enabled: bool) -> Self {
        self.anonymous_can_download = Some(enabled);
        self
    }

    /// Make the project public or private.
    pub fn with_public(mut self, public: bool) -> Self {
        self.public = Some(public);
        self
    }
}
