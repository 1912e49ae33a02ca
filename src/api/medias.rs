//! Medias service.

use std::sync::Arc;

use reqwest::Method;
use serde_json::{Map, Value};
use tracing::debug;

use super::{checked_id, json_body, ListOptions};
use crate::client::paginated::{ListStrategy, Listing};
use crate::client::{parse_response, ClientInner, RequestBody};
use crate::error::Resource;
use crate::models::decode::decode;
use crate::models::{
    Container, HashedId, Media, MediaStats, MediaType, MediaUpdate, SortBy, SortDirection,
};
use crate::{Error, Result};

/// Filters, sorting and page size for listing medias.
///
/// # Example
///
/// ```
/// use wistia_rs::api::MediaQuery;
/// use wistia_rs::models::{MediaType, SortBy, SortDirection};
///
/// let query = MediaQuery::new()
///     .in_project("pv1abc2def")
///     .of_type(MediaType::Video)
///     .sorted(SortBy::Updated, SortDirection::Descending);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaQuery {
    /// Only medias in this project
    pub project_id: Option<HashedId>,
    /// Only medias with this exact name
    pub name: Option<String>,
    /// Only medias of this type
    pub media_type: Option<MediaType>,
    /// Only the media with this hashed ID
    pub hashed_id: Option<HashedId>,
    /// Sorting and page size
    pub options: ListOptions,
}

impl MediaQuery {
    /// Every media in the account.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only medias in a project.
    pub fn in_project(mut self, project_id: impl Into<HashedId>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Only medias with this name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Only medias of a type.
    pub fn of_type(mut self, media_type: MediaType) -> Self {
        self.media_type = Some(media_type);
        self
    }

    /// Only the media with this hashed ID.
    pub fn with_hashed_id(mut self, hashed_id: impl Into<HashedId>) -> Self {
        self.hashed_id = Some(hashed_id.into());
        self
    }

    /// Sort the results.
    pub fn sorted(mut self, field: SortBy, direction: SortDirection) -> Self {
        self.options = self.options.with_sort(field, direction);
        self
    }

    /// Set the number of medias fetched per call.
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.options = self.options.with_per_page(per_page);
        self
    }

    fn params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(ref project) = self.project_id {
            params.push(("project_id".to_string(), project.to_string()));
        }
        if let Some(ref name) = self.name {
            params.push(("name".to_string(), name.clone()));
        }
        if let Some(media_type) = self.media_type {
            params.push(("type".to_string(), media_type.as_param().to_string()));
        }
        if let Some(ref hashed_id) = self.hashed_id {
            params.push(("hashed_id".to_string(), hashed_id.to_string()));
        }
        params.extend(self.options.sort_params());
        params
    }
}

impl From<ListOptions> for MediaQuery {
    fn from(options: ListOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }
}

/// Service for media operations.
///
/// # Example
///
/// ```no_run
/// use wistia_rs::api::MediaQuery;
/// use wistia_rs::models::MediaUpdate;
///
/// # fn example(client: wistia_rs::WistiaClient) -> wistia_rs::Result<()> {
/// // All videos in a project, across as many pages as needed
/// let videos = client.medias().list_videos(MediaQuery::new().in_project("pv1abc2def"))?;
///
/// for video in &videos {
///     if !video.has_audio_description() {
///         println!("{} has no audio description", video.name);
///     }
/// }
///
/// // Rename one
/// client.medias().update("abc1234567", &MediaUpdate::new().with_name("Keynote"))?;
/// # Ok(())
/// # }
/// ```
pub struct MediasService {
    inner: Arc<ClientInner>,
}

impl MediasService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List every media matching `query`, fetching as many pages as it
    /// takes.
    ///
    /// # Errors
    ///
    /// With a project filter, a 404 means that project does not exist.
    pub fn list(&self, query: MediaQuery) -> Result<Container<Media>> {
        let session = self.inner.data_session()?;
        let resource = match query.project_id {
            Some(ref project) => Resource::Project(project.to_string()),
            None => Resource::Endpoint("medias.json".into()),
        };
        let listing = Listing::new("medias.json", resource, "media").with_query(query.params());

        query.options.strategy().collect(&session, &listing)
    }

    /// List every video matching `query`; any type filter on it is replaced.
    pub fn list_videos(&self, query: MediaQuery) -> Result<Container<Media>> {
        self.list(query.of_type(MediaType::Video))
    }

    /// Get a media.
    pub fn get(&self, media_id: impl AsRef<str>) -> Result<Media> {
        let id = checked_id(media_id.as_ref())?;
        let session = self.inner.data_session()?;

        let body = session.get(&format!("medias/{}.json", id), &[], Resource::Media(id.to_string()))?;
        decode(body, "media")
    }

    /// Update a media. Only the fields set in `update` are changed.
    pub fn update(&self, media_id: impl AsRef<str>, update: &MediaUpdate) -> Result<Media> {
        let id = checked_id(media_id.as_ref())?;
        let session = self.inner.data_session()?;

        let body = session.put(
            &format!("medias/{}.json", id),
            json_body(update)?,
            Resource::Media(id.to_string()),
        )?;
        decode(body, "media")
    }

    /// Delete a media.
    pub fn delete(&self, media_id: impl AsRef<str>) -> Result<()> {
        let id = checked_id(media_id.as_ref())?;
        let session = self.inner.data_session()?;

        session.delete(&format!("medias/{}.json", id), Resource::Media(id.to_string()))?;
        Ok(())
    }

    /// Copy a media, optionally into another project and to another owner.
    ///
    /// # Errors
    ///
    /// A 404 naming `dest_project` becomes [`Error::NotFound`] for that
    /// project; any other 404 means the media itself does not exist.
    pub fn copy(
        &self,
        media_id: impl AsRef<str>,
        dest_project: Option<&str>,
        owner: Option<&str>,
    ) -> Result<Media> {
        let id = checked_id(media_id.as_ref())?;
        let session = self.inner.data_session()?;

        let mut body = Map::new();
        if let Some(project) = dest_project {
            body.insert("project_id".to_string(), Value::from(project));
        }
        if let Some(owner) = owner {
            body.insert("owner".to_string(), Value::from(owner));
        }

        let response = session.send(
            Method::POST,
            &format!("medias/{}/copy.json", id),
            Vec::new(),
            RequestBody::Json(Value::Object(body)),
        )?;

        if response.status == 404 {
            if let Some(project) = dest_project.filter(|p| response.body.contains(p)) {
                debug!(media = id, project, "Copy destination project does not exist");
                return Err(Error::NotFound(Resource::Project(project.to_string())));
            }
        }

        decode(parse_response(response, Resource::Media(id.to_string()))?, "media")
    }

    /// Get aggregated tracking stats for a media.
    pub fn stats(&self, media_id: impl AsRef<str>) -> Result<MediaStats> {
        let id = checked_id(media_id.as_ref())?;
        let session = self.inner.data_session()?;

        let body = session.get(&format!("medias/{}/stats.json", id), &[], Resource::Media(id.to_string()))?;
        decode(body, "stats")
    }
}
