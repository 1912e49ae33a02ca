//! Projects service.

use std::sync::Arc;

use serde_json::json;

use super::{checked_id, json_body};
use crate::client::paginated::{ListStrategy, Listing, NestedList, PagedList};
use crate::client::{ClientInner, RequestBody};
use crate::error::Resource;
use crate::models::decode::decode;
use crate::models::{Container, Media, NewProject, Project, ProjectUpdate, SortBy, SortDirection};
use crate::Result;

/// Sorting and page size for a listing.
///
/// # Example
///
/// ```
/// use wistia_rs::api::ListOptions;
/// use wistia_rs::models::{SortBy, SortDirection};
///
/// let options = ListOptions::new()
///     .with_sort(SortBy::Created, SortDirection::Descending)
///     .with_per_page(50);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Field to sort by; the provider sorts by ID when unset
    pub sort_by: Option<SortBy>,
    /// Sort direction; the provider sorts ascending when unset
    pub sort_direction: Option<SortDirection>,
    /// Items per page, clamped to `1..=100`; defaults to 100
    pub per_page: Option<u32>,
}

impl ListOptions {
    /// Default options: provider order, full pages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort by `field` in `direction`.
    pub fn with_sort(mut self, field: SortBy, direction: SortDirection) -> Self {
        self.sort_by = Some(field);
        self.sort_direction = Some(direction);
        self
    }

    /// Sort by `field` in the provider's default direction.
    pub fn with_sort_by(mut self, field: SortBy) -> Self {
        self.sort_by = Some(field);
        self
    }

    /// Set the number of items fetched per call.
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub(crate) fn sort_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(field) = self.sort_by {
            params.push(("sort_by".to_string(), field.as_param().to_string()));
        }
        if let Some(direction) = self.sort_direction {
            params.push(("sort_direction".to_string(), direction.as_param().to_string()));
        }
        params
    }

    pub(crate) fn strategy(&self) -> PagedList {
        self.per_page.map(PagedList::new).unwrap_or_default()
    }
}

/// Service for project operations.
///
/// # Example
///
/// ```no_run
/// use wistia_rs::api::ListOptions;
/// use wistia_rs::models::{SortBy, SortDirection};
///
/// # fn example(client: wistia_rs::WistiaClient) -> wistia_rs::Result<()> {
/// // Every project, newest first
/// let options = ListOptions::new().with_sort(SortBy::Created, SortDirection::Descending);
/// let projects = client.projects().list(options)?;
///
/// // Everything in one of them
/// let medias = client.projects().list_medias("pv1abc2def", ListOptions::new())?;
/// # Ok(())
/// # }
/// ```
pub struct ProjectsService {
    inner: Arc<ClientInner>,
}

impl ProjectsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List every project in the account, fetching as many pages as it
    /// takes.
    pub fn list(&self, options: ListOptions) -> Result<Container<Project>> {
        let session = self.inner.data_session()?;
        let listing = Listing::new("projects.json", Resource::Endpoint("projects.json".into()), "project")
            .with_query(options.sort_params());

        options.strategy().collect(&session, &listing)
    }

    /// Get a project.
    pub fn get(&self, project_id: impl AsRef<str>) -> Result<Project> {
        let id = checked_id(project_id.as_ref())?;
        let session = self.inner.data_session()?;

        let body = session.get(&format!("projects/{}.json", id), &[], Resource::Project(id.to_string()))?;
        decode(body, "project")
    }

    /// List the medias of a project in a single call.
    ///
    /// The provider embeds at most 500 medias in a project; larger projects
    /// should be listed with [`MediasService::list`](super::MediasService::list)
    /// filtered on the project.
    ///
    /// Only the sort settings of `options` are sent; there is no paging, so
    /// its page size has no effect.
    pub fn list_medias(&self, project_id: impl AsRef<str>, options: ListOptions) -> Result<Container<Media>> {
        let id = checked_id(project_id.as_ref())?;
        let session = self.inner.data_session()?;
        let listing = Listing::new(format!("projects/{}.json", id), Resource::Project(id.to_string()), "media")
            .with_query(options.sort_params());

        NestedList::new("medias").collect(&session, &listing)
    }

    /// Create a project.
    pub fn create(&self, project: &NewProject) -> Result<Project> {
        let session = self.inner.data_session()?;
        let body = session.post(
            "projects.json",
            json_body(project)?,
            Resource::Endpoint("projects.json".into()),
        )?;
        decode(body, "project")
    }

    /// Update a project. Only the fields set in `update` are changed.
    pub fn update(&self, project_id: impl AsRef<str>, update: &ProjectUpdate) -> Result<Project> {
        let id = checked_id(project_id.as_ref())?;
        let session = self.inner.data_session()?;

        let body = session.put(
            &format!("projects/{}.json", id),
            json_body(update)?,
            Resource::Project(id.to_string()),
        )?;
        decode(body, "project")
    }

    /// Delete a project and everything in it.
    pub fn delete(&self, project_id: impl AsRef<str>) -> Result<()> {
        let id = checked_id(project_id.as_ref())?;
        let session = self.inner.data_session()?;

        session.delete(&format!("projects/{}.json", id), Resource::Project(id.to_string()))?;
        Ok(())
    }

    /// Copy a project with all its media and sections, optionally handing
    /// the copy to another administrator.
    pub fn copy(&self, project_id: impl AsRef<str>, admin_email: Option<&str>) -> Result<Project> {
        let id = checked_id(project_id.as_ref())?;
        let session = self.inner.data_session()?;

        let body = match admin_email {
            Some(email) => RequestBody::Json(json!({ "adminEmail": email })),
            None => RequestBody::Empty,
        };
        let body = session.post(&format!("projects/{}/copy.json", id), body, Resource::Project(id.to_string()))?;
        decode(body, "project")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_params() {
        let options = ListOptions::new().with_sort(SortBy::Name, SortDirection::Descending);
        assert_eq!(
            options.sort_params(),
            vec![
                ("sort_by".to_string(), "name".to_string()),
                ("sort_direction".to_string(), "0".to_string()),
            ]
        );
        assert!(ListOptions::new().sort_params().is_empty());
    }

    #[test]
    fn test_strategy_page_size() {
        assert_eq!(ListOptions::new().strategy(), PagedList::default());
        assert_eq!(ListOptions::new().with_per_page(1000).strategy(), PagedList::new(100));
    }
}
