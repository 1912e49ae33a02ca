//! Listing strategies that aggregate API results into a [`Container`].
//!
//! Wistia lists come in two shapes:
//!
//! - **Paged** endpoints (`projects.json`, `medias.json`) return a JSON
//!   array per call and take `page`/`per_page` parameters. [`PagedList`]
//!   walks pages from 1 until one comes back short.
//! - **Nested** endpoints (`projects/{id}.json`) return one object with the
//!   items embedded under a key. [`NestedList`] makes one call and takes
//!   the array out, capped at what the provider ever embeds.
//!
//! Both stop at the first failed call and return that error; no partial
//! result is ever handed back.

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::session::Session;
use crate::error::Resource;
use crate::models::decode::{decode_list, take_array};
use crate::models::Container;
use crate::Result;

/// Largest page size the Data API accepts.
pub const MAX_PER_PAGE: u32 = 100;

/// Most items a nested listing ever embeds.
pub const NESTED_CAP: usize = 500;

/// What to list: endpoint, fixed parameters and how to name its items.
#[derive(Debug, Clone)]
pub(crate) struct Listing {
    pub(crate) path: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) resource: Resource,
    /// Name of one item, used in decode errors (`media[3].hashed_id`)
    pub(crate) item: &'static str,
}

impl Listing {
    pub(crate) fn new(path: impl Into<String>, resource: Resource, item: &'static str) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
            resource,
            item,
        }
    }

    pub(crate) fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }
}

/// One way of turning a listing into a full collection.
pub(crate) trait ListStrategy {
    fn collect<T: DeserializeOwned>(&self, session: &Session, listing: &Listing) -> Result<Container<T>>;
}

/// Page-by-page listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PagedList {
    per_page: u32,
}

impl PagedList {
    /// `per_page` is clamped to `1..=MAX_PER_PAGE`.
    pub(crate) fn new(per_page: u32) -> Self {
        Self {
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }
}

impl Default for PagedList {
    fn default() -> Self {
        Self::new(MAX_PER_PAGE)
    }
}

impl ListStrategy for PagedList {
    fn collect<T: DeserializeOwned>(&self, session: &Session, listing: &Listing) -> Result<Container<T>> {
        let mut items = Container::new();
        let mut page: u32 = 1;

        loop {
            let mut query = listing.query.clone();
            query.push(("page".to_string(), page.to_string()));
            query.push(("per_page".to_string(), self.per_page.to_string()));

            let body = session.get(&listing.path, &query, listing.resource.clone())?;
            let batch: Vec<T> = decode_list(body, listing.item)?;
            let fetched = batch.len();
            debug!(path = %listing.path, page, fetched, "Fetched page");

            items.extend(batch);

            // Only a full page has a successor.
            if fetched != self.per_page as usize {
                break;
            }
            page += 1;
        }

        aggregated(listing, &items, page);
        Ok(items)
    }
}

/// Single-call listing of an array embedded in a "show" response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NestedList {
    key: &'static str,
    cap: usize,
}

impl NestedList {
    pub(crate) fn new(key: &'static str) -> Self {
        Self {
            key,
            cap: NESTED_CAP,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_cap(mut self, cap: usize) -> Self {
        self.cap = cap;
        self
    }
}

impl ListStrategy for NestedList {
    fn collect<T: DeserializeOwned>(&self, session: &Session, listing: &Listing) -> Result<Container<T>> {
        let mut body = session.get(&listing.path, &listing.query, listing.resource.clone())?;
        let mut nested = take_array(&mut body, self.key)?;

        if let Some(array) = nested.as_array_mut() {
            if array.len() > self.cap {
                warn!(
                    path = %listing.path,
                    key = self.key,
                    returned = array.len(),
                    cap = self.cap,
                    "Nested listing over cap, dropping the excess"
                );
                array.truncate(self.cap);
            }
        }

        let items: Container<T> = decode_list(nested, listing.item)?.into();
        aggregated(listing, &items, 1);
        Ok(items)
    }
}

fn aggregated<T>(listing: &Listing, items: &Container<T>, calls: u32) {
    info!(path = %listing.path, items = items.len(), calls, "Listing complete");
}
