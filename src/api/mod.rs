//! API service modules for Wistia endpoints.
//!
//! Each service provides methods for interacting with a specific
//! subset of the Wistia APIs. Every method is one top-level operation: it
//! opens its own session and closes it before returning.

mod captions;
mod customizations;
mod embed;
mod medias;
mod projects;
mod upload;

pub use captions::CaptionsService;
pub use customizations::CustomizationsService;
pub use embed::EmbedService;
pub use medias::{MediaQuery, MediasService};
pub use projects::{ListOptions, ProjectsService};
pub use upload::UploadService;

use serde::Serialize;

use crate::client::RequestBody;
use crate::{Error, Result};

/// Reject IDs that would change the shape of the request path.
fn checked_id(id: &str) -> Result<&str> {
    if id.is_empty() || id.contains(&['/', '?', '#'][..]) {
        return Err(Error::InvalidInput(format!("invalid hashed ID: {:?}", id)));
    }
    Ok(id)
}

fn json_body<T: Serialize>(value: &T) -> Result<RequestBody> {
    serde_json::to_value(value)
        .map(RequestBody::Json)
        .map_err(|e| Error::InvalidInput(format!("cannot encode request body: {}", e)))
}
