//! # wistia-rs
//!
//! A Rust client for the Wistia video hosting APIs.
//!
//! This crate covers the Data API (projects, medias, player customizations
//! and captions), the Upload API and the public Embed API, with typed models
//! and a typed error for everything the provider can answer.
//!
//! ## Features
//!
//! - **Complete listings**: multi-page endpoints are walked to the end and
//!   returned as one [`Container`](models::Container)
//! - **Request accounting**: every thread can see how many calls its
//!   operations cost, see [`request_count`]
//! - **Partial updates**: patch types only send the fields you set
//! - **Typed errors**: missing media, bad tokens and rate limits are
//!   distinct [`Error`] variants
//! - **Blocking I/O**: one isolated HTTP session per operation, no runtime
//!   required
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wistia_rs::{WistiaClient, request_count, reset_request_count};
//! use wistia_rs::api::ListOptions;
//!
//! fn main() -> wistia_rs::Result<()> {
//!     // Reads WISTIA_API_TOKEN on first use
//!     let client = WistiaClient::from_env();
//!
//!     reset_request_count();
//!     let projects = client.projects().list(ListOptions::new())?;
//!     println!("{} projects in {} calls", projects.len(), request_count());
//!
//!     if let Some(project) = projects.first() {
//!         let medias = client.projects().list_medias(&project.hashed_id, ListOptions::new())?;
//!         println!("{}", medias);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Updating a Player
//!
//! ```rust,no_run
//! use wistia_rs::models::{Customizations, Private};
//!
//! fn main() -> wistia_rs::Result<()> {
//!     wistia_rs::configure("your-api-token");
//!     let client = wistia_rs::WistiaClient::default();
//!
//!     let patch = Customizations::new()
//!         .with_player_color("#e7fad1")
//!         .with_private(Private::new().with_show_comments(false));
//!     client.customizations().update("abc1234567", &patch)?;
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use error::{Error, Resource, Result};
pub use models::{Container, HashedId, LanguageCode};
pub use client::{request_count, reset_request_count, ClientConfig, WistiaClient};
pub use auth::Credentials;

/// Set the API token of the process-wide default credentials.
///
/// Clients created with [`WistiaClient::default`] pick it up on their next
/// operation. An explicit token always wins over `WISTIA_API_TOKEN`.
pub fn configure(token: impl Into<String>) {
    Credentials::global().configure(token);
}

/// Prelude module for convenient imports.
///
/// ```rust
/// use wistia_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Resource, Result};
    pub use crate::models::{
        // Primitives
        Container, HashedId, LanguageCode,
        // Enums
        MediaStatus, MediaType, SortBy, SortDirection,
        // Models
        Caption, CaptionOrder, Customizations, Media, MediaEmbed, MediaStats, MediaUpdate,
        NewProject, Plugin, Private, Project, ProjectUpdate, UploadOptions, UploadResponse,
    };
    pub use crate::api::{ListOptions, MediaQuery};
    pub use crate::client::{request_count, reset_request_count, ClientConfig, WistiaClient};
    pub use crate::auth::Credentials;
}
