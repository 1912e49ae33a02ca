//! Data models for the Wistia API.
//!
//! Models are organized by domain:
//!
//! - [`primitives`] - Core types like `HashedId` and `LanguageCode`
//! - [`enums`] - Media types, statuses and sort options
//! - [`project`] - Projects and project updates
//! - [`media`] - Media, assets and stats
//! - [`customizations`] - Player customizations
//! - [`caption`] - Captions
//! - [`upload`] - Upload API requests and responses
//! - [`embed`] - Public embed data
//! - [`container`] - The collection returned by every listing
//! - [`decode`] - JSON to model conversion

pub mod primitives;
pub mod enums;
pub mod project;
pub mod media;
pub mod customizations;
pub mod caption;
pub mod upload;
pub mod embed;
pub mod container;
pub mod decode;

// Re-export commonly used types
pub use primitives::*;
pub use enums::*;
pub use project::*;
pub use media::*;
pub use customizations::*;
pub use caption::*;
pub use upload::*;
pub use embed::*;
pub use container::Container;
