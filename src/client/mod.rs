//! HTTP client and service layer for the Wistia APIs.
//!
//! This module provides the main entry point [`WistiaClient`], the
//! per-thread request counter, and the [`Connector`]/[`Transport`] seam
//! through which every session is opened.
//!
//! # Example
//!
//! ```no_run
//! use wistia_rs::{WistiaClient, request_count, reset_request_count};
//!
//! # fn example() -> wistia_rs::Result<()> {
//! let client = WistiaClient::from_env();
//!
//! reset_request_count();
//! let medias = client.medias().list(Default::default())?;
//! println!("{} medias in {} calls", medias.len(), request_count());
//! # Ok(())
//! # }
//! ```

mod config;
mod counter;
mod http;
pub mod paginated;
mod session;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{ClientConfig, DATA_API_URL, EMBED_API_URL, UPLOAD_API_URL};
pub use counter::{request_count, reset_request_count};
pub use http::WistiaClient;
pub use paginated::{MAX_PER_PAGE, NESTED_CAP};
pub use transport::{ApiRequest, ApiResponse, Connector, HttpConnector, RequestBody, Transport};
pub(crate) use http::ClientInner;
pub(crate) use session::{parse_response, Session};
