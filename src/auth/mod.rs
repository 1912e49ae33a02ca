//! Authentication for the Wistia API.
//!
//! Requests are authenticated with a bearer API token. The token lives in a
//! [`Credentials`] store that each client holds; it can be set explicitly or
//! picked up from the `WISTIA_API_TOKEN` environment variable the first
//! time a request needs it.
//!
//! ```no_run
//! use wistia_rs::{ClientConfig, Credentials, WistiaClient};
//!
//! # fn example() -> wistia_rs::Result<()> {
//! let credentials = Credentials::new("your-api-token");
//! let client = WistiaClient::with_credentials(credentials, ClientConfig::default());
//! # Ok(())
//! # }
//! ```
//!
//! For scripts, the process-wide default store can be set once:
//!
//! ```no_run
//! wistia_rs::configure("your-api-token");
//! let client = wistia_rs::WistiaClient::default();
//! ```

mod credentials;

pub use credentials::{Credentials, DEFAULT_TOKEN_ENV_VAR};
