//! The Wistia client and its per-operation session factory.

use std::sync::Arc;

use url::Url;

use crate::api::{
    CaptionsService, CustomizationsService, EmbedService, MediasService, ProjectsService,
    UploadService,
};
use crate::auth::Credentials;
use crate::Result;

use super::config::ClientConfig;
use super::session::Session;
use super::transport::{Connector, HttpConnector};

/// The main client for interacting with the Wistia APIs.
///
/// This client provides access to all API services through method calls
/// that return service structs. Every operation a service performs opens
/// its own session, authenticated with the token current at that moment,
/// and closes it when it returns.
///
/// # Example
///
/// ```no_run
/// use wistia_rs::{Credentials, ClientConfig, WistiaClient};
///
/// # fn example() -> wistia_rs::Result<()> {
/// let client = WistiaClient::with_credentials(
///     Credentials::new("your-api-token"),
///     ClientConfig::default(),
/// );
///
/// // Every project in the account, all pages
/// let projects = client.projects().list(Default::default())?;
///
/// // The medias of the first one, in a single call
/// if let Some(project) = projects.first() {
///     let medias = client.projects().list_medias(&project.hashed_id, Default::default())?;
///     println!("{}", medias);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct WistiaClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) credentials: Credentials,
    pub(crate) config: ClientConfig,
    connector: Arc<dyn Connector>,
}

impl WistiaClient {
    /// Create a client with an explicit token and default configuration.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_credentials(Credentials::new(token), ClientConfig::default())
    }

    /// Create a client that reads its token from `WISTIA_API_TOKEN` on
    /// first use.
    pub fn from_env() -> Self {
        Self::with_credentials(Credentials::from_env(), ClientConfig::default())
    }

    /// Create a client with the given credentials and configuration.
    pub fn with_credentials(credentials: Credentials, config: ClientConfig) -> Self {
        Self::with_connector(credentials, config, HttpConnector)
    }

    /// Create a client that opens its sessions through `connector`.
    ///
    /// Useful to route calls through a custom transport, or to replay
    /// recorded responses in tests.
    pub fn with_connector(
        credentials: Credentials,
        config: ClientConfig,
        connector: impl Connector + 'static,
    ) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                credentials,
                config,
                connector: Arc::new(connector),
            }),
        }
    }

    /// Get the projects service.
    pub fn projects(&self) -> ProjectsService {
        ProjectsService::new(self.inner.clone())
    }

    /// Get the medias service.
    pub fn medias(&self) -> MediasService {
        MediasService::new(self.inner.clone())
    }

    /// Get the player customizations service.
    pub fn customizations(&self) -> CustomizationsService {
        CustomizationsService::new(self.inner.clone())
    }

    /// Get the captions service.
    pub fn captions(&self) -> CaptionsService {
        CaptionsService::new(self.inner.clone())
    }

    /// Get the upload service.
    pub fn upload(&self) -> UploadService {
        UploadService::new(self.inner.clone())
    }

    /// Get the public embed data service.
    pub fn embed(&self) -> EmbedService {
        EmbedService::new(self.inner.clone())
    }

    /// The credentials this client authenticates with.
    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    /// The client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

impl Default for WistiaClient {
    /// A client backed by the process-wide credentials set with
    /// [`crate::configure`] or taken from `WISTIA_API_TOKEN`.
    fn default() -> Self {
        Self::with_credentials(Credentials::global().clone(), ClientConfig::default())
    }
}

impl ClientInner {
    /// Open an authenticated, counted session on the Data API.
    pub(crate) fn data_session(&self) -> Result<Session> {
        self.authenticated_session(&self.config.data_api_url)
    }

    /// Open an authenticated, counted session on the Upload API.
    pub(crate) fn upload_session(&self) -> Result<Session> {
        self.authenticated_session(&self.config.upload_url)
    }

    /// Open an anonymous session on the Embed API. Its calls are not
    /// counted.
    pub(crate) fn embed_session(&self) -> Result<Session> {
        let base_url = Url::parse(&self.config.embed_url)?;
        let transport = self.connector.connect(None, &self.config)?;
        Ok(Session::new(transport, base_url, false))
    }

    fn authenticated_session(&self, base_url: &str) -> Result<Session> {
        let base_url = Url::parse(base_url)?;
        let token = self.credentials.token()?;
        let transport = self.connector.connect(Some(&token), &self.config)?;
        Ok(Session::new(transport, base_url, true))
    }
}

impl std::fmt::Debug for WistiaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WistiaClient")
            .field("credentials", &self.inner.credentials)
            .field("config", &self.inner.config)
            .finish()
    }
}
