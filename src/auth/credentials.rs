//! API token storage.

use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result};

/// Environment variable consulted when no token was configured explicitly.
pub const DEFAULT_TOKEN_ENV_VAR: &str = "WISTIA_API_TOKEN";

static GLOBAL: LazyLock<Credentials> = LazyLock::new(Credentials::from_env);

/// Holder of the API token used to authenticate requests.
///
/// The token is either set explicitly with [`configure`](Self::configure),
/// or resolved from an environment variable the first time a request needs
/// it, and cached from then on.
///
/// # Thread Safety
///
/// `Credentials` is cheap to clone and shared between clones. Reads may
/// happen concurrently; a new token is seen by operations started after
/// it was set.
#[derive(Clone)]
pub struct Credentials {
    inner: Arc<RwLock<CredentialsInner>>,
}

struct CredentialsInner {
    env_var: String,
    token: Option<SecretString>,
}

impl Credentials {
    /// Credentials with an explicit token.
    pub fn new(token: impl Into<String>) -> Self {
        let credentials = Self::from_env_var(DEFAULT_TOKEN_ENV_VAR);
        credentials.configure(token);
        credentials
    }

    /// Credentials resolved lazily from `WISTIA_API_TOKEN`.
    pub fn from_env() -> Self {
        Self::from_env_var(DEFAULT_TOKEN_ENV_VAR)
    }

    /// Credentials resolved lazily from the named environment variable.
    pub fn from_env_var(name: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(CredentialsInner {
                env_var: name.into(),
                token: None,
            })),
        }
    }

    /// The process-wide default credentials, used by
    /// [`crate::configure`] and `WistiaClient::default()`.
    pub fn global() -> &'static Credentials {
        &GLOBAL
    }

    /// Set the token, overriding any value taken from the environment.
    ///
    /// An empty token clears the stored value, so the environment is
    /// consulted again on next use.
    pub fn configure(&self, token: impl Into<String>) {
        let token = token.into();
        let mut inner = self.inner.write();
        inner.token = if token.trim().is_empty() {
            None
        } else {
            Some(SecretString::from(token))
        };
    }

    /// Forget the stored token.
    pub fn clear(&self) {
        self.inner.write().token = None;
    }

    /// Returns `true` if a token is stored (explicitly or already resolved).
    pub fn is_configured(&self) -> bool {
        self.inner.read().token.is_some()
    }

    /// Name of the environment variable consulted for the token.
    pub fn env_var(&self) -> String {
        self.inner.read().env_var.clone()
    }

    /// Get the token, resolving it from the environment on first use.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredentials`] if no token was configured and
    /// the environment variable is unset or empty.
    pub(crate) fn token(&self) -> Result<SecretString> {
        if let Some(ref token) = self.inner.read().token {
            return Ok(token.clone());
        }

        let mut inner = self.inner.write();
        // Another thread may have resolved it while we waited for the lock.
        if let Some(ref token) = inner.token {
            return Ok(token.clone());
        }

        match std::env::var(&inner.env_var) {
            Ok(value) if !value.trim().is_empty() => {
                tracing::debug!(env_var = %inner.env_var, "Resolved API token from environment");
                let token = SecretString::from(value);
                inner.token = Some(token.clone());
                Ok(token)
            }
            _ => Err(Error::MissingCredentials {
                env_var: inner.env_var.clone(),
            }),
        }
    }

    #[cfg(test)]
    pub(crate) fn expose(&self) -> Option<String> {
        self.inner
            .read()
            .token
            .as_ref()
            .map(|t| t.expose_secret().to_string())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("Credentials")
            .field("env_var", &inner.env_var)
            .field("token", &inner.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
