//! Scripted transport for unit tests.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use super::config::ClientConfig;
use super::transport::{ApiRequest, ApiResponse, Connector, Transport};
use crate::{Error, Result};

type Replies = Arc<Mutex<VecDeque<Result<ApiResponse>>>>;

/// Replays queued responses in order and records every request sent.
#[derive(Clone, Default)]
pub(crate) struct ScriptedTransport {
    replies: Replies,
    log: Arc<Mutex<Vec<ApiRequest>>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(self, status: u16, body: Value) -> Self {
        self.reply_raw(status, &body.to_string())
    }

    pub(crate) fn reply_raw(self, status: u16, body: &str) -> Self {
        self.replies.lock().push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    pub(crate) fn reply_response(self, response: ApiResponse) -> Self {
        self.replies.lock().push_back(Ok(response));
        self
    }

    pub(crate) fn fail(self, message: &str) -> Self {
        self.replies.lock().push_back(Err(Error::Api {
            status: None,
            message: message.to_string(),
        }));
        self
    }

    pub(crate) fn log(&self) -> Arc<Mutex<Vec<ApiRequest>>> {
        self.log.clone()
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        self.log.lock().push(request.clone());
        self.replies.lock().pop_front().unwrap_or_else(|| {
            Err(Error::Api {
                status: None,
                message: format!("no scripted reply for {} {}", request.method, request.url),
            })
        })
    }
}

/// Connector whose sessions all draw from one [`ScriptedTransport`].
#[derive(Clone, Default)]
pub(crate) struct ScriptedConnector {
    pub(crate) transport: ScriptedTransport,
    pub(crate) tokens: Arc<Mutex<Vec<Option<String>>>>,
}

impl ScriptedConnector {
    pub(crate) fn new(transport: ScriptedTransport) -> Self {
        Self {
            transport,
            tokens: Arc::default(),
        }
    }
}

impl Connector for ScriptedConnector {
    fn connect(&self, token: Option<&SecretString>, _config: &ClientConfig) -> Result<Box<dyn Transport>> {
        self.tokens
            .lock()
            .push(token.map(|t| t.expose_secret().to_string()));
        Ok(Box::new(self.transport.clone()))
    }
}
