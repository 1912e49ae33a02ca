//! A single operation's view of one API.

use reqwest::Method;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::counter;
use super::transport::{ApiRequest, ApiResponse, RequestBody, Transport};
use crate::error::Resource;
use crate::{Error, Result};

/// Transport plus base URL, owned by one top-level operation and dropped
/// when it returns.
pub(crate) struct Session {
    transport: Box<dyn Transport>,
    base_url: Url,
    counted: bool,
}

impl Session {
    pub(crate) fn new(transport: Box<dyn Transport>, base_url: Url, counted: bool) -> Self {
        Self {
            transport,
            base_url,
            counted,
        }
    }

    pub(crate) fn get(&self, path: &str, query: &[(String, String)], resource: Resource) -> Result<Value> {
        self.execute(Method::GET, path, query.to_vec(), RequestBody::Empty, resource)
    }

    pub(crate) fn post(&self, path: &str, body: RequestBody, resource: Resource) -> Result<Value> {
        self.execute(Method::POST, path, Vec::new(), body, resource)
    }

    pub(crate) fn put(&self, path: &str, body: RequestBody, resource: Resource) -> Result<Value> {
        self.execute(Method::PUT, path, Vec::new(), body, resource)
    }

    pub(crate) fn delete(&self, path: &str, resource: Resource) -> Result<Value> {
        self.execute(Method::DELETE, path, Vec::new(), RequestBody::Empty, resource)
    }

    /// Issue one call and map its response.
    pub(crate) fn execute(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        body: RequestBody,
        resource: Resource,
    ) -> Result<Value> {
        let response = self.send(method, path, query, body)?;
        parse_response(response, resource)
    }

    /// Issue one call and return the raw response, whatever its status.
    ///
    /// Counted sessions bump the thread's request count as soon as the call
    /// returns, before its outcome is looked at.
    pub(crate) fn send(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        body: RequestBody,
    ) -> Result<ApiResponse> {
        let request = ApiRequest {
            method,
            url: self.base_url.join(path)?,
            query,
            body,
        };

        let result = self.transport.send(&request);
        if self.counted {
            counter::increment();
        }
        let response = result?;

        debug!(
            method = %request.method,
            url = %request.url,
            status = response.status,
            "API call"
        );

        Ok(response)
    }
}

/// Map a raw response: non-2xx through [`Error::from_status`], an empty
/// body to `null`, anything else parsed as JSON.
///
/// A `Retry-After` header takes precedence over a delay found in the body.
pub(crate) fn parse_response(response: ApiResponse, resource: Resource) -> Result<Value> {
    if !response.is_success() {
        let status = response.status;
        let header_delay = response.retry_after;
        let body = serde_json::from_str(&response.body).unwrap_or(Value::String(response.body));

        let mut error = Error::from_status(status, &body, resource);
        if let Error::RateLimited { ref mut retry_after_secs } = error {
            if header_delay.is_some() {
                *retry_after_secs = header_delay;
            }
        }
        return Err(error);
    }

    if response.body.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(&response.body)
        .map_err(|e| Error::malformed("response", format!("invalid JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::ScriptedTransport;
    use crate::client::{request_count, reset_request_count};
    use serde_json::json;

    fn session(transport: ScriptedTransport, counted: bool) -> Session {
        Session::new(
            Box::new(transport),
            Url::parse("https://api.wistia.com/v1/").unwrap(),
            counted,
        )
    }

    #[test]
    fn test_joins_path_onto_base() {
        let transport = ScriptedTransport::new().reply(200, json!({"hashed_id": "abc"}));
        let log = transport.log();
        let session = session(transport, true);

        session.get("medias/abc.json", &[], Resource::Media("abc".into())).unwrap();

        let sent = log.lock();
        assert_eq!(sent[0].url.as_str(), "https://api.wistia.com/v1/medias/abc.json");
        assert_eq!(sent[0].method, Method::GET);
    }

    #[test]
    fn test_counts_failures_too() {
        reset_request_count();
        let transport = ScriptedTransport::new()
            .reply(500, json!({"error": "boom"}))
            .fail("connection refused");
        let session = session(transport, true);

        assert!(session.get("projects.json", &[], Resource::Endpoint("projects.json".into())).is_err());
        assert!(session.get("projects.json", &[], Resource::Endpoint("projects.json".into())).is_err());
        assert_eq!(request_count(), 2);
    }

    #[test]
    fn test_uncounted_session() {
        reset_request_count();
        let transport = ScriptedTransport::new().reply(200, json!({}));
        let session = session(transport, false);

        session.get("medias/abc.json", &[], Resource::Media("abc".into())).unwrap();
        assert_eq!(request_count(), 0);
    }

    #[test]
    fn test_error_status_is_mapped() {
        let transport = ScriptedTransport::new().reply(404, json!({"error": "not found"}));
        let session = session(transport, true);

        let err = session
            .get("projects/nope.json", &[], Resource::Project("nope".into()))
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(Resource::Project(ref id)) if id == "nope"));
    }

    #[test]
    fn test_empty_body_is_null() {
        let transport = ScriptedTransport::new().reply_raw(200, "");
        let session = session(transport, true);

        let value = session.delete("projects/abc.json", Resource::Project("abc".into())).unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let transport = ScriptedTransport::new().reply_raw(200, "<html>oops</html>");
        let session = session(transport, true);

        let err = session.get("projects.json", &[], Resource::Endpoint("projects.json".into())).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { ref field, .. } if field == "response"));
    }

    #[test]
    fn test_retry_after_header() {
        let transport = ScriptedTransport::new()
            .reply_response(ApiResponse::new(429, "").with_retry_after(12))
            .reply_response(ApiResponse::new(429, r#"{"retry-after": 30}"#).with_retry_after(5))
            .reply(429, json!({"retry-after": 30}));
        let session = session(transport, true);
        let get = || session.get("medias.json", &[], Resource::Endpoint("medias.json".into()));

        assert!(matches!(get(), Err(Error::RateLimited { retry_after_secs: Some(12) })));
        assert!(matches!(get(), Err(Error::RateLimited { retry_after_secs: Some(5) })));
        assert!(matches!(get(), Err(Error::RateLimited { retry_after_secs: Some(30) })));
    }

    #[test]
    fn test_plain_text_error_body_becomes_message() {
        let transport = ScriptedTransport::new().reply_raw(400, "Missing caption_file");
        let session = session(transport, true);

        let err = session
            .post("medias/abc/captions.json", RequestBody::Empty, Resource::Media("abc".into()))
            .unwrap_err();
        match err {
            Error::BadRequest { message, .. } => assert_eq!(message, "Missing caption_file"),
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }
}
