//! Captions service.

use std::sync::Arc;

use reqwest::Method;
use serde_json::{json, Map, Value};
use tracing::warn;

use super::checked_id;
use crate::client::{ClientInner, RequestBody, Session};
use crate::error::Resource;
use crate::models::decode::{decode, decode_list};
use crate::models::{Caption, CaptionOrder, Container, LanguageCode};
use crate::{Error, Result};

/// Service for the captions of a video.
///
/// Caption text is exchanged in SRT format.
///
/// # Example
///
/// ```no_run
/// use wistia_rs::models::LanguageCode;
///
/// # fn example(client: wistia_rs::WistiaClient) -> wistia_rs::Result<()> {
/// let srt = "1\n00:00:00,000 --> 00:00:02,000\nHello!\n";
///
/// // Replaces English captions, or adds them if there are none yet
/// client.captions().update("abc1234567", &LanguageCode::English, srt)?;
///
/// if let Some(caption) = client.captions().get("abc1234567", &LanguageCode::English)? {
///     println!("{}", caption);
/// }
/// # Ok(())
/// # }
/// ```
pub struct CaptionsService {
    inner: Arc<ClientInner>,
}

impl CaptionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List the captions of a video in every language.
    pub fn list(&self, video_id: impl AsRef<str>) -> Result<Container<Caption>> {
        let id = checked_id(video_id.as_ref())?;
        let session = self.inner.data_session()?;

        let body = session.get(&format!("medias/{}/captions.json", id), &[], Resource::Media(id.to_string()))?;
        Ok(decode_list(body, "caption")?.into())
    }

    /// Get the captions of a video in one language, or `None` if there
    /// are none in that language.
    pub fn get(&self, video_id: impl AsRef<str>, language: &LanguageCode) -> Result<Option<Caption>> {
        let id = checked_id(video_id.as_ref())?;
        let session = self.inner.data_session()?;

        match session.get(&language_path(id, language), &[], caption(id, language)) {
            Ok(body) => decode(body, "caption").map(Some),
            Err(Error::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Add captions to a video.
    ///
    /// This always adds a new track, even if captions already exist in
    /// `language`; use [`update`](Self::update) to replace them. Without a
    /// language, the provider detects it from the text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `srt` is empty, without calling
    /// the API.
    pub fn create(&self, video_id: impl AsRef<str>, language: Option<&LanguageCode>, srt: &str) -> Result<()> {
        let id = checked_id(video_id.as_ref())?;
        check_content(srt)?;
        let session = self.inner.data_session()?;

        create_in(&session, id, language, srt)
    }

    /// Replace the captions of a video in one language, adding them if
    /// there are none in that language yet.
    ///
    /// The fallback costs a second call on the same session.
    pub fn update(&self, video_id: impl AsRef<str>, language: &LanguageCode, srt: &str) -> Result<()> {
        let id = checked_id(video_id.as_ref())?;
        check_content(srt)?;
        let session = self.inner.data_session()?;

        let result = session.put(
            &language_path(id, language),
            RequestBody::Json(json!({ "caption_file": srt })),
            caption(id, language),
        );

        match result {
            Ok(_) => Ok(()),
            Err(Error::NotFound(_)) => {
                warn!(media = id, language = %language, "No captions to replace, adding them instead");
                create_in(&session, id, Some(language), srt)
            }
            Err(e) => Err(e),
        }
    }

    /// Delete the captions of a video in one language.
    pub fn delete(&self, video_id: impl AsRef<str>, language: &LanguageCode) -> Result<()> {
        let id = checked_id(video_id.as_ref())?;
        let session = self.inner.data_session()?;

        session.delete(&language_path(id, language), caption(id, language))?;
        Ok(())
    }

    /// Purchase English captions for a video.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadRequest`] if the video already has English
    /// captions.
    pub fn purchase(&self, video_id: impl AsRef<str>, order: CaptionOrder) -> Result<()> {
        let id = checked_id(video_id.as_ref())?;
        let session = self.inner.data_session()?;

        let result = session.execute(
            Method::POST,
            &format!("medias/{}/captions/purchase.json", id),
            order.to_params(),
            RequestBody::Empty,
            Resource::Media(id.to_string()),
        );

        match result {
            Ok(_) => Ok(()),
            Err(Error::BadRequest { status, .. }) => Err(Error::BadRequest {
                status,
                message: format!("English captions already exist on media `{}`", id),
            }),
            Err(e) => Err(e),
        }
    }
}

fn create_in(session: &Session, video_id: &str, language: Option<&LanguageCode>, srt: &str) -> Result<()> {
    let mut body = Map::new();
    body.insert("caption_file".to_string(), Value::from(srt));
    if let Some(language) = language {
        body.insert("language".to_string(), Value::from(language.as_str()));
    }

    session.post(
        &format!("medias/{}/captions.json", video_id),
        RequestBody::Json(Value::Object(body)),
        Resource::Media(video_id.to_string()),
    )?;
    Ok(())
}

fn check_content(srt: &str) -> Result<()> {
    if srt.trim().is_empty() {
        return Err(Error::InvalidInput("caption content is empty".to_string()));
    }
    Ok(())
}

fn language_path(video_id: &str, language: &LanguageCode) -> String {
    format!("medias/{}/captions/{}.json", video_id, language.as_str())
}

fn caption(video_id: &str, language: &LanguageCode) -> Resource {
    Resource::Caption {
        media_id: video_id.to_string(),
        language: language.as_str().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_path() {
        assert_eq!(
            language_path("abc", &LanguageCode::English),
            "medias/abc/captions/eng.json"
        );
        assert_eq!(
            language_path("abc", &LanguageCode::from("kor")),
            "medias/abc/captions/kor.json"
        );
    }

    #[test]
    fn test_empty_content_rejected() {
        assert!(matches!(check_content(" \n"), Err(Error::InvalidInput(_))));
        assert!(check_content("1\n00:00:00,000 --> 00:00:01,000\nHi\n").is_ok());
    }
}
