//! Caption models.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::LanguageCode;

/// Captions in one language on a media item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caption {
    /// Language code
    pub language: LanguageCode,
    /// Caption text in SRT format
    #[serde(default)]
    pub text: String,
    /// English name of the language
    #[serde(default)]
    pub english_name: String,
}

impl fmt::Display for Caption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}), {} bytes", self.english_name, self.language, self.text.len())
    }
}

/// Options for purchasing English captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptionOrder {
    /// Computer-generated instead of human-generated captions
    pub automated: bool,
    /// One business day turnaround for human-generated captions
    pub rush: bool,
    /// Enable the captions as soon as they are ready
    pub automatically_enable: bool,
}

impl Default for CaptionOrder {
    fn default() -> Self {
        Self {
            automated: false,
            rush: true,
            automatically_enable: true,
        }
    }
}

impl CaptionOrder {
    pub(crate) fn to_params(self) -> Vec<(String, String)> {
        vec![
            ("automated".to_string(), self.automated.to_string()),
            ("rush".to_string(), self.rush.to_string()),
            ("automatically_enable".to_string(), self.automatically_enable.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::decode::decode_list;
    use serde_json::json;

    #[test]
    fn test_deserialize_captions() {
        let captions: Vec<Caption> = decode_list(
            json!([
                {"language": "eng", "text": "1\n00:00:00,000 --> 00:00:01,000\nHello\n", "english_name": "English"},
                {"language": "kor", "text": "", "english_name": "Korean"}
            ]),
            "captions",
        )
        .unwrap();

        assert_eq!(captions[0].language, LanguageCode::English);
        assert!(captions[0].text.contains("Hello"));
        assert_eq!(captions[1].language, LanguageCode::Other("kor".into()));
    }

    #[test]
    fn test_order_params() {
        let params = CaptionOrder::default().to_params();
        assert!(params.contains(&("rush".to_string(), "true".to_string())));
        assert!(params.contains(&("automated".to_string(), "false".to_string())));
    }
}
