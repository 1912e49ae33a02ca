//! Primitive types and newtypes for type-safe API interactions.
//!
//! Wistia identifies projects and media by an opaque "hashed ID"; wrapping
//! it keeps IDs from being mixed up with names or URLs at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Wistia hashed ID, the stable external identifier of a project or media.
///
/// # Example
///
/// ```
/// use wistia_rs::HashedId;
///
/// let video = HashedId::new("abc1234567");
/// assert_eq!(video.as_str(), "abc1234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HashedId(String);

impl HashedId {
    /// Create a new hashed ID from a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the hashed ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HashedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for HashedId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for HashedId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for HashedId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&HashedId> for HashedId {
    fn from(id: &HashedId) -> Self {
        id.clone()
    }
}

/// Language code used by the captions endpoints.
///
/// Wistia identifies caption languages by three-letter ISO-639-2 codes.
/// The common ones have named variants; anything else round-trips through
/// [`LanguageCode::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LanguageCode {
    /// `chi`
    Chinese,
    /// `eng`
    English,
    /// `fre`
    French,
    /// `ger`
    German,
    /// `ita`
    Italian,
    /// `spa`
    Spanish,
    /// `jpn`
    Japanese,
    /// Any other code, as sent by the provider
    Other(String),
}

impl LanguageCode {
    /// Get the wire code for this language.
    pub fn as_str(&self) -> &str {
        match self {
            LanguageCode::Chinese => "chi",
            LanguageCode::English => "eng",
            LanguageCode::French => "fre",
            LanguageCode::German => "ger",
            LanguageCode::Italian => "ita",
            LanguageCode::Spanish => "spa",
            LanguageCode::Japanese => "jpn",
            LanguageCode::Other(code) => code,
        }
    }
}

impl From<String> for LanguageCode {
    fn from(s: String) -> Self {
        match s.as_str() {
            "chi" => LanguageCode::Chinese,
            "eng" => LanguageCode::English,
            "fre" => LanguageCode::French,
            "ger" => LanguageCode::German,
            "ita" => LanguageCode::Italian,
            "spa" => LanguageCode::Spanish,
            "jpn" => LanguageCode::Japanese,
            _ => LanguageCode::Other(s),
        }
    }
}

impl From<&str> for LanguageCode {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.as_str().to_string()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashed_id() {
        let id = HashedId::new("abc1234567");
        assert_eq!(id.as_str(), "abc1234567");
        assert_eq!(id.to_string(), "abc1234567");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc1234567\"");
    }

    #[test]
    fn test_language_code_known_and_other() {
        let eng: LanguageCode = serde_json::from_str("\"eng\"").unwrap();
        assert_eq!(eng, LanguageCode::English);

        let other: LanguageCode = serde_json::from_str("\"kor\"").unwrap();
        assert_eq!(other, LanguageCode::Other("kor".into()));
        assert_eq!(serde_json::to_string(&other).unwrap(), "\"kor\"");
    }
}
