//! Enumeration types for the Wistia API.

use serde::{Deserialize, Serialize};

/// Kind of media hosted on Wistia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MediaType {
    /// Video file
    Video,
    /// Audio file
    Audio,
    /// Image
    Image,
    /// PDF document
    #[serde(rename = "PdfDocument")]
    Pdf,
    /// Word, Excel or PowerPoint document
    #[serde(rename = "MicrosoftOfficeDocument")]
    OfficeDocument,
    /// Flash file
    Swf,
    /// Anything the provider could not classify
    #[serde(rename = "UnknownType", other)]
    #[default]
    Unknown,
}

impl MediaType {
    /// Value used for the `type` filter on media listings.
    pub fn as_param(&self) -> &'static str {
        match self {
            MediaType::Video => "Video",
            MediaType::Audio => "Audio",
            MediaType::Image => "Image",
            MediaType::Pdf => "PdfDocument",
            MediaType::OfficeDocument => "MicrosoftOfficeDocument",
            MediaType::Swf => "Swf",
            MediaType::Unknown => "UnknownType",
        }
    }
}

/// Processing status of a media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaStatus {
    /// Waiting in the queue to be processed
    Queued,
    /// Actively being processed
    Processing,
    /// Fully processed and ready for embedding and viewing
    Ready,
    /// Could not be processed (usually a format or size error)
    Failed,
}

impl MediaStatus {
    /// Returns `true` once processing has finished, successfully or not.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MediaStatus::Ready | MediaStatus::Failed)
    }
}

/// Field to sort a listing by. The provider defaults to sorting by ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortBy {
    /// Sort by name
    Name,
    /// Sort by creation date
    Created,
    /// Sort by last update date
    Updated,
}

impl SortBy {
    /// Value sent as the `sort_by` parameter.
    pub fn as_param(&self) -> &'static str {
        match self {
            SortBy::Name => "name",
            SortBy::Created => "created",
            SortBy::Updated => "updated",
        }
    }
}

/// Direction of a sort. The provider defaults to ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Ascending order
    #[default]
    Ascending,
    /// Descending order
    Descending,
}

impl SortDirection {
    /// Value sent as the `sort_direction` parameter (`1` ascending, `0`
    /// descending).
    pub fn as_param(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "1",
            SortDirection::Descending => "0",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_wire_names() {
        let t: MediaType = serde_json::from_str("\"PdfDocument\"").unwrap();
        assert_eq!(t, MediaType::Pdf);
        let t: MediaType = serde_json::from_str("\"Hologram\"").unwrap();
        assert_eq!(t, MediaType::Unknown);
        assert_eq!(MediaType::OfficeDocument.as_param(), "MicrosoftOfficeDocument");
    }

    #[test]
    fn test_media_status_rejects_unknown() {
        let s: MediaStatus = serde_json::from_str("\"ready\"").unwrap();
        assert!(s.is_terminal());
        assert!(serde_json::from_str::<MediaStatus>("\"melting\"").is_err());
    }

    #[test]
    fn test_sort_params() {
        assert_eq!(SortBy::Updated.as_param(), "updated");
        assert_eq!(SortDirection::Descending.as_param(), "0");
        assert_eq!(SortDirection::default().as_param(), "1");
    }
}
