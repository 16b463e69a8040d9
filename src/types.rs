/// Serializable output types.
///
/// These are what gets written to stdout in the structured formats. They are
/// decoupled from the `giphy::domain` response model.
use serde::{Deserialize, Serialize};

use crate::commands::SearchError;
use crate::giphy::Gif;

/// One search result as emitted by the JSON and table formats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GifOutput {
    /// Giphy object id.
    pub id: String,
    /// Result title.
    pub title: String,
    /// Original-image URL, or null if the service omitted it.
    pub url: Option<String>,
    /// Giphy page URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_url: Option<String>,
    /// Original width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Original height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl From<&Gif> for GifOutput {
    fn from(gif: &Gif) -> Self {
        let original = gif.images.original.as_ref();
        let dim = |s: Option<&String>| s.and_then(|v| v.parse().ok());
        Self {
            id: gif.id.clone(),
            title: gif.title.clone(),
            url: gif.original_url().map(str::to_owned),
            page_url: gif.url.clone(),
            width: dim(original.and_then(|r| r.width.as_ref())),
            height: dim(original.and_then(|r| r.height.as_ref())),
        }
    }
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from a `SearchError`.
    #[must_use]
    pub fn from_search_error(err: &SearchError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
            },
        }
    }

    /// Whether this envelope carries a usage error.
    #[must_use]
    pub fn is_usage(&self) -> bool {
        self.error.code == "usage"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gif_output_from_response() {
        let gif: Gif = serde_json::from_str(
            r#"{
                "id": "xyz",
                "title": "Wave",
                "url": "https://giphy.com/gifs/xyz",
                "images": { "original": { "url": "https://media/xyz.gif", "width": "320", "height": "oops" } }
            }"#,
        )
        .unwrap();
        let out = GifOutput::from(&gif);
        assert_eq!(out.url.as_deref(), Some("https://media/xyz.gif"));
        assert_eq!(out.page_url.as_deref(), Some("https://giphy.com/gifs/xyz"));
        assert_eq!(out.width, Some(320));
        assert_eq!(out.height, None);
    }

    #[test]
    fn test_usage_envelope() {
        let out = ErrorOutput::from_search_error(&SearchError::MissingQuery);
        assert!(out.is_usage());
        assert!(!out.ok);
        assert_eq!(out.error.message, r#"Usage: giphy-search "query" [limit]"#);
    }
}
