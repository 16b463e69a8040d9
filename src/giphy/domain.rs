/// Response model for the Giphy search endpoint.
///
/// Only the fields this tool reads are modelled; everything else in the
/// payload is ignored by serde.
use serde::Deserialize;

/// Body of a `GET /v1/gifs/search` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Result items in service order. Missing or null means no results.
    #[serde(default)]
    pub data: Option<Vec<Gif>>,
    /// Response metadata.
    #[serde(default)]
    pub meta: Option<Meta>,
}

/// A single GIF result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Gif {
    /// Giphy object id.
    #[serde(default)]
    pub id: String,
    /// Title as shown on giphy.com.
    #[serde(default)]
    pub title: String,
    /// Giphy page URL for the GIF (not the image itself).
    #[serde(default)]
    pub url: Option<String>,
    /// Available renditions.
    #[serde(default)]
    pub images: Images,
}

/// The rendition set of a GIF. Only `original` is of interest here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Images {
    /// Unmodified, full-resolution rendition.
    #[serde(default)]
    pub original: Option<Rendition>,
}

/// One rendition of a GIF.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Rendition {
    /// Media URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Width in pixels. Giphy sends dimensions as strings.
    #[serde(default)]
    pub width: Option<String>,
    /// Height in pixels.
    #[serde(default)]
    pub height: Option<String>,
}

/// The `meta` block present on both success and error bodies.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meta {
    /// Status echoed by the service.
    #[serde(default)]
    pub status: Option<u16>,
    /// Human-readable status message.
    #[serde(default)]
    pub msg: Option<String>,
}

/// Error bodies come in two shapes: `{"meta": {"msg": ..}}` from the API
/// proper and `{"message": ..}` from the gateway (e.g. missing key).
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub meta: Option<Meta>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// The most specific message the body carries, if any.
    pub(crate) fn into_message(self) -> Option<String> {
        self.meta
            .and_then(|m| m.msg)
            .or(self.message)
            .filter(|m| !m.trim().is_empty())
    }
}

impl SearchResponse {
    /// Consume the response, yielding its items (empty when `data` is absent).
    #[must_use]
    pub fn into_gifs(self) -> Vec<Gif> {
        self.data.unwrap_or_default()
    }
}

impl Gif {
    /// URL of the original rendition, if the service supplied one.
    #[must_use]
    pub fn original_url(&self) -> Option<&str> {
        self.images
            .original
            .as_ref()
            .and_then(|r| r.url.as_deref())
    }
}
