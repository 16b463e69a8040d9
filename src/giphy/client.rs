/// HTTP client for the Giphy search endpoint.
use super::domain::{ErrorBody, Gif, SearchResponse};
use super::errors::GiphyError;

/// Public Giphy search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.giphy.com/v1/gifs/search";

/// User-Agent sent with every request.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// A client bound to one endpoint and credential.
#[derive(Debug, Clone)]
pub struct GiphyClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GiphyClient {
    /// Build a client. The key is forwarded as-is; no local validation.
    ///
    /// # Errors
    ///
    /// Returns `GiphyError::Client` if the TLS backend cannot be initialised.
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Result<Self, GiphyError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(GiphyError::Client)?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            api_key,
        })
    }

    /// Search for GIFs matching `query`, returning at most `limit` items in
    /// the order the service ranked them.
    ///
    /// # Errors
    ///
    /// Returns `GiphyError` on transport failure, a non-2xx status, or a
    /// body that is not valid search JSON.
    pub async fn search(&self, query: &str, limit: u32) -> Result<Vec<Gif>, GiphyError> {
        let limit = limit.to_string();
        let mut params: Vec<(&str, &str)> = vec![("q", query), ("limit", limit.as_str())];
        if let Some(key) = &self.api_key {
            params.push(("api_key", key.as_str()));
        }

        tracing::info!(endpoint = %self.endpoint, query, limit = %limit, "searching giphy");
        let response = self
            .http
            .get(&self.endpoint)
            .query(&params)
            .send()
            .await
            // The request URL carries the API key; keep it out of the error text.
            .map_err(|e| GiphyError::Transport(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable error body still leaves the status to report.
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(ErrorBody::into_message)
                .or_else(|| status.canonical_reason().map(str::to_owned))
                .unwrap_or_else(|| "request failed".to_owned());
            tracing::warn!(status = status.as_u16(), %message, "giphy rejected search");
            return Err(GiphyError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| GiphyError::Decode(e.without_url()))?;
        if let Some(meta) = &body.meta {
            tracing::debug!(status = ?meta.status, msg = ?meta.msg, "giphy response meta");
        }
        let gifs = body.into_gifs();
        tracing::info!(count = gifs.len(), "search complete");
        Ok(gifs)
    }
}
