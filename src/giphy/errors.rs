/// Errors from the Giphy client layer.
use thiserror::Error;

/// Typed failures of a search round trip.
#[derive(Debug, Error)]
pub enum GiphyError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response (DNS, connect, TLS, reset).
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Giphy returned {status}: {message}")]
    Status {
        /// Numeric HTTP status.
        status: u16,
        /// Message from the error body, or the status reason phrase.
        message: String,
    },

    /// A success response whose body is not the expected JSON.
    #[error("Invalid response from Giphy: {0}")]
    Decode(#[source] reqwest::Error),
}

impl GiphyError {
    /// Machine-readable error code (snake_case) for structured output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Client(_) => "client",
            Self::Transport(_) => "transport",
            Self::Status { .. } => "http_status",
            Self::Decode(_) => "invalid_response",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = GiphyError::Status {
            status: 401,
            message: "No API key found in request".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "Giphy returned 401: No API key found in request"
        );
        assert_eq!(err.code(), "http_status");
    }
}
