/// Errors surfaced by the search command.
use thiserror::Error;

use crate::giphy::GiphyError;

/// Usage line printed when the query is missing.
pub const USAGE: &str = r#"Usage: giphy-search "query" [limit]"#;

/// Everything that can end a run with a non-zero status.
#[derive(Debug, Error)]
pub enum SearchError {
    /// No query, or an empty one.
    #[error("{}", USAGE)]
    MissingQuery,

    /// Any failure reported by the Giphy client.
    #[error(transparent)]
    Giphy(#[from] GiphyError),

    /// Results could not be written to stdout.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl SearchError {
    /// Machine-readable error code for the JSON error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingQuery => "usage",
            Self::Giphy(err) => err.code(),
            Self::Output(_) => "output",
        }
    }

    /// Return the CLI exit code for this error.
    ///
    /// Usage and service failures share a single status.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingQuery | Self::Giphy(_) | Self::Output(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(SearchError::MissingQuery.exit_code(), 1);
        let status = SearchError::from(GiphyError::Status {
            status: 500,
            message: "Internal Server Error".to_owned(),
        });
        assert_eq!(status.exit_code(), 1);
        assert_eq!(status.code(), "http_status");
        assert_eq!(status.to_string(), "Giphy returned 500: Internal Server Error");
    }
}
