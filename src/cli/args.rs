/// CLI argument definitions via clap derive.
use clap::{ArgAction, Parser, ValueEnum};

use crate::giphy::DEFAULT_ENDPOINT;

/// Result count used when `limit` is absent or not a positive integer.
pub const DEFAULT_LIMIT: u32 = 5;

/// giphy-search — print original-image URLs for a Giphy search.
#[derive(Debug, Parser)]
#[command(
    name = "giphy-search",
    about = "Search Giphy and print the original-image URL of each result",
    version
)]
pub struct Cli {
    /// Search text. A missing or empty query prints usage and exits 1.
    #[arg(value_name = "QUERY", allow_hyphen_values = true)]
    pub query: Option<String>,

    /// Maximum number of results. Non-numeric or non-positive values mean 5.
    #[arg(value_name = "LIMIT", allow_negative_numbers = true)]
    pub limit: Option<String>,

    /// Further positional arguments are accepted and ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,

    /// Giphy API key, forwarded as-is.
    #[arg(long, env = "GIPHY_API_KEY", hide_env_values = true, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Search endpoint URL.
    #[arg(
        long,
        env = "GIPHY_API_URL",
        value_name = "URL",
        default_value = DEFAULT_ENDPOINT
    )]
    pub endpoint: String,

    /// Output format.
    #[arg(long, value_name = "FORMAT", default_value = "url")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, conflicts_with = "output")]
    pub json: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Original-image URL only, one per line.
    #[default]
    Url,
    /// JSON array (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
    /// Aligned table with headers (human-readable).
    Table,
}

impl OutputFormat {
    /// Whether this format emits JSON (used to pick the error envelope).
    #[must_use]
    pub fn is_json(self) -> bool {
        matches!(self, Self::Json | Self::Compact | Self::Ndjson)
    }
}

impl Cli {
    /// The query, if one was given and it is not empty.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }

    /// The effective result limit.
    #[must_use]
    pub fn limit(&self) -> u32 {
        parse_limit(self.limit.as_deref())
    }
}

/// Interpret a raw `limit` argument, falling back to [`DEFAULT_LIMIT`].
///
/// Only the leading integer is read (`"12abc"` is 12, `"3.5"` is 3), with an
/// optional sign and `0x` hex prefix. Non-positive or out-of-range values
/// fall back as well.
#[must_use]
pub fn parse_limit(raw: Option<&str>) -> u32 {
    raw.and_then(leading_integer)
        .filter(|&n| n > 0)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(DEFAULT_LIMIT)
}

fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, s) = match s.get(..2) {
        Some("0x" | "0X") => (16, &s[2..]),
        _ => (10, s),
    };
    let end = s
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(s.len());
    let value = i64::from_str_radix(&s[..end], radix).ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("giphy-search").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit(None), 5);
        assert_eq!(parse_limit(Some("12")), 12);
        assert_eq!(parse_limit(Some(" 3 ")), 3);
        assert_eq!(parse_limit(Some("lots")), 5);
        assert_eq!(parse_limit(Some("")), 5);
        assert_eq!(parse_limit(Some("0")), 5);
        assert_eq!(parse_limit(Some("-2")), 5);
        assert_eq!(parse_limit(Some("99999999999")), 5);
        assert_eq!(parse_limit(Some("12abc")), 12);
        assert_eq!(parse_limit(Some("3.5")), 3);
        assert_eq!(parse_limit(Some("+4")), 4);
        assert_eq!(parse_limit(Some("0x10")), 16);
        assert_eq!(parse_limit(Some("abc12")), 5);
        assert_eq!(parse_limit(Some("-")), 5);
    }

    #[test]
    fn test_positional_query_and_limit() {
        let cli = parse(&["funny cat", "7"]);
        assert_eq!(cli.query(), Some("funny cat"));
        assert_eq!(cli.limit(), 7);
        assert_eq!(cli.output, OutputFormat::Url);
    }

    #[test]
    fn test_missing_query_parses() {
        let cli = parse(&[]);
        assert_eq!(cli.query(), None);
        assert_eq!(cli.limit(), 5);
    }

    #[test]
    fn test_empty_query_is_missing() {
        let cli = parse(&[""]);
        assert_eq!(cli.query(), None);
    }

    #[test]
    fn test_non_numeric_limit_defaults() {
        let cli = parse(&["dogs", "many"]);
        assert_eq!(cli.limit(), 5);
    }

    #[test]
    fn test_negative_limit_accepted_then_defaulted() {
        let cli = parse(&["dogs", "-3"]);
        assert_eq!(cli.limit.as_deref(), Some("-3"));
        assert_eq!(cli.limit(), 5);
    }

    #[test]
    fn test_hyphenated_query_accepted() {
        let cli = parse(&["-funny"]);
        assert_eq!(cli.query(), Some("-funny"));
        assert_eq!(cli.limit(), 5);

        let cli = parse(&["-funny", "3"]);
        assert_eq!(cli.query(), Some("-funny"));
        assert_eq!(cli.limit(), 3);
    }

    #[test]
    fn test_extra_arguments_ignored() {
        let cli = parse(&["dogs", "2", "extra", "-x", "more"]);
        assert_eq!(cli.query(), Some("dogs"));
        assert_eq!(cli.limit(), 2);
        assert_eq!(cli.rest, ["extra", "-x", "more"]);
    }

    #[test]
    fn test_json_conflicts_with_output() {
        let result = Cli::try_parse_from(["giphy-search", "--json", "--output", "table", "dogs"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbose_counts() {
        let cli = parse(&["-vv", "dogs"]);
        assert_eq!(cli.verbose, 2);
    }
}
