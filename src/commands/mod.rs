/// Commands: the single search round trip and its error type.
pub mod errors;
pub mod search;

pub use errors::SearchError;
