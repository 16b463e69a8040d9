/// Giphy service layer: HTTP client, response model, errors.
pub mod client;
pub mod domain;
pub mod errors;

pub use client::{DEFAULT_ENDPOINT, GiphyClient};
pub use domain::Gif;
pub use errors::GiphyError;
