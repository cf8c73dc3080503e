//! Metadata sources and fetching.

mod fetch;
mod source;

pub use fetch::{FetchConfig, Fetcher, HttpFetcher};
pub use source::Source;
