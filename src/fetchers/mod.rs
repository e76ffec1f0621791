//! Content fetcher implementations.

pub mod http;

pub use http::HttpFetcher;
