//! Page fetcher trait for retrieving candidate pages as plain text.

use async_trait::async_trait;

use crate::error::FetchResult;

/// Content fetcher for candidate pages.
///
/// Implementations retrieve a URL and reduce it to plain text, truncated to
/// their configured maximum length. The orchestrator treats a failed or
/// empty fetch as a skip, never as a fatal error.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch a page and return its extracted text.
    async fn fetch(&self, url: &str) -> FetchResult<String>;
}
