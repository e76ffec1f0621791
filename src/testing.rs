//! Testing utilities including mock implementations.
//!
//! These make it possible to exercise the pipeline without real oracle or
//! network calls. All mocks record the calls they receive so tests can
//! assert on call patterns (e.g. that a URL was fetched exactly once).

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{FetchError, FetchResult, OracleError, OracleResult};
use crate::traits::fetcher::PageFetcher;
use crate::traits::oracle::Oracle;

/// A scripted reply: fires when every needle appears in the prompt.
struct ScriptedReply {
    needles: Vec<String>,
    reply: String,
}

/// A mock oracle for testing.
///
/// Replies are scripted by prompt substring. Each pipeline prompt starts
/// with a distinctive phrase ("diverse search queries", "web content
/// analyst", "data extraction system", "verification agent", "expert
/// analyst"), so a single needle usually suffices; use
/// [`reply_when_all`](MockOracle::reply_when_all) to additionally
/// distinguish by page content. First matching entry wins. Prompts with no
/// match get an empty reply, which parses as `Unparseable` downstream.
#[derive(Default)]
pub struct MockOracle {
    replies: RwLock<Vec<ScriptedReply>>,
    fail_needles: RwLock<Vec<String>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockOracle {
    /// Create a new mock oracle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply with `reply` whenever a prompt contains `needle`.
    pub fn reply_when(self, needle: impl Into<String>, reply: impl Into<String>) -> Self {
        self.replies.write().unwrap().push(ScriptedReply {
            needles: vec![needle.into()],
            reply: reply.into(),
        });
        self
    }

    /// Reply with `reply` whenever a prompt contains every needle.
    pub fn reply_when_all<I, N>(self, needles: I, reply: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.replies.write().unwrap().push(ScriptedReply {
            needles: needles.into_iter().map(Into::into).collect(),
            reply: reply.into(),
        });
        self
    }

    /// Fail with a transport error whenever a prompt contains `needle`.
    pub fn fail_when(self, needle: impl Into<String>) -> Self {
        self.fail_needles.write().unwrap().push(needle.into());
        self
    }

    /// Get all prompts this mock has received.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Number of prompts received.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl Oracle for MockOracle {
    async fn complete(&self, prompt: &str) -> OracleResult<String> {
        self.calls.write().unwrap().push(prompt.to_string());

        if self
            .fail_needles
            .read()
            .unwrap()
            .iter()
            .any(|needle| prompt.contains(needle))
        {
            return Err(OracleError::Http(Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "Mock connection refused",
            ))));
        }

        for scripted in self.replies.read().unwrap().iter() {
            if scripted
                .needles
                .iter()
                .all(|needle| prompt.contains(needle))
            {
                return Ok(scripted.reply.clone());
            }
        }

        Ok(String::new())
    }
}

/// A mock page fetcher for testing.
///
/// Returns scripted page text without network access and records every URL
/// fetched.
#[derive(Default)]
pub struct MockFetcher {
    pages: RwLock<HashMap<String, String>>,
    fail_urls: RwLock<Vec<String>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    /// Create a new mock fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add scripted text for a URL.
    pub fn with_page(self, url: impl Into<String>, text: impl Into<String>) -> Self {
        self.pages.write().unwrap().insert(url.into(), text.into());
        self
    }

    /// Mark a URL as failing.
    pub fn fail_url(self, url: impl Into<String>) -> Self {
        self.fail_urls.write().unwrap().push(url.into());
        self
    }

    /// Get all URLs this mock has fetched.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<String> {
        self.calls.write().unwrap().push(url.to_string());

        if self.fail_urls.read().unwrap().iter().any(|u| u == url) {
            return Err(FetchError::Http(Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "Mock connection refused",
            ))));
        }

        // Unknown URLs come back empty, which the pipeline skips.
        Ok(self
            .pages
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_oracle_matches_by_needle() {
        let oracle = MockOracle::new()
            .reply_when("alpha", "first")
            .reply_when("beta", "second");

        assert_eq!(oracle.complete("contains alpha here").await.unwrap(), "first");
        assert_eq!(oracle.complete("beta instead").await.unwrap(), "second");
        assert_eq!(oracle.complete("neither").await.unwrap(), "");
        assert_eq!(oracle.call_count(), 3);
    }

    #[tokio::test]
    async fn test_mock_oracle_all_needles_must_match() {
        let oracle = MockOracle::new()
            .reply_when_all(["alpha", "beta"], "both")
            .reply_when("alpha", "just alpha");

        assert_eq!(oracle.complete("alpha and beta").await.unwrap(), "both");
        assert_eq!(oracle.complete("alpha only").await.unwrap(), "just alpha");
    }

    #[tokio::test]
    async fn test_mock_oracle_fail_when() {
        let oracle = MockOracle::new().fail_when("broken");

        assert!(oracle.complete("this is broken").await.is_err());
        assert!(oracle.complete("this is fine").await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_fetcher_records_calls() {
        let fetcher = MockFetcher::new()
            .with_page("https://a.com/x", "text")
            .fail_url("https://b.com/y");

        assert_eq!(fetcher.fetch("https://a.com/x").await.unwrap(), "text");
        assert!(fetcher.fetch("https://b.com/y").await.is_err());
        assert_eq!(fetcher.fetch("https://c.com/z").await.unwrap(), "");
        assert_eq!(
            fetcher.calls(),
            vec!["https://a.com/x", "https://b.com/y", "https://c.com/z"]
        );
    }
}
