//! Web searcher trait for open-world URL discovery.
//!
//! The pipeline needs a ranked list of candidate pages for each planned
//! query. This trait abstracts over search providers (Tavily, SerpAPI,
//! Google Custom Search, etc.); the orchestrator treats a provider failure
//! as an empty result set and moves on to the next query.

use async_trait::async_trait;
use url::Url;

use crate::error::{SearchError, SearcherResult};
use crate::security::SecretString;

/// A discovered URL from web search with metadata.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The discovered URL.
    pub url: Url,

    /// Title of the page (if available from search results).
    pub title: Option<String>,

    /// Snippet/description from search results.
    pub snippet: Option<String>,

    /// Relevance score (0.0-1.0, if provided by search API).
    pub score: Option<f32>,
}

impl SearchResult {
    /// Create a new search result from a URL.
    pub fn new(url: Url) -> Self {
        Self {
            url,
            title: None,
            snippet: None,
            score: None,
        }
    }

    /// Create from a URL string.
    pub fn from_url(url: &str) -> Option<Self> {
        Url::parse(url).ok().map(Self::new)
    }

    /// Add a title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add a snippet.
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    /// Add a relevance score.
    pub fn with_score(mut self, score: f32) -> Self {
        self.score = Some(score);
        self
    }
}

/// Web search trait for open-world discovery.
///
/// # Implementations
///
/// - `TavilyWebSearcher` - Tavily API
/// - `MockWebSearcher` - For testing
#[async_trait]
pub trait WebSearcher: Send + Sync {
    /// Search the web for URLs relevant to the query.
    ///
    /// Returns up to `max_results` discovered URLs. The caller decides
    /// whether to fetch them.
    async fn search(&self, query: &str, max_results: usize) -> SearcherResult<Vec<SearchResult>>;
}

/// Mock web searcher for testing.
///
/// Returns scripted results and records every query it receives so tests
/// can assert on call patterns.
#[derive(Default)]
pub struct MockWebSearcher {
    results: std::sync::RwLock<std::collections::HashMap<String, Vec<SearchResult>>>,
    fail_queries: std::sync::RwLock<Vec<String>>,
    queries: std::sync::Arc<std::sync::RwLock<Vec<String>>>,
}

impl MockWebSearcher {
    /// Create a new mock searcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add results for a query.
    pub fn with_results(self, query: &str, results: Vec<SearchResult>) -> Self {
        self.results
            .write()
            .unwrap()
            .insert(query.to_string(), results);
        self
    }

    /// Add URL strings as results.
    pub fn with_urls(self, query: &str, urls: &[&str]) -> Self {
        let results: Vec<_> = urls
            .iter()
            .filter_map(|u| SearchResult::from_url(u))
            .collect();
        self.with_results(query, results)
    }

    /// Mark a query as failing.
    pub fn fail_query(self, query: impl Into<String>) -> Self {
        self.fail_queries.write().unwrap().push(query.into());
        self
    }

    /// Get all queries this mock has received.
    pub fn queries(&self) -> Vec<String> {
        self.queries.read().unwrap().clone()
    }
}

#[async_trait]
impl WebSearcher for MockWebSearcher {
    async fn search(&self, query: &str, max_results: usize) -> SearcherResult<Vec<SearchResult>> {
        self.queries.write().unwrap().push(query.to_string());

        if self.fail_queries.read().unwrap().iter().any(|q| q == query) {
            return Err(SearchError::Http(Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "Mock connection refused",
            ))));
        }

        let mut results = self
            .results
            .read()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_default();
        results.truncate(max_results);
        Ok(results)
    }
}

/// Tavily-backed web searcher.
///
/// Uses Tavily's search API for open-world URL discovery.
pub struct TavilyWebSearcher {
    api_key: SecretString,
    client: reqwest::Client,
    search_depth: String,
}

impl TavilyWebSearcher {
    /// Create a new Tavily web searcher.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key),
            client: reqwest::Client::new(),
            search_depth: "basic".to_string(),
        }
    }

    /// Create from environment variable `TAVILY_API_KEY`.
    pub fn from_env() -> SearcherResult<Self> {
        let api_key = std::env::var("TAVILY_API_KEY")
            .map_err(|_| SearchError::Config("TAVILY_API_KEY not set".to_string()))?;
        Ok(Self::new(api_key))
    }

    /// Set search depth ("basic" or "advanced").
    pub fn with_search_depth(mut self, depth: impl Into<String>) -> Self {
        self.search_depth = depth.into();
        self
    }
}

#[async_trait]
impl WebSearcher for TavilyWebSearcher {
    async fn search(&self, query: &str, max_results: usize) -> SearcherResult<Vec<SearchResult>> {
        #[derive(serde::Serialize)]
        struct Request {
            query: String,
            search_depth: String,
            max_results: usize,
        }

        #[derive(serde::Deserialize)]
        struct Response {
            results: Vec<TavilyResult>,
        }

        #[derive(serde::Deserialize)]
        struct TavilyResult {
            url: String,
            title: Option<String>,
            content: Option<String>,
            score: Option<f32>,
        }

        let request = Request {
            query: query.to_string(),
            search_depth: self.search_depth.clone(),
            max_results,
        };

        let response = self
            .client
            .post("https://api.tavily.com/search")
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key.expose()))
            .json(&request)
            .send()
            .await
            .map_err(|e| SearchError::Http(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Api {
                status: status.as_u16(),
            });
        }

        let tavily_response: Response = response
            .json()
            .await
            .map_err(|e| SearchError::Http(Box::new(e)))?;

        let results = tavily_response
            .results
            .into_iter()
            .filter_map(|r| {
                let url = Url::parse(&r.url).ok()?;
                let mut result = SearchResult::new(url);
                if let Some(title) = r.title {
                    result = result.with_title(title);
                }
                if let Some(content) = r.content {
                    result = result.with_snippet(content);
                }
                if let Some(score) = r.score {
                    result = result.with_score(score);
                }
                Some(result)
            })
            .collect();

        Ok(results)
    }
}
