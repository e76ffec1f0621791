//! Pipeline orchestrator.
//!
//! Drives the whole run: plan queries, search, fetch each unvisited URL,
//! classify, extract, verify, and accumulate confirmed winners with
//! cross-page deduplication. All run state (visited URLs, accepted names)
//! lives in locals here; no component retains state across calls, and no
//! failure below this level is fatal - the worst outcome is an empty list.

use std::collections::{HashMap, HashSet};

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::pipeline::classify::is_announcement;
use crate::pipeline::extract::extract_candidates;
use crate::pipeline::queries::plan_queries;
use crate::pipeline::verify::verify_candidates;
use crate::traits::fetcher::PageFetcher;
use crate::traits::oracle::Oracle;
use crate::traits::searcher::WebSearcher;
use crate::types::config::DiscoveryConfig;
use crate::types::winner::WinnerCandidate;

/// Discovers and verifies past recipients of a named award.
///
/// Built from the three external collaborators plus a [`DiscoveryConfig`].
/// Processing is sequential: queries, then result URLs, then the
/// classify/extract/verify stages per page, awaiting each external call.
///
/// # Example
///
/// ```rust,ignore
/// use laureate::{DiscoveryConfig, GeminiOracle, HttpFetcher, TavilyWebSearcher, WinnerDiscovery};
///
/// let discovery = WinnerDiscovery::new(
///     GeminiOracle::from_env()?,
///     TavilyWebSearcher::from_env()?,
///     HttpFetcher::new(),
/// );
/// let winners = discovery.discover("Rhodes Scholarship").await;
/// ```
pub struct WinnerDiscovery<O, S, F> {
    oracle: O,
    searcher: S,
    fetcher: F,
    config: DiscoveryConfig,
}

impl<O, S, F> WinnerDiscovery<O, S, F>
where
    O: Oracle,
    S: WebSearcher,
    F: PageFetcher,
{
    /// Create an orchestrator with the default configuration.
    pub fn new(oracle: O, searcher: S, fetcher: F) -> Self {
        Self {
            oracle,
            searcher,
            fetcher,
            config: DiscoveryConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: DiscoveryConfig) -> Self {
        self.config = config;
        self
    }

    /// Access the oracle collaborator (e.g. for mock assertions).
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Access the searcher collaborator.
    pub fn searcher(&self) -> &S {
        &self.searcher
    }

    /// Access the fetcher collaborator.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Run a full discovery for `award_name`.
    ///
    /// Returns confirmed winners in discovery order, deduplicated by name
    /// (first confirmation wins). Never errors: provider and oracle
    /// failures are logged and degrade to skips or an empty result.
    pub async fn discover(&self, award_name: &str) -> Vec<WinnerCandidate> {
        self.discover_with_cancel(award_name, CancellationToken::new())
            .await
    }

    /// Run a discovery that stops early when `cancel` fires.
    ///
    /// The token is checked before each external call; on cancellation the
    /// winners accumulated so far are returned. Partial results are a valid
    /// outcome, not an error.
    pub async fn discover_with_cancel(
        &self,
        award_name: &str,
        cancel: CancellationToken,
    ) -> Vec<WinnerCandidate> {
        info!(award = %award_name, "Starting winner discovery");

        let mut visited: HashSet<String> = HashSet::new();
        let mut accepted: HashSet<String> = HashSet::new();
        let mut winners: Vec<WinnerCandidate> = Vec::new();

        if cancel.is_cancelled() {
            return winners;
        }

        let queries = plan_queries(&self.oracle, &self.config, award_name).await;
        if queries.is_empty() {
            warn!(award = %award_name, "No search queries generated, ending run");
            return winners;
        }
        info!(award = %award_name, queries = queries.len(), "Generated search queries");

        'run: for query in &queries {
            if cancel.is_cancelled() {
                break;
            }

            let results = match self
                .searcher
                .search(query, self.config.results_per_query)
                .await
            {
                Ok(results) => results,
                Err(e) => {
                    warn!(query = %query, error = %e, "Search failed, skipping query");
                    continue;
                }
            };

            for result in results {
                if cancel.is_cancelled() {
                    break 'run;
                }

                let url = result.url.to_string();

                // Mark visited before any processing so a failure below
                // still counts as the URL's one visit.
                if !visited.insert(url.clone()) {
                    debug!(url = %url, "URL already visited, skipping");
                    continue;
                }

                info!(url = %url, "Processing search result");

                let page_text = match self.fetcher.fetch(&url).await {
                    Ok(text) if !text.is_empty() => text,
                    Ok(_) => {
                        debug!(url = %url, "Fetch returned empty text, skipping");
                        continue;
                    }
                    Err(e) => {
                        warn!(url = %url, error = %e, "Fetch failed, skipping");
                        continue;
                    }
                };

                if cancel.is_cancelled() {
                    break 'run;
                }
                if !is_announcement(&self.oracle, &self.config, &url, &page_text).await {
                    debug!(url = %url, "Not a winner announcement page, skipping");
                    continue;
                }

                if cancel.is_cancelled() {
                    break 'run;
                }
                let candidates =
                    extract_candidates(&self.oracle, award_name, &page_text).await;
                if candidates.is_empty() {
                    debug!(url = %url, "No candidates found, skipping");
                    continue;
                }

                // Candidate names deduplicated in extraction order; on a
                // repeated name the later entry's context wins, keeping the
                // page's last mention.
                let mut names: Vec<String> = Vec::new();
                let mut by_name: HashMap<String, WinnerCandidate> = HashMap::new();
                for candidate in candidates {
                    if !by_name.contains_key(&candidate.name) {
                        names.push(candidate.name.clone());
                    }
                    by_name.insert(candidate.name.clone(), candidate);
                }

                if cancel.is_cancelled() {
                    break 'run;
                }
                let confirmed = verify_candidates(&self.oracle, &page_text, &names).await;

                for name in confirmed {
                    if accepted.contains(&name) {
                        debug!(name = %name, url = %url, "Name already confirmed earlier, skipping");
                        continue;
                    }
                    if let Some(candidate) = by_name.remove(&name) {
                        info!(name = %candidate.name, url = %url, "Confirmed winner");
                        accepted.insert(name);
                        winners.push(candidate);
                    }
                }
            }
        }

        info!(
            award = %award_name,
            winners = winners.len(),
            urls_visited = visited.len(),
            "Discovery completed"
        );

        winners
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::error::FetchResult;
    use crate::testing::{MockFetcher, MockOracle};
    use crate::traits::searcher::MockWebSearcher;

    const PAGE: &str =
        "Jane Doe was selected as a scholar, studying Physics. John Smith also joins the cohort.";

    fn scripted_oracle() -> MockOracle {
        MockOracle::new()
            .reply_when("diverse search queries", r#"{"queries": ["q1"]}"#)
            .reply_when(
                "data extraction system",
                r#"{"winners": [
                    {"winner_name": "Jane Doe", "context_clue": "Physics"},
                    {"winner_name": "John Smith"}
                ]}"#,
            )
            .reply_when(
                "verification agent",
                r#"{"confirmed_winners": ["John Smith", "Jane Doe"]}"#,
            )
    }

    #[tokio::test]
    async fn test_winners_follow_verifier_order() {
        let searcher = MockWebSearcher::new().with_urls("q1", &["https://uni.edu/winners-2024"]);
        let fetcher = MockFetcher::new().with_page("https://uni.edu/winners-2024", PAGE);
        let discovery = WinnerDiscovery::new(scripted_oracle(), searcher, fetcher);

        let winners = discovery.discover("X Scholarship").await;

        let names: Vec<&str> = winners.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["John Smith", "Jane Doe"]);
    }

    #[tokio::test]
    async fn test_pre_cancelled_token_returns_empty_without_calls() {
        let oracle = scripted_oracle();
        let searcher = MockWebSearcher::new().with_urls("q1", &["https://uni.edu/winners-2024"]);
        let fetcher = MockFetcher::new().with_page("https://uni.edu/winners-2024", PAGE);
        let discovery = WinnerDiscovery::new(oracle, searcher, fetcher);

        let cancel = CancellationToken::new();
        cancel.cancel();
        let winners = discovery
            .discover_with_cancel("X Scholarship", cancel)
            .await;

        assert!(winners.is_empty());
        assert_eq!(discovery.oracle.call_count(), 0);
        assert!(discovery.searcher.queries().is_empty());
    }

    /// Fetcher wrapper that fires a cancellation token on its nth fetch,
    /// simulating a deadline landing in the middle of a run.
    struct CancelAfterFetches {
        inner: MockFetcher,
        cancel: CancellationToken,
        fetches: AtomicUsize,
        cancel_at: usize,
    }

    #[async_trait]
    impl PageFetcher for CancelAfterFetches {
        async fn fetch(&self, url: &str) -> FetchResult<String> {
            if self.fetches.fetch_add(1, Ordering::SeqCst) + 1 == self.cancel_at {
                self.cancel.cancel();
            }
            self.inner.fetch(url).await
        }
    }

    #[tokio::test]
    async fn test_cancel_mid_run_keeps_accumulated_winners() {
        let searcher = MockWebSearcher::new().with_urls(
            "q1",
            &[
                "https://uni.edu/winners-2024",
                "https://college.edu/winners-2023",
            ],
        );
        let cancel = CancellationToken::new();
        let fetcher = CancelAfterFetches {
            inner: MockFetcher::new()
                .with_page("https://uni.edu/winners-2024", PAGE)
                .with_page("https://college.edu/winners-2023", PAGE),
            cancel: cancel.clone(),
            fetches: AtomicUsize::new(0),
            cancel_at: 2,
        };
        let discovery = WinnerDiscovery::new(scripted_oracle(), searcher, fetcher);

        let winners = discovery
            .discover_with_cancel("X Scholarship", cancel)
            .await;

        // The first page's confirmations survive; the second page was
        // fetched when the deadline fired and never gets classified.
        let names: Vec<&str> = winners.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["John Smith", "Jane Doe"]);
        assert_eq!(discovery.fetcher.inner.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_search_failure_moves_to_next_query() {
        let oracle = MockOracle::new()
            .reply_when("diverse search queries", r#"{"queries": ["down", "up"]}"#)
            .reply_when(
                "data extraction system",
                r#"{"winners": [{"winner_name": "Jane Doe", "context_clue": "Physics"}]}"#,
            )
            .reply_when("verification agent", r#"{"confirmed_winners": ["Jane Doe"]}"#);
        let searcher = MockWebSearcher::new()
            .fail_query("down")
            .with_urls("up", &["https://uni.edu/winners-2024"]);
        let fetcher = MockFetcher::new().with_page("https://uni.edu/winners-2024", PAGE);
        let discovery = WinnerDiscovery::new(oracle, searcher, fetcher);

        let winners = discovery.discover("X Scholarship").await;

        assert_eq!(winners.len(), 1);
        assert_eq!(
            discovery.searcher.queries(),
            vec!["down".to_string(), "up".to_string()]
        );
    }

    #[tokio::test]
    async fn test_failed_fetch_skips_url() {
        let oracle = scripted_oracle();
        let searcher = MockWebSearcher::new()
            .with_urls("q1", &["https://broken.example/winners", "https://uni.edu/winners-2024"]);
        let fetcher = MockFetcher::new()
            .fail_url("https://broken.example/winners")
            .with_page("https://uni.edu/winners-2024", PAGE);
        let discovery = WinnerDiscovery::new(oracle, searcher, fetcher);

        let winners = discovery.discover("X Scholarship").await;

        assert_eq!(winners.len(), 2);
    }
}
