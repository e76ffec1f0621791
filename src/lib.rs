//! Award Winner Discovery Library
//!
//! Discovers and verifies names of past recipients of a named award by
//! searching the web, fetching candidate pages, and running a two-pass
//! language-model check over each page.
//!
//! # Design Philosophy
//!
//! **Recall first, then precision**
//!
//! - Pass 1 extracts every name tied to winning/selection language
//! - Pass 2 independently re-reads the full page and confirms only names
//!   with explicit winner-status evidence
//! - Results are deduplicated across the run, first confirmation wins
//! - External failures degrade to skips; the worst outcome is an empty list
//!
//! # Usage
//!
//! ```rust,ignore
//! use laureate::{GeminiOracle, HttpFetcher, TavilyWebSearcher, WinnerDiscovery};
//!
//! let discovery = WinnerDiscovery::new(
//!     GeminiOracle::from_env()?,
//!     TavilyWebSearcher::from_env()?,
//!     HttpFetcher::new(),
//! );
//!
//! let winners = discovery.discover("Rhodes Scholarship").await;
//! laureate::output::write_winners("data".as_ref(), "Rhodes Scholarship", &winners)?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions (Oracle, WebSearcher, PageFetcher)
//! - [`pipeline`] - Query planning, classification, extraction, verification,
//!   and the orchestrator
//! - [`types`] - Winner, configuration, and award profile types
//! - [`ai`] - Gemini oracle gateway
//! - [`fetchers`] - HTTP content fetcher
//! - [`output`] - Winners file persistence
//! - [`security`] - Credential handling
//! - [`testing`] - Mock implementations for testing

pub mod ai;
pub mod error;
pub mod fetchers;
pub mod output;
pub mod pipeline;
pub mod security;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{FetchError, OracleError, ProfileError, SearchError};
pub use traits::{
    fetcher::PageFetcher,
    oracle::{parse_embedded_json, Oracle, StructuredReply},
    searcher::{MockWebSearcher, SearchResult, TavilyWebSearcher, WebSearcher},
};
pub use types::{
    config::DiscoveryConfig,
    profile::{AwardProfile, FactorExplanations, FactorWeights, KeywordIntensity},
    winner::WinnerCandidate,
};

// Re-export pipeline components
pub use pipeline::{
    analyze_description, extract_candidates, is_announcement, plan_queries, verify_candidates,
    WinnerDiscovery,
};

// Re-export concrete collaborators
pub use ai::GeminiOracle;
pub use fetchers::HttpFetcher;
pub use output::write_winners;
