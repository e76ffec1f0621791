//! Core trait abstractions for the pipeline's external collaborators.

pub mod fetcher;
pub mod oracle;
pub mod searcher;

pub use fetcher::PageFetcher;
pub use oracle::{parse_embedded_json, Oracle, StructuredReply};
pub use searcher::{MockWebSearcher, SearchResult, TavilyWebSearcher, WebSearcher};
