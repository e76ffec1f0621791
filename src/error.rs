//! Typed errors for the discovery pipeline's external collaborators.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling. Inside the winner pipeline
//! none of these are fatal: the orchestrator logs them and substitutes the
//! component's neutral result (empty list, skip, reject).

use thiserror::Error;

/// Errors from the language-model gateway.
#[derive(Debug, Error)]
pub enum OracleError {
    /// HTTP transport failed
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The API answered with a non-success status
    #[error("oracle API error: HTTP {status}")]
    Api { status: u16 },

    /// The reply carried no usable text (e.g. blocked by a safety filter)
    #[error("oracle returned no content")]
    EmptyReply,

    /// Missing or invalid credentials/configuration
    #[error("oracle config error: {0}")]
    Config(String),
}

/// Errors from the web search provider.
#[derive(Debug, Error)]
pub enum SearchError {
    /// HTTP transport failed
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The API answered with a non-success status
    #[error("search API error: HTTP {status}")]
    Api { status: u16 },

    /// Missing or invalid credentials/configuration
    #[error("search config error: {0}")]
    Config(String),
}

/// Errors from the page content fetcher.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP transport failed
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Non-success HTTP status for the page
    #[error("HTTP {status} fetching {url}")]
    Status { status: u16, url: String },

    /// URL could not be parsed
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },
}

/// Errors from award profile analysis.
///
/// Unlike the winner pipeline, this path is parse-strict: the caller gets a
/// typed error rather than a silently empty result, because a partial
/// profile is not useful.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The oracle call itself failed
    #[error("oracle call failed: {0}")]
    Oracle(#[from] OracleError),

    /// No JSON object could be located in the oracle's reply
    #[error("profile reply contained no parseable JSON")]
    Unparseable,

    /// The JSON did not match the profile schema
    #[error("profile JSON did not match the expected schema: {0}")]
    Schema(#[from] serde_json::Error),
}

/// Result type alias for oracle operations.
pub type OracleResult<T> = std::result::Result<T, OracleError>;

/// Result type alias for search operations.
pub type SearcherResult<T> = std::result::Result<T, SearchError>;

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result type alias for profile analysis.
pub type ProfileResult<T> = std::result::Result<T, ProfileError>;
