//! Configuration for the discovery pipeline.

use serde::{Deserialize, Serialize};

/// Tuning knobs for a discovery run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// How many search queries to ask the oracle to plan. Default: 5.
    pub query_count: usize,

    /// Search results requested per query. Default: 5.
    pub results_per_query: usize,

    /// How many characters of page text the classifier shows the oracle
    /// alongside the URL. Default: 2000.
    pub classifier_preview_chars: usize,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            query_count: 5,
            results_per_query: 5,
            classifier_preview_chars: 2_000,
        }
    }
}

impl DiscoveryConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the planned query count.
    pub fn with_query_count(mut self, count: usize) -> Self {
        self.query_count = count;
        self
    }

    /// Set the per-query result limit.
    pub fn with_results_per_query(mut self, count: usize) -> Self {
        self.results_per_query = count;
        self
    }

    /// Set the classifier's page text preview length.
    pub fn with_classifier_preview_chars(mut self, chars: usize) -> Self {
        self.classifier_preview_chars = chars;
        self
    }
}
