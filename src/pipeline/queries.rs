//! Search query planning.
//!
//! One structured oracle call at the start of a run. An empty plan is the
//! run's terminal condition: without queries nothing can be discovered, so
//! the orchestrator returns an empty result rather than erroring.

use serde_json::Value;
use tracing::{debug, warn};

use crate::pipeline::prompts;
use crate::traits::oracle::{Oracle, StructuredReply};
use crate::types::config::DiscoveryConfig;

/// Ask the oracle for a list of diverse search queries for the award.
///
/// Returns an empty list on transport failure or an unparseable reply.
pub async fn plan_queries(
    oracle: &impl Oracle,
    config: &DiscoveryConfig,
    award_name: &str,
) -> Vec<String> {
    let prompt = prompts::format_plan_queries(config.query_count, award_name);

    let reply = match oracle.complete_structured(&prompt).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!(award = %award_name, error = %e, "Query planning call failed");
            return Vec::new();
        }
    };

    let value = match reply {
        StructuredReply::Parsed(value) => value,
        StructuredReply::Unparseable => {
            warn!(award = %award_name, "Query planning reply was not parseable");
            return Vec::new();
        }
    };

    let queries: Vec<String> = value
        .get("queries")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_str)
                .filter(|q| !q.trim().is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    debug!(award = %award_name, count = queries.len(), "Planned search queries");

    queries
}
