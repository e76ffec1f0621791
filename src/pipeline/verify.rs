//! Candidate verification: the high-precision second pass.
//!
//! Independent of the extraction pass's context clues: the oracle re-reads
//! the full page text against each candidate name and confirms only those
//! with explicit winner-status evidence. The output is constrained to a
//! subset of the offered candidates; anything else the oracle invents is a
//! protocol violation and is dropped. Comparison is exact-match-only (a
//! name returned with different casing or whitespace counts as not found).

use std::collections::HashSet;

use serde_json::Value;
use tracing::{debug, warn};

use crate::pipeline::prompts;
use crate::traits::oracle::{Oracle, StructuredReply};

/// Confirm which candidate names the page text explicitly identifies as
/// winners.
///
/// An empty candidate list returns empty immediately without an oracle
/// call. Order follows the oracle's confirmation order.
pub async fn verify_candidates(
    oracle: &impl Oracle,
    page_text: &str,
    candidates: &[String],
) -> Vec<String> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let prompt = prompts::format_verify_winners(candidates, page_text);

    let reply = match oracle.complete_structured(&prompt).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!(error = %e, "Verification call failed");
            return Vec::new();
        }
    };

    let value = match reply {
        StructuredReply::Parsed(value) => value,
        StructuredReply::Unparseable => {
            warn!("Verification reply was not parseable");
            return Vec::new();
        }
    };

    let offered: HashSet<&str> = candidates.iter().map(String::as_str).collect();

    let confirmed: Vec<String> = value
        .get("confirmed_winners")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_str)
                .filter(|name| {
                    if offered.contains(name) {
                        true
                    } else {
                        debug!(name = %name, "Verifier returned a name outside the candidate set, dropping");
                        false
                    }
                })
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    debug!(
        offered = candidates.len(),
        confirmed = confirmed.len(),
        "Verification pass complete"
    );

    confirmed
}
