//! Candidate extraction: the high-recall first pass.
//!
//! Asks the oracle for every name on the page tied to winning/selection
//! language, with a nearby context clue where one exists. The reply is
//! validated entry by entry: a nameless object is dropped on its own, a
//! reply with the wrong shape drops the whole page to an empty list. Either
//! way the pipeline continues.

use serde_json::Value;
use tracing::{debug, warn};

use crate::pipeline::prompts;
use crate::traits::oracle::{Oracle, StructuredReply};
use crate::types::winner::WinnerCandidate;

/// Extract winner candidates from a classified page.
///
/// Preserves the order of the oracle's list. Never fails: transport or
/// parse problems yield an empty list.
pub async fn extract_candidates(
    oracle: &impl Oracle,
    award_name: &str,
    page_text: &str,
) -> Vec<WinnerCandidate> {
    let prompt = prompts::format_extract_candidates(award_name, page_text);

    let reply = match oracle.complete_structured(&prompt).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!(error = %e, "Extraction call failed");
            return Vec::new();
        }
    };

    let value = match reply {
        StructuredReply::Parsed(value) => value,
        StructuredReply::Unparseable => {
            warn!("Extraction reply was not parseable");
            return Vec::new();
        }
    };

    let entries = match value.get("winners").and_then(Value::as_array) {
        Some(entries) => entries,
        None => {
            warn!("Extraction reply had no winners list");
            return Vec::new();
        }
    };

    let mut candidates = Vec::new();
    for entry in entries {
        let name = match entry.get("winner_name").and_then(Value::as_str) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                debug!("Dropping extraction entry without a name");
                continue;
            }
        };

        let context_clue = entry
            .get("context_clue")
            .and_then(Value::as_str)
            .filter(|clue| !clue.is_empty())
            .map(str::to_string);

        candidates.push(WinnerCandidate { name, context_clue });
    }

    debug!(candidates = candidates.len(), "Extraction pass complete");

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockOracle;

    #[tokio::test]
    async fn test_extracts_candidates_in_order() {
        let oracle = MockOracle::new().reply_when(
            "data extraction system",
            r#"{"winners": [
                {"winner_name": "Jane Doe", "context_clue": "Physics"},
                {"winner_name": "John Smith"}
            ]}"#,
        );

        let candidates = extract_candidates(&oracle, "X Scholarship", "page text").await;
        assert_eq!(
            candidates,
            vec![
                WinnerCandidate::new("Jane Doe").with_context("Physics"),
                WinnerCandidate::new("John Smith"),
            ]
        );
    }

    #[tokio::test]
    async fn test_drops_entries_without_names() {
        let oracle = MockOracle::new().reply_when(
            "data extraction system",
            r#"{"winners": [
                {"context_clue": "Harvard"},
                {"winner_name": "", "context_clue": "MIT"},
                {"winner_name": "Jane Doe"}
            ]}"#,
        );

        let candidates = extract_candidates(&oracle, "X Scholarship", "page text").await;
        assert_eq!(candidates, vec![WinnerCandidate::new("Jane Doe")]);
    }

    #[tokio::test]
    async fn test_empty_context_becomes_none() {
        let oracle = MockOracle::new().reply_when(
            "data extraction system",
            r#"{"winners": [{"winner_name": "Jane Doe", "context_clue": ""}]}"#,
        );

        let candidates = extract_candidates(&oracle, "X Scholarship", "page text").await;
        assert_eq!(candidates[0].context_clue, None);
    }

    #[tokio::test]
    async fn test_unparseable_reply_yields_empty() {
        let oracle =
            MockOracle::new().reply_when("data extraction system", "No JSON here, sorry.");

        let candidates = extract_candidates(&oracle, "X Scholarship", "page text").await;
        assert!(candidates.is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_yields_empty() {
        let oracle = MockOracle::new().fail_when("data extraction system");

        let candidates = extract_candidates(&oracle, "X Scholarship", "page text").await;
        assert!(candidates.is_empty());
    }
}
