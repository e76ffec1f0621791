//! Oracle gateway trait for language-model calls.
//!
//! The pipeline talks to the model through two shapes of call: raw text
//! (the classifier's true/false judgment) and structured (everything else).
//! Models answer the structured prompts with free text that usually -- but
//! not always -- contains a JSON object, possibly wrapped in markdown fences
//! or prose. That looseness is contained here: `complete_structured` parses
//! at the gateway boundary and returns a tagged [`StructuredReply`], so no
//! downstream component ever assumes structure that isn't there.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::OracleResult;

/// Best-effort structured view of an oracle reply.
///
/// Downstream components pattern-match on this instead of re-parsing raw
/// text. `Unparseable` is a normal outcome (the component substitutes its
/// neutral result), not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum StructuredReply {
    /// A JSON object was located and parsed.
    Parsed(Value),

    /// No JSON object could be located in the reply text.
    Unparseable,
}

impl StructuredReply {
    /// Return the parsed value, if any.
    pub fn parsed(self) -> Option<Value> {
        match self {
            StructuredReply::Parsed(value) => Some(value),
            StructuredReply::Unparseable => None,
        }
    }
}

/// Language-model gateway.
///
/// Implementations wrap a specific provider ([`GeminiOracle`] is the
/// reference one) and handle transport specifics. Prompting and response
/// interpretation belong to the pipeline, not the gateway.
///
/// [`GeminiOracle`]: crate::ai::GeminiOracle
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Raw text completion.
    async fn complete(&self, prompt: &str) -> OracleResult<String>;

    /// Completion parsed into an embedded JSON object.
    ///
    /// Transport failures still surface as `Err`; a reply that arrives but
    /// carries no JSON becomes `Ok(StructuredReply::Unparseable)`.
    async fn complete_structured(&self, prompt: &str) -> OracleResult<StructuredReply> {
        let reply = self.complete(prompt).await?;
        Ok(parse_embedded_json(&reply))
    }
}

/// Extract the JSON object embedded in free text.
///
/// Tolerates markdown fences, surrounding prose, and trailing commentary by
/// taking the span from the first `{` to the last `}`.
pub fn parse_embedded_json(text: &str) -> StructuredReply {
    let pattern = regex::Regex::new(r"(?s)\{.*\}").unwrap();

    match pattern.find(text) {
        Some(found) => serde_json::from_str::<Value>(found.as_str())
            .map(StructuredReply::Parsed)
            .unwrap_or(StructuredReply::Unparseable),
        None => StructuredReply::Unparseable,
    }
}
