//! Winner candidate type.

use serde::{Deserialize, Serialize};

/// A person proposed as a past recipient of the award.
///
/// Produced by the high-recall extraction pass and trusted only once the
/// verification pass confirms the name. Immutable once created; within one
/// page's extraction the `name` is the natural key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerCandidate {
    /// Full name of the recipient.
    #[serde(rename = "winner_name")]
    pub name: String,

    /// Nearby identifying context, such as a university, city, or field of
    /// study. Serialized as `null` when absent.
    pub context_clue: Option<String>,
}

impl WinnerCandidate {
    /// Create a candidate with no context clue.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            context_clue: None,
        }
    }

    /// Attach a context clue.
    pub fn with_context(mut self, clue: impl Into<String>) -> Self {
        self.context_clue = Some(clue.into());
        self
    }
}
