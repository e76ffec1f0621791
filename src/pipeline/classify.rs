//! Page classification: is this page a winner announcement or listing?
//!
//! A deterministic URL-keyword heuristic is authoritative and answers
//! without consulting the oracle. Only URLs the heuristic says nothing
//! about fall through to an oracle judgment over the URL plus a fixed-size
//! preview of the page text.

use tracing::{debug, warn};

use crate::pipeline::prompts;
use crate::traits::oracle::Oracle;
use crate::types::config::DiscoveryConfig;

/// URL keywords that mark a page as an announcement outright.
const URL_KEYWORDS: [&str; 7] = [
    "winner",
    "scholar",
    "directory",
    "bio",
    "cohort",
    "class-of",
    "announcement",
];

/// The classifier's two-valued judgment.
///
/// Any oracle reply other than a normalized `"true"` maps to
/// `NotAnnouncement` - ambiguity rejects, it never falls through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Judgment {
    Announcement,
    NotAnnouncement,
}

impl Judgment {
    fn from_reply(reply: &str) -> Self {
        if reply.trim().eq_ignore_ascii_case("true") {
            Judgment::Announcement
        } else {
            Judgment::NotAnnouncement
        }
    }
}

/// Check the URL against the fixed keyword set, case-insensitively.
fn url_matches_keywords(url: &str) -> bool {
    let lowered = url.to_lowercase();
    URL_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

/// Decide whether a fetched page is a genuine winner announcement/listing.
///
/// The URL heuristic short-circuits to `true`; otherwise the oracle judges
/// the URL plus the first `classifier_preview_chars` characters of text.
/// Oracle failure rejects the page (logged, non-fatal).
pub async fn is_announcement(
    oracle: &impl Oracle,
    config: &DiscoveryConfig,
    url: &str,
    page_text: &str,
) -> bool {
    if url_matches_keywords(url) {
        debug!(url = %url, "URL keyword match, accepting without oracle");
        return true;
    }

    let preview: String = page_text
        .chars()
        .take(config.classifier_preview_chars)
        .collect();
    let prompt = prompts::format_classify_page(url, &preview);

    match oracle.complete(&prompt).await {
        Ok(reply) => {
            let judgment = Judgment::from_reply(&reply);
            debug!(url = %url, judgment = ?judgment, "Oracle page judgment");
            judgment == Judgment::Announcement
        }
        Err(e) => {
            warn!(url = %url, error = %e, "Classification call failed, rejecting page");
            false
        }
    }
}
