//! Award profile analysis.
//!
//! Turns a free-text award description into a typed [`AwardProfile`] with a
//! single structured oracle call. This path is parse-strict: the winner
//! pipeline degrades to empty results because it can keep going, but a
//! profile is all-or-nothing, so failures surface as [`ProfileError`].

use tracing::debug;

use crate::error::{ProfileError, ProfileResult};
use crate::pipeline::prompts;
use crate::traits::oracle::{Oracle, StructuredReply};
use crate::types::profile::AwardProfile;

/// Analyze an award description into a weighted profile.
pub async fn analyze_description(
    oracle: &impl Oracle,
    description: &str,
) -> ProfileResult<AwardProfile> {
    let prompt = prompts::format_profile(description);

    let reply = oracle.complete_structured(&prompt).await?;

    let value = match reply {
        StructuredReply::Parsed(value) => value,
        StructuredReply::Unparseable => return Err(ProfileError::Unparseable),
    };

    let profile: AwardProfile = serde_json::from_value(value)?;

    debug!(
        personality = %profile.personality,
        weight_sum = profile.weights.sum(),
        "Award profile analyzed"
    );

    Ok(profile)
}
