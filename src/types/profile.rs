//! Award profile types.
//!
//! Typed mirror of the analyst output schema used by
//! [`analyze_description`](crate::pipeline::profile::analyze_description).
//! Deserialization is strict: a reply missing any field fails the whole
//! profile rather than yielding a partial one.

use serde::{Deserialize, Serialize};

/// Keywords from the award description, bucketed by emphasis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordIntensity {
    pub high_intensity: Vec<String>,
    pub medium_intensity: Vec<String>,
    pub low_intensity: Vec<String>,
    pub negative: Vec<String>,
}

/// Relative weight of each selection factor, normalized to sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorWeights {
    pub academics: f32,
    pub leadership: f32,
    pub community_service: f32,
    pub financial_need: f32,
    pub innovation: f32,
    pub research: f32,
    pub resilience: f32,
    pub extracurriculars: f32,
    pub dei: f32,
    pub creativity: f32,
}

impl FactorWeights {
    /// Sum of all factor weights (close to 1.0 for a well-formed profile).
    pub fn sum(&self) -> f32 {
        self.academics
            + self.leadership
            + self.community_service
            + self.financial_need
            + self.innovation
            + self.research
            + self.resilience
            + self.extracurriculars
            + self.dei
            + self.creativity
    }
}

/// Per-factor bullet-point justifications citing textual evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorExplanations {
    pub academics: Vec<String>,
    pub leadership: Vec<String>,
    pub community_service: Vec<String>,
    pub financial_need: Vec<String>,
    pub innovation: Vec<String>,
    pub research: Vec<String>,
    pub resilience: Vec<String>,
    pub extracurriculars: Vec<String>,
    pub dei: Vec<String>,
    pub creativity: Vec<String>,
}

/// Structured analysis of a free-text award description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwardProfile {
    /// Stated requirements and eligibility criteria.
    pub explicit_requirements: Vec<String>,

    /// Priorities inferred from tone, mission language, and emphasis.
    pub implicit_values: Vec<String>,

    /// Keyword buckets by intensity.
    pub keywords: KeywordIntensity,

    /// Overall tone of the description.
    pub tone: String,

    /// Preferred storytelling style.
    pub story_style: String,

    /// How this award compares to typical awards of its kind.
    pub comparative_insights: Vec<String>,

    /// Normalized factor weights.
    pub weights: FactorWeights,

    /// Justifications for each weight.
    pub explanations: FactorExplanations,

    /// Single best-matching personality archetype.
    pub personality: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_profile_json() -> serde_json::Value {
        json!({
            "explicit_requirements": ["GPA 3.5+", "STEM major"],
            "implicit_values": ["innovation", "community impact"],
            "keywords": {
                "high_intensity": ["innovation"],
                "medium_intensity": ["research"],
                "low_intensity": ["outreach"],
                "negative": []
            },
            "tone": "confident",
            "story_style": "project-driven",
            "comparative_insights": ["more research-focused than typical STEM awards"],
            "weights": {
                "academics": 0.4, "leadership": 0.2, "community_service": 0.1,
                "financial_need": 0.0, "innovation": 0.1, "research": 0.1,
                "resilience": 0.0, "extracurriculars": 0.05, "dei": 0.0,
                "creativity": 0.05
            },
            "explanations": {
                "academics": ["minimum GPA stated"], "leadership": [],
                "community_service": [], "financial_need": [], "innovation": [],
                "research": [], "resilience": [], "extracurriculars": [],
                "dei": [], "creativity": []
            },
            "personality": "The Innovator"
        })
    }

    #[test]
    fn test_deserializes_full_profile() {
        let profile: AwardProfile = serde_json::from_value(sample_profile_json()).unwrap();
        assert_eq!(profile.personality, "The Innovator");
        assert_eq!(profile.explicit_requirements.len(), 2);
        assert!((profile.weights.sum() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_missing_field_fails() {
        let mut value = sample_profile_json();
        value.as_object_mut().unwrap().remove("weights");
        assert!(serde_json::from_value::<AwardProfile>(value).is_err());
    }
}
