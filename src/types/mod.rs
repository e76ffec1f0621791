//! Data types for the discovery pipeline.

pub mod config;
pub mod profile;
pub mod winner;

pub use config::DiscoveryConfig;
pub use profile::{AwardProfile, FactorExplanations, FactorWeights, KeywordIntensity};
pub use winner::WinnerCandidate;
