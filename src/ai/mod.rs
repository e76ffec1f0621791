//! Oracle gateway implementations.

pub mod gemini;

pub use gemini::GeminiOracle;
