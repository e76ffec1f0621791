//! Gemini implementation of the Oracle trait.
//!
//! A reference implementation using Google's `generateContent` endpoint.
//!
//! # Example
//!
//! ```rust,ignore
//! use laureate::ai::GeminiOracle;
//!
//! let oracle = GeminiOracle::from_env()?.with_model("gemini-1.5-pro-latest");
//! let reply = oracle.complete("hello").await?;
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{OracleError, OracleResult};
use crate::security::OracleCredentials;
use crate::traits::oracle::Oracle;

const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini-based oracle gateway.
pub struct GeminiOracle {
    client: Client,
    credentials: OracleCredentials,
}

impl GeminiOracle {
    /// Create a new Gemini oracle with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            credentials: OracleCredentials::new(api_key, DEFAULT_MODEL, DEFAULT_BASE_URL),
        }
    }

    /// Create from environment variable `GOOGLE_API_KEY`.
    pub fn from_env() -> OracleResult<Self> {
        let api_key = std::env::var("GOOGLE_API_KEY")
            .map_err(|_| OracleError::Config("GOOGLE_API_KEY not set".to_string()))?;
        Ok(Self::new(api_key))
    }

    /// Set the model (default: gemini-1.5-flash-latest).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.credentials.model = model.into();
        self
    }

    /// Set a custom base URL (for proxies or compatible endpoints).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.credentials.base_url = url.into();
        self
    }

    /// Get the current model name.
    pub fn model(&self) -> &str {
        &self.credentials.model
    }
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ReplyContent>,
}

#[derive(Deserialize)]
struct ReplyContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Deserialize)]
struct ReplyPart {
    text: Option<String>,
}

#[async_trait]
impl Oracle for GeminiOracle {
    async fn complete(&self, prompt: &str) -> OracleResult<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let endpoint = format!(
            "{}/models/{}:generateContent",
            self.credentials.base_url, self.credentials.model
        );

        let response = self
            .client
            .post(&endpoint)
            .query(&[("key", self.credentials.api_key.expose())])
            .json(&request)
            .send()
            .await
            .map_err(|e| OracleError::Http(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(OracleError::Api {
                status: status.as_u16(),
            });
        }

        let reply: GenerateResponse = response
            .json()
            .await
            .map_err(|e| OracleError::Http(Box::new(e)))?;

        // A blocked prompt yields a candidate with no parts.
        let text: String = reply
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .filter_map(|p| p.text)
            .collect::<Vec<_>>()
            .join("");

        if text.is_empty() {
            return Err(OracleError::EmptyReply);
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let oracle = GeminiOracle::new("test-key");
        assert_eq!(oracle.model(), "gemini-1.5-flash-latest");
    }

    #[test]
    fn test_with_model() {
        let oracle = GeminiOracle::new("test-key").with_model("gemini-1.5-pro-latest");
        assert_eq!(oracle.model(), "gemini-1.5-pro-latest");
    }

    #[test]
    fn test_response_deserializes_without_candidates() {
        let reply: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(reply.candidates.is_empty());
    }

    #[test]
    fn test_response_deserializes_text_parts() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "hello "}, {"text": "world"}]}}
            ]
        }"#;
        let reply: GenerateResponse = serde_json::from_str(raw).unwrap();
        let text: String = reply
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .filter_map(|p| p.text)
            .collect();
        assert_eq!(text, "hello world");
    }
}
