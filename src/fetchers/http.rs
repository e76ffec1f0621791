//! HTTP-based page fetcher.
//!
//! Retrieves a page over HTTP and reduces the HTML to plain text suitable
//! for an oracle prompt: scripts/styles stripped, tags removed, entities
//! decoded, whitespace collapsed, truncated to a maximum length.

use async_trait::async_trait;
use tracing::{debug, warn};
use url::Url;

use crate::error::{FetchError, FetchResult};
use crate::traits::fetcher::PageFetcher;

const DEFAULT_MAX_CHARS: usize = 8_000;
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Fetcher that downloads pages via HTTP and strips them to text.
///
/// Suitable for static pages; JavaScript-heavy sites will come back mostly
/// empty and get skipped by the pipeline.
pub struct HttpFetcher {
    client: reqwest::Client,
    user_agent: String,
    max_chars: usize,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_chars: DEFAULT_MAX_CHARS,
        }
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the maximum number of characters of extracted text to keep.
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// Reduce HTML to plain text with single-space separators.
    fn html_to_text(&self, html: &str) -> String {
        let mut text = html.to_string();

        // Drop non-content blocks entirely
        let script_pattern = regex::Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap();
        let style_pattern = regex::Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap();
        let head_pattern = regex::Regex::new(r"(?is)<head[^>]*>.*?</head>").unwrap();
        text = script_pattern.replace_all(&text, " ").to_string();
        text = style_pattern.replace_all(&text, " ").to_string();
        text = head_pattern.replace_all(&text, " ").to_string();

        // Remove remaining tags, leaving a separator so words don't merge
        let tag_pattern = regex::Regex::new(r"<[^>]+>").unwrap();
        text = tag_pattern.replace_all(&text, " ").to_string();

        // Decode common HTML entities
        text = text
            .replace("&nbsp;", " ")
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'");

        // Collapse runs of whitespace to single spaces
        let whitespace_pattern = regex::Regex::new(r"\s+").unwrap();
        text = whitespace_pattern.replace_all(&text, " ").to_string();

        text.trim().to_string()
    }

    /// Truncate text at a character (not byte) boundary.
    fn truncate(&self, text: String) -> String {
        if text.chars().count() <= self.max_chars {
            return text;
        }
        text.chars().take(self.max_chars).collect()
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<String> {
        Url::parse(url).map_err(|_| FetchError::InvalidUrl {
            url: url.to_string(),
        })?;

        debug!(url = %url, "Fetching page");

        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "HTTP request failed");
                FetchError::Http(Box::new(e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| FetchError::Http(Box::new(e)))?;

        let text = self.truncate(self.html_to_text(&html));

        debug!(url = %url, text_length = text.len(), "Page reduced to text");

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_to_text_strips_tags() {
        let fetcher = HttpFetcher::new();

        let html = r#"
            <html><head><title>Ignored</title></head>
            <body>
                <h1>Meet the Scholars</h1>
                <p>Jane Doe was selected as a scholar.</p>
                <script>analytics();</script>
            </body></html>
        "#;

        let text = fetcher.html_to_text(html);

        assert!(text.contains("Meet the Scholars"));
        assert!(text.contains("Jane Doe was selected as a scholar."));
        assert!(!text.contains("analytics"));
        assert!(!text.contains("Ignored"));
        assert!(!text.contains('<'));
    }

    #[test]
    fn test_html_to_text_decodes_entities() {
        let fetcher = HttpFetcher::new();
        let text = fetcher.html_to_text("<p>Smith &amp; Jones&nbsp;&#39;24</p>");
        assert_eq!(text, "Smith & Jones '24");
    }

    #[test]
    fn test_html_to_text_collapses_whitespace() {
        let fetcher = HttpFetcher::new();
        let text = fetcher.html_to_text("<p>a</p>\n\n\n<p>b</p>");
        assert_eq!(text, "a b");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let fetcher = HttpFetcher::new().with_max_chars(3);
        assert_eq!(fetcher.truncate("héllo".to_string()), "hél");
        assert_eq!(fetcher.truncate("ab".to_string()), "ab");
    }

    #[tokio::test]
    async fn test_invalid_url_rejected() {
        let fetcher = HttpFetcher::new();
        let result = fetcher.fetch("not a url").await;
        assert!(matches!(result, Err(FetchError::InvalidUrl { .. })));
    }
}
