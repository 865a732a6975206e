use super::ContentItem;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Parameters for a single page request against one content source
#[derive(Debug, Clone, PartialEq)]
pub struct SourceQuery {
    pub page: u32,
    pub page_size: u32,
    /// Upstream-specific category hint (NewsAPI only)
    pub category: Option<String>,
    /// Fallback timestamp for upstream records without a usable date
    pub now: DateTime<Utc>,
}

impl SourceQuery {
    /// Key used for caching responses of this query per source
    pub fn cache_key(&self, source: &str) -> String {
        format!(
            "{}:{}:{}:{}",
            source,
            self.page,
            self.page_size,
            self.category.as_deref().unwrap_or("-")
        )
    }
}

/// Free-text search against one content source
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub text: String,
    pub page: u32,
    pub page_size: u32,
    pub now: DateTime<Utc>,
}

impl SearchQuery {
    pub fn cache_key(&self, source: &str) -> String {
        format!(
            "search:{}:{}:{}:{}",
            source,
            self.page,
            self.page_size,
            self.text.to_lowercase()
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("source {0} is not configured")]
    NotConfigured(&'static str),
    #[error("request to {upstream} failed: {message}")]
    Http {
        upstream: &'static str,
        message: String,
    },
    #[error("{upstream} responded with status {status}")]
    Status { upstream: &'static str, status: u16 },
    #[error("failed to decode {upstream} response: {message}")]
    Decode {
        upstream: &'static str,
        message: String,
    },
}

/// Adapter over an external content API; returns items already normalized
#[async_trait]
pub trait ContentSource: Send + Sync {
    fn name(&self) -> &'static str;

    fn is_configured(&self) -> bool;

    async fn fetch(&self, query: &SourceQuery) -> Result<Vec<ContentItem>, SourceError>;

    async fn search(&self, query: &SearchQuery) -> Result<Vec<ContentItem>, SourceError>;
}
