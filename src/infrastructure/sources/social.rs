use super::fetch_json;
use crate::domain::content::{
    ContentItem, ContentSource, ContentType, SearchQuery, SourceError, SourceQuery,
};
use async_trait::async_trait;
use serde::Deserialize;

const NAME: &str = "social";

/// Posts are served already in content shape
#[derive(Debug, Deserialize)]
struct PostsResponse {
    #[serde(default)]
    posts: Vec<ContentItem>,
}

/// Social posts API. Unconfigured without a base URL.
pub struct SocialSource {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl SocialSource {
    pub fn new(client: reqwest::Client, base_url: Option<&str>) -> Self {
        Self {
            client,
            base_url: base_url.map(|url| url.trim_end_matches('/').to_string()),
        }
    }
}

impl SocialSource {
    fn base_url(&self) -> Result<&str, SourceError> {
        self.base_url
            .as_deref()
            .ok_or(SourceError::NotConfigured(NAME))
    }
}

/// Keep social posts only, with interaction marks cleared
fn normalize_posts(posts: Vec<ContentItem>) -> Vec<ContentItem> {
    posts
        .into_iter()
        .filter(|post| post.content_type() == ContentType::Social)
        .map(|mut post| {
            post.is_favorite = false;
            post.is_read = false;
            post
        })
        .collect()
}

#[async_trait]
impl ContentSource for SocialSource {
    fn name(&self) -> &'static str {
        NAME
    }

    fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    async fn fetch(&self, query: &SourceQuery) -> Result<Vec<ContentItem>, SourceError> {
        let request = self
            .client
            .get(format!("{}/posts", self.base_url()?))
            .query(&[("page", query.page), ("pageSize", query.page_size)]);

        let response: PostsResponse = fetch_json(NAME, request).await?;
        let posts = normalize_posts(response.posts);

        tracing::debug!(count = posts.len(), "Fetched social posts");

        Ok(posts)
    }

    /// The upstream may ignore `query`, so results are matched again locally
    async fn search(&self, query: &SearchQuery) -> Result<Vec<ContentItem>, SourceError> {
        let request = self
            .client
            .get(format!("{}/posts/search", self.base_url()?))
            .query(&[
                ("query", query.text.clone()),
                ("page", query.page.to_string()),
                ("pageSize", query.page_size.to_string()),
            ]);

        let response: PostsResponse = fetch_json(NAME, request).await?;
        let posts: Vec<ContentItem> = normalize_posts(response.posts)
            .into_iter()
            .filter(|post| post.matches_text(&query.text))
            .collect();

        tracing::debug!(count = posts.len(), "Searched social posts");

        Ok(posts)
    }
}
