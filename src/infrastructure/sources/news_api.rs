use super::fetch_json;
use crate::domain::content::{
    ContentDetails, ContentItem, ContentSource, SearchQuery, SourceError, SourceQuery,
};
use crate::infrastructure::config::is_api_key_configured;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

const NAME: &str = "newsapi";
const COUNTRY: &str = "us";
const TAG_COUNT: usize = 5;
const SEARCH_SORT: &str = "publishedAt";

/// Body of both /top-headlines and /everything
#[derive(Debug, Deserialize)]
struct ArticlesResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub url_to_image: Option<String>,
    pub published_at: Option<String>,
    pub source: Option<ArticleSource>,
    pub author: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ArticleSource {
    pub name: Option<String>,
}

/// NewsAPI top headlines, searched through /everything
pub struct NewsApiSource {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl NewsApiSource {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.trim().to_string(),
        }
    }
}

/// Normalize one article. Items are stamped with the requested NewsAPI
/// category so preference filters can recognise them.
pub fn transform_article(
    article: Article,
    category: Option<&str>,
    now: DateTime<Utc>,
) -> ContentItem {
    let slug = article
        .url
        .as_deref()
        .and_then(|url| url.trim_end_matches('/').rsplit('/').next())
        .filter(|segment| !segment.is_empty() && !segment.contains(':'))
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().simple().to_string());

    let title = article
        .title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| "No title".to_string());
    let tags = title
        .split_whitespace()
        .take(TAG_COUNT)
        .map(str::to_string)
        .collect();

    let published_at = article
        .published_at
        .as_deref()
        .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
        .map(|ts| ts.with_timezone(&Utc))
        .unwrap_or(now);

    let mut item = ContentItem::new(
        format!("news-{}", slug),
        title,
        category.unwrap_or("news"),
        published_at,
        ContentDetails::News {
            author: article.author,
            tags,
        },
    )
    .with_description(article.description.unwrap_or_default())
    .with_source(
        article
            .source
            .and_then(|s| s.name)
            .unwrap_or_else(|| "Unknown source".to_string()),
    )
    .with_url(article.url.unwrap_or_default());
    item.image_url = article.url_to_image;
    item
}

#[async_trait]
impl ContentSource for NewsApiSource {
    fn name(&self) -> &'static str {
        NAME
    }

    fn is_configured(&self) -> bool {
        is_api_key_configured(&self.api_key)
    }

    async fn fetch(&self, query: &SourceQuery) -> Result<Vec<ContentItem>, SourceError> {
        if !self.is_configured() {
            return Err(SourceError::NotConfigured(NAME));
        }

        let mut params = vec![
            ("country", COUNTRY.to_string()),
            ("page", query.page.to_string()),
            ("pageSize", query.page_size.to_string()),
        ];
        if let Some(category) = &query.category {
            params.push(("category", category.clone()));
        }

        let request = self
            .client
            .get(format!("{}/top-headlines", self.base_url))
            .header("X-Api-Key", &self.api_key)
            .query(&params);

        let response: ArticlesResponse = fetch_json(NAME, request).await?;

        tracing::debug!(
            count = response.articles.len(),
            category = ?query.category,
            "Fetched NewsAPI headlines"
        );

        Ok(response
            .articles
            .into_iter()
            .map(|article| transform_article(article, query.category.as_deref(), query.now))
            .collect())
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<ContentItem>, SourceError> {
        if !self.is_configured() {
            return Err(SourceError::NotConfigured(NAME));
        }

        let request = self
            .client
            .get(format!("{}/everything", self.base_url))
            .header("X-Api-Key", &self.api_key)
            .query(&[
                ("q", query.text.clone()),
                ("sortBy", SEARCH_SORT.to_string()),
                ("page", query.page.to_string()),
                ("pageSize", query.page_size.to_string()),
            ]);

        let response: ArticlesResponse = fetch_json(NAME, request).await?;

        tracing::debug!(count = response.articles.len(), "Searched NewsAPI articles");

        Ok(response
            .articles
            .into_iter()
            .map(|article| transform_article(article, None, query.now))
            .collect())
    }
}
