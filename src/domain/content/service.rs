use super::error::ContentServiceError;
use super::{
    ContentItem, ContentSource, InteractionRepository, SearchQuery, SourceError, SourcePlan,
    SourceQuery,
};
use chrono::{DateTime, Utc};
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Shorter queries are rejected before any upstream is called
pub const MIN_SEARCH_QUERY_LENGTH: usize = 2;
const MAX_SEARCH_PAGE_SIZE: u32 = 100;

/// Upstream sources wired into the content service
pub struct ContentSources {
    pub news: Arc<dyn ContentSource>,
    pub movies: Arc<dyn ContentSource>,
    pub social: Arc<dyn ContentSource>,
}

impl ContentSources {
    /// (name, configured) for each source, in fetch order
    pub fn status(&self) -> Vec<(&'static str, bool)> {
        [&self.news, &self.movies, &self.social]
            .iter()
            .map(|source| (source.name(), source.is_configured()))
            .collect()
    }
}

/// Response for GET /api/search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub results: Vec<ContentItem>,
    pub total_results: usize,
}

pub struct ContentService {
    sources: ContentSources,
    interactions: Arc<dyn InteractionRepository>,
    cache: Cache<String, Arc<Vec<ContentItem>>>,
}

impl ContentService {
    pub fn new(
        sources: ContentSources,
        interactions: Arc<dyn InteractionRepository>,
        cache_ttl: Duration,
    ) -> Self {
        let cache = Cache::builder()
            .max_capacity(256)
            .time_to_live(cache_ttl)
            .build();

        Self {
            sources,
            interactions,
            cache,
        }
    }

    pub fn source_status(&self) -> Vec<(&'static str, bool)> {
        self.sources.status()
    }

    /// Fetch one page from every planned source concurrently.
    ///
    /// Sources settle independently: a failing or unconfigured source
    /// contributes nothing. The combined list is ordered newest first and
    /// carries the current favorite/read marks.
    pub async fn fetch_page(
        &self,
        plan: &SourcePlan,
        page: u32,
        items_per_page: u32,
        now: DateTime<Utc>,
    ) -> Vec<ContentItem> {
        let news_query = SourceQuery {
            page,
            page_size: plan.split_page_size,
            category: plan.news_category.clone(),
            now,
        };
        let movies_query = SourceQuery {
            page,
            page_size: items_per_page,
            category: None,
            now,
        };
        let social_query = SourceQuery {
            page,
            page_size: plan.split_page_size,
            category: None,
            now,
        };

        let (news, movies, social) = tokio::join!(
            self.fetch_source(&self.sources.news, &news_query, true),
            self.fetch_source(&self.sources.movies, &movies_query, plan.fetch_movies),
            self.fetch_source(&self.sources.social, &social_query, plan.fetch_social),
        );

        let mut items: Vec<ContentItem> = news
            .iter()
            .chain(movies.iter())
            .chain(social.iter())
            .cloned()
            .collect();

        items.sort_by(|a, b| b.published_at.cmp(&a.published_at));

        tracing::debug!(
            page,
            news = news.len(),
            movies = movies.len(),
            social = social.len(),
            "Fetched content page"
        );

        self.apply_interactions(items)
    }

    /// Stamp favorite/read marks onto freshly fetched items
    pub fn apply_interactions(&self, items: Vec<ContentItem>) -> Vec<ContentItem> {
        items
            .into_iter()
            .map(|mut item| {
                item.is_favorite = self.interactions.is_favorite(&item.id);
                item.is_read = self.interactions.is_read(&item.id);
                item
            })
            .collect()
    }

    /// Search every configured source and merge the hits newest first
    pub async fn search(
        &self,
        text: &str,
        page_size: u32,
        now: DateTime<Utc>,
    ) -> Result<SearchResults, ContentServiceError> {
        let text = text.trim();
        if text.chars().count() < MIN_SEARCH_QUERY_LENGTH {
            return Err(ContentServiceError::Invalid(format!(
                "Search query must be at least {} characters",
                MIN_SEARCH_QUERY_LENGTH
            )));
        }

        let query = SearchQuery {
            text: text.to_string(),
            page: 1,
            page_size: page_size.clamp(1, MAX_SEARCH_PAGE_SIZE),
            now,
        };

        let (news, movies, social) = tokio::join!(
            self.search_source(&self.sources.news, &query),
            self.search_source(&self.sources.movies, &query),
            self.search_source(&self.sources.social, &query),
        );

        let mut results: Vec<ContentItem> = news
            .iter()
            .chain(movies.iter())
            .chain(social.iter())
            .cloned()
            .collect();
        results.sort_by(|a, b| b.published_at.cmp(&a.published_at));

        tracing::info!(
            query = %text,
            news = news.len(),
            movies = movies.len(),
            social = social.len(),
            "Search completed"
        );

        let results = self.apply_interactions(results);
        Ok(SearchResults {
            query: text.to_string(),
            total_results: results.len(),
            results,
        })
    }

    async fn search_source(
        &self,
        source: &Arc<dyn ContentSource>,
        query: &SearchQuery,
    ) -> Arc<Vec<ContentItem>> {
        if !source.is_configured() {
            return Arc::new(Vec::new());
        }
        self.cached(source, query.cache_key(source.name()), source.search(query))
            .await
    }

    async fn fetch_source(
        &self,
        source: &Arc<dyn ContentSource>,
        query: &SourceQuery,
        wanted: bool,
    ) -> Arc<Vec<ContentItem>> {
        if !wanted || !source.is_configured() {
            return Arc::new(Vec::new());
        }
        self.cached(source, query.cache_key(source.name()), source.fetch(query))
            .await
    }

    /// Run `request` through the response cache; failures degrade to no items
    async fn cached<F>(
        &self,
        source: &Arc<dyn ContentSource>,
        key: String,
        request: F,
    ) -> Arc<Vec<ContentItem>>
    where
        F: Future<Output = Result<Vec<ContentItem>, SourceError>>,
    {
        let result = self
            .cache
            .try_get_with(key, async { request.await.map(Arc::new) })
            .await;

        match result {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!(
                    source = source.name(),
                    error = %err,
                    "Content source failed, continuing without it"
                );
                Arc::new(Vec::new())
            }
        }
    }

    pub fn add_favorite(&self, content_id: &str) -> Result<(), ContentServiceError> {
        let content_id = Self::validate_id(content_id)?;
        if self.interactions.add_favorite(content_id) {
            tracing::info!(content_id = %content_id, "Added favorite");
        }
        Ok(())
    }

    pub fn remove_favorite(&self, content_id: &str) -> Result<(), ContentServiceError> {
        let content_id = Self::validate_id(content_id)?;
        if !self.interactions.remove_favorite(content_id) {
            return Err(ContentServiceError::NotFavorite(content_id.to_string()));
        }
        tracing::info!(content_id = %content_id, "Removed favorite");
        Ok(())
    }

    pub fn favorites(&self) -> Vec<String> {
        self.interactions.favorites()
    }

    pub fn mark_read(&self, content_id: &str) -> Result<(), ContentServiceError> {
        let content_id = Self::validate_id(content_id)?;
        self.interactions.mark_read(content_id);
        Ok(())
    }

    fn validate_id(content_id: &str) -> Result<&str, ContentServiceError> {
        let trimmed = content_id.trim();
        if trimmed.is_empty() {
            return Err(ContentServiceError::Invalid(
                "Content id is required".to_string(),
            ));
        }
        Ok(trimmed)
    }
}
