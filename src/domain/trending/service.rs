use super::aggregator::{compute_trending, TrendingItem, TrendingPeriod, TrendingQuery};
use super::classifier::{CategoryClassifier, ALL_CATEGORIES};
use crate::domain::content::{ContentCatalog, ContentItem};
use crate::domain::feed::{FeedRequest, FeedServiceApi};
use crate::domain::shared::Clock;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Catalog items ranked when no live content is available
pub const CATALOG_SAMPLE_SIZE: usize = 30;

/// Response for GET /api/trending
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingResponse {
    pub items: Vec<TrendingItem>,
    /// Period and category that produced `items`
    pub period: TrendingPeriod,
    pub category: String,
    /// True when the requested query came back empty and was loosened
    pub relaxed: bool,
    pub generated_at: DateTime<Utc>,
}

/// Rank `items` for `query`, loosening it step by step while nothing qualifies:
/// first the category is dropped, then the window is widened.
pub fn trending_with_fallback(
    items: &[ContentItem],
    query: &TrendingQuery,
    classifier: &CategoryClassifier,
    now: DateTime<Utc>,
) -> TrendingResponse {
    let mut attempts = vec![query.clone()];
    if query.category_or_all() != ALL_CATEGORIES {
        attempts.push(TrendingQuery {
            category: None,
            ..query.clone()
        });
    }
    if query.period.widened() != query.period {
        attempts.push(TrendingQuery {
            period: query.period.widened(),
            category: None,
            limit: query.limit,
        });
    }

    let mut last = query.clone();
    for (step, attempt) in attempts.into_iter().enumerate() {
        let ranked = compute_trending(items, &attempt, classifier, now);
        if !ranked.is_empty() {
            if step > 0 {
                tracing::debug!(
                    requested_period = %query.period,
                    requested_category = query.category_or_all(),
                    period = %attempt.period,
                    "Relaxed trending query"
                );
            }
            return TrendingResponse {
                items: ranked,
                period: attempt.period,
                category: attempt.category_or_all().to_string(),
                relaxed: step > 0,
                generated_at: now,
            };
        }
        last = attempt;
    }

    TrendingResponse {
        items: Vec::new(),
        period: last.period,
        category: last.category_or_all().to_string(),
        relaxed: last != *query,
        generated_at: now,
    }
}

pub struct TrendingService {
    feed_service: Arc<dyn FeedServiceApi>,
    catalog: Arc<dyn ContentCatalog>,
    classifier: Arc<CategoryClassifier>,
    clock: Arc<dyn Clock>,
}

impl TrendingService {
    pub fn new(
        feed_service: Arc<dyn FeedServiceApi>,
        catalog: Arc<dyn ContentCatalog>,
        classifier: Arc<CategoryClassifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            feed_service,
            catalog,
            classifier,
            clock,
        }
    }

    /// Trending view over the first personalized feed page
    pub async fn trending(&self, query: TrendingQuery) -> TrendingResponse {
        let now = self.clock.now();

        let page = self.feed_service.feed(FeedRequest::default()).await;
        let items = if page.items.is_empty() {
            tracing::info!("Feed is empty, ranking catalog sample for trending");
            self.catalog.sample(CATALOG_SAMPLE_SIZE, now)
        } else {
            page.items
        };

        trending_with_fallback(&items, &query, &self.classifier, now)
    }
}
