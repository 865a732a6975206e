use super::model::{FeedPage, FeedRequest};
use super::pipeline::{personalize, PersonalizationContext};
use crate::domain::content::{plan_sources, ContentCatalog, ContentService};
use crate::domain::preferences::PreferencesRepository;
use crate::domain::shared::Clock;
use crate::domain::trending::CategoryClassifier;
use async_trait::async_trait;
use std::sync::Arc;

pub struct FeedService {
    content_service: Arc<ContentService>,
    preferences: Arc<dyn PreferencesRepository>,
    catalog: Arc<dyn ContentCatalog>,
    classifier: Arc<CategoryClassifier>,
    clock: Arc<dyn Clock>,
    items_per_page: u32,
}

impl FeedService {
    pub fn new(
        content_service: Arc<ContentService>,
        preferences: Arc<dyn PreferencesRepository>,
        catalog: Arc<dyn ContentCatalog>,
        classifier: Arc<CategoryClassifier>,
        clock: Arc<dyn Clock>,
        items_per_page: u32,
    ) -> Self {
        Self {
            content_service,
            preferences,
            catalog,
            classifier,
            clock,
            items_per_page,
        }
    }
}

#[async_trait]
pub trait FeedServiceApi: Send + Sync {
    async fn feed(&self, request: FeedRequest) -> FeedPage;
}

#[async_trait]
impl FeedServiceApi for FeedService {
    async fn feed(&self, request: FeedRequest) -> FeedPage {
        let now = self.clock.now();
        let page = request.effective_page();
        let page_size = request.effective_page_size(self.items_per_page);

        let preferences = self.preferences.get();
        let plan = plan_sources(&preferences.enabled_ids(), page_size);

        tracing::debug!(
            page,
            page_size,
            news_category = ?plan.news_category,
            fetch_movies = plan.fetch_movies,
            fetch_social = plan.fetch_social,
            "Building feed page"
        );

        let items = self
            .content_service
            .fetch_page(&plan, page, page_size, now)
            .await;

        let ctx = PersonalizationContext {
            filters: &request.filters,
            categories: &preferences.categories,
            catalog: self.catalog.as_ref(),
            classifier: self.classifier.as_ref(),
            page_size: page_size as usize,
            now,
        };
        let personalized = personalize(items, &ctx);

        FeedPage {
            // Catalog items carry interaction marks too
            items: self.content_service.apply_interactions(personalized.items),
            page,
            page_size,
            has_more: true,
            fallback: personalized.fallback,
        }
    }
}
