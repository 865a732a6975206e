pub mod error;
pub mod model;
pub mod plan;
pub mod service;
pub mod source;

pub use error::ContentServiceError;
pub use model::{ContentDetails, ContentItem, ContentType};
pub use plan::{plan_sources, SourcePlan};
pub use service::{ContentService, ContentSources, SearchResults, MIN_SEARCH_QUERY_LENGTH};
pub use source::{ContentSource, SearchQuery, SourceError, SourceQuery};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Built-in placeholder content used when live sources yield nothing usable
pub trait ContentCatalog: Send + Sync {
    /// Catalog items whose `category` field equals `category`, dated relative to `now`
    fn items_for_category(&self, category: &str, now: DateTime<Utc>) -> Vec<ContentItem>;

    /// Up to `count` catalog items across all categories, in catalog order
    fn sample(&self, count: usize, now: DateTime<Utc>) -> Vec<ContentItem>;
}

/// Favorite and read marks keyed by content id
pub trait InteractionRepository: Send + Sync {
    /// Returns false when the id was already a favorite
    fn add_favorite(&self, content_id: &str) -> bool;
    /// Returns false when the id was not a favorite
    fn remove_favorite(&self, content_id: &str) -> bool;
    fn is_favorite(&self, content_id: &str) -> bool;
    fn favorites(&self) -> Vec<String>;
    fn mark_read(&self, content_id: &str);
    fn is_read(&self, content_id: &str) -> bool;
}

/// Response for GET /api/favorites
#[derive(Debug, Serialize, Deserialize)]
pub struct FavoritesResponse {
    pub ids: Vec<String>,
}
