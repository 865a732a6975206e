use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use super::parse_param;
use crate::domain::content::{ContentService, SearchResults};
use crate::domain::shared::Clock;
use crate::error::AppResult;

const DEFAULT_SEARCH_PAGE_SIZE: u32 = 20;

/// Raw query string of GET /api/search
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub page_size: Option<String>,
}

pub struct SearchController {
    content_service: Arc<ContentService>,
    clock: Arc<dyn Clock>,
}

impl SearchController {
    pub fn new(content_service: Arc<ContentService>, clock: Arc<dyn Clock>) -> Self {
        Self {
            content_service,
            clock,
        }
    }

    /// GET /api/search?q= - Free-text search across every source
    pub async fn search(
        State(controller): State<Arc<SearchController>>,
        Query(params): Query<SearchParams>,
    ) -> AppResult<Json<SearchResults>> {
        let page_size = parse_param::<u32>("page_size", params.page_size.as_deref())?
            .unwrap_or(DEFAULT_SEARCH_PAGE_SIZE);

        let results = controller
            .content_service
            .search(
                params.q.as_deref().unwrap_or_default(),
                page_size,
                controller.clock.now(),
            )
            .await?;

        Ok(Json(results))
    }
}
