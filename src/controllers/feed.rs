use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use super::{parse_param, split_list};
use crate::domain::content::ContentType;
use crate::domain::feed::{ActiveFilters, DateRange, FeedPage, FeedRequest};
use crate::{
    domain::feed::{FeedService, FeedServiceApi},
    error::{AppError, AppResult},
};

/// Raw query string of GET /api/feed
#[derive(Debug, Default, Deserialize)]
pub struct FeedQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
    /// Comma separated category values, matched exactly
    pub categories: Option<String>,
    /// Comma separated content types
    pub types: Option<String>,
    pub date_range: Option<String>,
}

impl FeedQuery {
    pub fn into_request(self) -> AppResult<FeedRequest> {
        let page = parse_param::<u32>("page", self.page.as_deref())?.unwrap_or(1);
        let page_size = parse_param::<u32>("page_size", self.page_size.as_deref())?;

        let types = split_list(self.types.as_deref())
            .iter()
            .map(|value| {
                value
                    .to_lowercase()
                    .parse::<ContentType>()
                    .map_err(AppError::BadRequest)
            })
            .collect::<AppResult<Vec<_>>>()?;

        let date_range = parse_param::<DateRange>("date_range", self.date_range.as_deref())?
            .unwrap_or_default();

        Ok(FeedRequest {
            page,
            page_size,
            filters: ActiveFilters {
                categories: split_list(self.categories.as_deref()),
                types,
                date_range,
            },
        })
    }
}

pub struct FeedController {
    feed_service: Arc<FeedService>,
}

impl FeedController {
    pub fn new(feed_service: Arc<FeedService>) -> Self {
        Self { feed_service }
    }

    /// GET /api/feed - Personalized content feed
    pub async fn get_feed(
        State(controller): State<Arc<FeedController>>,
        Query(query): Query<FeedQuery>,
    ) -> AppResult<Json<FeedPage>> {
        let request = query.into_request()?;
        let page = controller.feed_service.feed(request).await;
        Ok(Json(page))
    }
}
