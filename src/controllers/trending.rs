use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use super::parse_param;
use crate::domain::trending::{
    TrendingPeriod, TrendingQuery, TrendingResponse, TrendingService, ALL_CATEGORIES,
    DEFAULT_TRENDING_LIMIT,
};
use crate::error::{AppError, AppResult};

pub const MAX_TRENDING_LIMIT: usize = 100;

/// Raw query string of GET /api/trending
#[derive(Debug, Default, Deserialize)]
pub struct TrendingParams {
    pub period: Option<String>,
    pub category: Option<String>,
    pub limit: Option<String>,
}

impl TrendingParams {
    pub fn into_query(self) -> AppResult<TrendingQuery> {
        let period = parse_param::<TrendingPeriod>("period", self.period.as_deref())?
            .unwrap_or_default();

        let limit = parse_param::<usize>("limit", self.limit.as_deref())?
            .unwrap_or(DEFAULT_TRENDING_LIMIT);
        if limit == 0 {
            return Err(AppError::BadRequest("limit must be at least 1".to_string()));
        }

        let category = self
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty() && c != ALL_CATEGORIES);

        Ok(TrendingQuery {
            period,
            category,
            limit: limit.min(MAX_TRENDING_LIMIT),
        })
    }
}

pub struct TrendingController {
    trending_service: Arc<TrendingService>,
}

impl TrendingController {
    pub fn new(trending_service: Arc<TrendingService>) -> Self {
        Self { trending_service }
    }

    /// GET /api/trending - Ranked trending items for a period and category
    pub async fn get_trending(
        State(controller): State<Arc<TrendingController>>,
        Query(params): Query<TrendingParams>,
    ) -> AppResult<Json<TrendingResponse>> {
        let query = params.into_query()?;
        let response = controller.trending_service.trending(query).await;
        Ok(Json(response))
    }
}
