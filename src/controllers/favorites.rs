use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::domain::content::{ContentService, FavoritesResponse};
use crate::error::AppResult;

pub struct FavoritesController {
    content_service: Arc<ContentService>,
}

impl FavoritesController {
    pub fn new(content_service: Arc<ContentService>) -> Self {
        Self { content_service }
    }

    /// GET /api/favorites - Favorite content ids
    pub async fn list_favorites(
        State(controller): State<Arc<FavoritesController>>,
    ) -> AppResult<Json<FavoritesResponse>> {
        Ok(Json(FavoritesResponse {
            ids: controller.content_service.favorites(),
        }))
    }

    /// PUT /api/favorites/{contentId} - Mark as favorite
    pub async fn add_favorite(
        State(controller): State<Arc<FavoritesController>>,
        Path(content_id): Path<String>,
    ) -> AppResult<StatusCode> {
        controller.content_service.add_favorite(&content_id)?;
        Ok(StatusCode::NO_CONTENT)
    }

    /// DELETE /api/favorites/{contentId} - Unmark favorite
    pub async fn remove_favorite(
        State(controller): State<Arc<FavoritesController>>,
        Path(content_id): Path<String>,
    ) -> AppResult<StatusCode> {
        controller.content_service.remove_favorite(&content_id)?;
        Ok(StatusCode::NO_CONTENT)
    }

    /// POST /api/content/{contentId}/read - Mark as read
    pub async fn mark_read(
        State(controller): State<Arc<FavoritesController>>,
        Path(content_id): Path<String>,
    ) -> AppResult<StatusCode> {
        controller.content_service.mark_read(&content_id)?;
        Ok(StatusCode::NO_CONTENT)
    }
}
