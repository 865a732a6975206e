use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use std::sync::Arc;

use crate::domain::preferences::{
    PreferenceStats, PreferencesResponse, PreferencesService, UpdateCategoryRequest,
    UserPreferences, ValidationResult,
};
use crate::error::AppResult;

pub struct PreferencesController {
    preferences_service: Arc<PreferencesService>,
}

impl PreferencesController {
    pub fn new(preferences_service: Arc<PreferencesService>) -> Self {
        Self {
            preferences_service,
        }
    }

    /// GET /api/preferences - Current preferences
    pub async fn get_preferences(
        State(controller): State<Arc<PreferencesController>>,
    ) -> AppResult<Json<UserPreferences>> {
        Ok(Json(controller.preferences_service.get()))
    }

    /// PUT /api/preferences - Replace the full preference set
    pub async fn replace_preferences(
        State(controller): State<Arc<PreferencesController>>,
        payload: Result<Json<UserPreferences>, JsonRejection>,
    ) -> AppResult<Json<PreferencesResponse>> {
        let Json(preferences) = payload?;
        let response = controller.preferences_service.replace(preferences)?;
        Ok(Json(response))
    }

    /// POST /api/preferences/validate - Validation report without saving
    pub async fn validate_preferences(
        State(controller): State<Arc<PreferencesController>>,
        payload: Result<Json<UserPreferences>, JsonRejection>,
    ) -> AppResult<Json<ValidationResult>> {
        let Json(preferences) = payload?;
        Ok(Json(controller.preferences_service.validate(&preferences)))
    }

    /// GET /api/preferences/stats - Summary of the stored preferences
    pub async fn get_stats(
        State(controller): State<Arc<PreferencesController>>,
    ) -> AppResult<Json<PreferenceStats>> {
        Ok(Json(controller.preferences_service.stats()))
    }

    /// POST /api/preferences/reset - Restore defaults
    pub async fn reset_preferences(
        State(controller): State<Arc<PreferencesController>>,
    ) -> AppResult<Json<UserPreferences>> {
        Ok(Json(controller.preferences_service.reset()))
    }

    /// PATCH /api/preferences/categories/{categoryId} - Toggle or reweight one category
    pub async fn update_category(
        State(controller): State<Arc<PreferencesController>>,
        Path(category_id): Path<String>,
        payload: Result<Json<UpdateCategoryRequest>, JsonRejection>,
    ) -> AppResult<Json<UserPreferences>> {
        let Json(request) = payload?;
        let preferences = controller
            .preferences_service
            .update_category(&category_id, request)?;
        Ok(Json(preferences))
    }
}
