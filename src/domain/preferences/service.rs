use super::error::PreferencesServiceError;
use super::validation::{MAX_WEIGHT, MIN_WEIGHT};
use super::{
    preference_stats, sanitize_user_preferences, validate_user_preferences, PreferenceStats,
    PreferencesRepository, PreferencesResponse, UpdateCategoryRequest, UserPreferences,
    ValidationResult,
};
use std::sync::Arc;

pub struct PreferencesService {
    repository: Arc<dyn PreferencesRepository>,
}

impl PreferencesService {
    pub fn new(repository: Arc<dyn PreferencesRepository>) -> Self {
        Self { repository }
    }

    pub fn get(&self) -> UserPreferences {
        self.repository.get()
    }

    /// Validate, then sanitize and store a full preference set
    pub fn replace(
        &self,
        preferences: UserPreferences,
    ) -> Result<PreferencesResponse, PreferencesServiceError> {
        let validation = validate_user_preferences(&preferences);
        if !validation.is_valid {
            tracing::info!(errors = ?validation.errors, "Rejected preference update");
            return Err(PreferencesServiceError::Invalid(validation.errors.join("; ")));
        }

        let preferences = sanitize_user_preferences(preferences);
        self.repository.save(preferences.clone());

        tracing::info!(
            enabled = preferences.enabled_categories().count(),
            warnings = validation.warnings.len(),
            "Preferences updated"
        );

        Ok(PreferencesResponse {
            preferences,
            warnings: validation.warnings,
        })
    }

    pub fn validate(&self, preferences: &UserPreferences) -> ValidationResult {
        validate_user_preferences(preferences)
    }

    pub fn stats(&self) -> PreferenceStats {
        preference_stats(&self.repository.get())
    }

    /// Toggle a category and/or set its weight (clamped into range)
    pub fn update_category(
        &self,
        category_id: &str,
        request: UpdateCategoryRequest,
    ) -> Result<UserPreferences, PreferencesServiceError> {
        if request.enabled.is_none() && request.weight.is_none() {
            return Err(PreferencesServiceError::Invalid(
                "Either enabled or weight must be provided".to_string(),
            ));
        }

        let mut preferences = self.repository.get();
        let category = preferences
            .category_mut(category_id)
            .ok_or_else(|| PreferencesServiceError::CategoryNotFound(category_id.to_string()))?;

        if let Some(enabled) = request.enabled {
            category.enabled = enabled;
        }
        if let Some(weight) = request.weight {
            category.weight = weight.clamp(MIN_WEIGHT, MAX_WEIGHT);
        }

        if preferences.enabled_categories().next().is_none() {
            return Err(PreferencesServiceError::Invalid(
                "At least one category must be enabled".to_string(),
            ));
        }

        self.repository.save(preferences.clone());
        tracing::info!(category = %category_id, "Category preference updated");

        Ok(preferences)
    }

    pub fn reset(&self) -> UserPreferences {
        let preferences = UserPreferences::default();
        self.repository.save(preferences.clone());
        tracing::info!("Preferences reset to defaults");
        preferences
    }
}
