pub mod error;
pub mod model;
pub mod service;
pub mod validation;

pub use error::PreferencesServiceError;
pub use model::{
    ContentCategory, NotificationRule, NotificationSettings, Theme, UserPreferences,
    DEFAULT_CATEGORY_WEIGHT,
};
pub use service::PreferencesService;
pub use validation::{
    preference_stats, sanitize_user_preferences, validate_category, validate_notification,
    validate_theme, validate_user_preferences, PreferenceStats, ValidationResult,
};

use serde::{Deserialize, Serialize};

/// Holds the single user's preference set
pub trait PreferencesRepository: Send + Sync {
    /// Snapshot of the current preferences
    fn get(&self) -> UserPreferences;
    fn save(&self, preferences: UserPreferences);
}

/// Request to toggle a category or change its weight
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateCategoryRequest {
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default, alias = "priority")]
    pub weight: Option<i32>,
}

/// Response for PUT /api/preferences
#[derive(Debug, Serialize, Deserialize)]
pub struct PreferencesResponse {
    pub preferences: UserPreferences,
    pub warnings: Vec<String>,
}
