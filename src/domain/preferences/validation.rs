use super::model::{ContentCategory, NotificationRule, NotificationSettings, UserPreferences};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

pub const MIN_WEIGHT: i32 = 1;
pub const MAX_WEIGHT: i32 = 10;
const LOW_WEIGHT_WARNING: i32 = 3;
const HIGH_WEIGHT_WARNING: i32 = 8;
const MAX_CATEGORY_NAME: usize = 50;
const MAX_CATEGORY_DESCRIPTION: usize = 200;
const MAX_NOTIFICATION_NAME: usize = 100;
const MAX_NOTIFICATION_DESCRIPTION: usize = 300;
const MAX_ENABLED_CATEGORIES: usize = 8;
const MAX_TOTAL_WEIGHT: i64 = 50;

pub const VALID_THEMES: [&str; 3] = ["light", "dark", "system"];

static NOTIFICATION_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z_]+$").expect("notification type pattern is valid"));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn from_parts(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn validate_category(category: &ContentCategory) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if is_blank(&category.id) {
        errors.push("Category ID is required".to_string());
    }
    if is_blank(&category.name) {
        errors.push("Category name is required".to_string());
    }

    if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&category.weight) {
        errors.push(format!(
            "Category weight must be between {} and {}",
            MIN_WEIGHT, MAX_WEIGHT
        ));
    }
    if category.weight < LOW_WEIGHT_WARNING {
        warnings.push("Low weight may result in less content from this category".to_string());
    }
    if category.weight > HIGH_WEIGHT_WARNING {
        warnings.push("High weight may dominate your feed".to_string());
    }

    if char_len(&category.name) > MAX_CATEGORY_NAME {
        errors.push(format!(
            "Category name must be {} characters or less",
            MAX_CATEGORY_NAME
        ));
    }
    if let Some(description) = &category.description {
        if char_len(description) > MAX_CATEGORY_DESCRIPTION {
            errors.push(format!(
                "Category description must be {} characters or less",
                MAX_CATEGORY_DESCRIPTION
            ));
        }
    }

    ValidationResult::from_parts(errors, warnings)
}

pub fn validate_notification(rule: &NotificationRule) -> ValidationResult {
    let mut errors = Vec::new();

    if is_blank(&rule.kind) {
        errors.push("Notification type is required".to_string());
    } else if !NOTIFICATION_TYPE.is_match(&rule.kind) {
        errors.push(
            "Notification type must contain only lowercase letters and underscores".to_string(),
        );
    }
    if is_blank(&rule.name) {
        errors.push("Notification name is required".to_string());
    }

    if char_len(&rule.name) > MAX_NOTIFICATION_NAME {
        errors.push(format!(
            "Notification name must be {} characters or less",
            MAX_NOTIFICATION_NAME
        ));
    }
    if let Some(description) = &rule.description {
        if char_len(description) > MAX_NOTIFICATION_DESCRIPTION {
            errors.push(format!(
                "Notification description must be {} characters or less",
                MAX_NOTIFICATION_DESCRIPTION
            ));
        }
    }

    ValidationResult::from_parts(errors, Vec::new())
}

/// Values that repeat after trimming and lowercasing, each reported at its
/// repeated positions
fn duplicates<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values
        .filter(|value| !seen.insert(value.trim().to_lowercase()))
        .collect()
}

pub fn validate_user_preferences(preferences: &UserPreferences) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if preferences.categories.is_empty() {
        errors.push("At least one category must be configured".to_string());
    } else {
        for (index, category) in preferences.categories.iter().enumerate() {
            let result = validate_category(category);
            if !result.is_valid {
                errors.push(format!(
                    "Category {} ({}): {}",
                    index + 1,
                    category.id,
                    result.errors.join(", ")
                ));
            }
            warnings.extend(
                result
                    .warnings
                    .into_iter()
                    .map(|w| format!("Category {}: {}", category.id, w)),
            );
        }

        let duplicate_ids = duplicates(preferences.categories.iter().map(|c| c.id.as_str()));
        if !duplicate_ids.is_empty() {
            errors.push(format!(
                "Duplicate category IDs found: {}",
                duplicate_ids.join(", ")
            ));
        }

        let enabled: Vec<&ContentCategory> = preferences.enabled_categories().collect();
        if enabled.is_empty() {
            errors.push("At least one category must be enabled".to_string());
        }
        if enabled.len() > MAX_ENABLED_CATEGORIES {
            warnings.push("Too many enabled categories may result in a cluttered feed".to_string());
        }

        let total_weight: i64 = enabled.iter().map(|c| i64::from(c.weight)).sum();
        if total_weight > MAX_TOTAL_WEIGHT {
            warnings.push("High total weight may cause performance issues".to_string());
        }
    }

    match &preferences.notifications {
        NotificationSettings::Disabled => {}
        NotificationSettings::Enabled(rules) if rules.is_empty() => {
            warnings.push("No notification preferences configured".to_string());
        }
        NotificationSettings::Enabled(rules) => {
            for (index, rule) in rules.iter().enumerate() {
                let result = validate_notification(rule);
                if !result.is_valid {
                    errors.push(format!(
                        "Notification {} ({}): {}",
                        index + 1,
                        rule.kind,
                        result.errors.join(", ")
                    ));
                }
            }

            let duplicate_types = duplicates(rules.iter().map(|r| r.kind.as_str()));
            if !duplicate_types.is_empty() {
                errors.push(format!(
                    "Duplicate notification types found: {}",
                    duplicate_types.join(", ")
                ));
            }
        }
    }

    ValidationResult::from_parts(errors, warnings)
}

pub fn validate_theme(theme: &str) -> ValidationResult {
    let mut errors = Vec::new();
    if !VALID_THEMES.contains(&theme) {
        errors.push(format!(
            "Invalid theme: {}. Must be one of: {}",
            theme,
            VALID_THEMES.join(", ")
        ));
    }
    ValidationResult::from_parts(errors, Vec::new())
}

fn trimmed_description(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}

/// Normalize ids and text fields and pull weights into range
pub fn sanitize_user_preferences(preferences: UserPreferences) -> UserPreferences {
    let categories = preferences
        .categories
        .into_iter()
        .map(|category| ContentCategory {
            id: category.id.trim().to_lowercase(),
            name: category.name.trim().to_string(),
            description: trimmed_description(category.description),
            enabled: category.enabled,
            weight: category.weight.clamp(MIN_WEIGHT, MAX_WEIGHT),
        })
        .collect();

    let notifications = match preferences.notifications {
        NotificationSettings::Disabled => NotificationSettings::Disabled,
        NotificationSettings::Enabled(rules) => NotificationSettings::Enabled(
            rules
                .into_iter()
                .map(|rule| NotificationRule {
                    kind: rule.kind.trim().to_lowercase(),
                    name: rule.name.trim().to_string(),
                    description: trimmed_description(rule.description),
                    enabled: rule.enabled,
                })
                .collect(),
        ),
    };

    UserPreferences {
        categories,
        notifications,
        ..preferences
    }
}

/// Response for GET /api/preferences/stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceStats {
    pub total_categories: usize,
    pub enabled_categories: usize,
    pub disabled_categories: usize,
    pub total_notifications: usize,
    pub enabled_notifications: usize,
    pub total_weight: i64,
    pub average_weight: f64,
    /// Enabled category id -> share of total enabled weight, in percent
    pub weight_distribution: BTreeMap<String, f64>,
    pub coverage: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn preference_stats(preferences: &UserPreferences) -> PreferenceStats {
    let enabled: Vec<&ContentCategory> = preferences.enabled_categories().collect();
    let rules = preferences.notifications.rules();

    let total_weight: i64 = enabled.iter().map(|c| i64::from(c.weight)).sum();
    let average_weight = if enabled.is_empty() {
        0.0
    } else {
        total_weight as f64 / enabled.len() as f64
    };

    let weight_distribution = enabled
        .iter()
        .map(|c| {
            let share = if total_weight > 0 {
                f64::from(c.weight) / total_weight as f64 * 100.0
            } else {
                0.0
            };
            (c.id.clone(), round2(share))
        })
        .collect();

    let total_categories = preferences.categories.len();
    let coverage = if total_categories == 0 {
        0.0
    } else {
        enabled.len() as f64 / total_categories as f64
    };

    PreferenceStats {
        total_categories,
        enabled_categories: enabled.len(),
        disabled_categories: total_categories - enabled.len(),
        total_notifications: rules.len(),
        enabled_notifications: rules.iter().filter(|r| r.enabled).count(),
        total_weight,
        average_weight: round2(average_weight),
        weight_distribution,
        coverage,
    }
}
