use super::validation::validate_theme;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_CATEGORY_WEIGHT: i32 = 3;

fn default_weight() -> i32 {
    DEFAULT_CATEGORY_WEIGHT
}

/// A topic the user can switch on and rank in their feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentCategory {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(alias = "priority", default = "default_weight")]
    pub weight: i32,
}

impl ContentCategory {
    pub fn new(id: &str, name: &str, enabled: bool, weight: i32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            enabled,
            weight,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Theme {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let result = validate_theme(&value);
        if !result.is_valid {
            return Err(result.errors.join(", "));
        }

        Ok(match value.as_str() {
            "dark" => Theme::Dark,
            "system" => Theme::System,
            _ => Theme::Light,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRule {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub enabled: bool,
}

/// Notifications are either switched off or configured with explicit rules
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "rules", rename_all = "lowercase")]
pub enum NotificationSettings {
    #[default]
    Disabled,
    Enabled(Vec<NotificationRule>),
}

impl NotificationSettings {
    pub fn rules(&self) -> &[NotificationRule] {
        match self {
            NotificationSettings::Disabled => &[],
            NotificationSettings::Enabled(rules) => rules,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default)]
    pub categories: Vec<ContentCategory>,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub notifications: NotificationSettings,
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            categories: vec![
                ContentCategory::new("technology", "Technology", true, 1),
                ContentCategory::new("sports", "Sports", true, 2),
                ContentCategory::new("finance", "Finance", true, 3),
                ContentCategory::new("entertainment", "Entertainment", true, 4),
                ContentCategory::new("health", "Health", false, 5),
                ContentCategory::new("science", "Science", false, 6),
            ],
            theme: Theme::default(),
            language: default_language(),
            notifications: NotificationSettings::default(),
        }
    }
}

impl UserPreferences {
    pub fn enabled_categories(&self) -> impl Iterator<Item = &ContentCategory> {
        self.categories.iter().filter(|c| c.enabled)
    }

    pub fn enabled_ids(&self) -> Vec<String> {
        self.enabled_categories().map(|c| c.id.clone()).collect()
    }

    pub fn category_mut(&mut self, id: &str) -> Option<&mut ContentCategory> {
        self.categories.iter_mut().find(|c| c.id == id)
    }
}
