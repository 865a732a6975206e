use crate::domain::content::{ContentItem, ContentType};
use std::collections::HashMap;
use std::path::Path;

/// Pseudo-category that matches every item
pub const ALL_CATEGORIES: &str = "all";

const DEFAULT_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "technology",
        &["tech", "ai", "software", "app", "computer", "startup", "device", "chip", "cloud"],
    ),
    (
        "sports",
        &["sport", "match", "league", "football", "cricket", "nba", "fifa", "tennis"],
    ),
    (
        "finance",
        &["stock", "market", "finance", "crypto", "bitcoin", "bank", "economy"],
    ),
    (
        "entertainment",
        &["movie", "film", "series", "music", "show", "celebrity", "tv"],
    ),
    (
        "health",
        &["health", "medical", "vaccine", "covid", "hospital", "fitness"],
    ),
    (
        "science",
        &["science", "research", "study", "nasa", "space", "physics", "biology"],
    ),
    (
        "politics",
        &["election", "government", "policy", "minister", "president", "parliament"],
    ),
    (
        "environment",
        &["climate", "environment", "green", "renewable", "emissions", "sustainability"],
    ),
];

#[derive(Debug, thiserror::Error)]
pub enum KeywordTableError {
    #[error("failed to read keyword table: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse keyword table: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Category -> keyword list used by the fuzzy classifier.
///
/// Keywords are stored trimmed and lowercased; empty keywords are dropped
/// since they would match every item.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordTable {
    categories: HashMap<String, Vec<String>>,
}

impl KeywordTable {
    pub fn new(categories: HashMap<String, Vec<String>>) -> Self {
        let categories = categories
            .into_iter()
            .map(|(category, keywords)| {
                let keywords = keywords
                    .into_iter()
                    .map(|k| k.trim().to_lowercase())
                    .filter(|k| !k.is_empty())
                    .collect();
                (category, keywords)
            })
            .collect();

        Self { categories }
    }

    /// Parse a JSON object of the form `{"category": ["kw", ...]}`
    pub fn from_json_str(json: &str) -> Result<Self, KeywordTableError> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(json)?;
        Ok(Self::new(raw))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, KeywordTableError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn keywords(&self, category: &str) -> &[String] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Category names, sorted for stable output
    pub fn categories(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.categories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        let categories = DEFAULT_KEYWORDS
            .iter()
            .map(|(category, keywords)| {
                (
                    category.to_string(),
                    keywords.iter().map(|k| k.to_string()).collect(),
                )
            })
            .collect();

        Self::new(categories)
    }
}

/// Decides whether a content item belongs to a category.
///
/// Content types (`news`, `recommendation`, `social`) match structurally on
/// the item's type. Every other category is a case-insensitive substring
/// test of its keywords against title, description and source. The match
/// is permissive on purpose and false positives are accepted.
#[derive(Debug, Clone, Default)]
pub struct CategoryClassifier {
    table: KeywordTable,
}

impl CategoryClassifier {
    pub fn new(table: KeywordTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &KeywordTable {
        &self.table
    }

    pub fn matches_category(&self, item: &ContentItem, category: &str) -> bool {
        if category == ALL_CATEGORIES {
            return true;
        }

        if let Ok(content_type) = category.parse::<ContentType>() {
            return item.content_type() == content_type;
        }

        let keywords = self.table.keywords(category);
        if keywords.is_empty() {
            return false;
        }

        let haystack = Self::haystack(item);
        keywords.iter().any(|k| haystack.contains(k.as_str()))
    }

    /// Every keyword category the item matches, plus its content type
    pub fn categories_of(&self, item: &ContentItem) -> Vec<String> {
        let haystack = Self::haystack(item);
        let mut categories: Vec<String> = self
            .table
            .categories()
            .into_iter()
            .filter(|category| {
                self.table
                    .keywords(category)
                    .iter()
                    .any(|k| haystack.contains(k.as_str()))
            })
            .map(str::to_string)
            .collect();

        categories.push(item.content_type().as_str().to_string());
        categories
    }

    fn haystack(item: &ContentItem) -> String {
        format!("{} {} {}", item.title, item.description, item.source).to_lowercase()
    }
}
