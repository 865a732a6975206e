use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Closed set of structurally different content shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "news")]
    News,
    #[serde(rename = "recommendation")]
    Recommendation,
    #[serde(rename = "social")]
    Social,
}

impl ContentType {
    pub const ALL: [ContentType; 3] = [
        ContentType::News,
        ContentType::Recommendation,
        ContentType::Social,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::News => "news",
            ContentType::Recommendation => "recommendation",
            ContentType::Social => "social",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "news" => Ok(ContentType::News),
            "recommendation" => Ok(ContentType::Recommendation),
            "social" => Ok(ContentType::Social),
            other => Err(format!("Invalid content type: {}", other)),
        }
    }
}

/// Type-specific fields; the tag doubles as the item's `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ContentDetails {
    #[serde(rename = "news")]
    News {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        author: Option<String>,
        #[serde(default)]
        tags: Vec<String>,
    },
    #[serde(rename = "recommendation")]
    Recommendation {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rating: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        genre: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        year: Option<i32>,
    },
    #[serde(rename = "social")]
    Social {
        author: String,
        #[serde(default)]
        likes: u64,
        #[serde(default)]
        shares: u64,
        #[serde(default)]
        comments: u64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        platform: Option<String>,
        #[serde(default)]
        hashtags: Vec<String>,
    },
}

impl ContentDetails {
    pub fn news() -> Self {
        ContentDetails::News {
            author: None,
            tags: Vec::new(),
        }
    }

    pub fn recommendation() -> Self {
        ContentDetails::Recommendation {
            rating: None,
            genre: None,
            year: None,
        }
    }

    pub fn social(author: impl Into<String>) -> Self {
        ContentDetails::Social {
            author: author.into(),
            likes: 0,
            shares: 0,
            comments: 0,
            platform: None,
            hashtags: Vec::new(),
        }
    }

    pub fn content_type(&self) -> ContentType {
        match self {
            ContentDetails::News { .. } => ContentType::News,
            ContentDetails::Recommendation { .. } => ContentType::Recommendation,
            ContentDetails::Social { .. } => ContentType::Social,
        }
    }
}

/// A single aggregated article, movie or social post in normalized shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub source: String,
    pub category: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub is_read: bool,
    #[serde(flatten)]
    pub details: ContentDetails,
}

impl ContentItem {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        published_at: DateTime<Utc>,
        details: ContentDetails,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            source: String::new(),
            category: category.into(),
            url: String::new(),
            image_url: None,
            published_at,
            is_favorite: false,
            is_read: false,
            details,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn content_type(&self) -> ContentType {
        self.details.content_type()
    }

    /// Elapsed time since publication; negative for items dated in the future
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now.signed_duration_since(self.published_at)
    }

    /// Case-insensitive substring match on title, description and tags
    pub fn matches_text(&self, text: &str) -> bool {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return false;
        }

        let tags: &[String] = match &self.details {
            ContentDetails::News { tags, .. } => tags,
            ContentDetails::Social { hashtags, .. } => hashtags,
            ContentDetails::Recommendation { .. } => &[],
        };

        [self.title.as_str(), self.description.as_str()]
            .into_iter()
            .chain(tags.iter().map(String::as_str))
            .any(|field| field.to_lowercase().contains(&needle))
    }
}
