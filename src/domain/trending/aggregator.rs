use super::classifier::{CategoryClassifier, ALL_CATEGORIES};
use super::scorer::compute_change_score;
use crate::domain::content::ContentItem;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_TRENDING_LIMIT: usize = 10;

const TREND_UP_THRESHOLD: i64 = 66;
const TREND_DOWN_THRESHOLD: i64 = 33;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendingPeriod {
    Hour,
    #[default]
    Day,
    Week,
}

impl TrendingPeriod {
    pub fn window(&self) -> Duration {
        match self {
            TrendingPeriod::Hour => Duration::hours(1),
            TrendingPeriod::Day => Duration::hours(24),
            TrendingPeriod::Week => Duration::days(7),
        }
    }

    /// Next larger window used when a query comes back empty
    pub fn widened(&self) -> Self {
        match self {
            TrendingPeriod::Hour => TrendingPeriod::Day,
            TrendingPeriod::Day | TrendingPeriod::Week => TrendingPeriod::Week,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrendingPeriod::Hour => "hour",
            TrendingPeriod::Day => "day",
            TrendingPeriod::Week => "week",
        }
    }
}

impl fmt::Display for TrendingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrendingPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hour" => Ok(TrendingPeriod::Hour),
            "day" => Ok(TrendingPeriod::Day),
            // The dashboard offers "month" but it shares the week window
            "week" | "month" => Ok(TrendingPeriod::Week),
            other => Err(format!("Unknown trending period: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    /// Label from the unclamped change score
    pub fn from_score(score: i64) -> Self {
        if score >= TREND_UP_THRESHOLD {
            Trend::Up
        } else if score <= TREND_DOWN_THRESHOLD {
            Trend::Down
        } else {
            Trend::Stable
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingItem {
    pub id: String,
    pub title: String,
    pub category: String,
    pub trend: Trend,
    pub change: i64,
    pub period: TrendingPeriod,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendingQuery {
    pub period: TrendingPeriod,
    pub category: Option<String>,
    pub limit: usize,
}

impl Default for TrendingQuery {
    fn default() -> Self {
        Self {
            period: TrendingPeriod::default(),
            category: None,
            limit: DEFAULT_TRENDING_LIMIT,
        }
    }
}

impl TrendingQuery {
    pub fn category_or_all(&self) -> &str {
        self.category.as_deref().unwrap_or(ALL_CATEGORIES)
    }
}

/// Rank items inside the query's time window by change score.
///
/// Ties keep their input order. An empty result is a normal outcome.
pub fn compute_trending(
    items: &[ContentItem],
    query: &TrendingQuery,
    classifier: &CategoryClassifier,
    now: DateTime<Utc>,
) -> Vec<TrendingItem> {
    let window = query.period.window();
    let category = query.category_or_all();

    let mut scored: Vec<(&ContentItem, i64)> = items
        .iter()
        .filter(|item| item.age(now) <= window)
        .filter(|item| classifier.matches_category(item, category))
        .map(|item| (item, compute_change_score(item, now)))
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    scored
        .into_iter()
        .take(query.limit)
        .map(|(item, score)| TrendingItem {
            id: item.id.clone(),
            title: item.title.clone(),
            category: item.category.clone(),
            trend: Trend::from_score(score),
            change: score.clamp(1, 99),
            period: query.period,
        })
        .collect()
}
