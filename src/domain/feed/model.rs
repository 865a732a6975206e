use crate::domain::content::{ContentItem, ContentType};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    Today,
    Week,
    Month,
    #[default]
    All,
}

impl DateRange {
    /// Oldest age an item may have to pass the filter; `None` is unbounded
    pub fn max_age(&self) -> Option<Duration> {
        match self {
            DateRange::Today => Some(Duration::days(1)),
            DateRange::Week => Some(Duration::days(7)),
            DateRange::Month => Some(Duration::days(30)),
            DateRange::All => None,
        }
    }
}

impl FromStr for DateRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "today" => Ok(DateRange::Today),
            "week" => Ok(DateRange::Week),
            "month" => Ok(DateRange::Month),
            "all" => Ok(DateRange::All),
            other => Err(format!("Unknown date range: {}", other)),
        }
    }
}

/// Filters picked explicitly by the user for the current view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveFilters {
    /// Literal `ContentItem::category` values; empty means no filter
    pub categories: Vec<String>,
    pub types: Vec<ContentType>,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedRequest {
    pub page: u32,
    pub page_size: Option<u32>,
    pub filters: ActiveFilters,
}

impl Default for FeedRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: None,
            filters: ActiveFilters::default(),
        }
    }
}

impl FeedRequest {
    pub fn effective_page(&self) -> u32 {
        self.page.max(1)
    }

    pub fn effective_page_size(&self, default: u32) -> u32 {
        self.page_size.unwrap_or(default).clamp(1, MAX_PAGE_SIZE)
    }
}

/// Response for GET /api/feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedPage {
    pub items: Vec<ContentItem>,
    pub page: u32,
    pub page_size: u32,
    /// Upstream APIs are paged without a total, so another page is always offered
    pub has_more: bool,
    /// True when the items came from the built-in catalog instead of live sources
    pub fallback: bool,
}
