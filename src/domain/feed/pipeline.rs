use super::model::ActiveFilters;
use crate::domain::content::{ContentCatalog, ContentItem};
use crate::domain::preferences::ContentCategory;
use crate::domain::trending::CategoryClassifier;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Everything the personalization pipeline reads besides the items
pub struct PersonalizationContext<'a> {
    pub filters: &'a ActiveFilters,
    pub categories: &'a [ContentCategory],
    pub catalog: &'a dyn ContentCatalog,
    pub classifier: &'a CategoryClassifier,
    pub page_size: usize,
    pub now: DateTime<Utc>,
}

impl PersonalizationContext<'_> {
    fn enabled_ids(&self) -> Vec<&str> {
        self.categories
            .iter()
            .filter(|c| c.enabled)
            .map(|c| c.id.as_str())
            .collect()
    }

    /// Weight of the enabled preference category named exactly `category`
    fn weight_of(&self, category: &str) -> i32 {
        self.categories
            .iter()
            .find(|c| c.enabled && c.id == category)
            .map(|c| c.weight)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Personalized {
    pub items: Vec<ContentItem>,
    /// Set when preference gating emptied the list and catalog items were used
    pub fallback: bool,
}

/// Run the feed personalization steps in order.
///
/// Every step is total. With no enabled categories the preference steps
/// are skipped entirely.
pub fn personalize(items: Vec<ContentItem>, ctx: &PersonalizationContext<'_>) -> Personalized {
    let items = dedupe_by_id(items);
    let items = apply_explicit_filters(items, ctx.filters);

    let enabled = ctx.enabled_ids();
    let (items, fallback) = if enabled.is_empty() {
        (items, false)
    } else {
        let gated = gate_by_preferences(items, &enabled, ctx.classifier);
        if gated.is_empty() {
            (synthesize_fallback(&enabled, ctx), true)
        } else {
            (gated, false)
        }
    };

    let items = apply_date_range(items, ctx.filters, ctx.now);
    let items = sort_by_priority(items, ctx);

    Personalized { items, fallback }
}

/// First occurrence of each id wins
pub fn dedupe_by_id(items: Vec<ContentItem>) -> Vec<ContentItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.id.clone()))
        .collect()
}

pub fn apply_explicit_filters(items: Vec<ContentItem>, filters: &ActiveFilters) -> Vec<ContentItem> {
    items
        .into_iter()
        .filter(|item| filters.categories.is_empty() || filters.categories.contains(&item.category))
        .filter(|item| filters.types.is_empty() || filters.types.contains(&item.content_type()))
        .collect()
}

pub fn gate_by_preferences(
    items: Vec<ContentItem>,
    enabled: &[&str],
    classifier: &CategoryClassifier,
) -> Vec<ContentItem> {
    items
        .into_iter()
        .filter(|item| {
            enabled
                .iter()
                .any(|category| classifier.matches_category(item, category))
        })
        .collect()
}

/// Catalog items for each enabled category, in preference order
fn synthesize_fallback(enabled: &[&str], ctx: &PersonalizationContext<'_>) -> Vec<ContentItem> {
    let items: Vec<ContentItem> = enabled
        .iter()
        .flat_map(|category| ctx.catalog.items_for_category(category, ctx.now))
        .take(ctx.page_size)
        .collect();

    tracing::info!(
        categories = ?enabled,
        count = items.len(),
        "No live items matched enabled categories, using fallback catalog"
    );

    items
}

pub fn apply_date_range(
    items: Vec<ContentItem>,
    filters: &ActiveFilters,
    now: DateTime<Utc>,
) -> Vec<ContentItem> {
    match filters.date_range.max_age() {
        Some(max_age) => items
            .into_iter()
            .filter(|item| item.age(now) <= max_age)
            .collect(),
        None => items,
    }
}

/// Heavier enabled categories first, then newest first. Stable.
pub fn sort_by_priority(
    mut items: Vec<ContentItem>,
    ctx: &PersonalizationContext<'_>,
) -> Vec<ContentItem> {
    items.sort_by(|a, b| {
        ctx.weight_of(&b.category)
            .cmp(&ctx.weight_of(&a.category))
            .then_with(|| b.published_at.cmp(&a.published_at))
    });
    items
}
