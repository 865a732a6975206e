/// Which upstream sources to query for one feed page, derived from the
/// user's enabled categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePlan {
    pub news_category: Option<String>,
    pub fetch_movies: bool,
    pub fetch_social: bool,
    /// Page size for the news and social requests
    pub split_page_size: u32,
}

/// Preference category ids that NewsAPI understands, and what it calls them
const NEWS_API_CATEGORIES: &[(&str, &str)] = &[
    ("technology", "technology"),
    ("sports", "sports"),
    ("finance", "business"),
    ("health", "health"),
    ("science", "science"),
    ("entertainment", "entertainment"),
];

pub fn plan_sources(enabled_categories: &[String], items_per_page: u32) -> SourcePlan {
    let mappable: Vec<&str> = enabled_categories
        .iter()
        .filter_map(|id| {
            NEWS_API_CATEGORIES
                .iter()
                .find(|(pref, _)| pref == id)
                .map(|(_, news)| *news)
        })
        .collect();

    // Only a single unambiguous choice narrows the headline request
    let news_category = match mappable.as_slice() {
        [single] => Some(single.to_string()),
        _ => None,
    };

    let fetch_movies = enabled_categories.is_empty()
        || enabled_categories.iter().any(|id| id == "entertainment");

    // A single topical focus keeps the feed tight
    let fetch_social = enabled_categories.len() != 1;

    SourcePlan {
        news_category,
        fetch_movies,
        fetch_social,
        split_page_size: items_per_page.div_ceil(3).max(1),
    }
}
