use crate::domain::content::{ContentCatalog, ContentDetails, ContentItem};
use chrono::{DateTime, Duration, Utc};
use std::sync::LazyLock;

/// A catalog entry and how long before "now" it is dated
struct CatalogEntry {
    minutes_ago: i64,
    item: ContentItem,
}

fn entry(
    minutes_ago: i64,
    id: &str,
    title: &str,
    description: &str,
    source: &str,
    category: &str,
    details: ContentDetails,
) -> CatalogEntry {
    CatalogEntry {
        minutes_ago,
        item: ContentItem::new(id, title, category, DateTime::<Utc>::default(), details)
            .with_description(description)
            .with_source(source)
            .with_url(format!("https://example.com/{}", id)),
    }
}

fn news(author: &str, tags: &[&str]) -> ContentDetails {
    ContentDetails::News {
        author: Some(author.to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn movie(rating: f64, genre: &str, year: i32) -> ContentDetails {
    ContentDetails::Recommendation {
        rating: Some(rating),
        genre: Some(genre.to_string()),
        year: Some(year),
    }
}

fn post(author: &str, platform: &str, likes: u64, shares: u64, comments: u64, hashtags: &[&str]) -> ContentDetails {
    ContentDetails::Social {
        author: author.to_string(),
        likes,
        shares,
        comments,
        platform: Some(platform.to_string()),
        hashtags: hashtags.iter().map(|t| t.to_string()).collect(),
    }
}

// Every title or description carries a keyword of its own category so that
// catalog items survive preference gating.
static CATALOG: LazyLock<Vec<CatalogEntry>> = LazyLock::new(|| {
    vec![
        entry(
            30,
            "mock-news-1",
            "Revolutionary AI Breakthrough Changes Everything",
            "A new AI model understands context like never before, reshaping how we use technology.",
            "TechNews",
            "technology",
            news("Dr. Sarah Johnson", &["AI", "technology", "breakthrough"]),
        ),
        entry(
            45,
            "mock-social-1",
            "Just finished reading an amazing book about AI ethics",
            "Highly recommend it to anyone building software today.",
            "Twitter",
            "technology",
            post("@techguru", "Twitter", 1250, 89, 156, &["#AI", "#Ethics"]),
        ),
        entry(
            60,
            "mock-news-2",
            "Major Sports League Announces New Season Format",
            "The league introduces changes to make every match more exciting for fans.",
            "SportsDaily",
            "sports",
            news("Mike Wilson", &["sports", "league", "season"]),
        ),
        entry(
            75,
            "mock-news-3",
            "Stock Market Reaches New All-Time High",
            "Major indices surge as investors show renewed confidence in the global economy.",
            "FinanceToday",
            "finance",
            news("Jennifer Chen", &["finance", "market", "stocks"]),
        ),
        entry(
            90,
            "mock-movie-1",
            "The Future Chronicles",
            "A sci-fi film about humanity's journey to the stars.",
            "TMDB",
            "entertainment",
            movie(8.5, "Sci-Fi, Adventure", 2024),
        ),
        entry(
            120,
            "mock-news-4",
            "Breakthrough in Renewable Energy Storage",
            "New solar panels promise to make clean, renewable power cheaper than ever.",
            "GreenTech",
            "environment",
            news("Alex Rodriguez", &["renewable", "energy", "solar"]),
        ),
        entry(
            150,
            "mock-news-5",
            "New Study Reveals Health Benefits of Exercise",
            "Regular physical activity significantly improves mental health and longevity.",
            "HealthWeekly",
            "health",
            news("Dr. Emily Brown", &["health", "exercise", "research"]),
        ),
        entry(
            180,
            "mock-social-2",
            "Why I'm bullish on renewable energy stocks this year",
            "Market analysis thread on the green transition.",
            "LinkedIn",
            "finance",
            post("@marketwatcher", "LinkedIn", 567, 123, 45, &["#Stocks", "#Renewable"]),
        ),
        entry(
            210,
            "mock-news-6",
            "NASA Mission Sends Back First Images From Deep Space",
            "Scientists say the data could reshape our understanding of planet formation.",
            "ScienceDaily",
            "science",
            news("Priya Natarajan", &["nasa", "space", "science"]),
        ),
        entry(
            240,
            "mock-movie-2",
            "Ocean Dreams",
            "A film following marine biologists racing to protect coral reefs from climate change.",
            "TMDB",
            "entertainment",
            movie(7.8, "Documentary, Drama", 2023),
        ),
        entry(
            270,
            "mock-news-7",
            "Parliament Debates New Election Funding Rules",
            "Ministers clash over proposed limits on campaign donations.",
            "PolicyWire",
            "politics",
            news("Tom Hughes", &["parliament", "election", "policy"]),
        ),
        entry(
            300,
            "mock-social-3",
            "Hospital volunteers share tips for staying fit on night shifts",
            "Small fitness habits that keep medical staff going.",
            "Instagram",
            "health",
            post("@nightshiftnurse", "Instagram", 2100, 310, 98, &["#Health", "#Fitness"]),
        ),
        entry(
            330,
            "mock-news-8",
            "Startup Unveils Pocket Device for Offline Translation",
            "The company says its new chip runs speech models without the cloud.",
            "GadgetHub",
            "technology",
            news("Lena Park", &["startup", "device", "chip"]),
        ),
        entry(
            360,
            "mock-news-9",
            "Tennis Star Wins Record Fifth Title",
            "A dominant final match seals a historic season.",
            "SportsDaily",
            "sports",
            news("Carlos Mendes", &["tennis", "sport", "record"]),
        ),
        entry(
            420,
            "mock-news-10",
            "Central Bank Holds Rates as Crypto Markets Swing",
            "Policymakers signal caution while bitcoin volatility returns.",
            "FinanceToday",
            "finance",
            news("Jennifer Chen", &["bank", "crypto", "economy"]),
        ),
        entry(
            480,
            "mock-social-4",
            "Climate march draws record crowds downtown",
            "Organizers call for faster cuts to emissions.",
            "Twitter",
            "environment",
            post("@greenearth", "Twitter", 3400, 234, 89, &["#Climate", "#Sustainability"]),
        ),
        entry(
            540,
            "mock-movie-3",
            "Digital Revolution",
            "A music-driven series chronicling the rise of the internet.",
            "TMDB",
            "entertainment",
            movie(8.1, "Documentary, History", 2023),
        ),
        entry(
            600,
            "mock-news-11",
            "Biology Lab Maps Protein Folding in Record Time",
            "Researchers combine physics simulations with new imaging methods.",
            "ScienceDaily",
            "science",
            news("Priya Natarajan", &["biology", "research", "physics"]),
        ),
    ]
});

/// Built-in placeholder content, always dated just before the caller's "now"
#[derive(Debug, Default)]
pub struct HardcodedContentCatalog;

impl HardcodedContentCatalog {
    pub fn new() -> Self {
        Self
    }

    fn materialize(entry: &CatalogEntry, now: DateTime<Utc>) -> ContentItem {
        let mut item = entry.item.clone();
        item.published_at = now - Duration::minutes(entry.minutes_ago);
        item
    }
}

impl ContentCatalog for HardcodedContentCatalog {
    fn items_for_category(&self, category: &str, now: DateTime<Utc>) -> Vec<ContentItem> {
        CATALOG
            .iter()
            .filter(|entry| entry.item.category == category)
            .map(|entry| Self::materialize(entry, now))
            .collect()
    }

    fn sample(&self, count: usize, now: DateTime<Utc>) -> Vec<ContentItem> {
        CATALOG
            .iter()
            .take(count)
            .map(|entry| Self::materialize(entry, now))
            .collect()
    }
}
