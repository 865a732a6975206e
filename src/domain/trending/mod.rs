pub mod aggregator;
pub mod classifier;
pub mod scorer;
pub mod service;

pub use aggregator::{
    compute_trending, Trend, TrendingItem, TrendingPeriod, TrendingQuery, DEFAULT_TRENDING_LIMIT,
};
pub use classifier::{CategoryClassifier, KeywordTable, KeywordTableError, ALL_CATEGORIES};
pub use scorer::{compute_change_score, recency_score};
pub use service::{trending_with_fallback, TrendingResponse, TrendingService};
