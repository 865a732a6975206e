pub mod model;
pub mod pipeline;
pub mod service;

pub use model::{ActiveFilters, DateRange, FeedPage, FeedRequest, MAX_PAGE_SIZE};
pub use pipeline::{personalize, PersonalizationContext, Personalized};
pub use service::{FeedService, FeedServiceApi};
