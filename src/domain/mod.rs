pub mod content;
pub mod feed;
pub mod preferences;
pub mod shared;
pub mod trending;
