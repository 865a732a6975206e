pub mod content_catalog_repository;
pub mod interaction_repository;
pub mod preferences_repository;

pub use content_catalog_repository::HardcodedContentCatalog;
pub use interaction_repository::InMemoryInteractionRepository;
pub use preferences_repository::InMemoryPreferencesRepository;
