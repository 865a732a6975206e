use crate::domain::content::InteractionRepository;
use parking_lot::RwLock;
use std::collections::BTreeSet;

#[derive(Debug, Default)]
struct Interactions {
    favorites: BTreeSet<String>,
    read: BTreeSet<String>,
}

/// Favorite and read marks held in process memory
#[derive(Debug, Default)]
pub struct InMemoryInteractionRepository {
    state: RwLock<Interactions>,
}

impl InMemoryInteractionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InteractionRepository for InMemoryInteractionRepository {
    fn add_favorite(&self, content_id: &str) -> bool {
        self.state.write().favorites.insert(content_id.to_string())
    }

    fn remove_favorite(&self, content_id: &str) -> bool {
        self.state.write().favorites.remove(content_id)
    }

    fn is_favorite(&self, content_id: &str) -> bool {
        self.state.read().favorites.contains(content_id)
    }

    fn favorites(&self) -> Vec<String> {
        self.state.read().favorites.iter().cloned().collect()
    }

    fn mark_read(&self, content_id: &str) {
        self.state.write().read.insert(content_id.to_string());
    }

    fn is_read(&self, content_id: &str) -> bool {
        self.state.read().read.contains(content_id)
    }
}
