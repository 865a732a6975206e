use crate::domain::preferences::{PreferencesRepository, UserPreferences};
use parking_lot::RwLock;

/// Process-local preference store; readers get a cloned snapshot
#[derive(Debug, Default)]
pub struct InMemoryPreferencesRepository {
    preferences: RwLock<UserPreferences>,
}

impl InMemoryPreferencesRepository {
    pub fn new(preferences: UserPreferences) -> Self {
        Self {
            preferences: RwLock::new(preferences),
        }
    }
}

impl PreferencesRepository for InMemoryPreferencesRepository {
    fn get(&self) -> UserPreferences {
        self.preferences.read().clone()
    }

    fn save(&self, preferences: UserPreferences) {
        *self.preferences.write() = preferences;
    }
}
