//! Session settings persistence.
//!
//! Appearance and notification preferences survive restarts through
//! eframe's persistent storage, each group stored as one JSON string.
//! The profile itself is not stored here; it goes through the profile store
//! on explicit submit.

use comete::{AppearancePreferences, NotificationPreferences, PreferencesController};
use serde::{Deserialize, Serialize};

pub const APPEARANCE_KEY: &str = "appearance_preferences";
pub const NOTIFICATIONS_KEY: &str = "notification_preferences";

/// Coordinates settings persistence through eframe storage.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting, falling back to `T::default()` if missing or unreadable.
    pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        Self::try_load_setting(storage, key).unwrap_or_default()
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    ///
    /// Invalid JSON is logged; a missing key is not.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = storage?.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "ignoring unreadable stored setting");
                None
            }
        }
    }

    /// Saves a setting. Does not flush; eframe flushes on its own schedule.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => storage.set_string(key, json_str),
            Err(e) => tracing::warn!(key, error = %e, "failed to serialize setting"),
        }
    }

    /// Reads the appearance and notification groups saved by the last session.
    pub fn load_session(
        storage: Option<&dyn eframe::Storage>,
    ) -> (AppearancePreferences, NotificationPreferences) {
        (
            Self::load_setting(storage, APPEARANCE_KEY),
            Self::load_setting(storage, NOTIFICATIONS_KEY),
        )
    }

    /// Writes the appearance and notification groups of `prefs`.
    pub fn save_session(storage: &mut dyn eframe::Storage, prefs: &PreferencesController) {
        Self::save_setting(storage, APPEARANCE_KEY, prefs.appearance());
        Self::save_setting(storage, NOTIFICATIONS_KEY, prefs.notifications());
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use comete::{FontSize, MemoryProfileStore, SharedThemeProvider, ToastQueue};
    use std::collections::HashMap;

    /// Simple mock storage for testing
    #[derive(Default)]
    pub(crate) struct MockStorage {
        pub(crate) data: HashMap<String, String>,
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_empty_storage_gives_defaults() {
        let storage = MockStorage::default();
        let (appearance, notifications) = SettingsCoordinator::load_session(Some(&storage));
        assert_eq!(appearance, AppearancePreferences::default());
        assert_eq!(notifications, NotificationPreferences::default());

        let (appearance, _) = SettingsCoordinator::load_session(None);
        assert_eq!(appearance, AppearancePreferences::default());
    }

    #[test]
    fn test_session_round_trip() {
        let (mut prefs, _) = PreferencesController::new(
            Box::new(MemoryProfileStore::new()),
            Box::new(ToastQueue::new()),
            Box::new(SharedThemeProvider::default()),
        );
        prefs.update(comete::AppearanceUpdate::FontSize(21));
        prefs.toggle_push_notifications();

        let mut storage = MockStorage::default();
        SettingsCoordinator::save_session(&mut storage, &prefs);

        let (appearance, notifications) = SettingsCoordinator::load_session(Some(&storage));
        assert_eq!(appearance.font_size, FontSize::clamped(21));
        assert!(notifications.push_notifications);
    }

    #[test]
    fn test_corrupt_value_falls_back() {
        let mut storage = MockStorage::default();
        storage.data.insert(APPEARANCE_KEY.to_string(), "{oops".to_string());
        let loaded: Option<AppearancePreferences> =
            SettingsCoordinator::try_load_setting(Some(&storage), APPEARANCE_KEY);
        assert!(loaded.is_none());
    }
}
