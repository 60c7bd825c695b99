//! The preferences controller.
//!
//! Single source of truth for the account settings screen. Each settings tab
//! reads its group from here and sends back [`PreferenceUpdate`]s; the
//! controller applies them, publishes font size changes to the display
//! configuration, and emits notifications for the stub actions.
//!
//! No operation here returns an error to the caller. Store and export
//! failures are logged and reported to the user as error notifications.

use crate::display::{DisplayConfigReader, DisplayConfigWriter, DisplayConfig, DisplaySettings};
use crate::error::StoreError;
use crate::i18n::{Language, MessageKey, Translator};
use crate::notify::{Notification, Notifier};
use crate::preferences::{
    AppearancePreferences, AppearanceUpdate, NotificationPreferences, NotificationUpdate,
    PreferenceUpdate, Preferences, ProfileUpdate, UserProfile,
};
use crate::store::{self, ProfileStore};
use crate::theme::{ThemePreference, ThemeProvider};
use serde::Serialize;
use std::path::Path;

/// Everything written by "download my data".
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DataExport<'a> {
    #[serde(flatten)]
    preferences: &'a Preferences,
    theme: ThemePreference,
}

/// Owns the preference groups and their collaborators.
pub struct PreferencesController {
    preferences: Preferences,
    display: DisplayConfigWriter,
    notifier: Box<dyn Notifier>,
    theme: Box<dyn ThemeProvider>,
    store: Box<dyn ProfileStore>,
}

impl std::fmt::Debug for PreferencesController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferencesController")
            .field("preferences", &self.preferences)
            .field("theme", &self.theme.theme())
            .finish_non_exhaustive()
    }
}

impl PreferencesController {
    /// Builds a controller, loading the profile from `store`.
    ///
    /// Falls back to the default profile when the store is empty or fails.
    /// Returns the controller and a reader for the display configuration.
    pub fn new(
        store: Box<dyn ProfileStore>,
        notifier: Box<dyn Notifier>,
        theme: Box<dyn ThemeProvider>,
    ) -> (Self, DisplayConfigReader) {
        let profile = match store.load() {
            Ok(Some(profile)) => {
                tracing::info!(language = %profile.language, "profile loaded");
                profile
            }
            Ok(None) => {
                tracing::info!("no saved profile, using defaults");
                UserProfile::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load profile, using defaults");
                UserProfile::default()
            }
        };
        let preferences = Preferences {
            profile,
            ..Preferences::default()
        };
        Self::with_preferences(preferences, store, notifier, theme)
    }

    /// Builds a controller around already-known preferences (no store read).
    pub fn with_preferences(
        preferences: Preferences,
        store: Box<dyn ProfileStore>,
        notifier: Box<dyn Notifier>,
        theme: Box<dyn ThemeProvider>,
    ) -> (Self, DisplayConfigReader) {
        let (display, reader) = DisplayConfig::new(DisplaySettings {
            root_font_size: preferences.appearance.font_size,
        });
        let controller = Self {
            preferences,
            display,
            notifier,
            theme,
            store,
        };
        (controller, reader)
    }

    // ===== Queries =====

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn profile(&self) -> &UserProfile {
        &self.preferences.profile
    }

    pub fn appearance(&self) -> &AppearancePreferences {
        &self.preferences.appearance
    }

    pub fn notifications(&self) -> &NotificationPreferences {
        &self.preferences.notifications
    }

    pub fn language(&self) -> Language {
        self.preferences.profile.language
    }

    /// Translator for the profile's current language.
    pub fn translator(&self) -> Translator {
        Translator::new(self.language())
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme.theme()
    }

    /// Another reader of the display configuration this controller writes.
    pub fn display_reader(&self) -> DisplayConfigReader {
        self.display.reader()
    }

    // ===== Mutations =====

    /// Applies one field update. Always succeeds.
    ///
    /// Font sizes are clamped and published to the display configuration
    /// immediately. Notification channel changes are announced to the user.
    pub fn update(&mut self, update: impl Into<PreferenceUpdate>) {
        let update = update.into();
        tracing::debug!(?update, "preference update");

        let announcement = match &update {
            PreferenceUpdate::Notifications(NotificationUpdate::Email(on)) => {
                Some((MessageKey::NotificationsEmail, *on))
            }
            PreferenceUpdate::Notifications(NotificationUpdate::Push(on)) => {
                Some((MessageKey::NotificationsPush, *on))
            }
            _ => None,
        };

        if !self.preferences.apply(update) {
            return;
        }

        self.display
            .set_root_font_size(self.preferences.appearance.font_size);

        if let Some((channel, on)) = announcement {
            let t = self.translator();
            let title_key = if on {
                MessageKey::NotificationEnabledTitle
            } else {
                MessageKey::NotificationDisabledTitle
            };
            self.notifier.notify(Notification::info(
                t.fmt(title_key, &[("channel", t.t(channel))]),
                t.t(MessageKey::NotificationChangedDescription),
            ));
        }
    }

    pub fn toggle_show_sources(&mut self) {
        let on = !self.preferences.appearance.show_sources;
        self.update(AppearanceUpdate::ShowSources(on));
    }

    pub fn toggle_auto_save(&mut self) {
        let on = !self.preferences.appearance.auto_save;
        self.update(AppearanceUpdate::AutoSave(on));
    }

    pub fn toggle_email_notifications(&mut self) {
        let on = !self.preferences.notifications.email_notifications;
        self.update(NotificationUpdate::Email(on));
    }

    pub fn toggle_push_notifications(&mut self) {
        let on = !self.preferences.notifications.push_notifications;
        self.update(NotificationUpdate::Push(on));
    }

    pub fn set_language(&mut self, language: Language) {
        self.update(ProfileUpdate::Language(language));
    }

    /// Forwards the theme choice to the theme provider.
    pub fn set_theme(&mut self, theme: ThemePreference) {
        if self.theme.theme() != theme {
            tracing::debug!(?theme, "theme changed");
            self.theme.set_theme(theme);
        }
    }

    /// Restores the appearance group to its defaults.
    pub fn reset_appearance(&mut self) {
        let defaults = AppearancePreferences::default();
        self.update(AppearanceUpdate::FontSize(defaults.font_size.into()));
        self.update(AppearanceUpdate::ShowSources(defaults.show_sources));
        self.update(AppearanceUpdate::AutoSave(defaults.auto_save));
    }

    /// Restores appearance and notification groups saved by a previous session.
    ///
    /// Silent: nothing is announced, only the display configuration follows.
    pub fn restore_session(&mut self, appearance: AppearancePreferences, notifications: NotificationPreferences) {
        self.preferences.appearance = appearance;
        self.preferences.notifications = notifications;
        self.display.set_root_font_size(appearance.font_size);
    }

    // ===== Actions =====

    /// Commits the profile to the store.
    ///
    /// Field contents are not validated. Success is announced; a store
    /// failure is logged and announced as an error instead.
    pub fn submit_profile(&mut self) {
        let t = self.translator();
        match self.store.save(&self.preferences.profile) {
            Ok(()) => {
                tracing::info!("profile saved");
                self.notifier.notify(Notification::success(
                    t.t(MessageKey::ProfileSavedTitle),
                    t.t(MessageKey::ProfileSavedDescription),
                ));
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to save profile");
                self.notifier.notify(Notification::error(
                    t.t(MessageKey::ProfileSaveFailedTitle),
                    t.fmt(MessageKey::ProfileSaveFailedDescription, &[("error", e.to_string().as_str())]),
                ));
            }
        }
    }

    /// Avatar upload is not available yet; only tells the user so.
    pub fn upload_avatar(&self) {
        self.announce_unavailable("upload_avatar");
    }

    /// Account deletion is not available yet; only tells the user so.
    pub fn delete_account(&self) {
        self.announce_unavailable("delete_account");
    }

    /// Writes all preferences and the theme to `path` as JSON.
    ///
    /// The outcome is announced either way; the error is also returned.
    pub fn export_data(&self, path: &Path) -> Result<(), StoreError> {
        let t = self.translator();
        let export = DataExport {
            preferences: &self.preferences,
            theme: self.theme.theme(),
        };
        match store::write_json(path, &export) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "preferences exported");
                self.notifier.notify(Notification::success(
                    t.t(MessageKey::PrivacyExportDoneTitle),
                    t.fmt(
                        MessageKey::PrivacyExportDoneDescription,
                        &[("path", path.display().to_string().as_str())],
                    ),
                ));
                Ok(())
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "export failed");
                self.notifier.notify(Notification::error(
                    t.t(MessageKey::PrivacyExportFailedTitle),
                    t.fmt(MessageKey::PrivacyExportFailedDescription, &[("error", e.to_string().as_str())]),
                ));
                Err(e)
            }
        }
    }

    fn announce_unavailable(&self, action: &str) {
        tracing::debug!(action, "stub action requested");
        let t = self.translator();
        self.notifier.notify(Notification::info(
            t.t(MessageKey::FeatureUnavailableTitle),
            t.t(MessageKey::FeatureUnavailableDescription),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{NotificationLevel, ToastQueue};
    use crate::store::MemoryProfileStore;
    use crate::theme::SharedThemeProvider;

    struct FailingStore;

    impl ProfileStore for FailingStore {
        fn load(&self) -> Result<Option<UserProfile>, StoreError> {
            Err(StoreError::NoDataDir)
        }

        fn save(&mut self, _profile: &UserProfile) -> Result<(), StoreError> {
            Err(StoreError::NoDataDir)
        }
    }

    fn controller() -> (PreferencesController, DisplayConfigReader, ToastQueue, MemoryProfileStore) {
        let toasts = ToastQueue::with_limits(std::time::Duration::from_secs(60), 16);
        let store = MemoryProfileStore::new();
        let (controller, reader) = PreferencesController::new(
            Box::new(store.clone()),
            Box::new(toasts.clone()),
            Box::new(SharedThemeProvider::default()),
        );
        (controller, reader, toasts, store)
    }

    #[test]
    fn test_loads_defaults_from_empty_or_failing_store() {
        let (controller, _, _, _) = controller();
        assert_eq!(controller.profile(), &UserProfile::default());

        let (controller, _) = PreferencesController::new(
            Box::new(FailingStore),
            Box::new(ToastQueue::new()),
            Box::new(SharedThemeProvider::default()),
        );
        assert_eq!(controller.profile(), &UserProfile::default());
    }

    #[test]
    fn test_loads_saved_profile() {
        let saved = UserProfile {
            name: "Hypatie".to_string(),
            language: Language::Es,
            ..UserProfile::default()
        };
        let (controller, _) = PreferencesController::new(
            Box::new(MemoryProfileStore::with_profile(saved.clone())),
            Box::new(ToastQueue::new()),
            Box::new(SharedThemeProvider::default()),
        );
        assert_eq!(controller.profile(), &saved);
        assert_eq!(controller.translator().t(MessageKey::NavSettings), "Ajustes");
    }

    #[test]
    fn test_profile_edits_stay_in_memory_until_submit() {
        let (mut controller, _, _, store) = controller();
        controller.update(ProfileUpdate::Name("Marie".into()));
        assert_eq!(controller.profile().name, "Marie");
        assert!(store.saved().is_none());

        controller.submit_profile();
        assert_eq!(store.saved().map(|p| p.name), Some("Marie".to_string()));
    }

    #[test]
    fn test_submit_failure_is_reported_not_raised() {
        let toasts = ToastQueue::new();
        let (mut controller, _) = PreferencesController::new(
            Box::new(FailingStore),
            Box::new(toasts.clone()),
            Box::new(SharedThemeProvider::default()),
        );
        controller.submit_profile();
        let sent = toasts.snapshot();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].level, NotificationLevel::Error);
        assert_eq!(sent[0].title, "Échec de l'enregistrement");
    }

    #[test]
    fn test_font_size_publishes_to_display() {
        let (mut controller, reader, toasts, _) = controller();
        controller.update(AppearanceUpdate::FontSize(18));
        assert_eq!(reader.current().root_font_size_css(), "18px");

        controller.update(AppearanceUpdate::FontSize(99));
        assert_eq!(controller.appearance().font_size.px(), 24);
        assert_eq!(reader.current().root_font_size_css(), "24px");
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_notification_toggle_announces_each_change() {
        let (mut controller, _, toasts, _) = controller();
        controller.toggle_email_notifications();
        controller.toggle_email_notifications();
        let titles: Vec<String> = toasts.snapshot().into_iter().map(|n| n.title).collect();
        assert_eq!(
            titles,
            vec![
                "Notifications par e-mail : désactivées".to_string(),
                "Notifications par e-mail : activées".to_string(),
            ]
        );

        // Setting the current value again is a no-op
        controller.update(NotificationUpdate::Email(true));
        assert_eq!(toasts.len(), 2);
    }

    #[test]
    fn test_reset_appearance() {
        let (mut controller, reader, _, _) = controller();
        controller.update(AppearanceUpdate::FontSize(22));
        controller.toggle_show_sources();
        controller.toggle_auto_save();

        controller.reset_appearance();
        assert_eq!(controller.appearance(), &AppearancePreferences::default());
        assert_eq!(reader.current().root_font_size, AppearancePreferences::default().font_size);
    }

    #[test]
    fn test_restore_session_is_silent() {
        let (mut controller, reader, toasts, _) = controller();
        let appearance = AppearancePreferences {
            font_size: crate::preferences::FontSize::clamped(20),
            show_sources: false,
            auto_save: false,
        };
        let notifications = NotificationPreferences {
            email_notifications: false,
            push_notifications: true,
        };
        controller.restore_session(appearance, notifications);
        assert_eq!(controller.appearance(), &appearance);
        assert_eq!(controller.notifications(), &notifications);
        assert_eq!(reader.current().root_font_size_css(), "20px");
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_theme_is_delegated() {
        let provider = SharedThemeProvider::new(ThemePreference::Light);
        let (mut controller, _) = PreferencesController::new(
            Box::new(MemoryProfileStore::new()),
            Box::new(ToastQueue::new()),
            Box::new(provider.clone()),
        );
        controller.set_theme(ThemePreference::Dark);
        assert_eq!(provider.theme(), ThemePreference::Dark);
        assert_eq!(controller.theme(), ThemePreference::Dark);
    }

    #[test]
    fn test_stub_actions_only_notify() {
        let (mut controller, _, toasts, store) = controller();
        let before = controller.preferences().clone();
        controller.upload_avatar();
        controller.delete_account();

        assert_eq!(controller.preferences(), &before);
        assert!(store.saved().is_none());
        let sent = toasts.snapshot();
        assert_eq!(sent.len(), 2);
        assert!(sent.iter().all(|n| n.title == "Fonctionnalité à venir"));

        // Language switch localizes later messages
        controller.set_language(Language::En);
        controller.upload_avatar();
        assert_eq!(toasts.snapshot()[2].title, "Coming soon");
    }
}
