//! Centralized application state for the Comète GUI.
//!
//! Composes the library's preferences controller with the GUI-only state
//! components. The controller stays the single writer of the preference
//! groups; panels only read it and return interactions.

use crate::state::{NavigationState, QuizState};
use comete::catalog::{self, Period};
use comete::{
    DisplayConfigReader, PreferencesController, SharedThemeProvider, ThemeManager,
    ThemePreference, ToastQueue,
};

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Preferences =====
    /// Owner of profile, appearance and notification preferences
    pub prefs: PreferencesController,

    /// Root text scale published by the controller
    pub display: DisplayConfigReader,

    /// Theme choice, shared with the controller
    pub theme_provider: SharedThemeProvider,

    /// Colour palettes for the light and dark themes
    pub theme_manager: ThemeManager,

    /// Notifications waiting to be shown
    pub toasts: ToastQueue,

    // ===== Screens =====
    pub navigation: NavigationState,

    pub quiz: QuizState,

    /// Period catalog (read-only)
    pub periods: &'static [Period],

    // ===== Applied-to-egui bookkeeping =====
    /// Display generation last applied to the egui styles
    pub applied_display_generation: Option<u64>,

    /// Theme last handed to egui
    pub applied_theme: Option<ThemePreference>,

    /// Window title last sent to the viewport
    pub window_title: Option<String>,
}

impl AppState {
    pub fn new(
        prefs: PreferencesController,
        display: DisplayConfigReader,
        theme_provider: SharedThemeProvider,
        toasts: ToastQueue,
        periods: &'static [Period],
    ) -> Self {
        Self {
            prefs,
            display,
            theme_provider,
            theme_manager: ThemeManager::new(),
            toasts,
            navigation: NavigationState::new(),
            quiz: QuizState::new(),
            periods,
            applied_display_generation: None,
            applied_theme: None,
            window_title: None,
        }
    }

    /// Looks up a period of the catalog by id.
    pub fn period(&self, id: &str) -> Option<&'static Period> {
        catalog::find(id).ok().flatten()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use comete::MemoryProfileStore;

    /// App state over an in-memory store with the bundled catalog.
    pub(crate) fn app_state() -> (AppState, MemoryProfileStore) {
        let store = MemoryProfileStore::new();
        let toasts = ToastQueue::new();
        let theme = SharedThemeProvider::new(ThemePreference::Light);
        let (prefs, display) = PreferencesController::new(
            Box::new(store.clone()),
            Box::new(toasts.clone()),
            Box::new(theme.clone()),
        );
        let periods = catalog::periods().unwrap();
        (AppState::new(prefs, display, theme, toasts, periods), store)
    }

    #[test]
    fn test_period_lookup() {
        let (state, _) = app_state();
        assert_eq!(state.period("antiquite").map(|p| p.title.as_str()), Some("Antiquité"));
        assert!(state.period("futur").is_none());
    }
}
