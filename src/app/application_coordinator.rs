//! Application-level coordination.
//!
//! Turns panel interactions into state changes. Preference changes all go
//! through the `PreferencesController`; navigation and quiz changes go to
//! their state components.

use crate::app::AppState;
use crate::state::Page;
use crate::ui::panel_manager::PanelInteraction;

/// Coordinates application-level operations.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Applies one panel interaction to the application state.
    pub fn handle_interaction(state: &mut AppState, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::Navigate(page) => Self::navigate(state, page),
            PanelInteraction::Back => state.navigation.back(),
            PanelInteraction::SelectSettingsTab(tab) => state.navigation.select_tab(tab),
            PanelInteraction::UpdatePreference(update) => state.prefs.update(update),
            PanelInteraction::SetTheme(theme) => state.prefs.set_theme(theme),
            PanelInteraction::ResetAppearance => state.prefs.reset_appearance(),
            PanelInteraction::SubmitProfile => state.prefs.submit_profile(),
            PanelInteraction::UploadAvatar => state.prefs.upload_avatar(),
            PanelInteraction::ExportData(path) => {
                // Already announced to the user by the controller
                let _ = state.prefs.export_data(&path);
            }
            PanelInteraction::DeleteAccount => state.prefs.delete_account(),
            PanelInteraction::QuizAnswer(choice) => state.quiz.answer(choice),
            PanelInteraction::QuizNext => state.quiz.next_round(state.periods),
            PanelInteraction::DismissToast(id) => state.toasts.dismiss(id),
        }
    }

    /// Switches page, preparing the quiz when it is opened.
    fn navigate(state: &mut AppState, page: Page) {
        if page == Page::Quiz {
            state.quiz.ensure_round(state.periods);
        }
        state.navigation.navigate(page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::app_state::tests::app_state;
    use crate::state::SettingsTab;
    use comete::{AppearanceUpdate, NotificationUpdate, ThemePreference, ThemeProvider};

    #[test]
    fn test_preference_interactions_reach_controller() {
        let (mut state, store) = app_state();

        ApplicationCoordinator::handle_interaction(
            &mut state,
            PanelInteraction::UpdatePreference(AppearanceUpdate::FontSize(8).into()),
        );
        assert_eq!(state.display.current().root_font_size_css(), "12px");

        ApplicationCoordinator::handle_interaction(
            &mut state,
            PanelInteraction::UpdatePreference(NotificationUpdate::Push(true).into()),
        );
        assert!(state.prefs.notifications().push_notifications);
        assert_eq!(state.toasts.len(), 1);

        ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::SetTheme(ThemePreference::Dark));
        assert_eq!(state.theme_provider.theme(), ThemePreference::Dark);

        ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::SubmitProfile);
        assert!(store.saved().is_some());
    }

    #[test]
    fn test_opening_quiz_starts_a_round() {
        let (mut state, _) = app_state();
        assert!(state.quiz.round().is_none());

        ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::Navigate(Page::Quiz));
        assert_eq!(state.navigation.page(), &Page::Quiz);
        assert!(state.quiz.round().is_some());

        ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::QuizAnswer(0));
        assert_eq!(state.quiz.session().rounds(), 1);
        ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::QuizNext);
        assert!(state.quiz.outcome().is_none());
    }

    #[test]
    fn test_navigation_interactions() {
        let (mut state, _) = app_state();
        ApplicationCoordinator::handle_interaction(
            &mut state,
            PanelInteraction::Navigate(Page::Period("antiquite".into())),
        );
        ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::Back);
        assert_eq!(state.navigation.page(), &Page::Periods);

        ApplicationCoordinator::handle_interaction(
            &mut state,
            PanelInteraction::SelectSettingsTab(SettingsTab::Notifications),
        );
        assert_eq!(state.navigation.settings_tab(), SettingsTab::Notifications);
    }
}
