//! Window title side effect.
//!
//! The title reads "{page} | Comète" in the interface language and is sent
//! to the viewport only when it changes.

use crate::app::AppState;
use crate::state::Page;
use comete::catalog::Period;
use comete::{MessageKey, Translator};

pub struct PageTitleCoordinator;

impl PageTitleCoordinator {
    /// Title for `page` in the language of `t`.
    pub fn page_title(page: &Page, t: Translator, periods: &[Period]) -> String {
        let page_name = match page {
            Page::Home => t.t(MessageKey::NavHome),
            Page::Periods => t.t(MessageKey::NavPeriods),
            Page::Period(id) => periods
                .iter()
                .find(|p| p.id == *id)
                .map(|p| p.title.as_str())
                .unwrap_or_else(|| t.t(MessageKey::NavPeriods)),
            Page::Quiz => t.t(MessageKey::QuizTitle),
            Page::Settings => t.t(MessageKey::SettingsTitle),
        };
        format!("{} | {}", page_name, t.t(MessageKey::AppTitle))
    }

    /// Sends the window title if the page or language changed since last frame.
    pub fn update_title(ctx: &egui::Context, state: &mut AppState) {
        let title = Self::page_title(state.navigation.page(), state.prefs.translator(), state.periods);
        if state.window_title.as_deref() != Some(title.as_str()) {
            tracing::debug!(%title, "window title");
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            state.window_title = Some(title);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::app_state::tests::app_state;
    use comete::Language;

    #[test]
    fn test_titles_follow_page_and_language() {
        let periods = comete::catalog::periods().unwrap();
        let fr = Translator::new(Language::Fr);
        let en = Translator::new(Language::En);

        assert_eq!(PageTitleCoordinator::page_title(&Page::Home, fr, periods), "Accueil | Comète");
        assert_eq!(PageTitleCoordinator::page_title(&Page::Settings, en, periods), "Account settings | Comète");
        assert_eq!(
            PageTitleCoordinator::page_title(&Page::Period("moyen-age".into()), en, periods),
            "Moyen Âge | Comète"
        );
        assert_eq!(
            PageTitleCoordinator::page_title(&Page::Period("inconnue".into()), fr, periods),
            "Périodes | Comète"
        );
    }

    #[test]
    fn test_title_is_sent_only_on_change() {
        let ctx = egui::Context::default();
        let (mut state, _) = app_state();
        assert!(state.window_title.is_none());

        PageTitleCoordinator::update_title(&ctx, &mut state);
        let first = state.window_title.clone();
        assert_eq!(first.as_deref(), Some("Accueil | Comète"));

        // Same page, same language: nothing to send
        PageTitleCoordinator::update_title(&ctx, &mut state);
        assert_eq!(state.window_title, first);

        state.prefs.set_language(Language::En);
        PageTitleCoordinator::update_title(&ctx, &mut state);
        assert_eq!(state.window_title.as_deref(), Some("Home | Comète"));

        state.navigation.navigate(Page::Quiz);
        PageTitleCoordinator::update_title(&ctx, &mut state);
        assert_eq!(state.window_title.as_deref(), Some("Which era? | Comète"));
    }
}
