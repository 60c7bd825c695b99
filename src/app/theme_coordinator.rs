//! Theme and text-scale application.
//!
//! Loads and saves the theme choice, and pushes the theme and the root text
//! size into egui whenever they change.

use crate::app::AppState;
use comete::{DisplaySettings, ThemePreference, ThemeProvider};
use egui::{FontFamily, FontId, TextStyle};

const THEME_KEY: &str = "theme_preference";

/// Heading, body, button, monospace and small sizes relative to the root size.
const TEXT_SCALE: [(TextStyle, f32); 5] = [
    (TextStyle::Heading, 1.5),
    (TextStyle::Body, 1.0),
    (TextStyle::Button, 1.0),
    (TextStyle::Monospace, 0.9),
    (TextStyle::Small, 0.75),
];

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Loads the theme preference saved by a previous session, or `System`.
    pub fn load_theme_from_storage(storage: Option<&dyn eframe::Storage>) -> ThemePreference {
        storage
            .and_then(|s| s.get_string(THEME_KEY))
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    pub fn save_theme_to_storage(storage: &mut dyn eframe::Storage, theme: ThemePreference) {
        if let Ok(json) = serde_json::to_string(&theme) {
            storage.set_string(THEME_KEY, json);
        }
    }

    /// Installs the Comète palettes for both egui themes. Called once at startup.
    pub fn install_palettes(ctx: &egui::Context, state: &AppState) {
        for theme in [egui::Theme::Light, egui::Theme::Dark] {
            ctx.set_visuals_of(theme, state.theme_manager.visuals(theme));
        }
    }

    /// Applies the theme choice and the root text size if either changed.
    ///
    /// Called every frame; does nothing when both are already applied.
    pub fn apply_current_theme(ctx: &egui::Context, state: &mut AppState) {
        let theme = state.theme_provider.theme();
        if state.applied_theme != Some(theme) {
            ctx.set_theme(theme.to_egui());
            state.applied_theme = Some(theme);
        }

        if let Some((settings, generation)) =
            state.display.changed_since(state.applied_display_generation)
        {
            Self::apply_display_settings(ctx, settings);
            state.applied_display_generation = Some(generation);
        }
    }

    /// Rescales every egui text style from the root font size.
    pub fn apply_display_settings(ctx: &egui::Context, settings: DisplaySettings) {
        let root = f32::from(settings.root_font_size.px());
        tracing::debug!(root_font_size = %settings.root_font_size, "applying text scale");
        ctx.all_styles_mut(|style| {
            for (text_style, factor) in TEXT_SCALE.iter() {
                let family = match text_style {
                    TextStyle::Monospace => FontFamily::Monospace,
                    _ => FontFamily::Proportional,
                };
                style
                    .text_styles
                    .insert(text_style.clone(), FontId::new(root * factor, family));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::app_state::tests::app_state;
    use crate::app::settings_coordinator::tests::MockStorage;
    use comete::AppearanceUpdate;

    #[test]
    fn test_theme_round_trip_through_storage() {
        let mut storage = MockStorage::default();
        assert_eq!(
            ThemeCoordinator::load_theme_from_storage(Some(&storage)),
            ThemePreference::System
        );

        ThemeCoordinator::save_theme_to_storage(&mut storage, ThemePreference::Dark);
        assert_eq!(
            ThemeCoordinator::load_theme_from_storage(Some(&storage)),
            ThemePreference::Dark
        );
    }

    #[test]
    fn test_text_styles_follow_root_size() {
        let ctx = egui::Context::default();
        let settings = DisplaySettings {
            root_font_size: comete::FontSize::clamped(20),
        };
        ThemeCoordinator::apply_display_settings(&ctx, settings);

        let style = ctx.style();
        assert_eq!(style.text_styles[&TextStyle::Body].size, 20.0);
        assert_eq!(style.text_styles[&TextStyle::Heading].size, 30.0);
        assert_eq!(style.text_styles[&TextStyle::Small].size, 15.0);
    }

    #[test]
    fn test_styles_follow_display_generation() {
        let ctx = egui::Context::default();
        let (mut state, _) = app_state();

        ThemeCoordinator::apply_current_theme(&ctx, &mut state);
        let applied = state.applied_display_generation;
        assert!(applied.is_some());
        assert_eq!(state.applied_theme, Some(ThemePreference::Light));
        assert_eq!(ctx.style().text_styles[&TextStyle::Body].size, 16.0);

        // Nothing changed since the last frame
        ThemeCoordinator::apply_current_theme(&ctx, &mut state);
        assert_eq!(state.applied_display_generation, applied);

        state.prefs.update(AppearanceUpdate::FontSize(20));
        ThemeCoordinator::apply_current_theme(&ctx, &mut state);
        assert_ne!(state.applied_display_generation, applied);
        assert_eq!(ctx.style().text_styles[&TextStyle::Body].size, 20.0);

        state.prefs.set_theme(ThemePreference::Dark);
        ThemeCoordinator::apply_current_theme(&ctx, &mut state);
        assert_eq!(state.applied_theme, Some(ThemePreference::Dark));
    }
}
