//! Header panel UI rendering
//!
//! Application title, page navigation, language selector and theme toggle.

use crate::app::AppState;
use crate::state::Page;
use crate::ui::panel_manager::PanelInteraction;
use comete::{Language, MessageKey, ProfileUpdate, ThemeColors, ThemePreference};
use egui::RichText;

/// Theme the toggle button switches to from `current`.
fn next_theme(current: ThemePreference) -> ThemePreference {
    match current {
        ThemePreference::Light => ThemePreference::Dark,
        ThemePreference::Dark => ThemePreference::System,
        ThemePreference::System => ThemePreference::Light,
    }
}

fn theme_icon(theme: ThemePreference) -> &'static str {
    match theme {
        ThemePreference::Light => "☀",
        ThemePreference::Dark => "🌙",
        ThemePreference::System => "💻",
    }
}

pub(crate) fn theme_label(theme: ThemePreference) -> MessageKey {
    match theme {
        ThemePreference::Light => MessageKey::ThemeLight,
        ThemePreference::Dark => MessageKey::ThemeDark,
        ThemePreference::System => MessageKey::ThemeSystem,
    }
}

/// Renders the application header.
///
/// # Returns
/// * `Option<PanelInteraction>` - Navigation, language or theme change
pub fn render_header(ui: &mut egui::Ui, state: &AppState, colors: &ThemeColors) -> Option<PanelInteraction> {
    let mut interaction = None;
    let t = state.prefs.translator();

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        let title = RichText::new(format!("☄ {}", t.t(MessageKey::AppTitle)))
            .heading()
            .strong()
            .color(colors.accent);
        if ui.add(egui::Label::new(title).sense(egui::Sense::click())).clicked() {
            interaction = Some(PanelInteraction::Navigate(Page::Home));
        }

        ui.separator();

        for (page, label) in Page::NAV.iter() {
            let was_selected = state.navigation.page().is_under(page);
            let mut selected = was_selected;
            if ui.toggle_value(&mut selected, t.t(*label)).clicked() && !was_selected {
                interaction = Some(PanelInteraction::Navigate(page.clone()));
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let theme = state.prefs.theme();
            let toggle = ui
                .button(theme_icon(theme))
                .on_hover_text(t.t(theme_label(theme)));
            if toggle.clicked() {
                interaction = Some(PanelInteraction::SetTheme(next_theme(theme)));
            }

            let current = state.prefs.language();
            let mut selected = current;
            egui::ComboBox::from_id_salt("language_selector")
                .selected_text(selected.native_name())
                .show_ui(ui, |ui| {
                    for language in Language::ALL {
                        ui.selectable_value(&mut selected, language, language.native_name());
                    }
                });
            if selected != current {
                interaction = Some(PanelInteraction::UpdatePreference(
                    ProfileUpdate::Language(selected).into(),
                ));
            }
        });
    });
    ui.add_space(4.0);

    interaction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle_cycles_through_all() {
        let mut theme = ThemePreference::Light;
        let mut seen = Vec::new();
        for _ in 0..3 {
            theme = next_theme(theme);
            seen.push(theme);
        }
        assert_eq!(seen, vec![ThemePreference::Dark, ThemePreference::System, ThemePreference::Light]);
    }
}
