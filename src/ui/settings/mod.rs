//! Account settings page.
//!
//! Each tab reads one preference group from the controller and returns at
//! most one interaction; none of them writes state directly.

mod appearance;
mod notifications;
mod privacy;
mod profile;

use crate::app::AppState;
use crate::state::SettingsTab;
use crate::ui::panel_manager::PanelInteraction;
use crate::ui::widgets::{card_frame, page_heading};
use comete::{MessageKey, ThemeColors};

pub fn render_settings(ui: &mut egui::Ui, state: &AppState, colors: &ThemeColors) -> Option<PanelInteraction> {
    let mut interaction = None;
    let t = state.prefs.translator();

    page_heading(
        ui,
        t.t(MessageKey::SettingsTitle),
        Some(t.t(MessageKey::SettingsSubtitle)),
        colors,
    );

    let current = state.navigation.settings_tab();
    let mut selected = current;
    ui.horizontal(|ui| {
        for tab in SettingsTab::ALL {
            ui.selectable_value(&mut selected, tab, t.t(tab.label()));
        }
    });
    if selected != current {
        interaction = Some(PanelInteraction::SelectSettingsTab(selected));
    }
    ui.add_space(8.0);

    card_frame(colors).show(ui, |ui| {
        ui.set_width(ui.available_width());
        let tab_interaction = match current {
            SettingsTab::Profile => profile::render_profile_tab(ui, &state.prefs, colors),
            SettingsTab::Appearance => appearance::render_appearance_tab(ui, &state.prefs, colors),
            SettingsTab::Notifications => notifications::render_notifications_tab(ui, &state.prefs, colors),
            SettingsTab::Privacy => privacy::render_privacy_tab(ui, &state.prefs, colors),
        };
        if tab_interaction.is_some() {
            interaction = tab_interaction;
        }
    });

    interaction
}
