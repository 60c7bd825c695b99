//! Appearance tab: theme, text size, sources and auto-save.

use crate::ui::header::theme_label;
use crate::ui::panel_manager::PanelInteraction;
use crate::ui::widgets::toggle_row;
use comete::{AppearanceUpdate, FontSize, MessageKey, PreferencesController, ThemeColors, ThemePreference};
use egui::RichText;

pub fn render_appearance_tab(
    ui: &mut egui::Ui,
    prefs: &PreferencesController,
    colors: &ThemeColors,
) -> Option<PanelInteraction> {
    let mut interaction = None;
    let t = prefs.translator();
    let appearance = prefs.appearance();

    ui.label(RichText::new(t.t(MessageKey::AppearanceTheme)).strong());
    let current_theme = prefs.theme();
    let mut theme = current_theme;
    ui.horizontal(|ui| {
        for option in ThemePreference::ALL {
            ui.selectable_value(&mut theme, option, t.t(theme_label(option)));
        }
    });
    if theme != current_theme {
        interaction = Some(PanelInteraction::SetTheme(theme));
    }
    ui.add_space(12.0);

    let px = appearance.font_size.px().to_string();
    ui.label(RichText::new(t.fmt(MessageKey::AppearanceFontSize, &[("size", px.as_str())])).strong());
    let mut size = i32::from(appearance.font_size);
    // The slider clamps to the supported range before the value leaves the widget
    let slider = egui::Slider::new(&mut size, i32::from(FontSize::MIN)..=i32::from(FontSize::MAX))
        .suffix("px")
        .clamping(egui::SliderClamping::Always);
    if ui.add(slider).changed() {
        interaction = Some(PanelInteraction::UpdatePreference(AppearanceUpdate::FontSize(size).into()));
    }
    ui.add_space(12.0);

    if let Some(on) = toggle_row(
        ui,
        t.t(MessageKey::AppearanceShowSources),
        t.t(MessageKey::AppearanceShowSourcesHint),
        appearance.show_sources,
        colors,
    ) {
        interaction = Some(PanelInteraction::UpdatePreference(AppearanceUpdate::ShowSources(on).into()));
    }
    ui.add_space(6.0);

    if let Some(on) = toggle_row(
        ui,
        t.t(MessageKey::AppearanceAutoSave),
        t.t(MessageKey::AppearanceAutoSaveHint),
        appearance.auto_save,
        colors,
    ) {
        interaction = Some(PanelInteraction::UpdatePreference(AppearanceUpdate::AutoSave(on).into()));
    }

    ui.add_space(12.0);
    if ui.button(t.t(MessageKey::AppearanceReset)).clicked() {
        interaction = Some(PanelInteraction::ResetAppearance);
    }

    interaction
}
