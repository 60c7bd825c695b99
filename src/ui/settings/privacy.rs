//! Privacy tab: data export and account deletion.

use crate::ui::panel_manager::PanelInteraction;
use comete::{MessageKey, PreferencesController, ThemeColors};
use egui::RichText;

const EXPORT_FILE_NAME: &str = "comete-mes-donnees.json";

pub fn render_privacy_tab(
    ui: &mut egui::Ui,
    prefs: &PreferencesController,
    colors: &ThemeColors,
) -> Option<PanelInteraction> {
    let mut interaction = None;
    let t = prefs.translator();

    ui.label(RichText::new(t.t(MessageKey::PrivacyExport)).strong());
    ui.label(RichText::new(t.t(MessageKey::PrivacyExportHint)).small().color(colors.text_dim));
    if ui.button(format!("⬇ {}", t.t(MessageKey::PrivacyExport))).clicked() {
        let mut dialog = rfd::FileDialog::new()
            .set_file_name(EXPORT_FILE_NAME)
            .add_filter("JSON", &["json"]);

        if let Some(documents) = dirs::document_dir() {
            dialog = dialog.set_directory(documents);
        }

        if let Some(path) = dialog.save_file() {
            interaction = Some(PanelInteraction::ExportData(path));
        }
    }

    ui.add_space(16.0);
    ui.separator();
    ui.add_space(8.0);

    ui.label(RichText::new(t.t(MessageKey::PrivacyDeleteAccount)).strong().color(colors.error));
    ui.label(RichText::new(t.t(MessageKey::PrivacyDeleteHint)).small().color(colors.text_dim));
    let delete = egui::Button::new(RichText::new(t.t(MessageKey::PrivacyDeleteAccount)).color(colors.error))
        .stroke(egui::Stroke::new(1.0, colors.error));
    if ui.add(delete).clicked() {
        interaction = Some(PanelInteraction::DeleteAccount);
    }

    interaction
}
