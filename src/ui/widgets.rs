//! Small building blocks shared by the pages: cards, section headings,
//! setting rows.

use comete::ThemeColors;
use egui::{RichText, Stroke};

/// Frame used for cards and settings groups.
pub fn card_frame(colors: &ThemeColors) -> egui::Frame {
    egui::Frame::default()
        .fill(colors.card)
        .stroke(Stroke::new(1.0, colors.border))
        .corner_radius(8)
        .inner_margin(egui::Margin::same(12))
}

/// Page heading with an optional dimmed subtitle.
pub fn page_heading(ui: &mut egui::Ui, title: &str, subtitle: Option<&str>, colors: &ThemeColors) {
    ui.add_space(8.0);
    ui.heading(RichText::new(title).strong().color(colors.text_strong));
    if let Some(subtitle) = subtitle {
        ui.label(RichText::new(subtitle).color(colors.text_dim));
    }
    ui.add_space(8.0);
}

/// A labelled on/off setting with an explanatory hint.
///
/// Returns the new value when the user flipped it.
pub fn toggle_row(
    ui: &mut egui::Ui,
    label: &str,
    hint: &str,
    value: bool,
    colors: &ThemeColors,
) -> Option<bool> {
    let mut current = value;
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(label).strong());
            ui.label(RichText::new(hint).small().color(colors.text_dim));
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            changed = ui.checkbox(&mut current, "").changed();
        });
    });
    changed.then_some(current)
}
