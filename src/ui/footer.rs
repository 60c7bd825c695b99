//! Footer with the copyright line and version.

use comete::{MessageKey, ThemeColors, Translator};
use egui::RichText;

const COPYRIGHT_YEAR: &str = "2025";

pub fn render_footer(ui: &mut egui::Ui, t: Translator, colors: &ThemeColors) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(t.fmt(MessageKey::FooterRights, &[("year", COPYRIGHT_YEAR)]))
                .small()
                .color(colors.text_dim),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                    .small()
                    .color(colors.text_dim),
            );
            ui.label(RichText::new(t.t(MessageKey::AppTagline)).small().italics().color(colors.text_dim));
        });
    });
}
