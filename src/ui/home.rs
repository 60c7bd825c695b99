//! Home page: hero banner, featured periods and the quiz call to action.

use crate::app::AppState;
use crate::state::Page;
use crate::ui::panel_manager::PanelInteraction;
use crate::ui::periods::render_period_cards;
use crate::ui::widgets::card_frame;
use comete::{with_alpha, MessageKey, ThemeColors};
use egui::RichText;

/// Number of periods shown on the home page.
const FEATURED_PERIODS: usize = 3;

pub fn render_home(ui: &mut egui::Ui, state: &AppState, colors: &ThemeColors) -> Option<PanelInteraction> {
    let mut interaction = None;
    let t = state.prefs.translator();

    // Hero
    egui::Frame::default()
        .fill(with_alpha(colors.accent, 40))
        .corner_radius(12)
        .inner_margin(egui::Margin::same(24))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(t.t(MessageKey::HeroTitle)).heading().strong().color(colors.text_strong));
                ui.add_space(6.0);
                ui.label(RichText::new(t.t(MessageKey::HeroSubtitle)).color(colors.text_dim));
                ui.add_space(12.0);
                let button = egui::Button::new(RichText::new(t.t(MessageKey::HeroButton)).strong().color(colors.card))
                    .fill(colors.accent);
                if ui.add(button).clicked() {
                    interaction = Some(PanelInteraction::Navigate(Page::Periods));
                }
            });
        });

    ui.add_space(16.0);
    ui.label(RichText::new(t.t(MessageKey::PeriodsTitle)).heading().color(colors.text_strong));
    ui.add_space(8.0);

    let featured = &state.periods[..state.periods.len().min(FEATURED_PERIODS)];
    if let Some(card_interaction) = render_period_cards(ui, featured, t, colors) {
        interaction = Some(card_interaction);
    }

    ui.add_space(16.0);

    // Call to action
    card_frame(colors).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(t.t(MessageKey::CtaTitle)).strong().size(18.0));
                ui.label(RichText::new(t.t(MessageKey::CtaDescription)).color(colors.text_dim));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(t.t(MessageKey::CtaButton)).clicked() {
                    interaction = Some(PanelInteraction::Navigate(Page::Quiz));
                }
            });
        });
    });

    interaction
}
