//! Period cards and period detail page.

use crate::app::AppState;
use crate::state::Page;
use crate::ui::panel_manager::PanelInteraction;
use crate::ui::widgets::{card_frame, page_heading};
use comete::catalog::{format_year, Period};
use comete::{hex_to_color32, Language, MessageKey, ThemeColors, Translator};
use egui::RichText;

const CARD_SIZE: egui::Vec2 = egui::vec2(280.0, 190.0);

fn span_text(period: &Period, t: Translator) -> String {
    let language: Language = t.language();
    t.fmt(
        MessageKey::PeriodSpan,
        &[
            ("start", format_year(period.start_year, language).as_str()),
            ("end", format_year(period.end_year, language).as_str()),
        ],
    )
}

/// Renders `periods` as a wrapping grid of cards.
pub fn render_period_cards(
    ui: &mut egui::Ui,
    periods: &[Period],
    t: Translator,
    colors: &ThemeColors,
) -> Option<PanelInteraction> {
    let mut interaction = None;
    ui.horizontal_wrapped(|ui| {
        for period in periods {
            ui.allocate_ui(CARD_SIZE, |ui| {
                card_frame(colors).show(ui, |ui| {
                    ui.set_min_size(CARD_SIZE - egui::vec2(24.0, 24.0));
                    ui.label(
                        RichText::new(period.title.as_str())
                            .strong()
                            .size(18.0)
                            .color(hex_to_color32(&period.accent)),
                    );
                    ui.label(RichText::new(span_text(period, t)).small().color(colors.text_dim));
                    ui.add_space(4.0);
                    ui.add(egui::Label::new(period.summary.as_str()).wrap());
                    ui.add_space(6.0);
                    if ui.button(t.t(MessageKey::PeriodExplore)).clicked() {
                        interaction = Some(PanelInteraction::Navigate(Page::Period(period.id.clone())));
                    }
                });
            });
        }
    });
    interaction
}

pub fn render_period_list(ui: &mut egui::Ui, state: &AppState, colors: &ThemeColors) -> Option<PanelInteraction> {
    let t = state.prefs.translator();
    page_heading(
        ui,
        t.t(MessageKey::PeriodsTitle),
        Some(t.t(MessageKey::PeriodsSubtitle)),
        colors,
    );
    render_period_cards(ui, state.periods, t, colors)
}

pub fn render_period_detail(
    ui: &mut egui::Ui,
    state: &AppState,
    id: &str,
    colors: &ThemeColors,
) -> Option<PanelInteraction> {
    let mut interaction = None;
    let t = state.prefs.translator();

    if ui.button(format!("← {}", t.t(MessageKey::PeriodBack))).clicked() {
        interaction = Some(PanelInteraction::Back);
    }

    let Some(period) = state.period(id) else {
        ui.add_space(12.0);
        ui.colored_label(colors.error, t.t(MessageKey::PeriodNotFound));
        return interaction;
    };

    let span = span_text(period, t);
    page_heading(ui, &period.title, Some(span.as_str()), colors);

    card_frame(colors).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.add(egui::Label::new(period.summary.as_str()).wrap());
        ui.add_space(10.0);
        ui.label(RichText::new(t.t(MessageKey::PeriodKeyEvents)).strong());
        for event in &period.key_events {
            ui.horizontal(|ui| {
                ui.colored_label(hex_to_color32(&period.accent), "●");
                ui.label(event.as_str());
            });
        }

        if state.prefs.appearance().show_sources && !period.sources.is_empty() {
            ui.add_space(10.0);
            ui.separator();
            for source in &period.sources {
                ui.label(RichText::new(format!("📚 {}", source)).small().italics().color(colors.text_dim));
            }
        }
    });

    interaction
}
