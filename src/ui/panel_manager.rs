//! Panel orchestration and layout management.
//!
//! Lays out the header, footer, toasts and the page in the central panel,
//! and funnels every user action into a single `PanelInteraction`.

use crate::app::AppState;
use crate::state::{Page, SettingsTab};
use crate::ui::{footer, header, home, periods, quiz_panel, settings, toasts};
use comete::{PreferenceUpdate, ThemePreference};
use std::path::PathBuf;

/// Result of panel interactions that need to be handled by the application coordinator.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelInteraction {
    Navigate(Page),
    Back,
    SelectSettingsTab(SettingsTab),
    /// A controlled settings field changed
    UpdatePreference(PreferenceUpdate),
    SetTheme(ThemePreference),
    ResetAppearance,
    SubmitProfile,
    UploadAvatar,
    /// User picked a destination for "download my data"
    ExportData(PathBuf),
    DeleteAccount,
    QuizAnswer(usize),
    QuizNext,
    DismissToast(u64),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Called from `eframe::App::update()`; returns the interaction of this
    /// frame, if any.
    pub fn render_all_panels(ctx: &egui::Context, state: &AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;
        let colors = state.theme_manager.palette(ctx.theme()).colors.clone();
        let t = state.prefs.translator();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state, &colors) {
                interaction = Some(header_interaction);
            }
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            footer::render_footer(ui, t, &colors);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("page_scroll_area")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let page_interaction = match state.navigation.page() {
                        Page::Home => home::render_home(ui, state, &colors),
                        Page::Periods => periods::render_period_list(ui, state, &colors),
                        Page::Period(id) => periods::render_period_detail(ui, state, id, &colors),
                        Page::Quiz => quiz_panel::render_quiz(ui, state, &colors),
                        Page::Settings => settings::render_settings(ui, state, &colors),
                    };
                    if page_interaction.is_some() {
                        interaction = page_interaction;
                    }
                });
        });

        if let Some(toast_interaction) = toasts::render_toasts(ctx, &state.toasts, &colors) {
            interaction = Some(toast_interaction);
        }

        interaction
    }
}
