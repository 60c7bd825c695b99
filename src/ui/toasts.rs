//! Toast rendering, stacked in the bottom-right corner.

use crate::ui::panel_manager::PanelInteraction;
use comete::{NotificationLevel, ThemeColors, ToastQueue};
use egui::{RichText, Stroke};
use std::time::{Duration, Instant};

const TOAST_WIDTH: f32 = 320.0;

fn level_color(level: NotificationLevel, colors: &ThemeColors) -> egui::Color32 {
    match level {
        NotificationLevel::Info => colors.accent,
        NotificationLevel::Success => colors.success,
        NotificationLevel::Error => colors.error,
    }
}

/// Draws the active toasts. Clicking a toast dismisses it.
pub fn render_toasts(ctx: &egui::Context, toasts: &ToastQueue, colors: &ThemeColors) -> Option<PanelInteraction> {
    let active = toasts.active(Instant::now());
    if active.is_empty() {
        return None;
    }

    let mut interaction = None;
    egui::Area::new(egui::Id::new("toasts"))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -40.0))
        .show(ctx, |ui| {
            for toast in &active {
                let accent = level_color(toast.notification.level, colors);
                let response = egui::Frame::default()
                    .fill(colors.card)
                    .stroke(Stroke::new(1.5, accent))
                    .corner_radius(8)
                    .inner_margin(egui::Margin::same(10))
                    .show(ui, |ui| {
                        ui.set_width(TOAST_WIDTH);
                        ui.label(RichText::new(toast.notification.title.as_str()).strong().color(accent));
                        if !toast.notification.description.is_empty() {
                            ui.label(toast.notification.description.as_str());
                        }
                    })
                    .response
                    .interact(egui::Sense::click());
                if response.clicked() {
                    interaction = Some(PanelInteraction::DismissToast(toast.id));
                }
                ui.add_space(6.0);
            }
        });

    // Keep repainting so toasts disappear on time without user input
    ctx.request_repaint_after(Duration::from_millis(250));
    interaction
}
