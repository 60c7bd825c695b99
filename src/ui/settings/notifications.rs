//! Notifications tab: email and push channels.

use crate::ui::panel_manager::PanelInteraction;
use crate::ui::widgets::toggle_row;
use comete::{MessageKey, NotificationUpdate, PreferencesController, ThemeColors};

pub fn render_notifications_tab(
    ui: &mut egui::Ui,
    prefs: &PreferencesController,
    colors: &ThemeColors,
) -> Option<PanelInteraction> {
    let mut interaction = None;
    let t = prefs.translator();
    let notifications = prefs.notifications();

    if let Some(on) = toggle_row(
        ui,
        t.t(MessageKey::NotificationsEmail),
        t.t(MessageKey::NotificationsEmailHint),
        notifications.email_notifications,
        colors,
    ) {
        interaction = Some(PanelInteraction::UpdatePreference(NotificationUpdate::Email(on).into()));
    }
    ui.add_space(6.0);

    if let Some(on) = toggle_row(
        ui,
        t.t(MessageKey::NotificationsPush),
        t.t(MessageKey::NotificationsPushHint),
        notifications.push_notifications,
        colors,
    ) {
        interaction = Some(PanelInteraction::UpdatePreference(NotificationUpdate::Push(on).into()));
    }

    interaction
}
