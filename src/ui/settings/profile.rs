//! Profile tab: name, email, bio, language and favourite subjects.
//!
//! Text fields are controlled: the widget edits a copy of the stored value
//! and a change is sent back as a `ProfileUpdate`.

use crate::ui::panel_manager::PanelInteraction;
use comete::{Language, MessageKey, PreferencesController, ProfileUpdate, ThemeColors};
use egui::RichText;

fn field_changed(field: ProfileUpdate) -> PanelInteraction {
    PanelInteraction::UpdatePreference(field.into())
}

pub fn render_profile_tab(
    ui: &mut egui::Ui,
    prefs: &PreferencesController,
    colors: &ThemeColors,
) -> Option<PanelInteraction> {
    let mut interaction = None;
    let t = prefs.translator();
    let profile = prefs.profile();

    ui.horizontal(|ui| {
        let initials: String = profile
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect();
        ui.label(RichText::new(initials).size(28.0).strong().color(colors.accent));
        if ui.button(t.t(MessageKey::AvatarChange)).clicked() {
            interaction = Some(PanelInteraction::UploadAvatar);
        }
    });
    ui.add_space(8.0);

    egui::Grid::new("profile_form")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label(t.t(MessageKey::ProfileName));
            let mut name = profile.name.clone();
            if ui.text_edit_singleline(&mut name).changed() {
                interaction = Some(field_changed(ProfileUpdate::Name(name)));
            }
            ui.end_row();

            ui.label(t.t(MessageKey::ProfileEmail));
            let mut email = profile.email.clone();
            if ui.text_edit_singleline(&mut email).changed() {
                interaction = Some(field_changed(ProfileUpdate::Email(email)));
            }
            ui.end_row();

            ui.label(t.t(MessageKey::ProfileBio));
            let mut bio = profile.bio.clone();
            if ui.add(egui::TextEdit::multiline(&mut bio).desired_rows(3)).changed() {
                interaction = Some(field_changed(ProfileUpdate::Bio(bio)));
            }
            ui.end_row();

            ui.label(t.t(MessageKey::ProfileLanguage));
            let mut language = profile.language;
            egui::ComboBox::from_id_salt("profile_language")
                .selected_text(language.native_name())
                .show_ui(ui, |ui| {
                    for option in Language::ALL {
                        ui.selectable_value(&mut language, option, option.native_name());
                    }
                });
            if language != profile.language {
                interaction = Some(field_changed(ProfileUpdate::Language(language)));
            }
            ui.end_row();

            ui.label(t.t(MessageKey::ProfileFavoriteSubjects));
            ui.horizontal_wrapped(|ui| {
                for subject in &profile.favorite_subjects {
                    ui.label(RichText::new(subject.as_str()).background_color(colors.hover));
                }
            });
            ui.end_row();
        });

    ui.add_space(12.0);
    if ui.button(t.t(MessageKey::ProfileSubmit)).clicked() {
        interaction = Some(PanelInteraction::SubmitProfile);
    }

    interaction
}
