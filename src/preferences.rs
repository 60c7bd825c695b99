//! User preference groups and their scoped updates.
//!
//! The three groups (profile, appearance, notifications) are siblings in one
//! [`Preferences`] aggregate. Changes are expressed as [`PreferenceUpdate`]
//! values so that the group and the field are both closed sets; the
//! controller is the only code that applies them.

use crate::i18n::Language;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Root text size in pixels, always within [`FontSize::MIN`]..=[`FontSize::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub struct FontSize(u8);

impl FontSize {
    pub const MIN: u8 = 12;
    pub const MAX: u8 = 24;
    pub const DEFAULT: FontSize = FontSize(16);

    /// Builds a font size, clamping out-of-range input to the nearest bound.
    pub fn clamped(px: i32) -> Self {
        let px = px.clamp(i32::from(Self::MIN), i32::from(Self::MAX));
        // In range after the clamp above
        Self(px as u8)
    }

    pub fn px(self) -> u8 {
        self.0
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<i32> for FontSize {
    fn from(px: i32) -> Self {
        Self::clamped(px)
    }
}

impl From<FontSize> for i32 {
    fn from(size: FontSize) -> Self {
        i32::from(size.0)
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Account information shown on the profile tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub bio: String,
    pub language: Language,
    /// Displayed only; no update exists for it.
    pub favorite_subjects: Vec<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Jean Dupont".to_string(),
            email: "jean.dupont@exemple.fr".to_string(),
            bio: "Passionné d'histoire et de sciences.".to_string(),
            language: Language::Fr,
            favorite_subjects: vec![
                "Histoire".to_string(),
                "Sciences".to_string(),
                "Astronomie".to_string(),
            ],
        }
    }
}

/// Reading comfort options. The theme lives with the theme provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppearancePreferences {
    pub font_size: FontSize,
    pub show_sources: bool,
    /// Stored and displayed, but nothing saves automatically.
    pub auto_save: bool,
}

impl Default for AppearancePreferences {
    fn default() -> Self {
        Self {
            font_size: FontSize::DEFAULT,
            show_sources: true,
            auto_save: true,
        }
    }
}

/// Delivery channels the user opted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationPreferences {
    pub email_notifications: bool,
    pub push_notifications: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: false,
        }
    }
}

/// All preference groups of one account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub profile: UserProfile,
    pub appearance: AppearancePreferences,
    pub notifications: NotificationPreferences,
}

/// Editable profile fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileUpdate {
    Name(String),
    Email(String),
    Bio(String),
    Language(Language),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppearanceUpdate {
    /// Raw slider value; clamped when applied.
    FontSize(i32),
    ShowSources(bool),
    AutoSave(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationUpdate {
    Email(bool),
    Push(bool),
}

/// A change to exactly one field of one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceUpdate {
    Profile(ProfileUpdate),
    Appearance(AppearanceUpdate),
    Notifications(NotificationUpdate),
}

impl From<ProfileUpdate> for PreferenceUpdate {
    fn from(update: ProfileUpdate) -> Self {
        PreferenceUpdate::Profile(update)
    }
}

impl From<AppearanceUpdate> for PreferenceUpdate {
    fn from(update: AppearanceUpdate) -> Self {
        PreferenceUpdate::Appearance(update)
    }
}

impl From<NotificationUpdate> for PreferenceUpdate {
    fn from(update: NotificationUpdate) -> Self {
        PreferenceUpdate::Notifications(update)
    }
}

impl Preferences {
    /// Applies one update in place and reports whether anything changed.
    ///
    /// Never fails: every value a [`PreferenceUpdate`] can carry is accepted,
    /// font sizes after clamping.
    pub fn apply(&mut self, update: PreferenceUpdate) -> bool {
        match update {
            PreferenceUpdate::Profile(field) => {
                let profile = &mut self.profile;
                match field {
                    ProfileUpdate::Name(name) => replace(&mut profile.name, name),
                    ProfileUpdate::Email(email) => replace(&mut profile.email, email),
                    ProfileUpdate::Bio(bio) => replace(&mut profile.bio, bio),
                    ProfileUpdate::Language(language) => replace(&mut profile.language, language),
                }
            }
            PreferenceUpdate::Appearance(field) => {
                let appearance = &mut self.appearance;
                match field {
                    AppearanceUpdate::FontSize(px) => {
                        replace(&mut appearance.font_size, FontSize::clamped(px))
                    }
                    AppearanceUpdate::ShowSources(on) => replace(&mut appearance.show_sources, on),
                    AppearanceUpdate::AutoSave(on) => replace(&mut appearance.auto_save, on),
                }
            }
            PreferenceUpdate::Notifications(field) => {
                let notifications = &mut self.notifications;
                match field {
                    NotificationUpdate::Email(on) => {
                        replace(&mut notifications.email_notifications, on)
                    }
                    NotificationUpdate::Push(on) => {
                        replace(&mut notifications.push_notifications, on)
                    }
                }
            }
        }
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_size_clamps_to_bounds() {
        assert_eq!(FontSize::clamped(-5).px(), 12);
        assert_eq!(FontSize::clamped(11).px(), 12);
        assert_eq!(FontSize::clamped(12).px(), 12);
        assert_eq!(FontSize::clamped(18).px(), 18);
        assert_eq!(FontSize::clamped(24).px(), 24);
        assert_eq!(FontSize::clamped(25).px(), 24);
        assert_eq!(FontSize::clamped(i32::MAX).px(), 24);
        assert_eq!(FontSize::clamped(i32::MIN).px(), 12);
    }

    #[test]
    fn test_font_size_deserialization_clamps() {
        let size: FontSize = serde_json::from_str("40").unwrap();
        assert_eq!(size.px(), 24);
        assert_eq!(serde_json::to_string(&FontSize::clamped(14)).unwrap(), "14");
        assert_eq!(FontSize::clamped(18).to_string(), "18px");
    }

    #[test]
    fn test_apply_touches_only_addressed_field() {
        let mut prefs = Preferences::default();
        let before = prefs.clone();

        assert!(prefs.apply(ProfileUpdate::Bio("Astronome amateur".into()).into()));
        assert_eq!(prefs.profile.bio, "Astronome amateur");
        assert_eq!(prefs.profile.name, before.profile.name);
        assert_eq!(prefs.appearance, before.appearance);
        assert_eq!(prefs.notifications, before.notifications);
    }

    #[test]
    fn test_apply_reports_no_change_for_same_value() {
        let mut prefs = Preferences::default();
        assert!(!prefs.apply(NotificationUpdate::Email(true).into()));
        assert!(!prefs.apply(AppearanceUpdate::FontSize(16).into()));
        // 30 and 24 both land on the upper bound
        assert!(prefs.apply(AppearanceUpdate::FontSize(30).into()));
        assert!(!prefs.apply(AppearanceUpdate::FontSize(24).into()));
    }

    #[test]
    fn test_partial_appearance_json_uses_defaults() {
        let appearance: AppearancePreferences =
            serde_json::from_str(r#"{"fontSize": 20}"#).unwrap();
        assert_eq!(appearance.font_size.px(), 20);
        assert!(appearance.show_sources);
        assert!(appearance.auto_save);
    }

    #[test]
    fn test_profile_json_uses_camel_case() {
        let json = serde_json::to_value(UserProfile::default()).unwrap();
        assert_eq!(json["language"], "fr");
        assert!(json.get("favoriteSubjects").is_some());
    }
}
