//! Comète: preferences, translations and content for the Comète learning app.
//!
//! The GUI binary (`comete-gui`) is a thin egui shell over this library:
//! - [`controller`] owns the account preferences and performs the settings actions
//! - [`display`] publishes the root text scale to whoever renders text
//! - [`i18n`] resolves typed message keys in French, English and Spanish
//! - [`notify`] carries toasts from the controller to the screen
//! - [`theme`] holds the theme choice and the colour palettes
//! - [`store`] persists the profile
//! - [`catalog`] and [`quiz`] provide the historical content and the mini-game

pub mod error;
pub mod preferences;
pub mod display;
pub mod i18n;
pub mod notify;
pub mod theme;
pub mod store;
pub mod catalog;
pub mod quiz;
pub mod controller;

pub use controller::PreferencesController;
pub use display::{DisplayConfig, DisplayConfigReader, DisplayConfigWriter, DisplaySettings};
pub use error::{CatalogError, I18nError, StoreError, UnsupportedLanguage};
pub use i18n::{Language, MessageKey, Translator};
pub use notify::{Notification, NotificationLevel, Notifier, Toast, ToastQueue};
pub use preferences::{
    AppearancePreferences, AppearanceUpdate, FontSize, NotificationPreferences,
    NotificationUpdate, PreferenceUpdate, Preferences, ProfileUpdate, UserProfile,
};
pub use store::{JsonFileProfileStore, MemoryProfileStore, ProfileStore};
pub use theme::{
    hex_to_color32, with_alpha, SharedThemeProvider, Theme, ThemeColors, ThemeManager,
    ThemePreference, ThemeProvider,
};
