//! State management modules for the Comète GUI.
//!
//! This module contains state-only logic (no UI concerns):
//! - Navigation state (current page, selected settings tab)
//! - Quiz state (running session, random source)
//!
//! Account preferences are not here: they belong to the library's
//! `PreferencesController`, held by `AppState`.

mod navigation;
mod quiz_state;

pub use navigation::{NavigationState, Page, SettingsTab};
pub use quiz_state::QuizState;
