//! Application-level modules for the Comète GUI.
//!
//! This module contains the centralized state and the coordinators that
//! apply panel interactions, persist settings and drive egui side effects.

mod app_state;
mod application_coordinator;
mod page_title;
mod settings_coordinator;
mod theme_coordinator;

pub use app_state::AppState;
pub use application_coordinator::ApplicationCoordinator;
pub use page_title::PageTitleCoordinator;
pub use settings_coordinator::SettingsCoordinator;
pub use theme_coordinator::ThemeCoordinator;
