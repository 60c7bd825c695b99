//! UI panel rendering subsystem
//!
//! This module contains all rendering logic for the Comète window:
//! - Header (navigation, language selector, theme toggle)
//! - Home page (hero, featured periods, call to action)
//! - Period list and period detail
//! - Quiz page
//! - Settings page with its profile, appearance, notifications and privacy tabs
//! - Toasts and footer
//! - Panel manager (layout and interaction funnel)
//!
//! Panels never mutate preferences themselves; they return interactions.

pub mod header;
pub mod home;
pub mod periods;
pub mod quiz_panel;
pub mod settings;
pub mod toasts;
pub mod footer;
pub mod widgets;
pub mod panel_manager;
