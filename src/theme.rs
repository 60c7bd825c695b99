//! Theme support for Comète.
//!
//! The user's choice ([`ThemePreference`]) is owned by a [`ThemeProvider`];
//! the preferences controller only reads and forwards it. The palettes below
//! are applied on top of egui's stock light and dark visuals.
//!
//! # Examples
//!
//! ```
//! use comete::theme::{SharedThemeProvider, ThemePreference, ThemeProvider, ThemeManager};
//!
//! let mut provider = SharedThemeProvider::new(ThemePreference::System);
//! provider.set_theme(ThemePreference::Dark);
//! assert_eq!(provider.theme(), ThemePreference::Dark);
//!
//! let manager = ThemeManager::new();
//! println!("Dark accent: {:?}", manager.palette(egui::Theme::Dark).colors.accent);
//! ```

use egui::Color32;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

/// Theme selected by the user. `System` follows the operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::System,
    ];

    pub fn to_egui(self) -> egui::ThemePreference {
        match self {
            ThemePreference::Light => egui::ThemePreference::Light,
            ThemePreference::Dark => egui::ThemePreference::Dark,
            ThemePreference::System => egui::ThemePreference::System,
        }
    }
}

/// External owner of the theme choice.
pub trait ThemeProvider {
    fn theme(&self) -> ThemePreference;
    fn set_theme(&mut self, theme: ThemePreference);
}

/// Theme provider whose clones share one value, so the controller can write
/// it while the GUI reads it every frame.
#[derive(Debug, Clone, Default)]
pub struct SharedThemeProvider {
    current: Arc<RwLock<ThemePreference>>,
}

impl SharedThemeProvider {
    pub fn new(initial: ThemePreference) -> Self {
        Self {
            current: Arc::new(RwLock::new(initial)),
        }
    }
}

impl ThemeProvider for SharedThemeProvider {
    fn theme(&self) -> ThemePreference {
        *self.current.read().unwrap_or_else(|e| e.into_inner())
    }

    fn set_theme(&mut self, theme: ThemePreference) {
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = theme;
    }
}

/// Colour palette for one of the two concrete themes.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,
    pub card: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,

    // Interactive colors
    pub accent: Color32,
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Notification levels
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Holds the light and dark palettes.
pub struct ThemeManager {
    light: Theme,
    dark: Theme,
}

impl ThemeManager {
    pub fn new() -> Self {
        Self {
            light: light_theme(),
            dark: dark_theme(),
        }
    }

    /// Palette used when egui renders with `theme`.
    pub fn palette(&self, theme: egui::Theme) -> &Theme {
        match theme {
            egui::Theme::Light => &self.light,
            egui::Theme::Dark => &self.dark,
        }
    }

    /// Builds egui visuals for `theme` with the Comète palette applied.
    pub fn visuals(&self, theme: egui::Theme) -> egui::Visuals {
        let mut visuals = match theme {
            egui::Theme::Light => egui::Visuals::light(),
            egui::Theme::Dark => egui::Visuals::dark(),
        };
        self.apply_theme(self.palette(theme), &mut visuals);
        visuals
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.window_fill = colors.card;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.accent;

        visuals.widgets.noninteractive.bg_fill = colors.card;
        visuals.widgets.noninteractive.bg_stroke.color = colors.border;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.accent;

        visuals.error_fg_color = colors.error;
        visuals.warn_fg_color = colors.warning;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Night-sky blues on white.
fn light_theme() -> Theme {
    Theme {
        name: "Clair".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#f8fafc"),
            panel_background: hex_to_color32("#f8fafc"),
            extreme_background: hex_to_color32("#ffffff"),
            card: hex_to_color32("#ffffff"),

            text: hex_to_color32("#0f172a"),
            text_dim: hex_to_color32("#64748b"),
            text_strong: hex_to_color32("#020617"),

            accent: hex_to_color32("#4f46e5"),
            selection: hex_to_color32("#c7d2fe"),
            hover: hex_to_color32("#e2e8f0"),
            border: hex_to_color32("#cbd5e1"),

            success: hex_to_color32("#16a34a"),
            warning: hex_to_color32("#d97706"),
            error: hex_to_color32("#dc2626"),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Sombre".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#0b1120"),
            panel_background: hex_to_color32("#0f172a"),
            extreme_background: hex_to_color32("#020617"),
            card: hex_to_color32("#1e293b"),

            text: hex_to_color32("#e2e8f0"),
            text_dim: hex_to_color32("#94a3b8"),
            text_strong: hex_to_color32("#f8fafc"),

            accent: hex_to_color32("#818cf8"),
            selection: hex_to_color32("#312e81"),
            hover: hex_to_color32("#334155"),
            border: hex_to_color32("#475569"),

            success: hex_to_color32("#4ade80"),
            warning: hex_to_color32("#fbbf24"),
            error: hex_to_color32("#f87171"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32
///
/// Anything but six ASCII hex digits, with or without `#`, gives black.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 && hex.is_ascii() {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Sets the alpha channel of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
