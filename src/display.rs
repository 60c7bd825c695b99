//! Process-wide display configuration (root text scale).
//!
//! There is exactly one [`DisplayConfigWriter`], held by the preferences
//! controller. Any number of [`DisplayConfigReader`]s poll it; each write
//! that changes the value bumps a generation counter so readers can tell
//! whether they need to re-apply it.

use crate::preferences::FontSize;
use std::sync::{Arc, RwLock};

/// Snapshot of the display configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySettings {
    pub root_font_size: FontSize,
}

impl DisplaySettings {
    /// CSS-style value of the root text size, e.g. `"18px"`.
    pub fn root_font_size_css(&self) -> String {
        self.root_font_size.to_string()
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            root_font_size: FontSize::DEFAULT,
        }
    }
}

#[derive(Debug)]
struct Shared {
    settings: DisplaySettings,
    generation: u64,
}

/// Factory for a writer/reader pair sharing one configuration.
pub struct DisplayConfig;

impl DisplayConfig {
    pub fn new(initial: DisplaySettings) -> (DisplayConfigWriter, DisplayConfigReader) {
        let shared = Arc::new(RwLock::new(Shared {
            settings: initial,
            generation: 0,
        }));
        (
            DisplayConfigWriter {
                shared: Arc::clone(&shared),
            },
            DisplayConfigReader { shared },
        )
    }
}

/// Sole writer of the display configuration. Deliberately not `Clone`.
#[derive(Debug)]
pub struct DisplayConfigWriter {
    shared: Arc<RwLock<Shared>>,
}

impl DisplayConfigWriter {
    /// Publishes a new root font size. Returns true if the value changed.
    pub fn set_root_font_size(&mut self, size: FontSize) -> bool {
        let mut shared = self.shared.write().unwrap_or_else(|e| e.into_inner());
        if shared.settings.root_font_size == size {
            return false;
        }
        shared.settings.root_font_size = size;
        shared.generation += 1;
        tracing::debug!(root_font_size = %size, generation = shared.generation, "display configuration updated");
        true
    }

    /// Creates another reader of this configuration.
    pub fn reader(&self) -> DisplayConfigReader {
        DisplayConfigReader {
            shared: Arc::clone(&self.shared),
        }
    }
}

/// Read access to the display configuration.
#[derive(Debug, Clone)]
pub struct DisplayConfigReader {
    shared: Arc<RwLock<Shared>>,
}

impl DisplayConfigReader {
    pub fn current(&self) -> DisplaySettings {
        self.shared.read().unwrap_or_else(|e| e.into_inner()).settings
    }

    /// Returns the settings and their generation if they changed after `seen`.
    ///
    /// Pass `None` on first use to always receive the current value.
    pub fn changed_since(&self, seen: Option<u64>) -> Option<(DisplaySettings, u64)> {
        let shared = self.shared.read().unwrap_or_else(|e| e.into_inner());
        match seen {
            Some(generation) if generation == shared.generation => None,
            _ => Some((shared.settings, shared.generation)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_sees_writes() {
        let (mut writer, reader) = DisplayConfig::new(DisplaySettings::default());
        assert_eq!(reader.current().root_font_size_css(), "16px");

        assert!(writer.set_root_font_size(FontSize::clamped(18)));
        assert_eq!(reader.current().root_font_size_css(), "18px");
        assert_eq!(writer.reader().current().root_font_size.px(), 18);
    }

    #[test]
    fn test_generation_moves_only_on_change() {
        let (mut writer, reader) = DisplayConfig::new(DisplaySettings::default());
        let (_, first) = reader.changed_since(None).expect("first poll always yields");
        assert!(reader.changed_since(Some(first)).is_none());

        assert!(!writer.set_root_font_size(FontSize::DEFAULT));
        assert!(reader.changed_since(Some(first)).is_none());

        writer.set_root_font_size(FontSize::clamped(20));
        let (settings, second) = reader.changed_since(Some(first)).expect("changed");
        assert_eq!(settings.root_font_size.px(), 20);
        assert_eq!(second, first + 1);
    }
}
