//! Page navigation state.
//!
//! Comète has a handful of screens switched in place; there is no routing
//! beyond the current page and a one-level "back" for period details.

use comete::MessageKey;

/// Top-level screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Periods,
    /// Detail view of one period, by catalog id
    Period(String),
    Quiz,
    Settings,
}

impl Page {
    /// Pages reachable from the header, in display order.
    pub const NAV: [(Page, MessageKey); 4] = [
        (Page::Home, MessageKey::NavHome),
        (Page::Periods, MessageKey::NavPeriods),
        (Page::Quiz, MessageKey::NavQuiz),
        (Page::Settings, MessageKey::NavSettings),
    ];

    /// Whether this page belongs to the header entry `nav`.
    pub fn is_under(&self, nav: &Page) -> bool {
        match (self, nav) {
            (Page::Period(_), Page::Periods) => true,
            _ => self == nav,
        }
    }
}

/// Tab of the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsTab {
    #[default]
    Profile,
    Appearance,
    Notifications,
    Privacy,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 4] = [
        SettingsTab::Profile,
        SettingsTab::Appearance,
        SettingsTab::Notifications,
        SettingsTab::Privacy,
    ];

    pub fn label(self) -> MessageKey {
        match self {
            SettingsTab::Profile => MessageKey::TabProfile,
            SettingsTab::Appearance => MessageKey::TabAppearance,
            SettingsTab::Notifications => MessageKey::TabNotifications,
            SettingsTab::Privacy => MessageKey::TabPrivacy,
        }
    }
}

/// Current page and settings tab.
#[derive(Debug, Clone)]
pub struct NavigationState {
    page: Page,
    settings_tab: SettingsTab,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            page: Page::Home,
            settings_tab: SettingsTab::default(),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn settings_tab(&self) -> SettingsTab {
        self.settings_tab
    }

    pub fn navigate(&mut self, page: Page) {
        if self.page != page {
            tracing::debug!(?page, "navigate");
            self.page = page;
        }
    }

    pub fn select_tab(&mut self, tab: SettingsTab) {
        self.settings_tab = tab;
    }

    /// Leaves a period detail for the period list; elsewhere goes home.
    pub fn back(&mut self) {
        let target = match self.page {
            Page::Period(_) => Page::Periods,
            _ => Page::Home,
        };
        self.navigate(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_from_period_detail() {
        let mut nav = NavigationState::new();
        nav.navigate(Page::Period("antiquite".to_string()));
        assert!(nav.page().is_under(&Page::Periods));
        nav.back();
        assert_eq!(nav.page(), &Page::Periods);
        nav.back();
        assert_eq!(nav.page(), &Page::Home);
    }

    #[test]
    fn test_tab_selection_survives_navigation() {
        let mut nav = NavigationState::new();
        nav.select_tab(SettingsTab::Privacy);
        nav.navigate(Page::Quiz);
        nav.navigate(Page::Settings);
        assert_eq!(nav.settings_tab(), SettingsTab::Privacy);
    }
}
