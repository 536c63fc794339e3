//! Local UI chrome state (theme, mobile menu, scroll position).
//!
//! DESIGN
//! ======
//! Owned by the page as an `RwSignal` and handed to children through
//! context, so each page instance has its own copy and nothing lives in a
//! module-level global.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::scroll::ScrollState;
use crate::util::theme::ThemeMode;

/// UI state shared by the navigation bar and page sections.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub theme: ThemeMode,
    pub menu_open: bool,
    pub scroll: ScrollState,
}

impl UiState {
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.theme = theme;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Replace the scroll snapshot. Only the latest reading is kept.
    pub fn set_scroll(&mut self, scroll: ScrollState) {
        self.scroll = scroll;
    }
}
