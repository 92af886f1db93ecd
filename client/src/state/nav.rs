//! Header navigation: mobile menu and in-page anchor targets.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Space left above a section when scrolling to it from a nav link.
pub const ANCHOR_OFFSET_PX: f64 = 80.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Collapse the mobile menu (link click, every scroll tick).
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    #[must_use]
    pub fn icon_class(self) -> &'static str {
        if self.menu_open { "bx bx-menu bx-x" } else { "bx bx-menu" }
    }

    #[must_use]
    pub fn navbar_class(self) -> &'static str {
        if self.menu_open { "navbar active" } else { "navbar" }
    }
}

/// Scroll destination for a section whose top is at `section_top`.
#[must_use]
pub fn anchor_scroll_top(section_top: f64) -> f64 {
    section_top - ANCHOR_OFFSET_PX
}
