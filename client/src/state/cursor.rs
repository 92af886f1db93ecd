//! Custom cursor dot and eased follower.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

/// Fraction of the remaining distance the follower covers each frame.
pub const FOLLOW_EASING: f64 = 0.2;

/// Selector for elements that enlarge the cursor on hover.
pub const INTERACTIVE_SELECTOR: &str = "a, button, input, textarea, .btn, .filter-btn";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorState {
    pub pointer: (f64, f64),
    pub follower: (f64, f64),
    pub hovering: bool,
}

impl CursorState {
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.pointer = (x, y);
    }

    /// Ease the follower toward the pointer by one frame.
    pub fn step_follower(&mut self) {
        let (px, py) = self.pointer;
        let (fx, fy) = self.follower;
        self.follower = (fx + (px - fx) * FOLLOW_EASING, fy + (py - fy) * FOLLOW_EASING);
    }

    #[must_use]
    pub fn dot_class(&self) -> &'static str {
        if self.hovering { "cursor cursor-hover" } else { "cursor" }
    }

    #[must_use]
    pub fn follower_transform(&self) -> &'static str {
        if self.hovering {
            "translate(-50%, -50%) scale(0.5)"
        } else {
            "translate(-50%, -50%) scale(1)"
        }
    }
}
