//! Page preloader lifecycle.
//!
//! After `load` the overlay waits, fades, and hides; the page animations
//! (typing, reveal observers, home stats) start once it is gone.

#[cfg(test)]
#[path = "preloader_test.rs"]
mod preloader_test;

/// Hold after `load` before the fade starts.
pub const HOLD_MS: u32 = 500;
/// Fade-out duration before the overlay is removed.
pub const FADE_MS: u32 = 500;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreloaderPhase {
    #[default]
    Showing,
    FadingOut,
    Hidden,
}

impl PreloaderPhase {
    /// Next phase and the delay before entering it.
    #[must_use]
    pub fn next(self) -> Option<(Self, u32)> {
        match self {
            Self::Showing => Some((Self::FadingOut, HOLD_MS)),
            Self::FadingOut => Some((Self::Hidden, FADE_MS)),
            Self::Hidden => None,
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Showing => "preloader",
            Self::FadingOut => "preloader fade-out",
            Self::Hidden => "preloader fade-out hidden",
        }
    }

    /// Whether page animations may run.
    #[must_use]
    pub fn animations_ready(self) -> bool {
        self == Self::Hidden
    }
}
