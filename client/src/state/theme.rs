//! Persisted color theme preference.
//!
//! DESIGN
//! ======
//! The preference is a closed two-value enum. Anything unexpected in storage
//! collapses to the dark default instead of leaking arbitrary strings into
//! the `data-theme` attribute.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Site color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    /// Parse a stored value. Missing or unknown values fall back to dark.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Value written to storage and to the `data-theme` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Boxicons class for the toggle button.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Dark => "bx-moon",
            Self::Light => "bx-sun",
        }
    }
}
