//! Profile image load state with placeholder fallback.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageStatus {
    #[default]
    Loading,
    Loaded,
    Failed,
}

impl ImageStatus {
    /// Status for an image whose load may have settled before hydration.
    ///
    /// A complete image with no natural height is a failed load whose
    /// `error` event fired before any listener was attached.
    #[must_use]
    pub fn at_mount(complete: bool, natural_height: u32) -> Self {
        match (complete, natural_height) {
            (false, _) => Self::Loading,
            (true, 0) => Self::Failed,
            (true, _) => Self::Loaded,
        }
    }

    #[must_use]
    pub fn placeholder_visible(self) -> bool {
        self != Self::Loaded
    }

    #[must_use]
    pub fn image_visible(self) -> bool {
        self != Self::Failed
    }
}
