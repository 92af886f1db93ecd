//! Thank-you modal shown after a successful submission.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Auto-dismiss delay.
pub const AUTO_CLOSE_MS: u32 = 3000;

/// Identifies one `open` call so a stale auto-close cannot dismiss a later one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModalToken(u64);

#[derive(Clone, Copy, Debug, Default)]
pub struct ModalState {
    open: bool,
    generation: u64,
}

impl ModalState {
    pub fn open(&mut self) -> ModalToken {
        self.generation += 1;
        self.open = true;
        ModalToken(self.generation)
    }

    /// Outside click, `Escape`, or the close button.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Timer-driven close; ignored if the modal was reopened since.
    pub fn auto_close(&mut self, token: ModalToken) -> bool {
        if self.open && token.0 == self.generation {
            self.open = false;
            return true;
        }
        false
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// `overflow` value for `<body>` while the modal is in this state.
    #[must_use]
    pub fn body_overflow(&self) -> &'static str {
        if self.open { "hidden" } else { "auto" }
    }
}
