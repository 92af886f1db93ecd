//! Transient corner notification (CV download notice).

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long the toast stays fully visible.
pub const VISIBLE_MS: u32 = 3000;
/// Slide-out duration before removal.
pub const LEAVE_MS: u32 = 300;

pub const CV_NOTICE: &str = "CV download will start shortly...";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    Leaving,
    #[default]
    Gone,
}

/// Identifies one `show` so an older lifecycle cannot end a newer toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastToken(u64);

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub message: String,
    pub phase: ToastPhase,
    generation: u64,
}

impl ToastState {
    pub fn show(&mut self, message: impl Into<String>) -> ToastToken {
        self.generation += 1;
        self.message = message.into();
        self.phase = ToastPhase::Visible;
        ToastToken(self.generation)
    }

    /// Advance `Visible → Leaving → Gone`; returns the delay until the next
    /// advance, or `None` when finished or stale.
    pub fn advance(&mut self, token: ToastToken) -> Option<u32> {
        if token.0 != self.generation {
            return None;
        }
        match self.phase {
            ToastPhase::Visible => {
                self.phase = ToastPhase::Leaving;
                Some(LEAVE_MS)
            }
            ToastPhase::Leaving => {
                self.phase = ToastPhase::Gone;
                self.message.clear();
                None
            }
            ToastPhase::Gone => None,
        }
    }

    #[must_use]
    pub fn animation(&self) -> &'static str {
        match self.phase {
            ToastPhase::Visible => "slideIn 0.3s ease",
            ToastPhase::Leaving | ToastPhase::Gone => "slideOut 0.3s ease",
        }
    }
}
