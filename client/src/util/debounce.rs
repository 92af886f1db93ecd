//! Trailing-edge debounce bookkeeping.
//!
//! Each trigger bumps a generation and schedules a delayed `fire`; only the
//! fire carrying the latest generation acts.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Quiet window for window resize handling.
pub const RESIZE_QUIET_MS: u32 = 250;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceToken(u64);

#[derive(Clone, Copy, Debug, Default)]
pub struct Debouncer {
    generation: u64,
}

impl Debouncer {
    pub fn bump(&mut self) -> DebounceToken {
        self.generation += 1;
        DebounceToken(self.generation)
    }

    /// `true` only for the most recent trigger.
    #[must_use]
    pub fn fire(&self, token: DebounceToken) -> bool {
        token.0 == self.generation
    }
}
