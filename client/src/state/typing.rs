//! Typed-text animation cycling through a fixed phrase list.
//!
//! DESIGN
//! ======
//! `TypingAnimator` is a four-phase state machine driven by `tick`. Every
//! scheduled tick carries the generation token it was scheduled under;
//! `start` bumps the generation, so a tick queued by an earlier cycle is
//! rejected and at most one cycle ever produces output.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

/// Delay between appended characters.
pub const TYPE_DELAY_MS: u32 = 80;
/// Delay between removed characters.
pub const DELETE_DELAY_MS: u32 = 30;
/// Hold after a phrase is fully typed.
pub const FULL_PAUSE_MS: u32 = 2000;
/// Hold after a phrase is fully deleted.
pub const EMPTY_PAUSE_MS: u32 = 500;
/// Delay before the first tick after `start`.
pub const START_DELAY_MS: u32 = 1000;

/// Where the animator is in its cycle after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    PausingFull,
    Deleting,
    PausingEmpty,
}

/// Output of one tick: the text to show and when to tick next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub phase: TypingPhase,
    pub delay_ms: u32,
}

/// Generation token identifying one animation cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingToken(u64);

#[derive(Clone, Debug)]
pub struct TypingAnimator {
    phrases: Vec<String>,
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
    generation: u64,
    running: bool,
}

impl TypingAnimator {
    #[must_use]
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            phrase_index: 0,
            char_index: 0,
            deleting: false,
            generation: 0,
            running: false,
        }
    }

    /// Reset the cycle and invalidate every previously issued token.
    pub fn start(&mut self) -> TypingToken {
        self.generation += 1;
        self.phrase_index = 0;
        self.char_index = 0;
        self.deleting = false;
        self.running = !self.phrases.is_empty();
        TypingToken(self.generation)
    }

    /// Stop the cycle; all outstanding tokens become stale.
    pub fn stop(&mut self) {
        self.generation += 1;
        self.running = false;
    }

    #[must_use]
    pub fn is_current(&self, token: TypingToken) -> bool {
        self.running && token.0 == self.generation
    }

    /// Advance one step. Returns `None` for a stale token.
    pub fn tick(&mut self, token: TypingToken) -> Option<TypingFrame> {
        if !self.is_current(token) {
            return None;
        }
        let phrase = &self.phrases[self.phrase_index];
        let len = phrase.chars().count();

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index = (self.char_index + 1).min(len);
        }
        let text: String = phrase.chars().take(self.char_index).collect();

        let (phase, delay_ms) = if !self.deleting && self.char_index == len {
            self.deleting = true;
            (TypingPhase::PausingFull, FULL_PAUSE_MS)
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            (TypingPhase::PausingEmpty, EMPTY_PAUSE_MS)
        } else if self.deleting {
            (TypingPhase::Deleting, DELETE_DELAY_MS)
        } else {
            (TypingPhase::Typing, TYPE_DELAY_MS)
        };

        Some(TypingFrame { text, phase, delay_ms })
    }

    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }
}
