//! Project grid filtering.
//!
//! `select` is a pure projection over the card categories: every card is
//! re-evaluated from scratch. Cards fade in or out in two steps (a short
//! enter delay and a longer leave window), and each step is settled by a
//! token so a settle queued by an older selection cannot touch the cards.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Delay between `display: block` and the fade-in so the display change lands.
pub const ENTER_DELAY_MS: u32 = 10;
/// Fade-out window before a card is hidden.
pub const LEAVE_DELAY_MS: u32 = 300;

const ALL: &str = "all";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FilterSelection {
    #[default]
    All,
    Category(String),
}

impl FilterSelection {
    /// Parse a `data-filter` value; `all` is the wildcard.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case(ALL) {
            Self::All
        } else {
            Self::Category(raw.to_owned())
        }
    }

    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(c) => c == category,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Category(c) => c,
        }
    }
}

/// Visual lifecycle of one card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardPhase {
    #[default]
    Shown,
    Entering,
    Leaving,
    Hidden,
}

impl CardPhase {
    /// Inline style for the phase.
    #[must_use]
    pub fn style(self) -> &'static str {
        match self {
            Self::Shown => "display: block; opacity: 1; transform: translateY(0);",
            Self::Entering => "display: block; opacity: 0; transform: translateY(30px);",
            Self::Leaving => "display: block; opacity: 0; transform: translateY(30px);",
            Self::Hidden => "display: none; opacity: 0; transform: translateY(30px);",
        }
    }

    /// `show`/`hide` class applied alongside the style.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Shown | Self::Entering | Self::Leaving => "show",
            Self::Hidden => "hide",
        }
    }
}

/// Token identifying one `select` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterToken(u64);

#[derive(Clone, Debug, Default)]
pub struct FilterState {
    pub selection: FilterSelection,
    pub phases: Vec<CardPhase>,
    generation: u64,
}

impl FilterState {
    /// All `len` cards visible under the `all` filter.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { selection: FilterSelection::All, phases: vec![CardPhase::Shown; len], generation: 0 }
    }

    /// Apply a selection to cards with the given categories (card order).
    pub fn select<S: AsRef<str>>(&mut self, selection: FilterSelection, categories: &[S]) -> FilterToken {
        self.generation += 1;
        self.phases = categories
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let current = self.phases.get(i).copied().unwrap_or_default();
                match (selection.matches(category.as_ref()), current) {
                    (true, CardPhase::Shown) => CardPhase::Shown,
                    (true, _) => CardPhase::Entering,
                    (false, CardPhase::Hidden) => CardPhase::Hidden,
                    (false, _) => CardPhase::Leaving,
                }
            })
            .collect();
        self.selection = selection;
        FilterToken(self.generation)
    }

    /// Finish the fade-in step for entering cards.
    pub fn settle_entering(&mut self, token: FilterToken) -> bool {
        self.settle(token, CardPhase::Entering, CardPhase::Shown)
    }

    /// Hide cards whose fade-out window elapsed.
    pub fn settle_leaving(&mut self, token: FilterToken) -> bool {
        self.settle(token, CardPhase::Leaving, CardPhase::Hidden)
    }

    #[must_use]
    pub fn phase(&self, index: usize) -> CardPhase {
        self.phases.get(index).copied().unwrap_or_default()
    }

    fn settle(&mut self, token: FilterToken, from: CardPhase, to: CardPhase) -> bool {
        if token.0 != self.generation {
            return false;
        }
        for phase in &mut self.phases {
            if *phase == from {
                *phase = to;
            }
        }
        true
    }
}
