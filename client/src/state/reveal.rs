//! One-shot viewport reveal animations.
//!
//! DESIGN
//! ======
//! Each observed collection (skills, timeline, cards, counters) owns a
//! `RevealTracker` holding an explicit per-element start flag. The observer
//! glue reports every entry of one callback batch, in callback order; the
//! tracker admits each intersecting index at most once and delays it by the
//! entry's position in the whole batch, so siblings reported as leaving
//! still widen the cascade.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Delay between a skill's reveal and its progress bar fill.
pub const SKILL_BAR_DELAY_MS: u32 = 300;

const CARD_MARGIN: &str = "0px 0px -50px 0px";
const NO_MARGIN: &str = "0px";

/// Intersection observer settings for one group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

/// Observed element collections on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealGroup {
    Skills,
    Timeline,
    Experience,
    Achievements,
    HomeStats,
    ContactStats,
}

impl RevealGroup {
    #[must_use]
    pub fn options(self) -> ObserverOptions {
        match self {
            Self::Skills | Self::Timeline | Self::Experience | Self::Achievements => {
                ObserverOptions { threshold: 0.1, root_margin: CARD_MARGIN }
            }
            Self::HomeStats => ObserverOptions { threshold: 0.5, root_margin: NO_MARGIN },
            Self::ContactStats => ObserverOptions { threshold: 0.3, root_margin: NO_MARGIN },
        }
    }

    /// Per-sibling cascade step.
    #[must_use]
    pub fn stagger_ms(self) -> u32 {
        match self {
            Self::Skills => 50,
            Self::Experience | Self::Achievements => 100,
            Self::Timeline | Self::HomeStats | Self::ContactStats => 0,
        }
    }

    /// Inline style for an element of this group before and after its reveal.
    /// Skills and counters animate through classes and text instead.
    #[must_use]
    pub fn style(self, revealed: bool) -> &'static str {
        match (self, revealed) {
            (Self::Timeline, false) => "opacity: 0; transform: translateX(-30px); transition: all 0.8s ease;",
            (Self::Timeline, true) => "opacity: 1; transform: translateX(0); transition: all 0.8s ease;",
            (Self::Experience | Self::Achievements, false) => {
                "opacity: 0; transform: translateY(30px); transition: all 0.6s ease;"
            }
            (Self::Experience | Self::Achievements, true) => {
                "opacity: 1; transform: translateY(0); transition: all 0.6s ease;"
            }
            (Self::Skills | Self::HomeStats | Self::ContactStats, _) => "",
        }
    }
}

/// One entry of an observer callback batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObservedEntry {
    pub index: usize,
    pub intersecting: bool,
}

/// A newly admitted element and the delay before it animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledReveal {
    pub index: usize,
    pub delay_ms: u32,
}

/// Completion flags for one observed collection.
#[derive(Clone, Debug)]
pub struct RevealTracker {
    group: RevealGroup,
    started: Vec<bool>,
}

impl RevealTracker {
    #[must_use]
    pub fn new(group: RevealGroup, len: usize) -> Self {
        Self { group, started: vec![false; len] }
    }

    #[must_use]
    pub fn group(&self) -> RevealGroup {
        self.group
    }

    /// Claim an element's animation. `true` only on the first call per index.
    pub fn begin(&mut self, index: usize) -> bool {
        match self.started.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    /// Admit one observer batch and return the cascade schedule for the
    /// intersecting entries that had not animated yet.
    pub fn admit_batch(&mut self, batch: &[ObservedEntry]) -> Vec<ScheduledReveal> {
        let step = self.group.stagger_ms();
        let mut scheduled = Vec::new();
        for (position, entry) in batch.iter().enumerate() {
            let index = entry.index;
            if entry.intersecting && self.begin(index) {
                let delay_ms = u32::try_from(position).unwrap_or(u32::MAX).saturating_mul(step);
                scheduled.push(ScheduledReveal { index, delay_ms });
            }
        }
        scheduled
    }

    #[must_use]
    pub fn all_started(&self) -> bool {
        self.started.iter().all(|f| *f)
    }
}
