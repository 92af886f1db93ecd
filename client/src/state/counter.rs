//! Animated stat counters.
//!
//! A counter advances by a fixed per-frame increment (`target / (duration /
//! 16)`) and snaps to the exact target on the frame it would reach or pass it.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Nominal frame length used to derive the per-frame increment.
pub const FRAME_MS: f64 = 16.0;

/// How a counter renders its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterFormat {
    /// Floored integer with `,` thousands separators.
    Grouped,
    /// Two fixed decimals.
    Decimal,
}

impl CounterFormat {
    /// Targets with a fractional part render with two decimals.
    #[must_use]
    pub fn for_target(target: f64) -> Self {
        if target.fract() == 0.0 { Self::Grouped } else { Self::Decimal }
    }

    #[must_use]
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Grouped => group_thousands(value.floor()),
            Self::Decimal => format!("{value:.2}"),
        }
    }
}

/// One rendered counter frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: f64,
    increment: f64,
    current: f64,
    format: CounterFormat,
    done: bool,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(target: f64, duration_ms: f64) -> Self {
        Self::with_format(target, duration_ms, CounterFormat::for_target(target))
    }

    #[must_use]
    pub fn with_format(target: f64, duration_ms: f64, format: CounterFormat) -> Self {
        let frames = duration_ms / FRAME_MS;
        let increment = if frames >= 1.0 { target / frames } else { target };
        Self { target, increment, current: 0.0, format, done: false }
    }

    /// Advance one frame.
    pub fn step(&mut self) -> CounterFrame {
        if self.done {
            return self.final_frame();
        }
        self.current += self.increment;
        if self.increment > 0.0 && self.current < self.target {
            CounterFrame { text: self.format.format(self.current), done: false }
        } else {
            self.done = true;
            self.final_frame()
        }
    }

    fn final_frame(&self) -> CounterFrame {
        CounterFrame { text: self.format.format(self.target), done: true }
    }
}

/// Parse a `data-target` attribute value.
#[must_use]
pub fn parse_target(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[allow(clippy::cast_possible_truncation, reason = "value is floored and counters stay far below i64::MAX")]
fn group_thousands(value: f64) -> String {
    let whole = value as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if whole < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
