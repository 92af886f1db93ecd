//! Decorative background particles.
//!
//! Generation takes its random source as a closure so the layout is testable
//! without `Math.random`.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

/// Viewports narrower than this get the reduced particle count.
pub const NARROW_VIEWPORT_PX: f64 = 768.0;
const NARROW_COUNT: usize = 20;
const WIDE_COUNT: usize = 40;

/// Placement and timing of one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpec {
    pub left_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl ParticleSpec {
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left: {}%; animation-delay: {}s; animation-duration: {}s;",
            self.left_pct, self.delay_s, self.duration_s
        )
    }
}

#[must_use]
pub fn is_narrow(viewport_width: f64) -> bool {
    viewport_width < NARROW_VIEWPORT_PX
}

#[must_use]
pub fn particle_count(viewport_width: f64) -> usize {
    if is_narrow(viewport_width) { NARROW_COUNT } else { WIDE_COUNT }
}

/// Generate the particle set for a viewport. `random` yields values in `[0, 1)`.
pub fn generate(viewport_width: f64, mut random: impl FnMut() -> f64) -> Vec<ParticleSpec> {
    (0..particle_count(viewport_width))
        .map(|_| ParticleSpec {
            left_pct: random() * 100.0,
            delay_s: random() * 10.0,
            duration_s: random() * 10.0 + 10.0,
        })
        .collect()
}
