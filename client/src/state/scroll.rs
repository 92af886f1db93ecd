//! Scroll-derived page chrome: progress bar, sticky header, active nav link,
//! and the home parallax offset.
//!
//! DESIGN
//! ======
//! Nothing here is read from the DOM. The glue samples `ScrollMetrics` and
//! section geometry once per animation frame and feeds them to
//! `ScrollState::apply`, which returns the full `ScrollView` to render.
//! `FrameGate` is the in-flight flag that coalesces scroll events into one
//! update per frame.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Lookahead applied to section tops when picking the active nav link.
pub const SECTION_LOOKAHEAD_PX: f64 = 100.0;
/// Scroll offset past which the header becomes sticky.
pub const STICKY_THRESHOLD_PX: f64 = 100.0;
/// Radius of the scroll-to-top progress ring.
pub const PROGRESS_RING_RADIUS: f64 = 20.0;
/// Background translation per scrolled pixel while the home section is in view.
pub const PARALLAX_FACTOR: f64 = 0.3;
/// Delay before the synthetic tick that settles the initial view.
pub const INITIAL_TICK_MS: u32 = 100;

/// Raw window/document measurements for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Scroll progress in percent, clamped to `[0, 100]`.
    ///
    /// A page that cannot scroll (document no taller than the viewport)
    /// reports 0%.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        let range = self.document_height - self.viewport_height;
        if range <= 0.0 {
            return 0.0;
        }
        (self.scroll_y / range * 100.0).clamp(0.0, 100.0)
    }

    #[must_use]
    pub fn is_sticky(&self) -> bool {
        self.scroll_y > STICKY_THRESHOLD_PX
    }

    /// Parallax offset for the home background, or `None` once the home
    /// section has scrolled out of the first viewport.
    #[must_use]
    pub fn parallax_offset(&self) -> Option<f64> {
        (self.scroll_y < self.viewport_height).then(|| self.scroll_y * PARALLAX_FACTOR)
    }
}

/// Circumference of the progress ring.
#[must_use]
pub fn ring_circumference() -> f64 {
    2.0 * std::f64::consts::PI * PROGRESS_RING_RADIUS
}

/// `stroke-dashoffset` for the progress ring at `progress` percent.
#[must_use]
pub fn stroke_offset(progress: f64) -> f64 {
    let circumference = ring_circumference();
    circumference - (progress / 100.0) * circumference
}

/// Vertical extent of one page section, in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// First section (in DOM order) whose lookahead-shifted span contains `scroll_y`.
#[must_use]
pub fn active_section(spans: &[SectionSpan], scroll_y: f64) -> Option<&str> {
    spans
        .iter()
        .find(|span| {
            let start = span.top - SECTION_LOOKAHEAD_PX;
            scroll_y >= start && scroll_y < start + span.height
        })
        .map(|span| span.id.as_str())
}

/// Everything the scroll handler renders for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollView {
    pub progress: f64,
    pub stroke_offset: f64,
    pub sticky: bool,
    pub active_section: Option<String>,
    pub parallax_offset: f64,
}

impl Default for ScrollView {
    fn default() -> Self {
        Self {
            progress: 0.0,
            stroke_offset: ring_circumference(),
            sticky: false,
            active_section: None,
            parallax_offset: 0.0,
        }
    }
}

/// Owned scroll coordinator state.
#[derive(Clone, Debug, Default)]
pub struct ScrollState {
    pub view: ScrollView,
}

impl ScrollState {
    /// Recompute the view from this frame's measurements.
    ///
    /// When no section contains the offset the previously active link is
    /// kept, and the parallax offset holds its last value once the home
    /// section is out of view.
    pub fn apply(&mut self, metrics: ScrollMetrics, spans: &[SectionSpan]) -> &ScrollView {
        let progress = metrics.progress_percent();
        self.view.progress = progress;
        self.view.stroke_offset = stroke_offset(progress);
        self.view.sticky = metrics.is_sticky();
        if let Some(id) = active_section(spans, metrics.scroll_y) {
            self.view.active_section = Some(id.to_owned());
        }
        if let Some(offset) = metrics.parallax_offset() {
            self.view.parallax_offset = offset;
        }
        &self.view
    }

    /// Mark a section active directly (smooth-scroll nav clicks).
    pub fn activate(&mut self, id: &str) {
        self.view.active_section = Some(id.to_owned());
    }
}

/// Coalesces repeated frame requests into one pending frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameGate {
    in_flight: bool,
}

impl FrameGate {
    /// Returns `true` when the caller should schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn complete(&mut self) {
        self.in_flight = false;
    }

    #[must_use]
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }
}
