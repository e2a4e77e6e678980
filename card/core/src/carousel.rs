//! Carousel Controller
//!
//! Drives the memories slideshow: a horizontally paged list of full-screen
//! slides that auto-advances every dwell period, shows a progress bar that
//! refills for each slide, and loops from the last slide back to the first
//! without a visible backward jump.
//!
//! # States
//!
//! ```text
//!            focus + ready                progress done, pos < N-1
//!   Idle ─────────────────────► Dwelling ─────────────────────────► Advancing
//!    ▲                            ▲  │                                  │
//!    │ focus lost                 │  │ progress done, pos == N-1        │ (immediately)
//!    └──────────── * ─────────────┤  ▼                                  │
//!                                 │ LoopClosing ── settle delay ──┐     │
//!                                 │   (scroll to clone N)         │     │
//!                                 └───────────────────────────────┴─────┘
//!                                      snap to 0 without animation
//! ```
//!
//! The looped slide list has one clone of slide 0 at index N. Loop closing
//! scrolls onto the clone with animation, waits for the scroll to finish
//! and then silently repositions to index 0.
//!
//! Position is updated optimistically when a scroll is requested, never
//! on scroll completion.

use std::time::Duration;

use crate::animation::{EasingFunction, Timing, TimingOutcome};
use crate::slides::LoopedSlides;

/// Time a slide stays settled before auto-advancing
pub const SLIDE_DURATION: Duration = Duration::from_millis(3500);

/// Delay between scrolling onto the clone and snapping back to index 0.
/// Must cover the display host's scroll animation.
pub const LOOP_SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Smallest accepted dwell period
const MIN_DWELL: Duration = Duration::from_millis(1);

/// Scroll requests issued by the carousel
///
/// Implemented by whatever actually shows the slides. Requests are fire
/// and forget: the carousel never waits for them to complete.
pub trait DisplayHost {
    /// Scroll the slide list so that `index` is the visible page
    fn scroll_to_index(&mut self, index: usize, animated: bool);
}

/// Carousel timing parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselTiming {
    /// Dwell period per slide
    pub dwell: Duration,
    /// Settle delay before the silent snap back to slide 0
    pub loop_settle: Duration,
}

impl CarouselTiming {
    pub fn new(dwell: Duration, loop_settle: Duration) -> Self {
        Self {
            dwell: dwell.max(MIN_DWELL),
            loop_settle,
        }
    }
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self::new(SLIDE_DURATION, LOOP_SETTLE_DELAY)
    }
}

/// Carousel state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselState {
    /// Not focused, or assets not ready yet
    Idle,
    /// Progress bar filling while the current slide is settled
    Dwelling,
    /// Programmatic scroll to the next slide just issued
    Advancing,
    /// Scrolled onto the clone, waiting to snap back to slide 0
    LoopClosing,
}

impl CarouselState {
    pub fn description(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dwelling => "dwelling",
            Self::Advancing => "advancing",
            Self::LoopClosing => "loop closing",
        }
    }
}

/// Auto-advancing, looping carousel
pub struct Carousel {
    slides: LoopedSlides,
    timing: CarouselTiming,
    state: CarouselState,
    /// Settled logical slide, always in `[0, N-1]`
    position: usize,
    /// Dwell progress (0.0 to 1.0)
    progress: Timing,
    /// Time left before the loop-closing snap
    pending_snap: Option<Duration>,
    focused: bool,
    assets_ready: bool,
    dragging: bool,
}

impl Carousel {
    pub fn new(slides: LoopedSlides, timing: CarouselTiming) -> Self {
        Self {
            slides,
            progress: Timing::new(timing.dwell, EasingFunction::Linear),
            timing,
            state: CarouselState::Idle,
            position: 0,
            pending_snap: None,
            focused: false,
            assets_ready: false,
            dragging: false,
        }
    }

    // ========================================================================
    // Inputs
    // ========================================================================

    /// Assets (fonts, images) became available
    pub fn set_assets_ready(&mut self) {
        if self.assets_ready {
            return;
        }
        self.assets_ready = true;
        if self.focused {
            self.resume();
        }
    }

    /// Focus changed. Losing focus stops the progress bar synchronously;
    /// a scroll already handed to the host is left alone.
    pub fn set_focus(&mut self, focused: bool) {
        if self.focused == focused {
            return;
        }
        self.focused = focused;

        if focused {
            if self.assets_ready {
                self.resume();
            }
        } else {
            self.progress.stop();
            self.dragging = false;
            self.state = CarouselState::Idle;
            tracing::debug!(position = self.position, "Carousel suspended");
        }
    }

    /// User started dragging. Freezes the progress bar; the dwell cycle
    /// restarts when the gesture settles.
    pub fn drag_started(&mut self) {
        self.dragging = true;
        self.progress.stop();
    }

    /// A user scroll came to rest at a pixel offset
    pub fn momentum_settled(&mut self, offset: f32, page_width: f32, host: &mut dyn DisplayHost) {
        let index = if page_width > 0.0 {
            (offset / page_width).round().max(0.0) as usize
        } else {
            self.position
        };
        self.settle_on_index(index, host);
    }

    /// A user scroll came to rest on a page index
    ///
    /// The clone (or anything past it) is always reconciled to slide 0.
    pub fn settle_on_index(&mut self, index: usize, host: &mut dyn DisplayHost) {
        self.dragging = false;
        // A user settle supersedes any pending loop-closing snap
        self.pending_snap = None;

        if index >= self.slides.clone_index() {
            host.scroll_to_index(0, false);
            self.position = 0;
        } else {
            self.position = index;
        }

        tracing::debug!(index, position = self.position, "Carousel settled");

        if self.can_run() {
            self.begin_dwell();
        } else {
            self.state = CarouselState::Idle;
        }
    }

    /// Advance time
    pub fn tick(&mut self, delta: Duration, host: &mut dyn DisplayHost) {
        let mut remaining = delta;

        loop {
            if let Some(left) = self.pending_snap {
                if remaining < left {
                    self.pending_snap = Some(left - remaining);
                    return;
                }
                remaining -= left;
                self.pending_snap = None;
                self.finish_loop_close(host);
                continue;
            }

            match self.progress.advance(remaining) {
                Some(TimingOutcome::Finished { overshoot }) => {
                    remaining = overshoot;
                    self.on_dwell_complete(host);
                }
                _ => return,
            }
        }
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    fn can_run(&self) -> bool {
        self.focused && self.assets_ready
    }

    /// Re-enter the cycle after focus/ready. Position is kept.
    fn resume(&mut self) {
        if self.pending_snap.is_some() {
            // The snap restarts the dwell when it fires
            self.state = CarouselState::LoopClosing;
        } else {
            self.begin_dwell();
        }
        tracing::debug!(position = self.position, "Carousel resumed");
    }

    fn begin_dwell(&mut self) {
        self.dragging = false;
        self.progress.start();
        self.state = CarouselState::Dwelling;
    }

    fn on_dwell_complete(&mut self, host: &mut dyn DisplayHost) {
        if !self.can_run() {
            self.state = CarouselState::Idle;
            return;
        }

        if self.position + 1 < self.slides.canonical_len() {
            self.advance(host);
        } else {
            self.close_loop(host);
        }
    }

    /// Update position and request the scroll in one step
    fn advance(&mut self, host: &mut dyn DisplayHost) {
        self.state = CarouselState::Advancing;
        self.position += 1;
        host.scroll_to_index(self.position, true);
        tracing::debug!(position = self.position, "Carousel advanced");
        self.begin_dwell();
    }

    fn close_loop(&mut self, host: &mut dyn DisplayHost) {
        self.state = CarouselState::LoopClosing;
        host.scroll_to_index(self.slides.clone_index(), true);
        self.pending_snap = Some(self.timing.loop_settle);
        tracing::debug!("Carousel closing loop");
    }

    fn finish_loop_close(&mut self, host: &mut dyn DisplayHost) {
        host.scroll_to_index(0, false);
        self.position = 0;

        if self.can_run() {
            self.begin_dwell();
        } else {
            self.state = CarouselState::Idle;
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn state(&self) -> CarouselState {
        self.state
    }

    /// Settled logical slide in `[0, N-1]`
    pub fn position(&self) -> usize {
        self.position
    }

    /// Progress bar fill (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        self.progress.value()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether a loop-closing snap is still pending
    pub fn is_snap_pending(&self) -> bool {
        self.pending_snap.is_some()
    }

    pub fn slides(&self) -> &LoopedSlides {
        &self.slides
    }

    pub fn timing(&self) -> CarouselTiming {
        self.timing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slides::{ImageRef, Slide};

    #[derive(Default)]
    struct RecordingHost {
        scrolls: Vec<(usize, bool)>,
    }

    impl DisplayHost for RecordingHost {
        fn scroll_to_index(&mut self, index: usize, animated: bool) {
            self.scrolls.push((index, animated));
        }
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn carousel(n: usize) -> Carousel {
        let slides = (0..n)
            .map(|i| Slide::new(format!("s{i}"), ImageRef::new(format!("c{i}")), i))
            .collect();
        let mut c = Carousel::new(LoopedSlides::new(slides).unwrap(), CarouselTiming::default());
        c.set_assets_ready();
        c
    }

    #[test]
    fn test_idle_until_focused() {
        let mut c = carousel(3);
        let mut host = RecordingHost::default();
        assert_eq!(c.state(), CarouselState::Idle);
        c.tick(ms(10_000), &mut host);
        assert_eq!(c.position(), 0);
        assert!(host.scrolls.is_empty());
    }

    #[test]
    fn test_waits_for_assets() {
        let slides = vec![Slide::new("a", ImageRef::new("c1"), 0)];
        let mut c = Carousel::new(LoopedSlides::new(slides).unwrap(), CarouselTiming::default());
        c.set_focus(true);
        assert_eq!(c.state(), CarouselState::Idle);
        c.set_assets_ready();
        assert_eq!(c.state(), CarouselState::Dwelling);
    }

    #[test]
    fn test_advance_is_optimistic() {
        let mut c = carousel(3);
        let mut host = RecordingHost::default();
        c.set_focus(true);
        c.tick(SLIDE_DURATION, &mut host);
        assert_eq!(c.position(), 1);
        assert_eq!(host.scrolls, vec![(1, true)]);
        assert_eq!(c.state(), CarouselState::Dwelling);
        assert_eq!(c.progress(), 0.0);
    }

    #[test]
    fn test_loop_close_waits_for_settle() {
        let mut c = carousel(2);
        let mut host = RecordingHost::default();
        c.set_focus(true);
        c.tick(SLIDE_DURATION, &mut host); // -> 1
        c.tick(SLIDE_DURATION, &mut host); // -> clone
        assert_eq!(c.state(), CarouselState::LoopClosing);
        assert_eq!(c.position(), 1);
        assert_eq!(host.scrolls.last(), Some(&(2, true)));

        c.tick(ms(499), &mut host);
        assert_eq!(c.state(), CarouselState::LoopClosing);

        c.tick(ms(1), &mut host);
        assert_eq!(c.state(), CarouselState::Dwelling);
        assert_eq!(c.position(), 0);
        assert_eq!(host.scrolls.last(), Some(&(0, false)));
    }

    #[test]
    fn test_single_slide_loops_through_clone() {
        let mut c = carousel(1);
        let mut host = RecordingHost::default();
        c.set_focus(true);
        c.tick(SLIDE_DURATION + LOOP_SETTLE_DELAY, &mut host);
        assert_eq!(host.scrolls, vec![(1, true), (0, false)]);
        assert_eq!(c.position(), 0);
    }

    #[test]
    fn test_drag_freezes_progress_without_idling() {
        let mut c = carousel(3);
        let mut host = RecordingHost::default();
        c.set_focus(true);
        c.tick(ms(1000), &mut host);
        c.drag_started();
        let frozen = c.progress();
        c.tick(ms(10_000), &mut host);
        assert_eq!(c.progress(), frozen);
        assert_eq!(c.state(), CarouselState::Dwelling);
        assert!(host.scrolls.is_empty());
    }

    #[test]
    fn test_settle_restarts_dwell_at_index() {
        let mut c = carousel(5);
        let mut host = RecordingHost::default();
        c.set_focus(true);
        c.drag_started();
        c.momentum_settled(2.0 * 80.0, 80.0, &mut host);
        assert_eq!(c.position(), 2);
        assert_eq!(c.progress(), 0.0);
        assert!(!c.is_dragging());
        assert_eq!(c.state(), CarouselState::Dwelling);
    }

    #[test]
    fn test_settle_supersedes_pending_snap() {
        let mut c = carousel(2);
        let mut host = RecordingHost::default();
        c.set_focus(true);
        c.tick(SLIDE_DURATION * 2, &mut host);
        assert!(c.is_snap_pending());

        c.settle_on_index(1, &mut host);
        assert!(!c.is_snap_pending());
        c.tick(LOOP_SETTLE_DELAY, &mut host);
        assert_eq!(c.position(), 1);
    }

    #[test]
    fn test_zero_page_width_keeps_position() {
        let mut c = carousel(3);
        let mut host = RecordingHost::default();
        c.set_focus(true);
        c.tick(SLIDE_DURATION, &mut host);
        c.momentum_settled(500.0, 0.0, &mut host);
        assert_eq!(c.position(), 1);
    }

    #[test]
    fn test_focus_loss_during_loop_close_still_snaps() {
        let mut c = carousel(2);
        let mut host = RecordingHost::default();
        c.set_focus(true);
        c.tick(SLIDE_DURATION * 2, &mut host);
        c.set_focus(false);
        assert_eq!(c.state(), CarouselState::Idle);

        c.tick(LOOP_SETTLE_DELAY, &mut host);
        assert_eq!(host.scrolls.last(), Some(&(0, false)));
        assert_eq!(c.position(), 0);
        assert_eq!(c.state(), CarouselState::Idle);
        assert_eq!(c.progress(), 1.0);
    }

    #[test]
    fn test_refocus_during_pending_snap_waits_for_snap() {
        let mut c = carousel(2);
        let mut host = RecordingHost::default();
        c.set_focus(true);
        c.tick(SLIDE_DURATION * 2, &mut host);
        c.set_focus(false);
        c.set_focus(true);
        assert_eq!(c.state(), CarouselState::LoopClosing);

        c.tick(LOOP_SETTLE_DELAY, &mut host);
        assert_eq!(c.state(), CarouselState::Dwelling);
        assert_eq!(c.progress(), 0.0);
    }

    #[test]
    fn test_timing_clamps_zero_dwell() {
        let timing = CarouselTiming::new(Duration::ZERO, Duration::ZERO);
        assert_eq!(timing.dwell, MIN_DWELL);
    }
}
