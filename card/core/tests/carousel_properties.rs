//! Carousel Behaviour Tests
//!
//! Drives the carousel with a recording display host and checks the
//! looping, focus and settle rules end to end.

use std::time::Duration;

use pretty_assertions::assert_eq;

use card_core::{
    Carousel, CarouselState, CarouselTiming, DisplayHost, ImageRef, LoopedSlides, Slide,
    LOOP_SETTLE_DELAY, SLIDE_DURATION,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

#[derive(Default)]
struct RecordingHost {
    scrolls: Vec<(usize, bool)>,
}

impl RecordingHost {
    fn last(&self) -> Option<(usize, bool)> {
        self.scrolls.last().copied()
    }

    fn snaps_to_start(&self) -> usize {
        self.scrolls.iter().filter(|s| **s == (0, false)).count()
    }
}

impl DisplayHost for RecordingHost {
    fn scroll_to_index(&mut self, index: usize, animated: bool) {
        self.scrolls.push((index, animated));
    }
}

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn slides(n: usize) -> LoopedSlides {
    let canonical = (0..n)
        .map(|i| Slide::new(format!("memory {i}"), ImageRef::new(format!("carousel/c{i}")), i))
        .collect();
    LoopedSlides::new(canonical).unwrap()
}

fn running(n: usize) -> Carousel {
    let mut carousel = Carousel::new(slides(n), CarouselTiming::default());
    carousel.set_assets_ready();
    carousel.set_focus(true);
    carousel
}

/// Advance in fixed frames
fn run_frames(carousel: &mut Carousel, host: &mut RecordingHost, frame: Duration, total: Duration) {
    let frames = total.as_millis() / frame.as_millis();
    for _ in 0..frames {
        carousel.tick(frame, host);
    }
}

// =============================================================================
// Looped Sequence
// =============================================================================

#[test]
fn test_looped_sequence_has_trailing_clone() {
    for n in 1..=8 {
        let looped = slides(n);
        assert_eq!(looped.len(), n + 1);
        assert_eq!(looped.clone_index(), n);

        let first = looped.get(0).unwrap();
        let clone = looped.get(n).unwrap();
        assert_eq!(clone.caption, first.caption);
        assert_eq!(clone.image, first.image);
    }
}

// =============================================================================
// Auto-Advance
// =============================================================================

#[test]
fn test_five_slide_timeline() {
    let mut host = RecordingHost::default();
    let mut carousel = running(5);

    assert_eq!(carousel.position(), 0);
    assert_eq!(carousel.progress(), 0.0);
    assert_eq!(carousel.state(), CarouselState::Dwelling);

    // t = 3500
    carousel.tick(SLIDE_DURATION, &mut host);
    assert_eq!(carousel.position(), 1);
    assert_eq!(carousel.progress(), 0.0);
    assert_eq!(carousel.state(), CarouselState::Dwelling);
    assert_eq!(host.last(), Some((1, true)));

    // t = 14000
    carousel.tick(SLIDE_DURATION * 3, &mut host);
    assert_eq!(carousel.position(), 4);
    assert_eq!(host.scrolls, vec![(1, true), (2, true), (3, true), (4, true)]);

    // t = 17500: scroll onto the clone, position not yet reconciled
    carousel.tick(SLIDE_DURATION, &mut host);
    assert_eq!(host.last(), Some((5, true)));
    assert_eq!(carousel.state(), CarouselState::LoopClosing);
    assert!(carousel.is_snap_pending());

    // t = 18000: silent snap back to slide 0
    carousel.tick(LOOP_SETTLE_DELAY, &mut host);
    assert_eq!(host.last(), Some((0, false)));
    assert_eq!(carousel.position(), 0);
    assert_eq!(carousel.progress(), 0.0);
    assert_eq!(carousel.state(), CarouselState::Dwelling);
}

#[test]
fn test_snap_happens_within_settle_delay() {
    let mut host = RecordingHost::default();
    let mut carousel = running(5);
    carousel.tick(SLIDE_DURATION * 5, &mut host);
    carousel.tick(LOOP_SETTLE_DELAY - ms(1), &mut host);
    assert_eq!(carousel.position(), 4);
    carousel.tick(ms(1), &mut host);
    assert_eq!(carousel.position(), 0);
}

#[test]
fn test_cycle_repeats_without_drift() {
    let mut host = RecordingHost::default();
    let mut carousel = running(5);
    let cycle = SLIDE_DURATION * 5 + LOOP_SETTLE_DELAY;

    // 9 ms frames divide the 18 s cycle exactly
    run_frames(&mut carousel, &mut host, ms(9), cycle * 10);

    assert_eq!(host.snaps_to_start(), 10);
    assert_eq!(carousel.position(), 0);
    assert_eq!(carousel.state(), CarouselState::Dwelling);
    assert!(carousel.progress() < 0.01);
}

#[test]
fn test_single_slide_loops_onto_itself() {
    let mut host = RecordingHost::default();
    let mut carousel = running(1);
    carousel.tick(SLIDE_DURATION, &mut host);
    assert_eq!(host.last(), Some((1, true)));
    carousel.tick(LOOP_SETTLE_DELAY, &mut host);
    assert_eq!(host.last(), Some((0, false)));
    assert_eq!(carousel.position(), 0);
}

#[test]
fn test_large_tick_catches_up() {
    let mut host = RecordingHost::default();
    let mut carousel = running(3);
    carousel.tick(SLIDE_DURATION * 2 + ms(100), &mut host);
    assert_eq!(carousel.position(), 2);
    assert!((carousel.progress() - 100.0 / 3500.0).abs() < 1e-3);
}

// =============================================================================
// Settling
// =============================================================================

#[test]
fn test_settle_on_clone_reconciles_to_zero() {
    let mut host = RecordingHost::default();
    let mut carousel = running(5);
    carousel.drag_started();
    carousel.settle_on_index(5, &mut host);
    assert_eq!(carousel.position(), 0);
    assert_eq!(host.last(), Some((0, false)));
    assert_eq!(carousel.state(), CarouselState::Dwelling);
}

#[test]
fn test_momentum_offset_on_clone_reconciles_to_zero() {
    let mut host = RecordingHost::default();
    let mut carousel = running(5);
    carousel.momentum_settled(5.0 * 390.0, 390.0, &mut host);
    assert_eq!(carousel.position(), 0);
}

#[test]
fn test_momentum_offset_rounds_to_nearest_page() {
    let mut host = RecordingHost::default();
    let mut carousel = running(5);
    carousel.momentum_settled(2.6 * 390.0, 390.0, &mut host);
    assert_eq!(carousel.position(), 3);
    assert!(host.scrolls.is_empty());
}

#[test]
fn test_drag_freezes_progress_until_settle() {
    let mut host = RecordingHost::default();
    let mut carousel = running(5);
    carousel.tick(ms(1000), &mut host);
    carousel.drag_started();
    let frozen = carousel.progress();

    carousel.tick(SLIDE_DURATION * 2, &mut host);
    assert_eq!(carousel.progress(), frozen);
    assert_eq!(carousel.position(), 0);
    assert_eq!(carousel.state(), CarouselState::Dwelling);

    carousel.settle_on_index(2, &mut host);
    assert_eq!(carousel.position(), 2);
    assert_eq!(carousel.progress(), 0.0);
    carousel.tick(SLIDE_DURATION, &mut host);
    assert_eq!(carousel.position(), 3);
}

#[test]
fn test_settle_cancels_pending_snap() {
    let mut host = RecordingHost::default();
    let mut carousel = running(2);
    carousel.tick(SLIDE_DURATION * 2, &mut host);
    assert!(carousel.is_snap_pending());

    carousel.settle_on_index(1, &mut host);
    assert!(!carousel.is_snap_pending());
    carousel.tick(LOOP_SETTLE_DELAY, &mut host);
    assert_eq!(carousel.position(), 1);
    assert_eq!(host.snaps_to_start(), 0);
}

// =============================================================================
// Focus
// =============================================================================

#[test]
fn test_focus_loss_freezes_progress_and_keeps_position() {
    let mut host = RecordingHost::default();
    let mut carousel = running(5);
    carousel.tick(SLIDE_DURATION + ms(1200), &mut host);
    assert_eq!(carousel.position(), 1);

    carousel.set_focus(false);
    let at_loss = carousel.progress();
    assert_eq!(carousel.state(), CarouselState::Idle);

    carousel.tick(SLIDE_DURATION * 4, &mut host);
    assert!(carousel.progress() <= at_loss);
    assert_eq!(carousel.position(), 1);
    assert_eq!(host.scrolls, vec![(1, true)]);

    carousel.set_focus(true);
    assert_eq!(carousel.state(), CarouselState::Dwelling);
    assert_eq!(carousel.progress(), 0.0);
    assert_eq!(carousel.position(), 1);
}

#[test]
fn test_focus_loss_lets_issued_snap_finish() {
    let mut host = RecordingHost::default();
    let mut carousel = running(3);
    carousel.tick(SLIDE_DURATION * 3, &mut host);
    assert_eq!(host.last(), Some((3, true)));

    carousel.set_focus(false);
    carousel.tick(LOOP_SETTLE_DELAY, &mut host);
    assert_eq!(host.last(), Some((0, false)));
    assert_eq!(carousel.position(), 0);
    assert_eq!(carousel.state(), CarouselState::Idle);
}

#[test]
fn test_nothing_runs_before_assets_ready() {
    let mut host = RecordingHost::default();
    let mut carousel = Carousel::new(slides(5), CarouselTiming::default());
    carousel.set_focus(true);
    carousel.tick(SLIDE_DURATION * 3, &mut host);
    assert_eq!(carousel.state(), CarouselState::Idle);
    assert!(host.scrolls.is_empty());

    carousel.set_assets_ready();
    assert_eq!(carousel.state(), CarouselState::Dwelling);
}

#[test]
fn test_refocus_does_not_double_dwell() {
    let mut host = RecordingHost::default();
    let mut carousel = running(5);
    for _ in 0..5 {
        carousel.set_focus(false);
        carousel.set_focus(true);
    }
    carousel.tick(SLIDE_DURATION, &mut host);
    assert_eq!(host.scrolls, vec![(1, true)]);
}

#[test]
fn test_custom_timing() {
    let mut host = RecordingHost::default();
    let mut carousel = Carousel::new(slides(2), CarouselTiming::new(ms(100), ms(50)));
    carousel.set_assets_ready();
    carousel.set_focus(true);
    carousel.tick(ms(250), &mut host);
    assert_eq!(host.scrolls, vec![(1, true), (2, true), (0, false)]);
    assert_eq!(carousel.position(), 0);
}
