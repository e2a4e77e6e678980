//! Carousel View
//!
//! The terminal side of the memories pager. Holds a fractional scroll
//! offset in pages, animates programmatic scrolls, and turns keyboard
//! paging and mouse drags into a settle report once the pager comes to
//! rest.

use std::time::Duration;

use card_core::animation::{EasingFunction, Timing, TimingOutcome};
use card_core::DisplayHost;

/// Length of an animated page change. Must stay below the carousel's
/// loop settle delay.
pub const SCROLL_DURATION: Duration = Duration::from_millis(400);

/// A user-driven scroll came to rest
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settled {
    /// Scroll offset in cells
    pub offset: f32,
    /// Page width in cells
    pub page_width: f32,
}

#[derive(Clone, Copy, Debug)]
struct Drag {
    origin_offset: f32,
    start_column: u16,
    /// The pointer has moved since the press
    moved: bool,
}

pub struct CarouselView {
    /// Scroll position in pages
    offset: f32,
    scroll: Option<Timing>,
    target: usize,
    /// Pages including the trailing clone
    page_count: usize,
    /// The running scroll was started by the user
    user_scroll: bool,
    drag: Option<Drag>,
    page_width: u16,
}

impl CarouselView {
    pub fn new(page_count: usize) -> Self {
        Self {
            offset: 0.0,
            scroll: None,
            target: 0,
            page_count: page_count.max(1),
            user_scroll: false,
            drag: None,
            page_width: 0,
        }
    }

    pub fn set_page_width(&mut self, width: u16) {
        self.page_width = width;
    }

    // ========================================================================
    // User Input
    // ========================================================================

    /// Page left (-1) or right (+1)
    pub fn page(&mut self, direction: i32) {
        let last = self.last_page() as i64;
        let target = (self.target as i64 + i64::from(direction)).clamp(0, last) as usize;
        self.animate_to(target);
        self.user_scroll = true;
    }

    /// Pointer pressed on the pager. A running scroll keeps going until
    /// the pointer actually moves.
    pub fn begin_drag(&mut self, column: u16) {
        self.drag = Some(Drag {
            origin_offset: self.offset,
            start_column: column,
            moved: false,
        });
    }

    /// Follow the pointer. Returns true on the first movement of a press,
    /// when the gesture turns into a drag.
    pub fn drag_to(&mut self, column: u16) -> bool {
        let Some(mut drag) = self.drag else {
            return false;
        };
        if column == drag.start_column && !drag.moved {
            return false;
        }

        let began = !drag.moved;
        if began {
            self.scroll = None;
            drag.moved = true;
            drag.origin_offset = self.offset;
            self.drag = Some(drag);
        }

        let width = f32::from(self.page_width.max(1));
        let moved = (f32::from(column) - f32::from(drag.start_column)) / width;
        self.offset = (drag.origin_offset - moved).clamp(0.0, self.last_page() as f32);
        began
    }

    /// Release the pointer. After a drag the pager glides to the nearest
    /// page; a plain tap changes nothing.
    pub fn end_drag(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        if !drag.moved {
            return;
        }
        let nearest = self.offset.round().max(0.0) as usize;
        self.animate_to(nearest.min(self.last_page()));
        self.user_scroll = true;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    // ========================================================================
    // Time
    // ========================================================================

    /// Advance the scroll animation. Reports when a user scroll settles.
    pub fn update(&mut self, delta: Duration) -> Option<Settled> {
        let scroll = self.scroll.as_mut()?;
        let outcome = scroll.advance(delta);
        self.offset = scroll.value();

        match outcome {
            Some(TimingOutcome::Finished { .. }) => {
                self.scroll = None;
                self.offset = self.target as f32;
                if std::mem::take(&mut self.user_scroll) {
                    let width = f32::from(self.page_width.max(1));
                    return Some(Settled {
                        offset: self.offset * width,
                        page_width: width,
                    });
                }
                None
            }
            _ => None,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_some()
    }

    /// Pages to draw: the left page, the right page and how far (0.0 to
    /// 1.0) the view has moved from left toward right
    pub fn visible_pages(&self) -> (usize, usize, f32) {
        let left = (self.offset.floor().max(0.0) as usize).min(self.last_page());
        let right = (left + 1).min(self.last_page());
        (left, right, self.offset - left as f32)
    }

    fn last_page(&self) -> usize {
        self.page_count - 1
    }

    fn animate_to(&mut self, index: usize) {
        self.target = index;
        let mut timing =
            Timing::between(self.offset, index as f32, SCROLL_DURATION, EasingFunction::EaseInOut);
        timing.start();
        self.scroll = Some(timing);
    }
}

impl DisplayHost for CarouselView {
    fn scroll_to_index(&mut self, index: usize, animated: bool) {
        let index = index.min(self.last_page());
        self.user_scroll = false;
        self.drag = None;

        if animated {
            self.animate_to(index);
        } else {
            self.target = index;
            self.offset = index as f32;
            self.scroll = None;
        }
        tracing::trace!(index, animated, "Carousel view scroll");
    }
}
