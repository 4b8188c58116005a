//! Incremental pagination of the unfiltered list

use crate::constants::SCROLL_BOTTOM_TOLERANCE;

/// Scroll area geometry captured after a frame is laid out
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub offset: f32,
    pub viewport: f32,
    pub content: f32,
}

impl ScrollMetrics {
    pub fn at_bottom(&self) -> bool {
        self.offset + self.viewport >= self.content - SCROLL_BOTTOM_TOLERANCE
    }

    /// Whether the offset moved since `previous`. A frame that reset the
    /// list to the top moved it programmatically and never counts.
    pub fn scrolled_since(&self, previous: &ScrollMetrics, reset: bool) -> bool {
        !reset && self.offset != previous.offset
    }
}

/// How many entries of the full list are currently materialized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    shown: usize,
    page_size: usize,
}

impl Window {
    pub fn new(page_size: usize, total: usize) -> Self {
        Self {
            shown: page_size.min(total),
            page_size,
        }
    }

    pub fn shown(&self) -> usize {
        self.shown
    }

    /// Back to the first page
    pub fn reset(&mut self, total: usize) {
        self.shown = self.page_size.min(total);
    }

    /// Materialize one more page. Returns false when already at the end.
    pub fn grow(&mut self, total: usize) -> bool {
        let next = (self.shown + self.page_size).min(total);
        if next > self.shown {
            self.shown = next;
            true
        } else {
            false
        }
    }
}
