//! The displayed list: catalog entries seen through the search term and
//! the pagination window

use crate::catalog::Entry;
use crate::constants::PAGE_SIZE;
use crate::paging::{ScrollMetrics, Window};
use crate::search::{Highlight, Search};
use std::ops::Range;
use tracing::debug;

/// One displayed row
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    /// Position among the displayed rows
    pub position: usize,
    pub entry: &'a Entry,
    pub highlight: Option<Highlight<'a>>,
}

pub struct ListModel {
    entries: Vec<Entry>,
    search: Search,
    window: Window,
}

impl ListModel {
    pub fn new(entries: Vec<Entry>) -> Self {
        let window = Window::new(PAGE_SIZE, entries.len());
        Self {
            entries,
            search: Search::default(),
            window,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn search(&self) -> &Search {
        &self.search
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Apply a new search term. Short terms show the first page unfiltered.
    pub fn set_term(&mut self, term: &str) {
        self.search.run(&self.entries, term);
        if !self.search.is_active() {
            self.window.reset(self.entries.len());
        }
    }

    /// Grow the window when scrolled to the bottom of the unfiltered list.
    /// Returns whether more rows were materialized.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> bool {
        if !self.search.term().is_empty() || !metrics.at_bottom() {
            return false;
        }
        let grew = self.window.grow(self.entries.len());
        if grew {
            debug!(
                shown = self.window.shown(),
                total = self.entries.len(),
                "Window grown"
            );
        }
        grew
    }

    pub fn row_count(&self) -> usize {
        match self.search.matches() {
            Some(matches) => matches.len(),
            None => self.window.shown(),
        }
    }

    /// Displayed rows whose positions fall in `range`, clamped to the row count
    pub fn rows_in(&self, range: Range<usize>) -> impl Iterator<Item = Row<'_>> + '_ {
        let matches = self.search.matches();
        let end = range.end.min(self.row_count());
        (range.start.min(end)..end).map(move |position| {
            let entry = &self.entries[matches.map_or(position, |m| m[position])];
            Row {
                position,
                entry,
                highlight: self.search.highlight(&entry.name),
            }
        })
    }
}
