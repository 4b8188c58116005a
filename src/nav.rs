//! Keyboard focus traversal between the search box and the result rows

/// Something that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    /// Position within the rendered rows, not an index into the catalog
    Entry(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
}

/// Where focus moves when `key` is pressed. `None` means the key is not
/// handled and should be left to the focused widget.
pub fn step(focus: Focus, key: NavKey, rows: usize) -> Option<Focus> {
    match (focus, key) {
        (Focus::Input, NavKey::Down) if rows > 0 => Some(Focus::Entry(0)),
        (Focus::Input, _) => None,
        (Focus::Entry(0), NavKey::Up) => Some(Focus::Input),
        (Focus::Entry(i), NavKey::Up) => Some(Focus::Entry((i - 1).min(rows.saturating_sub(1)))),
        (Focus::Entry(i), NavKey::Down) => {
            if i + 1 < rows {
                Some(Focus::Entry(i + 1))
            } else if rows == 0 {
                Some(Focus::Input)
            } else {
                Some(Focus::Entry(rows - 1))
            }
        }
    }
}

/// Focus handles collected while rendering a frame. Only the rows that were
/// actually laid out are registered; `len` is the full row count.
#[derive(Debug, Clone)]
pub struct FocusRing<H> {
    input: Option<H>,
    rows: usize,
    rendered: Vec<(usize, H)>,
}

impl<H> Default for FocusRing<H> {
    fn default() -> Self {
        Self {
            input: None,
            rows: 0,
            rendered: Vec::new(),
        }
    }
}

impl<H: Copy + PartialEq> FocusRing<H> {
    pub fn clear(&mut self) {
        self.input = None;
        self.rows = 0;
        self.rendered.clear();
    }

    pub fn set_input(&mut self, handle: H) {
        self.input = Some(handle);
    }

    pub fn set_rows(&mut self, rows: usize) {
        self.rows = rows;
    }

    /// Register a row laid out this frame
    pub fn push(&mut self, position: usize, handle: H) {
        self.rendered.push((position, handle));
    }

    pub fn len(&self) -> usize {
        self.rows
    }

    /// Handle for `focus`, if that row was laid out
    pub fn handle(&self, focus: Focus) -> Option<H> {
        match focus {
            Focus::Input => self.input,
            Focus::Entry(i) => self
                .rendered
                .iter()
                .find(|&&(position, _)| position == i)
                .map(|&(_, h)| h),
        }
    }

    pub fn focus_of(&self, handle: H) -> Option<Focus> {
        if self.input == Some(handle) {
            return Some(Focus::Input);
        }
        self.rendered
            .iter()
            .find(|&&(_, h)| h == handle)
            .map(|&(position, _)| Focus::Entry(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn down_from_input_goes_to_first_entry() {
        assert_eq!(step(Focus::Input, NavKey::Down, 10), Some(Focus::Entry(0)));
    }

    #[test]
    fn down_from_input_with_no_rows_is_unhandled() {
        assert_eq!(step(Focus::Input, NavKey::Down, 0), None);
    }

    #[test]
    fn up_from_input_is_unhandled() {
        assert_eq!(step(Focus::Input, NavKey::Up, 10), None);
    }

    #[test]
    fn up_from_first_entry_returns_to_input() {
        assert_eq!(step(Focus::Entry(0), NavKey::Up, 10), Some(Focus::Input));
    }

    #[test]
    fn arrows_move_between_entries() {
        assert_eq!(step(Focus::Entry(3), NavKey::Down, 10), Some(Focus::Entry(4)));
        assert_eq!(step(Focus::Entry(3), NavKey::Up, 10), Some(Focus::Entry(2)));
    }

    #[test]
    fn down_on_last_entry_stays_put() {
        assert_eq!(step(Focus::Entry(9), NavKey::Down, 10), Some(Focus::Entry(9)));
    }

    #[test]
    fn stale_position_is_clamped_to_rows() {
        assert_eq!(step(Focus::Entry(40), NavKey::Down, 5), Some(Focus::Entry(4)));
        assert_eq!(step(Focus::Entry(40), NavKey::Up, 5), Some(Focus::Entry(4)));
        assert_eq!(step(Focus::Entry(3), NavKey::Down, 0), Some(Focus::Input));
    }

    #[test]
    fn ring_maps_handles_both_ways() {
        let mut ring = FocusRing::default();
        ring.set_input(100u64);
        ring.set_rows(10);
        ring.push(0, 7);
        ring.push(1, 8);

        assert_eq!(ring.len(), 10);
        assert_eq!(ring.focus_of(100), Some(Focus::Input));
        assert_eq!(ring.focus_of(8), Some(Focus::Entry(1)));
        assert_eq!(ring.focus_of(9), None);
        assert_eq!(ring.handle(Focus::Entry(0)), Some(7));
        assert_eq!(ring.handle(Focus::Entry(2)), None);
        assert_eq!(ring.handle(Focus::Input), Some(100));

        ring.clear();
        assert_eq!(ring.len(), 0);
        assert_eq!(ring.handle(Focus::Input), None);
    }

    #[test]
    fn ring_holds_only_laid_out_rows() {
        let mut ring = FocusRing::default();
        ring.set_rows(100_000);
        for position in 4_000..4_012 {
            ring.push(position, position as u64 + 1);
        }

        assert_eq!(ring.len(), 100_000);
        assert_eq!(ring.rendered.len(), 12);
        assert_eq!(ring.focus_of(4_006), Some(Focus::Entry(4_005)));
        assert_eq!(ring.handle(Focus::Entry(4_011)), Some(4_012));
        assert_eq!(ring.handle(Focus::Entry(4_012)), None);

        let current = ring.focus_of(4_012).unwrap();
        assert_eq!(step(current, NavKey::Down, ring.len()), Some(Focus::Entry(4_012)));
    }
}
