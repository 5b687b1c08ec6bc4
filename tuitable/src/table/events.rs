//! Click routing for the table.

use log::trace;

use crate::order::Direction;

use super::state::Table;

/// What a click did to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A header was clicked and the rows were re-sorted.
    Sorted { column: usize, direction: Direction },
    /// The click hit nothing actionable.
    Ignored,
}

impl Table {
    /// Which column a table-relative x offset falls into.
    pub fn column_at(&self, x: u16) -> Option<usize> {
        let mut start = 0u16;
        for (index, column) in self.columns().iter().enumerate() {
            let end = start + column.width;
            if x >= start && x < end {
                return Some(index);
            }
            start = end;
        }
        None
    }

    /// Route a click at table-relative coordinates.
    ///
    /// Row 0 is the header line; a click there toggles the sort for the
    /// column under the cursor. Clicks on body rows or past the last
    /// column do nothing.
    pub fn handle_click(&mut self, x: u16, y: u16) -> ClickOutcome {
        if y != 0 {
            return ClickOutcome::Ignored;
        }
        let Some(column) = self.column_at(x) else {
            trace!("Header click at x={x} past the last column");
            return ClickOutcome::Ignored;
        };
        trace!("Header click at x={x} mapped to column {column}");
        match self.toggle_sort(column) {
            Some(direction) => ClickOutcome::Sorted { column, direction },
            None => ClickOutcome::Ignored,
        }
    }
}
