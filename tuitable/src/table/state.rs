//! Sortable table state.

use std::collections::HashMap;

use log::debug;

use crate::order::{Direction, sort_rows};

use super::item::{Column, Row};

/// Visual state of a header's sort indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// Column is not the active sort.
    Neutral,
    /// Column holds the active sort, ascending.
    Ascending,
    /// Column holds the active sort, descending.
    Descending,
}

impl Indicator {
    /// The glyph rendered in the header's indicator region.
    pub fn glyph(self) -> &'static str {
        match self {
            Indicator::Neutral => "↕",
            Indicator::Ascending => "▲",
            Indicator::Descending => "▼",
        }
    }

    /// Whether the indicator renders emphasized. Neutral renders dimmed.
    pub fn emphasized(self) -> bool {
        !matches!(self, Indicator::Neutral)
    }
}

/// A table whose rows sort by clicking column headers.
///
/// Each column keeps its own toggle memory: the first click on a column
/// sorts ascending, the next descending, and so on. Activating another
/// column resets the previous column's *indicator* to neutral but leaves
/// its memory alone, so a later revisit continues the toggle from wherever
/// it left off. At most one column shows a non-neutral indicator.
///
/// Sorting runs synchronously in the caller's thread and permutes rows
/// only; cell contents are never touched.
///
/// # Examples
///
/// ```ignore
/// use tuitable::{Column, Row, Table};
///
/// let mut table = Table::with_rows(
///     vec![Column::new("Name", 16), Column::new("Size", 10)],
///     vec![
///         Row::new(["beta.txt", "2,048"]),
///         Row::new(["alpha.txt", "1,024"]),
///     ],
/// );
///
/// table.toggle_sort(1); // first click: ascending
/// assert_eq!(table.rows()[0].cell(0), Some("alpha.txt"));
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    /// Column definitions.
    columns: Vec<Column>,
    /// Body rows in display order.
    rows: Vec<Row>,
    /// The active sort (column index, direction), if any.
    sort: Option<(usize, Direction)>,
    /// Per-column direction memory. Initialized so a column's first toggle
    /// lands on ascending; survives the active sort moving elsewhere.
    directions: HashMap<usize, Direction>,
}

impl Table {
    /// Create a table with column definitions and no rows.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            sort: None,
            directions: HashMap::new(),
        }
    }

    /// Create a table with initial rows.
    pub fn with_rows(columns: Vec<Column>, rows: Vec<Row>) -> Self {
        Self {
            columns,
            rows,
            sort: None,
            directions: HashMap::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Column access
    // -------------------------------------------------------------------------

    /// The column definitions.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Total content width (sum of all column widths).
    pub fn total_width(&self) -> u16 {
        self.columns.iter().map(|c| c.width).sum()
    }

    // -------------------------------------------------------------------------
    // Row access
    // -------------------------------------------------------------------------

    /// The rows in display order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// A row by display index.
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replace all rows.
    ///
    /// The active sort is cleared (the new rows arrive in their own order),
    /// but per-column toggle memory is kept.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.sort = None;
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// The active sort (column index, direction), if any.
    pub fn sort(&self) -> Option<(usize, Direction)> {
        self.sort
    }

    /// The indicator shown for a column.
    ///
    /// Only the active sort column reads non-neutral, whatever direction
    /// the other columns remember.
    pub fn indicator(&self, column: usize) -> Indicator {
        match self.sort {
            Some((active, Direction::Asc)) if active == column => Indicator::Ascending,
            Some((active, Direction::Desc)) if active == column => Indicator::Descending,
            _ => Indicator::Neutral,
        }
    }

    /// Toggle the sort on a column and reorder the rows.
    ///
    /// The column's remembered direction flips (first-ever click lands on
    /// ascending), the column becomes the active sort, and the rows are
    /// stable-sorted by its cells. Returns the applied direction, or `None`
    /// for an out-of-range column (nothing changes).
    pub fn toggle_sort(&mut self, column: usize) -> Option<Direction> {
        if column >= self.columns.len() {
            return None;
        }
        let remembered = self
            .directions
            .get(&column)
            .copied()
            .unwrap_or(Direction::Desc);
        let direction = remembered.toggle();
        self.apply_sort(column, direction);
        Some(direction)
    }

    /// Sort by an explicit column and direction.
    ///
    /// Seeds the column's toggle memory, so a later `toggle_sort` on the
    /// same column flips from here. Returns `false` for an out-of-range
    /// column.
    pub fn sort_by(&mut self, column: usize, direction: Direction) -> bool {
        if column >= self.columns.len() {
            return false;
        }
        self.apply_sort(column, direction);
        true
    }

    /// Clear the active sort. Indicators all read neutral afterwards;
    /// toggle memory and row order stay as they are.
    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    fn apply_sort(&mut self, column: usize, direction: Direction) {
        debug!(
            "Sorting {} rows on column {column} ({direction:?})",
            self.rows.len()
        );
        self.directions.insert(column, direction);
        self.sort = Some((column, direction));
        self.rows = sort_rows(std::mem::take(&mut self.rows), column, direction);
    }
}
