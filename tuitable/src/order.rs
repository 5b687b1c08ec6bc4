//! Sort direction and the row ordering routine.

use std::cmp::Ordering;

use crate::table::Row;
use crate::value::SortKey;

/// Direction of a column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9, oldest first).
    Asc,
    /// Descending order (Z-A, 9-0, newest first).
    Desc,
}

impl Direction {
    /// The opposite direction.
    pub fn toggle(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

/// Compare two rows' keys at the sort column.
///
/// A row without a cell at the sort column compares equal to anything, so
/// short rows hold their position under a stable sort instead of erroring.
/// Descending is the exact reverse of ascending.
pub fn compare_cells(a: Option<&SortKey>, b: Option<&SortKey>, direction: Direction) -> Ordering {
    let (Some(a), Some(b)) = (a, b) else {
        return Ordering::Equal;
    };
    match direction {
        Direction::Asc => a.compare(b),
        Direction::Desc => a.compare(b).reverse(),
    }
}

/// Stable-sort rows by the cell at `column` in the given direction.
///
/// Each row's cell is parsed into its key once up front, then the decorated
/// rows are sorted and unwrapped. Rows are permuted, never edited.
pub fn sort_rows(rows: Vec<Row>, column: usize, direction: Direction) -> Vec<Row> {
    let mut keyed: Vec<(Option<SortKey>, Row)> = rows
        .into_iter()
        .map(|row| (row.cell(column).map(SortKey::parse), row))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| compare_cells(a.as_ref(), b.as_ref(), direction));
    keyed.into_iter().map(|(_, row)| row).collect()
}
