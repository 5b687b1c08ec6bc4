//! Column and row definitions.

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Column configuration: header text, cell width, alignment.
///
/// Every column is clickable and carries a sort indicator in its header.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     Column::new("Peer", 22),
///     Column::new("Capacity (sat)", 16).align(Alignment::Right),
/// ];
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column header text
    pub header: String,
    /// Column width in terminal columns (fixed)
    pub width: u16,
    /// Horizontal alignment
    pub align: Alignment,
}

impl Column {
    /// Create a new column with explicit width.
    ///
    /// # Arguments
    /// * `header` - The column header text
    /// * `width` - Width in terminal columns
    pub fn new(header: impl Into<String>, width: u16) -> Self {
        Self {
            header: header.into(),
            width,
            align: Alignment::Left,
        }
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }
}

/// A body row: an ordered list of cell texts.
///
/// Cells compare by their rendered text, so a row carries exactly what it
/// displays. A row may be shorter than the column list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    /// Create a row from its cell texts.
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    /// The cell text at a column index, if the row reaches it.
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    /// All cell texts in order.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Number of cells in this row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
