//! Table rendering into styled lines.

use crate::text::{align_offset, display_width, truncate_to_width};

use super::item::{Alignment, Column};
use super::state::{Indicator, Table};

/// Text attributes for a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub dim: bool,
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: TextStyle,
}

impl Span {
    /// An unstyled span.
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::new(),
        }
    }

    /// A styled span.
    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// A single rendered line of styled spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    /// Total display width of the line.
    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| display_width(&s.text)).sum()
    }

    /// The line's text with styling stripped.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Render the whole table: header line first, then one line per row.
pub fn render(table: &Table) -> Vec<Line> {
    let mut lines = Vec::with_capacity(table.len() + 1);
    lines.push(render_header(table));
    for index in 0..table.len() {
        lines.extend(render_row(table, index));
    }
    lines
}

/// Render the header line.
///
/// Each header cell shows its text in bold, one space, then the sort
/// indicator trailing it: a dim `↕` when neutral, a bold `▲`/`▼` on the
/// active sort column.
pub fn render_header(table: &Table) -> Line {
    let mut spans = Vec::new();
    for (index, column) in table.columns().iter().enumerate() {
        spans.extend(header_cell(column, table.indicator(index)));
    }
    Line { spans }
}

/// Render a body row by display index.
pub fn render_row(table: &Table, index: usize) -> Option<Line> {
    let row = table.row(index)?;
    let spans = table
        .columns()
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let width = (column.width as usize).saturating_sub(1);
            let text = row.cell(i).unwrap_or("");
            Span::raw(format!("{} ", pad_cell(text, width, column.align)))
        })
        .collect();
    Some(Line { spans })
}

fn header_cell(column: &Column, indicator: Indicator) -> Vec<Span> {
    let width = column.width as usize;
    // One trailing column is the gutter to the next cell.
    let avail = width.saturating_sub(1);
    if avail < 2 {
        return vec![Span::raw(" ".repeat(width))];
    }

    // The indicator region (space + glyph) always trails the header text.
    let text = truncate_to_width(&column.header, avail - 2);
    let content = display_width(&text) + 2;
    let lead = align_offset(content, avail, column.align);
    let trail = avail.saturating_sub(content + lead) + 1;

    let indicator_style = if indicator.emphasized() {
        TextStyle::new().bold()
    } else {
        TextStyle::new().dim()
    };

    let mut spans = Vec::new();
    if lead > 0 {
        spans.push(Span::raw(" ".repeat(lead)));
    }
    spans.push(Span::styled(text, TextStyle::new().bold()));
    spans.push(Span::styled(
        format!(" {}", indicator.glyph()),
        indicator_style,
    ));
    spans.push(Span::raw(" ".repeat(trail)));
    spans
}

fn pad_cell(text: &str, width: usize, align: Alignment) -> String {
    let truncated = truncate_to_width(text, width);
    let text_width = display_width(&truncated);
    let lead = align_offset(text_width, width, align);
    let trail = width.saturating_sub(text_width + lead);
    format!("{}{}{}", " ".repeat(lead), truncated, " ".repeat(trail))
}
