pub mod collate;
pub mod event;
pub mod order;
pub mod table;
pub mod terminal;
pub mod text;
pub mod value;

pub use collate::collate;
pub use event::{Event, Key, Modifiers, MouseButton, convert_event};
pub use order::{Direction, compare_cells, sort_rows};
pub use table::{
    Alignment, ClickOutcome, Column, Indicator, Line, Row, Span, Table, TextStyle, render,
    render_header, render_row,
};
pub use terminal::Terminal;
pub use value::SortKey;
