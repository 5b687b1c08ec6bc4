//! Click-to-sort table.
//!
//! The table owns its columns and rows and sorts itself:
//! - Clicking a header sorts by that column, toggling ascending and
//!   descending on repeated clicks (first click is ascending)
//! - Values compare type-aware: dates, then numbers (`"1,234"`, `"85%"`),
//!   then collated text; `"N/A"` and `"-"` sort to the far edge
//! - The active column's header shows `▲`/`▼`; every other header shows a
//!   dimmed `↕`
//! - Each column remembers its own toggle direction while another column
//!   holds the active sort
//!
//! # Example
//!
//! ```ignore
//! use tuitable::{Alignment, Column, Row, Table, render};
//!
//! let mut table = Table::with_rows(
//!     vec![
//!         Column::new("Peer", 22),
//!         Column::new("Capacity (sat)", 16).align(Alignment::Right),
//!     ],
//!     vec![
//!         Row::new(["kraken", "2,345,678"]),
//!         Row::new(["ACINQ", "16,777,215"]),
//!     ],
//! );
//!
//! table.handle_click(2, 0); // click the "Peer" header: sorts ascending
//! let lines = render(&table);
//! ```

mod events;
mod item;
mod render;
mod state;

pub use events::ClickOutcome;
pub use item::{Alignment, Column, Row};
pub use render::{Line, Span, TextStyle, render, render_header, render_row};
pub use state::{Indicator, Table};
