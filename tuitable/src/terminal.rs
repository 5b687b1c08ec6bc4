//! Terminal lifecycle, input polling, and line drawing.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor, event, execute,
    style::{Attribute, SetAttribute},
    terminal,
};

use crate::event::{Event, convert_event};
use crate::table::Line;

/// Terminal backend: raw mode with mouse capture, polled input, styled
/// line output. The previous terminal state is restored on drop.
pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    /// Enter raw mode, the alternate screen, and mouse capture.
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        Ok(Self { stdout })
    }

    /// Current terminal size (columns, rows).
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Poll for input events.
    ///
    /// With a timeout, waits up to that long for the first event and then
    /// drains everything already queued. Without one, blocks for a single
    /// event. Events crossterm reports but the library does not model are
    /// skipped.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<Event>> {
        let mut events = Vec::new();

        match timeout {
            Some(duration) => {
                if event::poll(duration)? {
                    events.extend(convert_event(event::read()?));
                    // Drain any additional pending events
                    while event::poll(Duration::ZERO)? {
                        events.extend(convert_event(event::read()?));
                    }
                }
            }
            None => events.extend(convert_event(event::read()?)),
        }

        Ok(events)
    }

    /// Draw lines from the top-left corner, clearing the screen first.
    pub fn draw(&mut self, lines: &[Line]) -> io::Result<()> {
        execute!(
            self.stdout,
            terminal::Clear(terminal::ClearType::All),
            SetAttribute(Attribute::Reset)
        )?;

        for (y, line) in lines.iter().enumerate() {
            execute!(self.stdout, cursor::MoveTo(0, y as u16))?;
            for span in &line.spans {
                let styled = span.style.bold || span.style.dim;
                if span.style.bold {
                    execute!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                if span.style.dim {
                    execute!(self.stdout, SetAttribute(Attribute::Dim))?;
                }
                write!(self.stdout, "{}", span.text)?;
                if styled {
                    execute!(self.stdout, SetAttribute(Attribute::Reset))?;
                }
            }
        }

        execute!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
