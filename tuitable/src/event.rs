//! Input events - convert crossterm events to library events.

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    MouseButton as CrosstermMouseButton, MouseEvent, MouseEventKind,
};
use log::trace;

/// Input event delivered by the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Key press.
    Key { key: Key, modifiers: Modifiers },
    /// Mouse click at terminal coordinates.
    Click { x: u16, y: u16, button: MouseButton },
    /// Terminal resize.
    Resize { width: u16, height: u16 },
}

/// Pressed key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    F(u8),
    Enter,
    Escape,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Delete,
}

/// Modifier keys held during an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

/// Mouse button of a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Convert a crossterm event to a library event.
///
/// Key releases and repeats are dropped; so are mouse events other than
/// button presses.
pub fn convert_event(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key_event) => {
            trace!(
                "Key event: code={:?}, modifiers={:?}, kind={:?}",
                key_event.code, key_event.modifiers, key_event.kind
            );
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            convert_key_event(key_event)
        }
        CrosstermEvent::Mouse(mouse_event) => convert_mouse_event(mouse_event),
        CrosstermEvent::Resize(width, height) => Some(Event::Resize { width, height }),
        _ => None,
    }
}

fn convert_key_event(event: KeyEvent) -> Option<Event> {
    let key = convert_key(event.code)?;
    let modifiers = convert_modifiers(event.modifiers);
    Some(Event::Key { key, modifiers })
}

fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        shift: mods.contains(KeyModifiers::SHIFT),
        alt: mods.contains(KeyModifiers::ALT),
    }
}

fn convert_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::F(n) => Some(Key::F(n)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        KeyCode::PageUp => Some(Key::PageUp),
        KeyCode::PageDown => Some(Key::PageDown),
        KeyCode::Insert => Some(Key::Insert),
        KeyCode::Delete => Some(Key::Delete),
        _ => None,
    }
}

fn convert_mouse_event(event: MouseEvent) -> Option<Event> {
    match event.kind {
        MouseEventKind::Down(button) => Some(Event::Click {
            x: event.column,
            y: event.row,
            button: convert_button(button),
        }),
        _ => None,
    }
}

fn convert_button(button: CrosstermMouseButton) -> MouseButton {
    match button {
        CrosstermMouseButton::Left => MouseButton::Left,
        CrosstermMouseButton::Right => MouseButton::Right,
        CrosstermMouseButton::Middle => MouseButton::Middle,
    }
}
