//! Event polling and key mappings for the preview.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ghostty_protocol::Message;

/// Poll timeout for terminal events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Waits up to [`POLL_TIMEOUT`] for a terminal event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts a terminal event to a preview message.
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) => key_to_message(*key),
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

fn mouse_to_message(mouse: &MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::ClickAt {
            column: mouse.column,
            row: mouse.row,
        }),
        MouseEventKind::ScrollUp => Some(Message::SelectPrevious),
        MouseEventKind::ScrollDown => Some(Message::SelectNext),
        _ => None,
    }
}

/// Converts a key press to a preview message.
///
/// Key releases and repeats are ignored.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Close help |
/// | `Up` / `Down` | Select previous / next todo |
/// | `Enter` or `Space` | Toggle the selected todo |
/// | `a` | Tap the add button |
/// | `r` | Send an update broadcast |
/// | `s` | Toggle secure mode |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return (key.code == KeyCode::Char('c')).then_some(Message::Quit);
    }
    match key.code {
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Up => Some(Message::SelectPrevious),
        KeyCode::Down => Some(Message::SelectNext),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::ToggleSelected),
        KeyCode::Char('a') => Some(Message::AddTodo),
        KeyCode::Char('r') => Some(Message::Refresh),
        KeyCode::Char('s') => Some(Message::ToggleSecureMode),
        KeyCode::Char('?') => Some(Message::ToggleHelp),
        _ => None,
    }
}
