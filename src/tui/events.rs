use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

/// User actions from terminal events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    /// Keyboard focus on/off the trigger
    ToggleFocus,
    /// Pin the timezone detail open (or unpin it) regardless of hover/focus
    TogglePin,
    /// Pointer moved to (column, row)
    PointerMove(u16, u16),
    Resize,
    None,
}

/// Poll for terminal events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if !event::poll(timeout)? {
        return Ok(Action::None);
    }

    let action = match event::read()? {
        Event::Key(key) => key_to_action(key),
        Event::Mouse(mouse) => mouse_to_action(mouse),
        Event::Resize(_, _) => Action::Resize,
        _ => Action::None,
    };
    Ok(action)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,

        (KeyCode::Tab, _) | (KeyCode::BackTab, _) => Action::ToggleFocus,
        (KeyCode::Enter, _) | (KeyCode::Char(' '), KeyModifiers::NONE) => Action::ToggleFocus,
        (KeyCode::Char('p'), KeyModifiers::NONE) => Action::TogglePin,

        _ => Action::None,
    }
}

fn mouse_to_action(mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            Action::PointerMove(mouse.column, mouse.row)
        }
        _ => Action::None,
    }
}
