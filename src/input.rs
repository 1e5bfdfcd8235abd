//! Terminal event to command translation.

use crate::driver::{Command, Phase};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// Result of translating one terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Command(Command),
    Quit,
    Ignore,
}

/// Translate a terminal event given the driver's current phase.
///
/// Space/Up and a left mouse press (the terminal's touch gesture) jump. Enter
/// or `s` is the start control while idle and the restart control once over.
pub fn map_event(event: &Event, phase: Phase) -> InputAction {
    match event {
        Event::Key(key) => map_key(key, phase),
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            InputAction::Command(Command::Jump)
        }
        _ => InputAction::Ignore,
    }
}

fn map_key(key: &KeyEvent, phase: Phase) -> InputAction {
    // Some platforms report releases too
    if key.kind == KeyEventKind::Release {
        return InputAction::Ignore;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputAction::Quit,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => InputAction::Quit,
        KeyCode::Char(' ') | KeyCode::Up => InputAction::Command(Command::Jump),
        KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => match phase {
            Phase::Idle => InputAction::Command(Command::Start),
            Phase::Over => InputAction::Command(Command::Restart),
            Phase::Running => InputAction::Ignore,
        },
        KeyCode::Char('r') | KeyCode::Char('R') => InputAction::Command(Command::Restart),
        _ => InputAction::Ignore,
    }
}
