use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use snake_core::{Direction, InputEvent, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameInput {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Confirm,
    Click(Point),
    Hover(Point),
    Quit,
}

impl GameInput {
    /// The core event for this input. Hovering is presentation only.
    pub fn to_event(self) -> Option<InputEvent> {
        match self {
            GameInput::MoveUp => Some(InputEvent::Turn(Direction::Up)),
            GameInput::MoveDown => Some(InputEvent::Turn(Direction::Down)),
            GameInput::MoveLeft => Some(InputEvent::Turn(Direction::Left)),
            GameInput::MoveRight => Some(InputEvent::Turn(Direction::Right)),
            GameInput::Confirm => Some(InputEvent::Confirm),
            GameInput::Click(point) => Some(InputEvent::ConfirmAt(point)),
            GameInput::Quit => Some(InputEvent::Quit),
            GameInput::Hover(_) => None,
        }
    }
}

/// Drains every event that is already waiting, without blocking.
pub fn handle_events() -> io::Result<Vec<GameInput>> {
    let mut inputs = Vec::new();
    while event::poll(Duration::ZERO)? {
        if let Some(input) = map_event(event::read()?) {
            inputs.push(input);
        }
    }
    Ok(inputs)
}

pub fn map_event(event: Event) -> Option<GameInput> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(GameInput::Quit),
        KeyCode::Char('h') | KeyCode::Char('a') | KeyCode::Left => Some(GameInput::MoveLeft),
        KeyCode::Char('j') | KeyCode::Char('s') | KeyCode::Down => Some(GameInput::MoveDown),
        KeyCode::Char('k') | KeyCode::Char('w') | KeyCode::Up => Some(GameInput::MoveUp),
        KeyCode::Char('l') | KeyCode::Char('d') | KeyCode::Right => Some(GameInput::MoveRight),
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameInput::Confirm),
        _ => None,
    }
}

fn map_mouse(mouse: MouseEvent) -> Option<GameInput> {
    let point = Point::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(GameInput::Click(point)),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(GameInput::Hover(point)),
        _ => None,
    }
}
