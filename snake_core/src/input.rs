use super::direction::Direction;

/// Position on screen in presentation units (terminal columns and rows).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Discrete input the core understands. The presentation layer maps raw
/// device events onto these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Turn(Direction),
    /// Pointer activation at a screen position.
    ConfirmAt(Point),
    /// Keyboard confirmation of whatever control is on screen.
    Confirm,
    Quit,
}
