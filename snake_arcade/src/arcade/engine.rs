// engine.rs

use ratatui::{layout::Rect, Frame};

use super::input::GameInput;

pub trait Engine {
    /// Applies one frame of input laid out for `viewport`. Returns true when
    /// the loop should stop.
    fn tick(&mut self, input: Vec<GameInput>, viewport: Rect) -> bool;
    fn render_frame(&self, frame: &mut Frame);
}
