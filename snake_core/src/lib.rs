// lib.rs
pub mod config;
pub mod controls;
pub mod direction;
pub mod error;
pub mod food;
pub mod grid;
pub mod input;
pub mod movement;
pub mod session;
pub mod snake;

pub use config::GameConfig;
pub use controls::{is_point_inside, was_activated, Control, ControlArea, Controls};
pub use direction::{Direction, Heading};
pub use error::{Result, SnakeError};
pub use grid::{Grid, GridCell};
pub use input::{InputEvent, Point};
pub use movement::{Collision, StepResult};
pub use session::{FrameReport, GameOverReason, GameSession, GameState};
pub use snake::Snake;
