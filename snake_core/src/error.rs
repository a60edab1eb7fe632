use serde_json::Error as SerdeError;
use std::io::Error as IOError;

#[derive(thiserror::Error, Debug)]
pub enum SnakeError {
    #[error("Invalid grid of {width}x{height}. The grid must be 4 to 255 cells wide and 1 to 255 cells tall.")]
    InvalidGrid { width: u16, height: u16 },
    #[error("Tick rate must be at least 1 tick per second, got {0}.")]
    InvalidTickRate(u32),
    #[error("Couldn't parse the configuration.")]
    Config(#[from] SerdeError),
    #[error("IO error")]
    Io(#[from] IOError),
}

pub type Result<T> = std::result::Result<T, SnakeError>;
