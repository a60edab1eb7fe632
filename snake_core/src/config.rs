use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{Result, SnakeError};
use super::grid::Grid;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    pub grid_width: u16,
    pub grid_height: u16,
    pub ticks_per_second: u32,
    /// Seed for food placement. Random when missing.
    pub seed: Option<u64>,
}

impl GameConfig {
    // 600x480 window, 20px cells, 60px header plus 10px margin, 20px padding
    pub const DEFAULT_GRID_WIDTH: u16 = 28;
    pub const DEFAULT_GRID_HEIGHT: u16 = 19;
    pub const DEFAULT_TICKS_PER_SECOND: u32 = 10;

    pub fn validate(&self) -> Result<()> {
        self.grid()?;
        if self.ticks_per_second == 0 {
            return Err(SnakeError::InvalidTickRate(self.ticks_per_second));
        }
        Ok(())
    }

    pub fn grid(&self) -> Result<Grid> {
        Grid::new(self.grid_width, self.grid_height)
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }

    pub fn from_json(config_str: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let config_str = self.to_json()?;
        let mut file = File::create(path)?;
        file.write_all(config_str.as_bytes())?;
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut config_str = String::new();
        file.read_to_string(&mut config_str)?;
        Self::from_json(&config_str)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: Self::DEFAULT_GRID_WIDTH,
            grid_height: Self::DEFAULT_GRID_HEIGHT,
            ticks_per_second: Self::DEFAULT_TICKS_PER_SECOND,
            seed: None,
        }
    }
}
