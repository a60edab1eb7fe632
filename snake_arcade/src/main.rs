mod arcade;

use std::{fs::File, path::PathBuf, sync::Mutex};

use clap::{Parser, Subcommand, ValueEnum};
use snake_core::GameConfig;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(about, version)]
pub struct SnakeArgs {
    #[command(subcommand)]
    mode: Option<SnakeMode>,

    /// JSON configuration file, command line flags override it
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long, global = true)]
    width: Option<u16>,

    /// Grid height in cells
    #[arg(long, global = true)]
    height: Option<u16>,

    /// Ticks per second
    #[arg(long, global = true)]
    tps: Option<u32>,

    /// Seed for food placement
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[arg(value_enum, long, global = true, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeMode {
    /// Play the game (default)
    Play,
    /// Print the resolved configuration as JSON and exit
    PrintConfig,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

impl SnakeArgs {
    pub fn game_config(&self) -> snake_core::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(tps) = self.tps {
            config.ticks_per_second = tps;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Logs only go to a file, the terminal belongs to the game.
fn init_logging(args: &SnakeArgs) -> snake_core::Result<()> {
    if let Some(path) = &args.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_max_level(Level::from(args.log_level))
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }
    Ok(())
}

fn main() -> snake_core::Result<()> {
    let args = SnakeArgs::parse();
    init_logging(&args)?;
    let config = args.game_config()?;
    match args.mode.unwrap_or(SnakeMode::Play) {
        SnakeMode::Play => arcade::game_loop(config)?,
        SnakeMode::PrintConfig => println!("{}", config.to_json()?),
    }
    Ok(())
}
