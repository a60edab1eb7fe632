// session.rs

use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use tracing::{debug, info, warn};

use super::config::GameConfig;
use super::controls::{was_activated, Controls};
use super::direction::{Direction, Heading};
use super::error::Result;
use super::food::place_food;
use super::grid::{Grid, GridCell};
use super::input::InputEvent;
use super::movement::{self, Collision, StepResult};
use super::snake::Snake;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Start,
    Playing,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    HitWall,
    HitSelf,
    BoardFilled,
}

impl GameOverReason {
    pub fn describe(&self) -> &'static str {
        match self {
            GameOverReason::HitWall => "You hit the wall.",
            GameOverReason::HitSelf => "You ran into yourself.",
            GameOverReason::BoardFilled => "The board is full, you win!",
        }
    }
}

/// What happened during one call to [`GameSession::advance_frame`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameReport {
    pub state: GameState,
    pub step: Option<StepResult>,
    pub started: bool,
    pub quit: bool,
}

/// Everything one running game owns. The presentation layer only reads it.
#[derive(Clone, Debug)]
pub struct GameSession<R: Rng = XorShiftRng> {
    grid: Grid,
    snake: Snake,
    food: Option<GridCell>,
    heading: Heading,
    score: u32,
    highest_score: u32,
    state: GameState,
    game_over_reason: Option<GameOverReason>,
    games_started: u32,
    rng: R,
}

impl GameSession<XorShiftRng> {
    pub fn new(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => XorShiftRng::seed_from_u64(seed),
            None => XorShiftRng::from_entropy(),
        };
        Ok(Self::with_rng(config.grid()?, rng))
    }
}

impl<R: Rng> GameSession<R> {
    pub fn with_rng(grid: Grid, mut rng: R) -> Self {
        let snake = Snake::centered(grid);
        let food = place_food(grid, &snake, &mut rng);
        Self {
            grid,
            snake,
            food,
            heading: Heading::new(Direction::Right),
            score: 0,
            highest_score: 0,
            state: GameState::Start,
            game_over_reason: None,
            games_started: 0,
            rng,
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<GridCell> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn highest_score(&self) -> u32 {
        self.highest_score
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    pub fn current_direction(&self) -> Direction {
        self.heading.current()
    }

    pub fn pending_direction(&self) -> Direction {
        self.heading.pending()
    }

    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    /// Runs one frame: applies `events` in order, then moves the snake if a
    /// game is in progress. A frame that starts a game doesn't move it.
    pub fn advance_frame<I>(&mut self, events: I, controls: &Controls) -> FrameReport
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let mut report = FrameReport {
            state: self.state,
            step: None,
            started: false,
            quit: false,
        };
        for event in events {
            if event == InputEvent::Quit {
                info!(state = ?self.state, "quit requested");
                report.quit = true;
                break;
            }
            match self.state {
                GameState::Start => {
                    if was_activated(&controls.start, &event) {
                        self.reset();
                        report.started = true;
                    }
                }
                GameState::Playing => {
                    if let InputEvent::Turn(direction) = event {
                        self.turn(direction);
                    }
                }
                GameState::GameOver => {
                    if was_activated(&controls.restart, &event) {
                        self.reset();
                        report.started = true;
                    }
                }
            }
        }
        if !report.quit && !report.started {
            report.step = self.tick();
        }
        report.state = self.state;
        report
    }

    /// Queues a turn for the next tick. Ignored outside of play and for
    /// reversals of the committed direction.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        self.heading.queue(direction)
    }

    /// Moves the snake one cell. `None` when no game is in progress.
    pub fn tick(&mut self) -> Option<StepResult> {
        if self.state != GameState::Playing {
            return None;
        }
        let result = movement::step(
            &mut self.snake,
            &mut self.food,
            &mut self.heading,
            self.grid,
            &mut self.rng,
        );
        debug!(?result, head = ?self.snake.head(), "step");
        if matches!(result, StepResult::Grew | StepResult::BoardFilled) {
            self.score += 1;
        }
        if result.ends_game() {
            let reason = match result {
                StepResult::Collided(Collision::SelfBody) => GameOverReason::HitSelf,
                StepResult::Collided(Collision::Wall) => GameOverReason::HitWall,
                _ => {
                    warn!(length = self.snake.len(), "snake filled the board");
                    GameOverReason::BoardFilled
                }
            };
            self.game_over(reason);
        }
        Some(result)
    }

    /// Fresh snake, food and score, straight into play. The high score stays.
    pub fn reset(&mut self) {
        self.snake = Snake::centered(self.grid);
        self.heading = Heading::new(Direction::Right);
        self.score = 0;
        self.food = place_food(self.grid, &self.snake, &mut self.rng);
        self.game_over_reason = None;
        self.state = GameState::Playing;
        self.games_started += 1;
        info!(game = self.games_started, "game started");
    }

    fn game_over(&mut self, reason: GameOverReason) {
        self.state = GameState::GameOver;
        self.game_over_reason = Some(reason);
        if self.score > self.highest_score {
            self.highest_score = self.score;
        }
        info!(
            ?reason,
            score = self.score,
            highest_score = self.highest_score,
            "game over"
        );
    }
}
