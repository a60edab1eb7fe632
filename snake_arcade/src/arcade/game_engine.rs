// game_engine.rs

use ratatui::{layout::Rect, Frame};
use snake_core::{GameConfig, GameSession, Point, Result};
use tracing::{info, warn};

use super::{engine::Engine, input::GameInput, layout::ScreenLayout};

pub struct GameEngine {
    session: GameSession,
    hover: Option<Point>,
    undersized: bool,
}

impl GameEngine {
    pub fn new(config: &GameConfig) -> Result<GameEngine> {
        let session = GameSession::new(config)?;
        Ok(GameEngine {
            session,
            hover: None,
            undersized: false,
        })
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn hover(&self) -> Option<Point> {
        self.hover
    }
}

impl Engine for GameEngine {
    fn tick(&mut self, user_input: Vec<GameInput>, viewport: Rect) -> bool {
        let layout = ScreenLayout::new(viewport, self.session.grid());
        if layout.fits == self.undersized {
            self.undersized = !layout.fits;
            if self.undersized {
                warn!(?viewport, required = ?layout.required, "terminal too small");
            } else {
                info!(?viewport, "terminal large enough again");
            }
        }

        let mut events = Vec::with_capacity(user_input.len());
        for input in user_input {
            if let GameInput::Hover(point) | GameInput::Click(point) = input {
                self.hover = Some(point);
            }
            events.extend(input.to_event());
        }
        let report = self.session.advance_frame(events, &layout.controls());
        report.quit
    }

    fn render_frame(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.size());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_core::{Direction, GameState};

    fn engine() -> GameEngine {
        let config = GameConfig {
            seed: Some(3),
            ..GameConfig::default()
        };
        GameEngine::new(&config).unwrap()
    }

    fn viewport() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    #[test]
    fn test_click_on_start_button_starts() {
        let mut engine = engine();
        let button = ScreenLayout::new(viewport(), engine.session().grid()).start_button;
        let click = GameInput::Click(Point::new(button.x + 2, button.y + 1));
        assert!(!engine.tick(vec![click], viewport()));
        assert_eq!(engine.session().state(), GameState::Playing);
        assert_eq!(engine.hover(), Some(Point::new(button.x + 2, button.y + 1)));
    }

    #[test]
    fn test_click_elsewhere_is_ignored() {
        let mut engine = engine();
        engine.tick(vec![GameInput::Click(Point::new(0, 0))], viewport());
        assert_eq!(engine.session().state(), GameState::Start);
    }

    #[test]
    fn test_buttons_disabled_when_terminal_too_small() {
        let mut engine = engine();
        let small = Rect::new(0, 0, 20, 10);
        let button = ScreenLayout::new(small, engine.session().grid()).start_button;
        engine.tick(
            vec![GameInput::Click(Point::new(button.x, button.y))],
            small,
        );
        assert_eq!(engine.session().state(), GameState::Start);
        // the keyboard still works
        engine.tick(vec![GameInput::Confirm], small);
        assert_eq!(engine.session().state(), GameState::Playing);
    }

    #[test]
    fn test_turns_reach_the_session() {
        let mut engine = engine();
        engine.tick(vec![GameInput::Confirm], viewport());
        engine.tick(vec![GameInput::MoveDown], viewport());
        assert_eq!(engine.session().current_direction(), Direction::Down);
    }

    #[test]
    fn test_quit() {
        let mut engine = engine();
        assert!(engine.tick(vec![GameInput::Quit], viewport()));
    }
}
