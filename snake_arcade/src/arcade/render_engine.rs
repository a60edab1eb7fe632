use std::io::{self, stdout, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{prelude::*, widgets::*};
use snake_core::{is_point_inside, Control, GameSession, GameState, Point};

use super::game_engine::GameEngine;
use super::layout::ScreenLayout;

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[derive(Debug)]
pub struct RenderEngine {
    terminal: Tui,
}

impl RenderEngine {
    pub fn init_render_engine() -> Result<RenderEngine, io::Error> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;
        stdout().execute(EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout()));
        match terminal {
            Ok(terminal) => Ok(RenderEngine { terminal }),
            Err(e) => Err(e),
        }
    }

    pub fn deinit_render_engine(mut self) -> io::Result<()> {
        stdout().execute(DisableMouseCapture)?;
        disable_raw_mode()?;
        stdout().execute(LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    pub fn size(&self) -> io::Result<Rect> {
        self.terminal.size()
    }

    pub fn render<F>(&mut self, render_fn: F) -> io::Result<CompletedFrame>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(|frame| render_fn(frame))
    }
}

struct Palette;

impl Palette {
    const SNAKE: Color = Color::Green;
    const SNAKE_HEAD: Color = Color::LightGreen;
    const DEAD_SNAKE: Color = Color::Rgb(139, 69, 19);
    const FOOD: Color = Color::Blue;
    const HEADER: Color = Color::Rgb(50, 50, 50);
    const BUTTON: Color = Color::Green;
    const BUTTON_HOVER: Color = Color::Rgb(0, 100, 0);
    const GAME_OVER: Color = Color::Red;
}

struct Glyphs;

impl Glyphs {
    const SEGMENT: &'static str = "██";
    const HEAD: &'static str = "▓▓";
    const FOOD: &'static str = "● ";
}

const INSTRUCTIONS: [&str; 5] = [
    "Use Arrow Keys or WASD to Move",
    "Eat the blue circles to grow!",
    "Don't hit the walls or yourself.",
    "",
    "Enter or click to start, q to quit",
];

impl WidgetRef for GameEngine {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        let session = self.session();
        let layout = ScreenLayout::new(area, session.grid());
        if !layout.fits {
            render_too_small(&layout, buf);
            return;
        }
        let controls = layout.controls();
        match session.state() {
            GameState::Start => {
                render_start_screen(&layout, buf);
                render_button(&controls.start, layout.start_button, self.hover(), buf);
            }
            GameState::Playing => {
                render_header(session, layout.header, buf);
                render_board(session, &layout, buf);
            }
            GameState::GameOver => {
                render_header(session, layout.header, buf);
                render_board(session, &layout, buf);
                render_game_over(session, &layout, buf);
                render_button(&controls.restart, layout.restart_button, self.hover(), buf);
            }
        }
    }
}

fn render_too_small(layout: &ScreenLayout, buf: &mut Buffer) {
    let (width, height) = layout.required;
    let text = vec![
        Line::from("Terminal too small".bold()),
        Line::from(format!(
            "need {width}x{height}, have {}x{}",
            layout.area.width, layout.area.height
        )),
    ];
    Paragraph::new(text)
        .centered()
        .wrap(Wrap { trim: true })
        .render(layout.area, buf);
}

fn render_start_screen(layout: &ScreenLayout, buf: &mut Buffer) {
    Paragraph::new(Span::styled(
        "S N A K E",
        Style::default()
            .fg(Palette::SNAKE)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .render(layout.title, buf);

    let text: Vec<Line> = INSTRUCTIONS.iter().map(|line| Line::from(*line)).collect();
    Paragraph::new(text)
        .centered()
        .style(Style::default().fg(Color::White))
        .render(layout.instructions, buf);
}

fn render_button(control: &Control, area: Rect, hover: Option<Point>, buf: &mut Buffer) {
    let hovered = hover.is_some_and(|point| is_point_inside(control, point));
    let background = if hovered {
        Palette::BUTTON_HOVER
    } else {
        Palette::BUTTON
    };
    Paragraph::new(control.label)
        .centered()
        .style(
            Style::default()
                .bg(background)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::bordered().border_type(BorderType::Rounded))
        .render(area, buf);
}

fn render_header(session: &GameSession, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::White))
        .style(Style::default().bg(Palette::HEADER));
    let inner = block.inner(area);
    block.render(area, buf);

    let [line] = Layout::vertical([Constraint::Length(1)])
        .flex(layout::Flex::Center)
        .areas(inner);
    let line = line.inner(&Margin::new(2, 0));
    Paragraph::new(format!("Score: {}", session.score()))
        .alignment(Alignment::Left)
        .render(line, buf);
    Paragraph::new(format!("Highest Score: {}", session.highest_score()))
        .alignment(Alignment::Right)
        .render(line, buf);
}

fn render_board(session: &GameSession, layout: &ScreenLayout, buf: &mut Buffer) {
    Block::bordered()
        .border_style(Style::default().fg(Color::White))
        .render(layout.board, buf);

    if let Some(rect) = session.food().and_then(|food| layout.cell_rect(food)) {
        buf.set_string(rect.x, rect.y, Glyphs::FOOD, Style::default().fg(Palette::FOOD));
    }

    let dead = session.state() == GameState::GameOver;
    // tail first so the head is drawn on top
    let segments: Vec<_> = session.snake().segments().collect();
    for (i, segment) in segments.iter().enumerate().rev() {
        let Some(rect) = layout.cell_rect(**segment) else {
            continue;
        };
        let (glyph, color) = match (i, dead) {
            (_, true) => (Glyphs::SEGMENT, Palette::DEAD_SNAKE),
            (0, false) => (Glyphs::HEAD, Palette::SNAKE_HEAD),
            _ => (Glyphs::SEGMENT, Palette::SNAKE),
        };
        buf.set_string(rect.x, rect.y, glyph, Style::default().fg(color));
    }
}

fn render_game_over(session: &GameSession, layout: &ScreenLayout, buf: &mut Buffer) {
    let reason = session
        .game_over_reason()
        .map(|reason| reason.describe())
        .unwrap_or_default();
    let text = vec![
        Line::from(Span::styled(
            "Game Over!",
            Style::default()
                .fg(Palette::GAME_OVER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(reason),
    ];
    Paragraph::new(text)
        .centered()
        .render(layout.game_over_text, buf);
}
