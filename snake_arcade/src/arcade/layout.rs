// layout.rs

use ratatui::layout::{Constraint, Flex, Layout, Margin, Rect};
use snake_core::{ControlArea, Controls, Grid, GridCell};

pub const HEADER_HEIGHT: u16 = 3;
pub const BUTTON_WIDTH: u16 = 16;
pub const BUTTON_HEIGHT: u16 = 3;
/// Terminal columns per grid cell, keeps cells roughly square.
pub const CELL_WIDTH: u16 = 2;
const MIN_SCREEN_WIDTH: u16 = 36;
const MIN_SCREEN_HEIGHT: u16 = 16;

/// Where everything goes for a given terminal area. Shared by drawing and
/// hit-testing so a click lands on what was drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenLayout {
    pub area: Rect,
    pub header: Rect,
    pub board: Rect,
    pub title: Rect,
    pub instructions: Rect,
    pub start_button: Rect,
    pub game_over_text: Rect,
    pub restart_button: Rect,
    pub required: (u16, u16),
    pub fits: bool,
}

impl ScreenLayout {
    pub fn new(area: Rect, grid: Grid) -> ScreenLayout {
        let board_width = grid.width().saturating_mul(CELL_WIDTH).saturating_add(2);
        let board_height = grid.height().saturating_add(2);
        let required = (
            board_width.max(MIN_SCREEN_WIDTH),
            HEADER_HEIGHT.saturating_add(board_height).max(MIN_SCREEN_HEIGHT),
        );
        let fits = area.width >= required.0 && area.height >= required.1;

        let [header, body] =
            Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Fill(1)])
                .areas(area);
        let board = centered(body, board_width, board_height);

        let title = row(area, area.height / 4, 1);
        let instructions = row(area, (area.height / 2).saturating_sub(2), 5);
        let start_button = button(area, (area.height as u32 * 3 / 4) as u16);

        let board_middle = board.y + board.height / 2;
        let game_over_text = row(board, board_middle.saturating_sub(board.y + 2), 2);
        let restart_button = button(board, board_middle + 1 - board.y);

        ScreenLayout {
            area,
            header,
            board,
            title,
            instructions,
            start_button,
            game_over_text,
            restart_button,
            required,
            fits,
        }
    }

    /// Inside of the board border.
    pub fn playfield(&self) -> Rect {
        self.board.inner(&Margin::new(1, 1))
    }

    /// Screen rectangle of a grid cell, `None` when it would fall outside the
    /// playfield.
    pub fn cell_rect(&self, cell: GridCell) -> Option<Rect> {
        let playfield = self.playfield();
        if cell.col < 0 || cell.row < 0 {
            return None;
        }
        let x = playfield.x as u32 + cell.col as u32 * CELL_WIDTH as u32;
        let y = playfield.y as u32 + cell.row as u32;
        if x + CELL_WIDTH as u32 > playfield.right() as u32 || y >= playfield.bottom() as u32 {
            return None;
        }
        Some(Rect::new(x as u16, y as u16, CELL_WIDTH, 1))
    }

    pub fn controls(&self) -> Controls {
        if !self.fits {
            return Controls::new(ControlArea::default(), ControlArea::default());
        }
        Controls::new(
            control_area(self.start_button),
            control_area(self.restart_button),
        )
    }
}

fn control_area(rect: Rect) -> ControlArea {
    ControlArea::new(rect.x, rect.y, rect.width, rect.height)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}

/// Full-width strip `offset` rows below the top of `area`, clamped inside it.
fn row(area: Rect, offset: u16, height: u16) -> Rect {
    let height = height.min(area.height);
    let y = area.y.saturating_add(offset).min(area.bottom().saturating_sub(height));
    Rect::new(area.x, y, area.width, height)
}

fn button(area: Rect, offset: u16) -> Rect {
    let strip = row(area, offset, BUTTON_HEIGHT);
    centered(strip, BUTTON_WIDTH.min(strip.width), strip.height)
}
