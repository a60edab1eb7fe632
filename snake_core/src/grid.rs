// grid.rs

use super::direction::Direction;
use super::error::{Result, SnakeError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub col: i32,
    pub row: i32,
}

impl GridCell {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    pub fn neighbour(self, direction: Direction) -> GridCell {
        let (dx, dy) = direction.delta();
        GridCell::new(self.col + dx, self.row + dy)
    }
}

impl From<(i32, i32)> for GridCell {
    fn from(value: (i32, i32)) -> Self {
        GridCell::new(value.0, value.1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
}

impl Grid {
    /// The starting snake trails two cells left of the center column.
    pub const MIN_WIDTH: u16 = 4;
    pub const MAX_WIDTH: u16 = 255;
    pub const MAX_HEIGHT: u16 = 255;

    pub fn new(width: u16, height: u16) -> Result<Self> {
        if !(Self::MIN_WIDTH..=Self::MAX_WIDTH).contains(&width)
            || !(1..=Self::MAX_HEIGHT).contains(&height)
        {
            return Err(SnakeError::InvalidGrid { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn size(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, cell: GridCell) -> bool {
        (0..self.width as i32).contains(&cell.col) && (0..self.height as i32).contains(&cell.row)
    }

    pub fn center(&self) -> GridCell {
        GridCell::new(self.width as i32 / 2, self.height as i32 / 2)
    }

    pub fn index_to_cell(&self, index: usize) -> GridCell {
        let col = index % self.width as usize;
        let row = index / self.width as usize;
        GridCell::new(col as i32, row as i32)
    }

    pub fn cell_to_index(&self, cell: GridCell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        Some(cell.row as usize * self.width as usize + cell.col as usize)
    }

    /// Row-major iteration over every cell of the grid.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        (0..self.size()).map(|index| self.index_to_cell(index))
    }
}
