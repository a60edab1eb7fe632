use std::collections::VecDeque;

use super::direction::Direction;
use super::grid::{Grid, GridCell};

/// Body segments, head first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<GridCell>,
}

impl Snake {
    pub const START_LENGTH: usize = 3;

    /// Horizontal line centred in the grid with the head on the center cell,
    /// body trailing to the left.
    pub fn centered(grid: Grid) -> Self {
        let head = grid.center();
        let body = (0..Self::START_LENGTH as i32)
            .map(|offset| GridCell::new(head.col - offset, head.row))
            .collect();
        Self { body }
    }

    /// Builds a snake from explicit segments. Returns `None` for an empty body
    /// or one that overlaps itself.
    pub fn from_segments(segments: impl IntoIterator<Item = GridCell>) -> Option<Self> {
        let snake = Self {
            body: segments.into_iter().collect(),
        };
        if snake.is_empty() {
            return None;
        }
        for (i, segment) in snake.body.iter().enumerate() {
            if snake.body.iter().skip(i + 1).any(|other| other == segment) {
                return None;
            }
        }
        Some(snake)
    }

    pub fn head(&self) -> GridCell {
        // body is never empty
        self.body[0]
    }

    pub fn tail(&self) -> GridCell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, cell: &GridCell) -> bool {
        self.body.contains(cell)
    }

    pub fn segments(&self) -> impl Iterator<Item = &GridCell> {
        self.body.iter()
    }

    pub fn next_head(&self, direction: Direction) -> GridCell {
        self.head().neighbour(direction)
    }

    pub(crate) fn push_head(&mut self, cell: GridCell) {
        self.body.push_front(cell);
    }

    pub(crate) fn pop_tail(&mut self) -> Option<GridCell> {
        // keep the head around no matter what
        if self.body.len() > 1 {
            self.body.pop_back()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_snake_on_30x20() {
        let grid = Grid::new(30, 20).unwrap();
        let snake = Snake::centered(grid);
        let segments: Vec<GridCell> = snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![
                GridCell::new(15, 10),
                GridCell::new(14, 10),
                GridCell::new(13, 10)
            ]
        );
        assert_eq!(snake.head(), GridCell::new(15, 10));
        assert_eq!(snake.tail(), GridCell::new(13, 10));
    }

    #[test]
    fn test_centered_snake_fits_narrowest_grid() {
        let grid = Grid::new(Grid::MIN_WIDTH, 1).unwrap();
        let snake = Snake::centered(grid);
        assert!(snake.segments().all(|segment| grid.contains(*segment)));
    }

    #[test]
    fn test_from_segments_rejects_overlap() {
        assert!(Snake::from_segments([(1, 1).into(), (1, 1).into()]).is_none());
        assert!(Snake::from_segments(Vec::new()).is_none());
        assert!(Snake::from_segments([(1, 1).into(), (0, 1).into()]).is_some());
    }
}
