// direction.rs

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step in grid coordinates, rows grow downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// The committed direction of the in-flight tick and the queued one for the next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Heading {
    current: Direction,
    pending: Direction,
}

impl Heading {
    pub fn new(direction: Direction) -> Self {
        Self {
            current: direction,
            pending: direction,
        }
    }

    pub fn current(&self) -> Direction {
        self.current
    }

    pub fn pending(&self) -> Direction {
        self.pending
    }

    /// Queues a turn unless it would reverse the snake onto its own neck.
    /// Compared against `current`, so two presses in one frame can't sneak a
    /// reversal through.
    pub fn queue(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(self.current) {
            return false;
        }
        self.pending = direction;
        true
    }

    pub fn commit(&mut self) -> Direction {
        self.current = self.pending;
        self.current
    }
}
