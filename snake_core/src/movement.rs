// movement.rs

use rand::Rng;

use super::direction::Heading;
use super::food::place_food;
use super::grid::{Grid, GridCell};
use super::snake::Snake;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfBody,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    Continued,
    Grew,
    Collided(Collision),
    /// Grew into the last free cell, nothing left to place food on.
    BoardFilled,
}

impl StepResult {
    pub fn ends_game(&self) -> bool {
        matches!(self, StepResult::Collided(_) | StepResult::BoardFilled)
    }
}

/// Advances the snake by one cell. On a collision the snake is left untouched.
///
/// The self check runs against the body before the tail moves, so moving
/// into the cell the tail is about to leave still counts as a collision.
pub fn step<R: Rng + ?Sized>(
    snake: &mut Snake,
    food: &mut Option<GridCell>,
    heading: &mut Heading,
    grid: Grid,
    rng: &mut R,
) -> StepResult {
    let direction = heading.commit();
    let new_head = snake.next_head(direction);

    if !grid.contains(new_head) {
        return StepResult::Collided(Collision::Wall);
    }
    if snake.contains(&new_head) {
        return StepResult::Collided(Collision::SelfBody);
    }

    snake.push_head(new_head);

    if *food == Some(new_head) {
        *food = place_food(grid, snake, rng);
        match food {
            Some(_) => StepResult::Grew,
            None => StepResult::BoardFilled,
        }
    } else {
        snake.pop_tail();
        StepResult::Continued
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    fn cells(snake: &Snake) -> Vec<(i32, i32)> {
        snake.segments().map(|cell| (cell.col, cell.row)).collect()
    }

    fn start_snake() -> Snake {
        Snake::from_segments([(15, 10).into(), (14, 10).into(), (13, 10).into()]).unwrap()
    }

    #[test]
    fn test_eating_grows_and_replaces_food() {
        let mut rng = XorShiftRng::seed_from_u64(3);
        let grid = Grid::new(30, 20).unwrap();
        let mut snake = start_snake();
        let mut food = Some(GridCell::new(16, 10));
        let mut heading = Heading::new(Direction::Right);

        let result = step(&mut snake, &mut food, &mut heading, grid, &mut rng);

        assert_eq!(result, StepResult::Grew);
        assert_eq!(cells(&snake), vec![(16, 10), (15, 10), (14, 10), (13, 10)]);
        let food = food.unwrap();
        assert!(!snake.contains(&food));
        assert!(grid.contains(food));
    }

    #[test]
    fn test_plain_move_keeps_length() {
        let mut rng = XorShiftRng::seed_from_u64(3);
        let grid = Grid::new(30, 20).unwrap();
        let mut snake = start_snake();
        let mut food = Some(GridCell::new(0, 0));
        let mut heading = Heading::new(Direction::Right);

        let result = step(&mut snake, &mut food, &mut heading, grid, &mut rng);

        assert_eq!(result, StepResult::Continued);
        assert_eq!(cells(&snake), vec![(16, 10), (15, 10), (14, 10)]);
        assert_eq!(food, Some(GridCell::new(0, 0)));
    }

    #[test]
    fn test_wall_collision_on_right_edge() {
        let mut rng = XorShiftRng::seed_from_u64(3);
        let grid = Grid::new(30, 20).unwrap();
        let mut snake =
            Snake::from_segments([(29, 10).into(), (28, 10).into(), (27, 10).into()]).unwrap();
        let before = snake.clone();
        let mut food = Some(GridCell::new(0, 0));
        let mut heading = Heading::new(Direction::Right);

        let result = step(&mut snake, &mut food, &mut heading, grid, &mut rng);

        assert_eq!(result, StepResult::Collided(Collision::Wall));
        assert_eq!(snake, before);
    }

    #[test]
    fn test_wall_collision_on_every_edge() {
        let mut rng = XorShiftRng::seed_from_u64(3);
        let grid = Grid::new(10, 8).unwrap();
        let cases = [
            ([(0, 4), (1, 4)], Direction::Left),
            ([(4, 0), (4, 1)], Direction::Up),
            ([(4, 7), (4, 6)], Direction::Down),
        ];
        for (body, direction) in cases {
            let mut snake = Snake::from_segments(body.map(GridCell::from)).unwrap();
            let mut food = None;
            let mut heading = Heading::new(direction);
            let result = step(&mut snake, &mut food, &mut heading, grid, &mut rng);
            assert_eq!(result, StepResult::Collided(Collision::Wall));
        }
    }

    #[test]
    fn test_moving_into_tail_collides() {
        let mut rng = XorShiftRng::seed_from_u64(3);
        let grid = Grid::new(10, 10).unwrap();
        // a 2x2 loop: the head's next cell is the tail
        let mut snake =
            Snake::from_segments([(4, 4).into(), (4, 5).into(), (5, 5).into(), (5, 4).into()])
                .unwrap();
        let mut food = Some(GridCell::new(0, 0));
        let mut heading = Heading::new(Direction::Right);

        let result = step(&mut snake, &mut food, &mut heading, grid, &mut rng);

        assert_eq!(result, StepResult::Collided(Collision::SelfBody));
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_pending_direction_is_committed() {
        let mut rng = XorShiftRng::seed_from_u64(3);
        let grid = Grid::new(30, 20).unwrap();
        let mut snake = start_snake();
        let mut food = None;
        let mut heading = Heading::new(Direction::Right);
        heading.queue(Direction::Up);

        step(&mut snake, &mut food, &mut heading, grid, &mut rng);

        assert_eq!(heading.current(), Direction::Up);
        assert_eq!(snake.head(), GridCell::new(15, 9));
    }

    #[test]
    fn test_filling_the_board() {
        let mut rng = XorShiftRng::seed_from_u64(3);
        let grid = Grid::new(4, 1).unwrap();
        let mut snake =
            Snake::from_segments([(2, 0).into(), (1, 0).into(), (0, 0).into()]).unwrap();
        let mut food = Some(GridCell::new(3, 0));
        let mut heading = Heading::new(Direction::Right);

        let result = step(&mut snake, &mut food, &mut heading, grid, &mut rng);

        assert_eq!(result, StepResult::BoardFilled);
        assert!(result.ends_game());
        assert_eq!(food, None);
        assert_eq!(snake.len(), 4);
    }
}
