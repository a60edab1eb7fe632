use rand::{seq::IteratorRandom, Rng};
use tracing::debug;

use super::grid::{Grid, GridCell};
use super::snake::Snake;

/// Picks a uniformly random grid cell the snake doesn't occupy. `None` means
/// the snake covers the whole grid.
pub fn place_food<R: Rng + ?Sized>(grid: Grid, snake: &Snake, rng: &mut R) -> Option<GridCell> {
    let mut occupied = vec![false; grid.size()];
    for index in snake.segments().filter_map(|&cell| grid.cell_to_index(cell)) {
        occupied[index] = true;
    }
    let food = grid
        .cells()
        .enumerate()
        .filter(|&(index, _)| !occupied[index])
        .map(|(_, cell)| cell)
        .choose(rng);
    debug!(?food, free = occupied.iter().filter(|taken| !**taken).count(), "placed food");
    food
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashSet;
    use rand_xorshift::XorShiftRng;

    #[test]
    fn test_food_never_on_snake() {
        let mut rng = XorShiftRng::seed_from_u64(7);
        let grid = Grid::new(6, 4).unwrap();
        let snake = Snake::centered(grid);
        for _ in 0..500 {
            let food = place_food(grid, &snake, &mut rng).unwrap();
            assert!(grid.contains(food));
            assert!(!snake.contains(&food));
        }
    }

    #[test]
    fn test_last_free_cell_is_found() {
        let mut rng = XorShiftRng::seed_from_u64(1);
        let grid = Grid::new(4, 1).unwrap();
        let snake = Snake::from_segments([(2, 0).into(), (1, 0).into(), (0, 0).into()]).unwrap();
        assert_eq!(place_food(grid, &snake, &mut rng), Some(GridCell::new(3, 0)));
    }

    #[test]
    fn test_full_grid_has_no_food() {
        let mut rng = XorShiftRng::seed_from_u64(1);
        let grid = Grid::new(4, 1).unwrap();
        let snake = Snake::from_segments((0..4).rev().map(|col| GridCell::new(col, 0))).unwrap();
        assert_eq!(place_food(grid, &snake, &mut rng), None);
    }

    #[test]
    fn test_every_free_cell_is_reachable() {
        let mut rng = XorShiftRng::seed_from_u64(42);
        let grid = Grid::new(5, 2).unwrap();
        let snake = Snake::centered(grid);
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            seen.extend(place_food(grid, &snake, &mut rng));
        }
        assert_eq!(seen.len(), grid.size() - snake.len());
    }
}
