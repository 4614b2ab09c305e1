use log::warn;
use rand::seq::IteratorRandom;
use rand::Rng;

use crate::error::{GameError, Result};
use crate::grid::{Cell, GridBounds};
use crate::snake::Snake;

/// Random probes tried before falling back to scanning the whole interior.
const MAX_RANDOM_PROBES: usize = 256;

/// Picks a uniformly random interior cell that the snake doesn't cover.
///
/// Random probing is cheap while the snake is short; once it keeps hitting
/// the body the free cells are enumerated and one is chosen among them, so
/// this always terminates. A completely filled interior is reported as
/// `GameError::ExhaustedSpawnSpace`.
pub fn spawn<R: Rng + ?Sized>(snake: &Snake, bounds: &GridBounds, rng: &mut R) -> Result<Cell> {
    if snake.len() >= bounds.interior_size() {
        return Err(GameError::ExhaustedSpawnSpace);
    }

    for _ in 0..MAX_RANDOM_PROBES {
        let cell = Cell::new(
            rng.gen_range(bounds.min_row()..=bounds.max_row()),
            rng.gen_range(bounds.min_col()..=bounds.max_col()),
        );
        if !snake.contains(cell) {
            return Ok(cell);
        }
    }

    warn!(
        "No free cell after {} random probes (snake length {}), scanning the grid",
        MAX_RANDOM_PROBES,
        snake.len()
    );

    bounds
        .interior_cells()
        .filter(|cell| !snake.contains(*cell))
        .choose(rng)
        .ok_or(GameError::ExhaustedSpawnSpace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Fills the interior of `bounds` row by row in a boustrophedon path,
    /// leaving the last `free` cells of the path empty.
    fn snake_filling(bounds: &GridBounds, free: usize) -> Snake {
        let mut path = Vec::new();
        for row in bounds.min_row()..=bounds.max_row() {
            let cols: Vec<u16> = (bounds.min_col()..=bounds.max_col()).collect();
            if row % 2 == 1 {
                path.extend(cols.into_iter().map(|col| Cell::new(row, col)));
            } else {
                path.extend(cols.into_iter().rev().map(|col| Cell::new(row, col)));
            }
        }
        path.truncate(path.len() - free);
        path.reverse();
        Snake::from_cells(path)
    }

    #[test]
    fn never_lands_on_the_snake() {
        let bounds = GridBounds::default();
        let snake = Snake::new(&bounds);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1_000 {
            let cherry = spawn(&snake, &bounds, &mut rng).unwrap();
            assert!(bounds.contains(cherry));
            assert!(!snake.contains(cherry));
        }
    }

    #[test]
    fn same_seed_same_cherry() {
        let bounds = GridBounds::default();
        let snake = Snake::new(&bounds);

        let a = spawn(&snake, &bounds, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = spawn(&snake, &bounds, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn finds_the_last_free_cell() {
        let bounds = GridBounds::new(6, 12).unwrap();
        let snake = snake_filling(&bounds, 1);
        let free: Vec<Cell> = bounds.interior_cells().filter(|c| !snake.contains(*c)).collect();
        assert_eq!(free.len(), 1);

        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            assert_eq!(spawn(&snake, &bounds, &mut rng).unwrap(), free[0]);
        }
    }

    #[test]
    fn full_grid_is_reported() {
        let bounds = GridBounds::new(5, 12).unwrap();
        let snake = snake_filling(&bounds, 0);
        let mut rng = StdRng::seed_from_u64(1);

        assert!(matches!(
            spawn(&snake, &bounds, &mut rng),
            Err(GameError::ExhaustedSpawnSpace)
        ));
    }
}
