use crate::games::RandomSource;

use super::grid::Grid;
use super::snake::Snake;
use super::types::Position;

/// Picks a free cell for food.
///
/// Random sampling is capped at `max_attempts`; after that the free cells are enumerated
/// and one is drawn from them, so a long snake cannot stall the tick. Returns `None` only
/// when the snake covers the whole grid.
pub fn generate(
    snake: &Snake,
    grid: &Grid,
    rng: &mut impl RandomSource,
    max_attempts: usize,
) -> Option<Position> {
    let cell_count = grid.cell_count();
    if cell_count == 0 || snake.len() >= cell_count {
        return None;
    }

    for _ in 0..max_attempts {
        let pos = grid.position_at(rng.random_index(cell_count));
        if !snake.occupies(&pos) {
            return Some(pos);
        }
    }

    let free: Vec<Position> = grid.cells().filter(|p| !snake.occupies(p)).collect();
    if free.is_empty() {
        return None;
    }
    Some(free[rng.random_index(free.len())])
}
