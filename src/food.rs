use rand::Rng;

use crate::config::{FOOD_SAMPLE_ATTEMPTS, GridSize};
use crate::snake::{Position, Snake};

/// Picks a food cell uniformly among cells not occupied by the snake.
///
/// Rejection sampling first: draw uniform candidates and discard occupied
/// ones. On a dense board the hit rate drops, so after a fixed number of
/// attempts the placer switches to enumerating the free cells and sampling
/// from those, which terminates whenever a free cell exists at all.
///
/// Returns `None` exactly when the snake occupies every cell of the grid.
#[must_use]
pub fn place_food<R: Rng + ?Sized>(rng: &mut R, grid: GridSize, snake: &Snake) -> Option<Position> {
    if snake.len() >= grid.total_cells() {
        return None;
    }

    for _ in 0..FOOD_SAMPLE_ATTEMPTS {
        let candidate = Position {
            x: rng.gen_range(0..i32::from(grid.width)),
            y: rng.gen_range(0..i32::from(grid.height)),
        };

        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    let free: Vec<Position> = free_cells(grid, snake);
    if free.is_empty() {
        return None;
    }

    Some(free[rng.gen_range(0..free.len())])
}

fn free_cells(grid: GridSize, snake: &Snake) -> Vec<Position> {
    let mut cells = Vec::new();

    for y in 0..i32::from(grid.height) {
        for x in 0..i32::from(grid.width) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                cells.push(position);
            }
        }
    }

    cells
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::GridSize;
    use crate::snake::{Position, Snake};

    use super::place_food;

    #[test]
    fn food_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_segments(vec![
            Position { x: 0, y: 0 },
            Position { x: 1, y: 0 },
            Position { x: 2, y: 0 },
        ]);
        let grid = GridSize {
            width: 8,
            height: 6,
        };

        for _ in 0..100 {
            let food = place_food(&mut rng, grid, &snake).expect("board has free cells");
            assert!(!snake.occupies(food));
        }
    }

    #[test]
    fn dense_board_still_finds_the_last_free_cell() {
        // 3x3 grid with all cells but (2,2) occupied: every sampling round
        // must end up on the single free cell via the fallback scan.
        let mut rng = StdRng::seed_from_u64(11);
        let snake = Snake::from_segments(vec![
            Position { x: 0, y: 0 },
            Position { x: 1, y: 0 },
            Position { x: 2, y: 0 },
            Position { x: 2, y: 1 },
            Position { x: 1, y: 1 },
            Position { x: 0, y: 1 },
            Position { x: 0, y: 2 },
            Position { x: 1, y: 2 },
        ]);
        let grid = GridSize {
            width: 3,
            height: 3,
        };

        for _ in 0..20 {
            assert_eq!(
                place_food(&mut rng, grid, &snake),
                Some(Position { x: 2, y: 2 })
            );
        }
    }

    #[test]
    fn full_board_yields_no_food() {
        let mut rng = StdRng::seed_from_u64(3);
        let snake = Snake::from_segments(vec![
            Position { x: 0, y: 0 },
            Position { x: 1, y: 0 },
            Position { x: 1, y: 1 },
            Position { x: 0, y: 1 },
        ]);
        let grid = GridSize {
            width: 2,
            height: 2,
        };

        assert_eq!(place_food(&mut rng, grid, &snake), None);
    }
}
