//! Fruit spawner
//!
//! Draws `x` from `[0, X-1)` and `y` from `[0, Y-1)`, then folds a zero on
//! either axis onto 1 so the fruit never lands on the top or left border.
//! Cells on column 1 and row 1 therefore come up roughly twice as often as the
//! rest of the interior.
//!
//! The draw does not look at the snake: a fruit may appear under the body.

use rand::Rng;

use crate::grid::Grid;
use crate::types::Cell;

/// Pick the next fruit cell for `grid`.
///
/// Requires `grid.width >= 2 && grid.height >= 2` (the draw range would be
/// empty otherwise); playable grids always satisfy this.
pub fn spawn<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> Cell {
    assert!(
        grid.width >= 2 && grid.height >= 2,
        "fruit spawn on degenerate grid {}x{}",
        grid.width,
        grid.height
    );

    let mut x = rng.random_range(0..grid.width as i32 - 1);
    let mut y = rng.random_range(0..grid.height as i32 - 1);

    if x == 0 {
        x = 1;
    }
    if y == 0 {
        y = 1;
    }

    Cell::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;
    use rand::RngCore;

    /// Always yields zero, so every range draw returns its lower bound.
    struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }
        fn next_u64(&mut self) -> u64 {
            0
        }
        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    #[test]
    fn zero_draw_is_folded_onto_one() {
        let cell = spawn(Grid::new(10, 10), &mut ZeroRng);
        assert_eq!(cell, Cell::new(1, 1));
    }

    #[test]
    fn spawned_cells_stay_off_the_border() {
        let grid = Grid::new(12, 7);
        let mut rng = SimpleRng::new(42);
        for _ in 0..5000 {
            let cell = spawn(grid, &mut rng);
            assert!(grid.is_interior(cell), "{cell:?} not interior");
        }
    }

    #[test]
    fn every_interior_cell_is_reachable() {
        let grid = Grid::new(6, 5);
        let mut rng = SimpleRng::new(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..5000 {
            seen.insert(spawn(grid, &mut rng));
        }
        // interior of 6x5 is 4x3
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn first_row_and_column_are_favoured() {
        let grid = Grid::new(10, 10);
        let mut rng = SimpleRng::new(2024);
        let mut col1 = 0u32;
        let mut col5 = 0u32;
        for _ in 0..90_000 {
            match spawn(grid, &mut rng).x {
                1 => col1 += 1,
                5 => col5 += 1,
                _ => {}
            }
        }
        // expected roughly 2:1
        assert!(col1 > col5 * 3 / 2, "col1={col1} col5={col5}");
    }

    #[test]
    fn smallest_grid_always_yields_center() {
        let grid = Grid::new(3, 3);
        let mut rng = SimpleRng::new(3);
        for _ in 0..100 {
            assert_eq!(spawn(grid, &mut rng), Cell::new(1, 1));
        }
    }

    proptest::proptest! {
        #[test]
        fn spawn_is_always_interior(w in 3u16..300, h in 3u16..300, seed in proptest::num::u32::ANY) {
            let grid = Grid::new(w, h);
            let mut rng = SimpleRng::new(seed);
            let cell = spawn(grid, &mut rng);
            proptest::prop_assert!(grid.is_interior(cell));
        }
    }
}
