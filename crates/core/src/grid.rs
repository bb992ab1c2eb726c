//! Grid geometry - playable bounds and border semantics
//!
//! The border occupies row 0, row `Y-1`, column 0 and column `X-1`.
//! Everything strictly inside is the interior, the only place a living
//! snake head may be.

use crate::types::{Cell, MIN_GRID_DIM};

/// Grid dimensions in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    pub width: u16,
    pub height: u16,
}

impl Grid {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// True if `cell` is strictly inside the border
    pub fn is_interior(&self, cell: Cell) -> bool {
        is_interior(cell, self.width, self.height)
    }

    /// Grid center `(X/2, Y/2)` using integer division
    pub fn center(&self) -> Cell {
        Cell::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// True if both dimensions leave a non-empty interior
    pub fn is_playable(&self) -> bool {
        self.width >= MIN_GRID_DIM && self.height >= MIN_GRID_DIM
    }
}

/// `0 < x < X-1 && 0 < y < Y-1`
#[inline]
pub fn is_interior(cell: Cell, width: u16, height: u16) -> bool {
    let w = width as i32;
    let h = height as i32;
    0 < cell.x && cell.x < w - 1 && 0 < cell.y && cell.y < h - 1
}
