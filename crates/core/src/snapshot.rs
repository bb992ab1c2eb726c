use crate::grid::Grid;
use crate::types::{Cell, Direction};

/// Read-only view of a game for renderers.
///
/// `segments` is tail first, head last (same order as the snake).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub segments: Vec<Cell>,
    pub fruit: Cell,
    pub score: u32,
    pub dead: bool,
    pub direction: Direction,
    pub grid: Grid,
    pub ticks: u64,
    pub running: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.segments.clear();
        self.fruit = Cell::new(1, 1);
        self.score = 0;
        self.dead = false;
        self.direction = Direction::None;
        self.grid = Grid::new(0, 0);
        self.ticks = 0;
        self.running = true;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            segments: Vec::with_capacity(64),
            fruit: Cell::new(1, 1),
            score: 0,
            dead: false,
            direction: Direction::None,
            grid: Grid::new(0, 0),
            ticks: 0,
            running: true,
        };
        s.clear();
        s
    }
}
