//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation core, terminal rendering, input mapping).
//!
//! # Coordinates
//!
//! The playfield is the whole terminal. `x` grows to the right and `y` grows
//! downward, so `Direction::Up` decrements `y`. The smallest usable grid is
//! 3x3 (`MIN_GRID_DIM`); anything smaller has no interior.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_RATE_HZ` | 15 | Logical simulation ticks per second |
//! | `TICK_SECONDS` | 1/15 | Fixed timestep in seconds |
//! | `FRAME_MS` | 16 | Host loop frame/poll interval |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Cell, Direction, GameAction, FRUIT_REWARD};
//!
//! // Directions know their reverse
//! assert_eq!(Direction::Up.reverse(), Direction::Down);
//!
//! // Cells step one unit at a time
//! assert_eq!(Cell::new(5, 5).step(Direction::Right), Cell::new(6, 5));
//!
//! // Only turns carry a direction
//! assert_eq!(GameAction::Left.direction(), Some(Direction::Left));
//! assert_eq!(GameAction::Restart.direction(), None);
//!
//! assert_eq!(FRUIT_REWARD, 500);
//! ```

/// Logical simulation rate (15 ticks per second)
pub const TICK_RATE_HZ: u32 = 15;

/// Fixed timestep in seconds (1/15 s)
pub const TICK_SECONDS: f32 = 1.0 / TICK_RATE_HZ as f32;

/// Host loop frame interval in milliseconds (~60 FPS polling)
pub const FRAME_MS: u64 = 16;

/// Points awarded per fruit eaten
pub const FRUIT_REWARD: u32 = 500;

/// Smallest grid dimension that still has a non-empty interior
pub const MIN_GRID_DIM: u16 = 3;


/// A cell coordinate on the grid
///
/// Equality is component-wise. Coordinates are signed so a step off the
/// top/left edge is representable; such a cell is never interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one unit away in `direction`
    ///
    /// `Direction::None` returns the cell unchanged.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Movement direction of the snake
///
/// Screen coordinates: y grows downward, so `Up` decrements y.
/// `None` means the snake has not started moving yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    None,
}

impl Direction {
    /// Unit offset `(dx, dy)` for this direction
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::None => (0, 0),
        }
    }

    /// The opposite direction (`None` is its own reverse)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Left.reverse(), Direction::Right);
    /// assert_eq!(Direction::None.reverse(), Direction::None);
    /// ```
    pub fn reverse(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::None => Direction::None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::None => "none",
        }
    }
}

/// Abstract player intents mapped from raw key events
///
/// The shell maps keys to these; the simulation core never sees raw keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Queue an upward turn
    Up,
    /// Queue a downward turn
    Down,
    /// Queue a left turn
    Left,
    /// Queue a right turn
    Right,
    /// Start a new round (only while dead)
    Restart,
    /// Stop the host loop
    Quit,
}

impl GameAction {
    /// The direction this action requests, if it is a turn
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::Up => Some(Direction::Up),
            GameAction::Down => Some(Direction::Down),
            GameAction::Left => Some(Direction::Left),
            GameAction::Right => Some(Direction::Right),
            GameAction::Restart | GameAction::Quit => None,
        }
    }
}
