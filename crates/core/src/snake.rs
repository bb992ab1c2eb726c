//! Snake state machine - segment chain, movement, growth and death
//!
//! The chain is stored tail-first: the front of the deque is the oldest
//! segment and the back is the head. A move pushes a new head and pops the
//! tail; eating skips the pop.
//!
//! States:
//!
//! - **Idle**: direction is `None`, `tick` does nothing
//! - **Moving**: direction set and alive
//! - **Dead**: direction forced back to `None`, input ignored until `restart`

use std::collections::VecDeque;

use log::{debug, info, trace};
use rand::Rng;

use crate::fruit::spawn as spawn_fruit;
use crate::grid::Grid;
use crate::types::{Cell, Direction, FRUIT_REWARD};

/// Why the snake died
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    /// Head left the interior
    Wall,
    /// Head ran into the body
    SelfCollision,
}

/// Result of a single [`Snake::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not moving (no direction yet, or dead)
    Idle,
    /// Moved one cell, length unchanged
    Moved,
    /// Moved onto the fruit and grew by one
    Ate,
    /// Moved and died
    Died(DeathCause),
}

#[derive(Debug, Clone)]
pub struct Snake {
    segments: VecDeque<Cell>,
    direction: Direction,
    score: u32,
    dead: bool,
    /// Grid seen by the most recent tick; `restart` recenters on it.
    last_known: Grid,
}

impl Snake {
    /// A single-segment snake at the center of `grid`, not yet moving
    pub fn new(grid: Grid) -> Self {
        let mut segments = VecDeque::with_capacity(64);
        segments.push_back(grid.center());
        Self {
            segments,
            direction: Direction::None,
            score: 0,
            dead: false,
            last_known: grid,
        }
    }

    /// Build a snake from explicit segments (tail first, head last).
    ///
    /// Panics if `segments` is empty.
    pub fn from_segments(
        segments: impl IntoIterator<Item = Cell>,
        direction: Direction,
        grid: Grid,
    ) -> Self {
        let segments: VecDeque<Cell> = segments.into_iter().collect();
        assert!(!segments.is_empty(), "snake needs at least one segment");
        Self {
            segments,
            direction,
            score: 0,
            dead: false,
            last_known: grid,
        }
    }

    pub fn head(&self) -> Cell {
        *self.segments.back().expect("snake is never empty")
    }

    pub fn tail(&self) -> Cell {
        *self.segments.front().expect("snake is never empty")
    }

    /// Segments tail first, head last
    pub fn segments(&self) -> &VecDeque<Cell> {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn dead(&self) -> bool {
        self.dead
    }

    pub fn last_known(&self) -> Grid {
        self.last_known
    }

    /// Apply a requested turn.
    ///
    /// Ignored while dead, for `Direction::None`, and for the exact reverse of
    /// the current heading (which would fold the head back into the neck).
    pub fn update_direction(&mut self, requested: Direction) {
        if self.dead || requested == Direction::None {
            return;
        }
        if requested == self.direction.reverse() {
            trace!(
                "rejected reverse turn {} while heading {}",
                requested.as_str(),
                self.direction.as_str()
            );
            return;
        }
        self.direction = requested;
    }

    /// Advance one cell in the current direction.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        grid: Grid,
        fruit: &mut Cell,
        rng: &mut R,
    ) -> TickOutcome {
        self.last_known = grid;

        if self.direction == Direction::None {
            return TickOutcome::Idle;
        }

        let new_head = self.head().step(self.direction);
        self.segments.push_back(new_head);

        // The out-of-bounds head stays in the chain; only a restart clears it.
        if !grid.is_interior(new_head) {
            self.die(DeathCause::Wall);
            return TickOutcome::Died(DeathCause::Wall);
        }

        let ate = new_head == *fruit;
        if ate {
            *fruit = spawn_fruit(grid, rng);
            self.score += FRUIT_REWARD;
            debug!(
                "ate fruit at ({}, {}), length {}, next fruit at ({}, {})",
                new_head.x,
                new_head.y,
                self.segments.len(),
                fruit.x,
                fruit.y
            );
        } else {
            self.segments.pop_front();
        }

        let body = self.segments.len() - 1;
        if self.segments.iter().take(body).rev().any(|&c| c == new_head) {
            self.die(DeathCause::SelfCollision);
            return TickOutcome::Died(DeathCause::SelfCollision);
        }

        if ate {
            TickOutcome::Ate
        } else {
            TickOutcome::Moved
        }
    }

    /// Reset to a single segment at the center of the last known grid.
    ///
    /// Direction stays `None` until the next turn request. The caller owns the
    /// fruit and respawns it.
    pub fn restart(&mut self) {
        self.segments.clear();
        self.segments.push_back(self.last_known.center());
        self.score = 0;
        self.dead = false;
        self.direction = Direction::None;
        info!(
            "restart at ({}, {}) on {}x{}",
            self.head().x,
            self.head().y,
            self.last_known.width,
            self.last_known.height
        );
    }

    fn die(&mut self, cause: DeathCause) {
        self.dead = true;
        self.direction = Direction::None;
        info!(
            "died ({:?}) at ({}, {}) with score {} and length {}",
            cause,
            self.head().x,
            self.head().y,
            self.score,
            self.segments.len()
        );
    }
}
