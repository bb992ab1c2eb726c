//! Direction input queue
//!
//! FIFO between the input side and the fixed tick. Any number of directions
//! may be pushed between ticks; the simulation pops at most one per tick, in
//! arrival order, so fast key presses are never dropped or merged.

use std::collections::VecDeque;

use crate::types::Direction;

#[derive(Debug, Clone, Default)]
pub struct DirectionQueue {
    pending: VecDeque<Direction>,
}

impl DirectionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a requested direction. `Direction::None` is not an input and
    /// is discarded.
    pub fn push(&mut self, direction: Direction) {
        if direction == Direction::None {
            return;
        }
        self.pending.push_back(direction);
    }

    /// Oldest queued direction, if any
    pub fn pop(&mut self) -> Option<Direction> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
