//! Game state module - the simulation context
//!
//! Ties together the snake, the fruit, the direction queue, the fixed-tick
//! driver and the random source. Everything the host loop needs goes through
//! this type: [`GameState::handle_input`] for intents,
//! [`GameState::advance_frame`] once per rendered frame, and
//! [`GameState::snapshot_into`] to read the result.

use log::{debug, info};
use rand::Rng;

use crate::driver::FixedTick;
use crate::fruit;
use crate::grid::Grid;
use crate::queue::DirectionQueue;
use crate::rng::SimpleRng;
use crate::snake::{Snake, TickOutcome};
use crate::snapshot::GameSnapshot;
use crate::types::{Cell, Direction, GameAction};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    snake: Snake,
    fruit: Cell,
    queue: DirectionQueue,
    driver: FixedTick,
    rng: R,
    /// Cleared by `GameAction::Quit`; the host loop stops when this is false.
    running: bool,
    /// Logical ticks executed since construction (restart does not reset it).
    ticks: u64,
}

impl GameState<SimpleRng> {
    /// Start a game on a `width` x `height` grid with a seeded [`SimpleRng`].
    ///
    /// Panics if either dimension is below 3.
    pub fn new(width: u16, height: u16, seed: u32) -> Self {
        Self::with_rng(width, height, SimpleRng::new(seed))
    }

    /// Seed the random source was created with
    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }
}

impl<R: Rng> GameState<R> {
    /// Start a game with an injected random source.
    ///
    /// Places a single idle segment at the grid center and spawns the first
    /// fruit. Panics if either dimension is below 3.
    pub fn with_rng(width: u16, height: u16, mut rng: R) -> Self {
        let grid = Grid::new(width, height);
        assert_playable(grid);

        let snake = Snake::new(grid);
        let fruit = fruit::spawn(grid, &mut rng);
        info!(
            "new game on {}x{}, fruit at ({}, {})",
            width, height, fruit.x, fruit.y
        );

        Self::from_parts(snake, fruit, rng)
    }

    /// Assemble a game from an existing snake and fruit.
    ///
    /// Used for replays and scripted scenarios; no fruit is drawn.
    pub fn from_parts(snake: Snake, fruit: Cell, rng: R) -> Self {
        Self {
            snake,
            fruit,
            queue: DirectionQueue::new(),
            driver: FixedTick::default(),
            rng,
            running: true,
            ticks: 0,
        }
    }

    /// Replace the tick driver (e.g. a different tick rate).
    pub fn with_driver(mut self, driver: FixedTick) -> Self {
        self.driver = driver;
        self
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn fruit(&self) -> Cell {
        self.fruit
    }

    pub fn score(&self) -> u32 {
        self.snake.score()
    }

    pub fn dead(&self) -> bool {
        self.snake.dead()
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn queue(&self) -> &DirectionQueue {
        &self.queue
    }

    /// Apply one player intent.
    ///
    /// - `Quit` stops the host loop.
    /// - `Restart` only acts while dead.
    /// - Turns are queued while alive and dropped while dead.
    pub fn handle_input(&mut self, action: GameAction) {
        match action {
            GameAction::Quit => {
                debug!("quit requested");
                self.running = false;
            }
            GameAction::Restart => {
                if self.snake.dead() {
                    self.restart();
                }
            }
            GameAction::Up | GameAction::Down | GameAction::Left | GameAction::Right => {
                if self.snake.dead() {
                    return;
                }
                if let Some(direction) = action.direction() {
                    self.queue.push(direction);
                }
            }
        }
    }

    /// Advance real time by `delta_time` seconds on a `width` x `height` grid.
    ///
    /// Runs as many fixed ticks as the accumulated time allows (possibly none)
    /// and returns whether the host loop should keep going.
    pub fn advance_frame(&mut self, delta_time: f32, width: u16, height: u16) -> bool {
        let grid = Grid::new(width, height);
        assert_playable(grid);

        self.driver.accumulate(delta_time);
        while self.driver.try_consume() {
            self.step(grid);
        }

        self.running
    }

    /// Run exactly one logical tick: consume at most one queued turn, then move.
    pub fn step(&mut self, grid: Grid) -> TickOutcome {
        if let Some(direction) = self.queue.pop() {
            self.snake.update_direction(direction);
        }

        self.ticks += 1;
        self.snake.tick(grid, &mut self.fruit, &mut self.rng)
    }

    /// Start a new round on the last grid the snake saw.
    ///
    /// Callers normally go through `handle_input(GameAction::Restart)`, which
    /// only restarts a dead snake.
    pub fn restart(&mut self) {
        self.snake.restart();
        self.fruit = fruit::spawn(self.snake.last_known(), &mut self.rng);
        debug!("fruit respawned at ({}, {})", self.fruit.x, self.fruit.y);
    }

    /// Copy the render-facing state into `out`, reusing its allocation.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.segments.clear();
        out.segments.extend(self.snake.segments().iter().copied());
        out.fruit = self.fruit;
        out.score = self.snake.score();
        out.dead = self.snake.dead();
        out.direction = self.snake.direction();
        out.grid = self.snake.last_known();
        out.ticks = self.ticks;
        out.running = self.running;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

fn assert_playable(grid: Grid) {
    assert!(
        grid.is_playable(),
        "grid {}x{} is smaller than 3x3",
        grid.width,
        grid.height
    );
}
