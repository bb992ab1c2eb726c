//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the snake simulation: movement, growth, collisions,
//! fruit placement and fixed-tick timing. It has **no dependencies** on
//! terminals, input devices or rendering, making it:
//!
//! - **Deterministic**: Same seed and same inputs produce the same game
//! - **Testable**: Every rule is reachable from plain function calls
//! - **Portable**: Runs in a terminal, a test harness or a headless replay
//!
//! # Module Structure
//!
//! - [`grid`]: Playable bounds and the interior predicate
//! - [`fruit`]: Biased random fruit placement
//! - [`queue`]: FIFO of requested directions, one consumed per tick
//! - [`snake`]: Segment chain state machine (move, grow, die, restart)
//! - [`driver`]: Real-time accumulator producing fixed logical ticks
//! - [`game_state`]: The simulation context tying it all together
//! - [`rng`]: Seeded LCG used as the default random source
//! - [`snapshot`]: Render-facing copy of the state
//!
//! # Game Rules
//!
//! - The snake starts as one segment at the grid center and waits for input
//! - Each tick the head moves one cell; the tail follows unless fruit was eaten
//! - Each fruit is worth 500 points
//! - Leaving the interior or biting the body kills the snake
//! - A dead snake ignores turns until restarted
//!
//! # Example
//!
//! ```
//! use tui_snake_core::GameState;
//! use tui_snake_types::{GameAction, TICK_SECONDS};
//!
//! // Create a game on a 40x20 grid
//! let mut game = GameState::new(40, 20, 12345);
//!
//! // Queue a turn and run one tick's worth of time
//! game.handle_input(GameAction::Right);
//! let running = game.advance_frame(TICK_SECONDS * 1.5, 40, 20);
//!
//! assert!(running);
//! assert_eq!(game.snake().head().x, 21);
//! ```
//!
//! # Timing
//!
//! The game uses a fixed timestep: 15 logical ticks per second by default.
//! Call [`GameState::advance_frame`](game_state::GameState::advance_frame)
//! every frame with the elapsed real time in seconds.

pub mod driver;
pub mod fruit;
pub mod game_state;
pub mod grid;
pub mod queue;
pub mod rng;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use driver::FixedTick;
pub use game_state::GameState;
pub use grid::{is_interior, Grid};
pub use queue::DirectionQueue;
pub use rng::SimpleRng;
pub use snake::{DeathCause, Snake, TickOutcome};
pub use snapshot::GameSnapshot;
