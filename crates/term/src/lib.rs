//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the game view draws a
//! [`core::GameSnapshot`] into a plain framebuffer, and the terminal renderer
//! flushes only what changed since the previous frame.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Attrs, Cell, CellStyle, Color, FrameBuffer};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
