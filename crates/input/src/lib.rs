//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and drains all
//! pending key presses once per frame into a fixed-capacity batch.

pub mod events;
pub mod map;

pub use tui_snake_types as types;

pub use events::{drain_actions, push_key, FrameActions, MAX_ACTIONS_PER_FRAME};
pub use map::{handle_key_event, should_quit};
