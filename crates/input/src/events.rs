//! Per-frame event draining.
//!
//! The host loop calls [`drain_actions`] once per frame. It waits up to the
//! frame timeout for the first event, then takes whatever else is already
//! pending without blocking, so a burst of key presses lands in one frame in
//! arrival order.

use std::io;
use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::GameAction;

/// Upper bound on actions collected in a single frame; extra key presses stay
/// in the terminal queue for the next frame.
pub const MAX_ACTIONS_PER_FRAME: usize = 32;

pub type FrameActions = ArrayVec<GameAction, MAX_ACTIONS_PER_FRAME>;

/// Poll the terminal for up to `timeout` and map every pending key press.
pub fn drain_actions(timeout: Duration) -> io::Result<FrameActions> {
    let mut actions = FrameActions::new();

    let mut wait = timeout;
    while !actions.is_full() && event::poll(wait)? {
        if let Event::Key(key) = event::read()? {
            push_key(&mut actions, key);
        }
        // Only the first poll may block.
        wait = Duration::ZERO;
    }

    Ok(actions)
}

/// Map a key event into `actions`, ignoring releases and auto-repeat.
pub fn push_key(actions: &mut FrameActions, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if let Some(action) = handle_key_event(key) {
        let _ = actions.try_push(action);
    }
}
