//! Input handling for the terminal player.
//!
//! This module handles keyboard and mouse input events, dispatching
//! them to the appropriate handlers and returning control flow signals.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;

use crossterm::event::Event;
use std::time::Instant;

use crate::config::PlayerSettings;
use crate::player::state::{InputResult, PageState, TerminalHost};
use crate::registry::InstanceRegistry;

/// Handle any input event, dispatching to the appropriate handler.
pub fn handle_event(
    event: Event,
    registry: &mut InstanceRegistry<'_, TerminalHost>,
    page: &mut PageState,
    settings: &PlayerSettings,
    now: Instant,
) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, registry, page, settings, now),
        Event::Mouse(mouse) => handle_mouse_event(mouse, registry, page, now),
        Event::Resize(new_cols, new_rows) => {
            page.handle_resize(new_cols, new_rows);
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus events, paste, etc.
    }
}
