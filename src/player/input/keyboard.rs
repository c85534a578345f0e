//! Keyboard input handling for the terminal player.
//!
//! Maps keys onto the focused controller's transport operations.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

use crate::config::PlayerSettings;
use crate::controller::SeekPhase;
use crate::player::state::{InputResult, PageState, TerminalHost};
use crate::registry::InstanceRegistry;

/// Handle a keyboard event.
///
/// Keys act on the focused instance. While its help overlay is open, any
/// key just closes it.
pub fn handle_key_event(
    key: KeyEvent,
    registry: &mut InstanceRegistry<'_, TerminalHost>,
    page: &mut PageState,
    settings: &PlayerSettings,
    now: Instant,
) -> InputResult {
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    // === Quit (works even with no focusable instance) ===
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return InputResult::Quit
        }
        KeyCode::Tab => {
            page.focus_next(registry.len());
            return InputResult::Continue;
        }
        _ => {}
    }

    let Some(controller) = registry.get_index_mut(page.focus) else {
        return match key.code {
            KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
            _ => InputResult::Continue,
        };
    };

    if controller.is_help_visible() {
        controller.close_help();
        page.needs_render = true;
        return InputResult::Continue;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return InputResult::Quit,

        // === Playback controls ===
        KeyCode::Char(' ') | KeyCode::Char('k') => controller.toggle_play_pause(),
        KeyCode::Left | KeyCode::Char('j') => controller.seek_relative(-settings.seek_step_secs),
        KeyCode::Right | KeyCode::Char('l') => controller.seek_relative(settings.seek_step_secs),
        KeyCode::Char('+') | KeyCode::Char('=') => controller.change_playback_rate(settings.rate_step),
        KeyCode::Char('-') | KeyCode::Char('_') => {
            controller.change_playback_rate(-settings.rate_step)
        }
        KeyCode::Home => controller.seek_to_percent(0.0, SeekPhase::Released, now),
        KeyCode::End => controller.seek_to_percent(100.0, SeekPhase::Released, now),

        // === Presentation ===
        KeyCode::Char('f') => controller.toggle_fullscreen(),
        KeyCode::Char('?') => {
            controller.toggle_help();
            page.needs_render = true;
        }
        _ => {}
    }

    InputResult::Continue
}
