//! Mouse input handling for the terminal player.
//!
//! Drag-to-seek on the progress bars: pressing on a bar starts a drag,
//! moving updates the display only, releasing issues the seek.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use std::time::Instant;

use crate::controller::SeekPhase;
use crate::player::render::{bar_contains, column_to_percent};
use crate::player::state::{InputResult, PageState, TerminalHost};
use crate::registry::InstanceRegistry;

/// Handle a mouse event.
pub fn handle_mouse_event(
    mouse: MouseEvent,
    registry: &mut InstanceRegistry<'_, TerminalHost>,
    page: &mut PageState,
    now: Instant,
) -> InputResult {
    let width = page.term_cols;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let Some(index) = PageState::instance_at_progress_row(mouse.row, registry.len()) else {
                return InputResult::Continue;
            };
            if !bar_contains(mouse.column, width) {
                return InputResult::Continue;
            }
            let Some(controller) = registry.get_index_mut(index) else {
                return InputResult::Continue;
            };
            if !controller.is_ready() {
                return InputResult::Continue;
            }

            page.focus = index;
            page.dragging = Some(index);
            page.needs_render = true;
            controller.begin_drag();
            controller.seek_to_percent(
                column_to_percent(mouse.column, width),
                SeekPhase::Dragging,
                now,
            );
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let Some(index) = page.dragging else {
                return InputResult::Continue;
            };
            if let Some(controller) = registry.get_index_mut(index) {
                controller.seek_to_percent(
                    column_to_percent(mouse.column, width),
                    SeekPhase::Dragging,
                    now,
                );
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let Some(index) = page.dragging.take() else {
                return InputResult::Continue;
            };
            if let Some(controller) = registry.get_index_mut(index) {
                controller.seek_to_percent(
                    column_to_percent(mouse.column, width),
                    SeekPhase::Released,
                    now,
                );
            }
        }
        _ => {}
    }

    InputResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{ProviderBootstrap, SimulatedFactory};
    use crate::segment::PollSettings;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn setup(bootstrap: &ProviderBootstrap) -> InstanceRegistry<'_, TerminalHost> {
        let mut registry = InstanceRegistry::new(
            bootstrap,
            Box::new(SimulatedFactory::new(300.0)),
            PollSettings::default(),
        );
        registry
            .register("one", 30.0, Some(90.0), TerminalHost::default())
            .unwrap();
        registry
            .register("two", 0.0, Some(100.0), TerminalHost::default())
            .unwrap();
        registry.on_provider_ready();
        registry.pump_all(Instant::now());
        registry
    }

    #[test]
    fn drag_on_second_bar_focuses_and_seeks_on_release() {
        let bootstrap = ProviderBootstrap::new();
        let mut registry = setup(&bootstrap);
        let mut page = PageState::new("t", 80, 24);
        let row = PageState::progress_row(1);
        let now = Instant::now();

        handle_mouse_event(
            mouse(MouseEventKind::Down(MouseButton::Left), 1, row),
            &mut registry,
            &mut page,
            now,
        );
        assert_eq!(page.focus, 1);
        assert_eq!(page.dragging, Some(1));

        // Last cell of the 62-column bar
        handle_mouse_event(
            mouse(MouseEventKind::Drag(MouseButton::Left), 62, row),
            &mut registry,
            &mut page,
            now,
        );
        {
            let second = registry.get_index_mut(1).unwrap();
            assert_eq!(second.ui().view.progress, 100.0);
            assert!(second.session().dragging);
        }

        handle_mouse_event(
            mouse(MouseEventKind::Up(MouseButton::Left), 62, row),
            &mut registry,
            &mut page,
            now,
        );
        assert_eq!(page.dragging, None);
        let second = registry.get_index_mut(1).unwrap();
        assert!(!second.session().dragging);
        assert_eq!(second.ui().view.current_time, "1:40");
    }

    #[test]
    fn press_outside_bars_is_ignored() {
        let bootstrap = ProviderBootstrap::new();
        let mut registry = setup(&bootstrap);
        let mut page = PageState::new("t", 80, 24);

        // Status row of the first instance
        handle_mouse_event(
            mouse(MouseEventKind::Down(MouseButton::Left), 5, 4),
            &mut registry,
            &mut page,
            Instant::now(),
        );
        // Time labels to the right of the bar
        handle_mouse_event(
            mouse(MouseEventKind::Down(MouseButton::Left), 70, PageState::progress_row(0)),
            &mut registry,
            &mut page,
            Instant::now(),
        );
        assert_eq!(page.dragging, None);
    }

    #[test]
    fn drag_without_press_does_nothing() {
        let bootstrap = ProviderBootstrap::new();
        let mut registry = setup(&bootstrap);
        let mut page = PageState::new("t", 80, 24);
        handle_mouse_event(
            mouse(MouseEventKind::Drag(MouseButton::Left), 30, PageState::progress_row(0)),
            &mut registry,
            &mut page,
            Instant::now(),
        );
        assert!(!registry.get_index_mut(0).unwrap().session().dragging);
    }
}
