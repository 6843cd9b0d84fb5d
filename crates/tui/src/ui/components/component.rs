//! Component system for the Samix TUI.
//!
//! Components are self-contained UI elements that handle their own events
//! and rendering while integrating with the main view through a consistent
//! interface. They report side effects back to the runtime via `Effect`s
//! instead of modifying global state directly.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::{Position, Rect};
use ratatui::Frame;
use samix_types::{Effect, Msg};

use crate::app::App;

/// A trait representing a UI component with its own behavior.
///
/// Lifecycle: components receive input through `handle_key_events` /
/// `handle_mouse_events` while focused, synchronize state in `update`, and
/// draw themselves in `render`. Rendering must be side-effect free apart
/// from frame drawing and hit-test bookkeeping; state changes belong in
/// the event handlers.
pub(crate) trait Component {
    /// Handle key events when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events routed to this component.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Update internal state based on an application message.
    fn update(&mut self, _app: &mut App, _msg: &Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);
}

/// Maps a mouse position to the index of the row rectangle containing it,
/// provided the position also lies inside the recorded container area.
pub(crate) fn find_target_index_by_mouse_position(container: &Rect, rows: &[Rect], x: u16, y: u16) -> Option<usize> {
    let position = Position { x, y };
    if !container.contains(position) {
        return None;
    }
    rows.iter().position(|row| row.contains(position))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_requires_the_container() {
        let container = Rect::new(0, 0, 10, 10);
        let rows = [Rect::new(0, 2, 10, 1), Rect::new(0, 3, 10, 1)];
        assert_eq!(find_target_index_by_mouse_position(&container, &rows, 4, 3), Some(1));
        assert_eq!(find_target_index_by_mouse_position(&container, &rows, 4, 5), None);
        // outside the container even though a row rect would match
        let far_rows = [Rect::new(20, 2, 10, 1)];
        assert_eq!(find_target_index_by_mouse_position(&container, &far_rows, 22, 2), None);
    }
}
