//! Collapsible two-level navigation sidebar.
//!
//! Split the way the rest of the components are: `model` is the static
//! section/item table, `routes` the path matcher, `controller` the
//! hover/pin state machine, and `sidebar_component` the view. State lives
//! on [`SidebarState`] (owned by `App`); the component itself stays
//! stateless apart from render bookkeeping.

pub mod controller;
pub mod model;
pub mod routes;
mod sidebar_component;

use ratatui::layout::{Position, Rect};

pub use controller::{NavController, SidebarVariant, Viewport};
pub use model::{IconId, NavItem, Section, SectionId};
pub use sidebar_component::SidebarComponent;

/// Width of the icon rail, border included.
pub const RAIL_WIDTH: u16 = 6;
/// Width of the flyout submenu panel.
pub const PANEL_WIDTH: u16 = 26;
/// Total width of the expanded (accordion) sidebar.
pub const EXPANDED_WIDTH: u16 = 30;
/// Terminal widths below this use the narrow (drawer) layout.
pub const NARROW_THRESHOLD: u16 = 80;

/// Sidebar state owned by `App`: the controller plus the geometry recorded
/// at render time for mouse hit-testing.
#[derive(Debug)]
pub struct SidebarState {
    pub controller: NavController,
    /// Keyboard cursor over the rail sections.
    pub cursor: usize,
    /// Whether the sidebar currently has keyboard focus.
    pub focused: bool,
    /// Area the sidebar occupied on the last render.
    pub last_area: Rect,
    /// Overlay submenu area on narrow viewports, outside `last_area`.
    pub panel_area: Option<Rect>,
    /// Per-section rail row areas, in render order.
    pub rail_rows: Vec<(SectionId, Rect)>,
    /// Per-item submenu row areas for the displayed section.
    pub item_rows: Vec<(&'static NavItem, Rect)>,
    /// Area of the collapse control, when rendered.
    pub collapse_row: Option<Rect>,
}

impl SidebarState {
    pub fn new(initial_path: &str) -> Self {
        Self {
            controller: NavController::new(initial_path),
            cursor: 0,
            focused: true,
            last_area: Rect::default(),
            panel_area: None,
            rail_rows: Vec::new(),
            item_rows: Vec::new(),
            collapse_row: None,
        }
    }

    /// Total width the sidebar occupies in the horizontal layout. Layout
    /// consumers re-split on every pin/hover change because of this.
    pub fn total_width(&self) -> u16 {
        match self.controller.variant() {
            SidebarVariant::Drawer => RAIL_WIDTH,
            SidebarVariant::Accordion => EXPANDED_WIDTH,
            SidebarVariant::Flyout => {
                if self.controller.panel_visible() {
                    RAIL_WIDTH + PANEL_WIDTH
                } else {
                    RAIL_WIDTH
                }
            }
        }
    }

    /// Whether a point lies inside the sidebar's bounding region (rail,
    /// inline panel, or overlay panel).
    pub fn region_contains(&self, x: u16, y: u16) -> bool {
        let position = Position { x, y };
        if self.last_area.contains(position) {
            return true;
        }
        self.panel_area.is_some_and(|panel| panel.contains(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_width_tracks_display_state() {
        let mut state = SidebarState::new("/");
        assert!(state.controller.panel_visible());
        assert_eq!(state.total_width(), RAIL_WIDTH + PANEL_WIDTH);

        state.controller.click_collapse();
        assert_eq!(state.total_width(), RAIL_WIDTH);

        state.controller.toggle_rail();
        assert_eq!(state.total_width(), EXPANDED_WIDTH);

        state.controller.set_viewport(Viewport::Narrow);
        assert_eq!(state.total_width(), RAIL_WIDTH);
    }

    #[test]
    fn region_covers_the_overlay_panel() {
        let mut state = SidebarState::new("/");
        state.last_area = Rect::new(0, 0, 6, 20);
        state.panel_area = Some(Rect::new(6, 0, 26, 20));
        assert!(state.region_contains(2, 5));
        assert!(state.region_contains(10, 5));
        assert!(!state.region_contains(40, 5));
    }
}
