//! Hover/pin state machine for the navigation sidebar.
//!
//! The controller is the sole owner of the sidebar's mutable state. Views
//! call the named transition functions below and read the derived display
//! state back; they never touch fields directly, which keeps the machine
//! testable without a rendered UI.
//!
//! Hover shadows the pin for display only: `displayed()` prefers the
//! hovered section while the pointer is inside the rail, and reveals the
//! pinned section again once it leaves. A click always commits a pin and
//! clears hover, so the two signals cannot disagree after an activation.

use super::model::{self, NavItem, SectionId};
use super::routes::{self, DEFAULT_SECTION};

/// Viewport class fed by terminal resize events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Viewport {
    #[default]
    Full,
    Narrow,
}

/// Which of the sidebar layouts is currently in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarVariant {
    /// Icon rail with a flyout submenu beside it.
    Flyout,
    /// Expanded rail with labels; the displayed section expands inline.
    Accordion,
    /// Narrow viewport: rail only, submenu overlays the content area.
    Drawer,
}

/// The navigation state machine.
#[derive(Debug)]
pub struct NavController {
    pinned: Option<SectionId>,
    hovered: Option<SectionId>,
    rail_pinned: bool,
    viewport: Viewport,
}

impl NavController {
    /// Creates the controller for a mount at `initial_path`: the pin starts
    /// on the section owning the active route, or the default section when
    /// nothing matches.
    pub fn new(initial_path: &str) -> Self {
        Self {
            pinned: Some(routes::matched_section(initial_path).unwrap_or(DEFAULT_SECTION)),
            hovered: None,
            rail_pinned: false,
            viewport: Viewport::Full,
        }
    }

    pub fn pinned(&self) -> Option<SectionId> {
        self.pinned
    }

    pub fn hovered(&self) -> Option<SectionId> {
        self.hovered
    }

    /// The section whose items are currently shown. Hover always takes
    /// priority over the pin while present.
    pub fn displayed(&self) -> Option<SectionId> {
        self.hovered.or(self.pinned)
    }

    pub fn panel_visible(&self) -> bool {
        self.displayed().is_some()
    }

    pub fn rail_pinned(&self) -> bool {
        self.rail_pinned
    }

    pub fn is_narrow(&self) -> bool {
        self.viewport == Viewport::Narrow
    }

    pub fn variant(&self) -> SidebarVariant {
        if self.is_narrow() {
            SidebarVariant::Drawer
        } else if self.rail_pinned {
            SidebarVariant::Accordion
        } else {
            SidebarVariant::Flyout
        }
    }

    /// Pointer moved onto a section's rail entry. No-op on narrow
    /// viewports, where touch emulation would otherwise storm hover events.
    pub fn pointer_enter_icon(&mut self, section: SectionId) {
        if self.is_narrow() {
            return;
        }
        self.hovered = Some(section);
    }

    /// Pointer left the sidebar's bounding region.
    pub fn pointer_leave_region(&mut self) {
        if self.is_narrow() {
            return;
        }
        self.hovered = None;
    }

    /// Section icon clicked: commit the pin and clear hover. In the flyout
    /// variant this also requests navigation to the section's first item;
    /// the returned path is the caller's navigation intent.
    pub fn click_icon(&mut self, section: SectionId) -> Option<&'static str> {
        self.pinned = Some(section);
        self.hovered = None;
        match self.variant() {
            SidebarVariant::Flyout => Some(model::section(section).first_item().url),
            SidebarVariant::Accordion | SidebarVariant::Drawer => None,
        }
    }

    /// Collapse control activated: close the panel entirely.
    pub fn click_collapse(&mut self) {
        self.pinned = None;
        self.hovered = None;
    }

    /// Submenu item selected: the pin follows the selection and the item's
    /// url is returned as the navigation intent.
    pub fn select_item(&mut self, item: &'static NavItem) -> &'static str {
        if let Some(section) = model::section_of(item.url) {
            self.pinned = Some(section.id);
        }
        self.hovered = None;
        item.url
    }

    /// Route changed outside the sidebar (detail navigation, not-found).
    /// Only applies while the user has no explicit pin; an unmatched path
    /// leaves the pin untouched.
    pub fn route_changed(&mut self, path: &str) {
        if self.pinned.is_none() {
            self.pinned = routes::matched_section(path).or(self.pinned);
        }
    }

    /// Global rail collapse toggle (accordion variant). Owns a rail-level
    /// flag; the per-section pin is never touched by it.
    pub fn toggle_rail(&mut self) {
        if self.is_narrow() {
            return;
        }
        self.rail_pinned = !self.rail_pinned;
    }

    /// Viewport class changed. Entering the narrow class drops any hover
    /// preview, since hover transitions are disabled there.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if self.is_narrow() {
            self.hovered = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller_at(path: &str) -> NavController {
        NavController::new(path)
    }

    #[test]
    fn initial_pin_follows_the_active_route() {
        // Scenario A
        let controller = controller_at("/dashboard/risk");
        assert_eq!(controller.pinned(), Some(SectionId::Dashboards));
        assert_eq!(controller.displayed(), Some(SectionId::Dashboards));
    }

    #[test]
    fn initial_pin_falls_back_to_the_default_section() {
        let controller = controller_at("/incident/INC-0001");
        assert_eq!(controller.pinned(), Some(DEFAULT_SECTION));
    }

    #[test]
    fn click_icon_pins_and_navigates_to_the_first_item() {
        // Scenario B
        let mut controller = controller_at("/");
        let target = controller.click_icon(SectionId::Settings);
        assert_eq!(controller.pinned(), Some(SectionId::Settings));
        assert_eq!(controller.hovered(), None);
        assert_eq!(target, Some("/settings"));
    }

    #[test]
    fn hover_shadows_the_pin_without_clearing_it() {
        // Scenario C
        let mut controller = controller_at("/");
        controller.click_icon(SectionId::Issues);
        controller.pointer_enter_icon(SectionId::Prevent);
        assert_eq!(controller.displayed(), Some(SectionId::Prevent));
        assert_eq!(controller.pinned(), Some(SectionId::Issues));
        controller.pointer_leave_region();
        assert_eq!(controller.displayed(), Some(SectionId::Issues));
    }

    #[test]
    fn select_item_pins_the_owning_section() {
        // Scenario D
        let mut controller = controller_at("/");
        let item = model::item_of("/guardrails").expect("guardrails item");
        let target = controller.select_item(item);
        assert_eq!(controller.pinned(), Some(SectionId::Prevent));
        assert_eq!(target, "/guardrails");
    }

    #[test]
    fn collapse_clears_everything() {
        // Scenario E
        let mut controller = controller_at("/traces");
        controller.pointer_enter_icon(SectionId::Settings);
        controller.click_collapse();
        assert_eq!(controller.pinned(), None);
        assert_eq!(controller.hovered(), None);
        assert!(!controller.panel_visible());
    }

    #[test]
    fn hover_is_idempotent() {
        let mut controller = controller_at("/");
        controller.pointer_enter_icon(SectionId::Explore);
        let once = (controller.pinned(), controller.hovered(), controller.displayed());
        controller.pointer_enter_icon(SectionId::Explore);
        assert_eq!(once, (controller.pinned(), controller.hovered(), controller.displayed()));
    }

    #[test]
    fn pin_survives_hover_exit_after_click() {
        let mut controller = controller_at("/");
        controller.click_icon(SectionId::Insights);
        controller.pointer_leave_region();
        assert_eq!(controller.displayed(), Some(SectionId::Insights));
    }

    #[test]
    fn displayed_prefers_hover_whenever_present() {
        let mut controller = controller_at("/policies");
        for section in SectionId::ALL {
            controller.pointer_enter_icon(section);
            assert_eq!(controller.displayed(), Some(section));
        }
        controller.pointer_leave_region();
        assert_eq!(controller.displayed(), controller.pinned());
    }

    #[test]
    fn narrow_viewport_disables_hover_entirely() {
        let mut controller = controller_at("/");
        controller.set_viewport(Viewport::Narrow);
        controller.pointer_enter_icon(SectionId::Prevent);
        assert_eq!(controller.hovered(), None);
        controller.pointer_enter_icon(SectionId::Explore);
        assert_eq!(controller.hovered(), None);
    }

    #[test]
    fn narrow_activation_is_exclusive_and_does_not_navigate() {
        let mut controller = controller_at("/");
        controller.set_viewport(Viewport::Narrow);
        assert_eq!(controller.click_icon(SectionId::Explore), None);
        assert_eq!(controller.displayed(), Some(SectionId::Explore));
        assert_eq!(controller.click_icon(SectionId::Prevent), None);
        assert_eq!(controller.displayed(), Some(SectionId::Prevent));
    }

    #[test]
    fn entering_narrow_drops_a_live_hover() {
        let mut controller = controller_at("/");
        controller.pointer_enter_icon(SectionId::Settings);
        controller.set_viewport(Viewport::Narrow);
        assert_eq!(controller.hovered(), None);
    }

    #[test]
    fn route_changes_only_apply_without_a_pin() {
        let mut controller = controller_at("/");
        controller.click_collapse();
        controller.route_changed("/dashboard/reliability");
        assert_eq!(controller.pinned(), Some(SectionId::Dashboards));

        // an explicit pin is never stomped by navigation
        controller.click_icon(SectionId::Settings);
        controller.route_changed("/policies");
        assert_eq!(controller.pinned(), Some(SectionId::Settings));
    }

    #[test]
    fn unmatched_routes_leave_the_pin_alone() {
        let mut controller = controller_at("/");
        controller.click_collapse();
        controller.route_changed("/incident/INC-0002");
        assert_eq!(controller.pinned(), None);
    }

    #[test]
    fn rail_toggle_is_independent_of_the_section_pin() {
        let mut controller = controller_at("/traces");
        let pinned_before = controller.pinned();
        controller.toggle_rail();
        assert!(controller.rail_pinned());
        assert_eq!(controller.pinned(), pinned_before);
        assert_eq!(controller.variant(), SidebarVariant::Accordion);
        controller.toggle_rail();
        assert!(!controller.rail_pinned());
        assert_eq!(controller.variant(), SidebarVariant::Flyout);
    }

    #[test]
    fn accordion_clicks_do_not_navigate() {
        let mut controller = controller_at("/");
        controller.toggle_rail();
        assert_eq!(controller.click_icon(SectionId::Settings), None);
        assert_eq!(controller.pinned(), Some(SectionId::Settings));
    }

    #[test]
    fn click_supersedes_a_simultaneous_leave() {
        // a leave delivered immediately before a click on the same target
        // must not leave the panel closed or flickered open elsewhere
        let mut controller = controller_at("/");
        controller.pointer_enter_icon(SectionId::Prevent);
        controller.pointer_leave_region();
        let target = controller.click_icon(SectionId::Prevent);
        assert_eq!(controller.displayed(), Some(SectionId::Prevent));
        assert_eq!(target, Some("/policies"));
    }

    #[test]
    fn displayed_always_references_an_existing_section() {
        let mut controller = controller_at("/nope");
        if let Some(id) = controller.displayed() {
            assert!(SectionId::ALL.contains(&id));
        }
        controller.pointer_enter_icon(SectionId::Explore);
        assert!(SectionId::ALL.contains(&controller.displayed().expect("hover present")));
    }
}
