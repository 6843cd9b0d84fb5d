//! Application state and logic for the Samix TUI.
//!
//! `App` is the central state container: the current route, shared
//! context (data store, theme, preferences), the sidebar state machine,
//! and per-page UI state. Components mutate it through their event
//! handlers and read it back during rendering.

use ratatui::widgets::TableState;
use samix_data::DataStore;
use samix_types::{Effect, Incident, IncidentStatus, Msg, Page, Severity};
use samix_util::UserPreferences;
use tracing::{debug, warn};

use crate::ui::components::sidebar::{NARROW_THRESHOLD, SidebarState, Viewport};
use crate::ui::theme::{self, Theme};

/// Cross-cutting shared context owned by the App.
///
/// Holds runtime-wide objects like the mock data store, the active theme,
/// and user preferences. This avoids threading multiple references through
/// components and helps reduce borrow complexity.
pub struct SharedCtx {
    /// Mock data collections backing every page.
    pub store: DataStore,
    /// Active theme.
    pub theme: Box<dyn Theme>,
    /// Canonical id of the active theme, for cycling and persistence.
    pub theme_id: &'static str,
    /// Persisted user preferences (preferred theme).
    pub prefs: UserPreferences,
    /// Global debug flag (from env).
    pub debug_enabled: bool,
}

impl SharedCtx {
    pub fn new(store: DataStore, prefs: UserPreferences) -> Self {
        let debug_enabled = std::env::var("DEBUG")
            .map(|v| !v.is_empty() && v != "0" && v.to_lowercase() != "false")
            .unwrap_or(false);
        let preferred = prefs.preferred_theme();
        let loaded = theme::load(preferred.as_deref());
        Self {
            store,
            theme: loaded.theme,
            theme_id: loaded.definition.id,
            prefs,
            debug_enabled,
        }
    }
}

/// UI state for the issues feed page.
#[derive(Debug, Default)]
pub struct FeedState {
    pub selected: usize,
    pub severity_filter: Option<Severity>,
    pub status_filter: Option<IncidentStatus>,
    pub search: String,
    /// Whether keystrokes currently edit the search input.
    pub searching: bool,
    pub table: TableState,
}

impl FeedState {
    /// Incidents visible under the current filters, in store order.
    pub fn filtered<'a>(&self, store: &'a DataStore) -> Vec<&'a Incident> {
        let needle = self.search.to_lowercase();
        store
            .incidents()
            .filter(|incident| self.severity_filter.is_none_or(|severity| incident.severity == severity))
            .filter(|incident| self.status_filter.is_none_or(|status| incident.status == status))
            .filter(|incident| needle.is_empty() || incident.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Advance the severity filter: all -> critical -> high -> medium -> low -> all.
    pub fn cycle_severity(&mut self) {
        self.severity_filter = match self.severity_filter {
            None => Some(Severity::Critical),
            Some(Severity::Critical) => Some(Severity::High),
            Some(Severity::High) => Some(Severity::Medium),
            Some(Severity::Medium) => Some(Severity::Low),
            Some(Severity::Low) => None,
        };
        self.selected = 0;
    }

    /// Advance the status filter: all -> open -> investigating -> resolved -> all.
    pub fn cycle_status(&mut self) {
        self.status_filter = match self.status_filter {
            None => Some(IncidentStatus::Open),
            Some(IncidentStatus::Open) => Some(IncidentStatus::Investigating),
            Some(IncidentStatus::Investigating) => Some(IncidentStatus::Resolved),
            Some(IncidentStatus::Resolved) => None,
        };
        self.selected = 0;
    }
}

/// UI state for the agent traces page.
#[derive(Debug, Default)]
pub struct TracesState {
    pub selected: usize,
    pub table: TableState,
}

/// UI state for the policies page. The enabled flags shadow the read-only
/// store so toggles stay in memory for the session.
#[derive(Debug, Default)]
pub struct PoliciesState {
    pub selected: usize,
    pub enabled: Vec<bool>,
    pub table: TableState,
}

impl PoliciesState {
    pub fn new(store: &DataStore) -> Self {
        Self {
            selected: 0,
            enabled: store.policies().iter().map(|p| p.enabled).collect(),
            table: TableState::default(),
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(flag) = self.enabled.get_mut(self.selected) {
            *flag = !*flag;
        }
    }
}

/// The main application state.
pub struct App {
    /// Current route path (e.g. `/dashboard/risk`).
    pub current_path: String,
    /// Shared, cross-cutting context (store, theme, preferences).
    pub ctx: SharedCtx,
    /// Sidebar state machine plus hit-test geometry.
    pub sidebar: SidebarState,
    /// Issues feed page state.
    pub feed: FeedState,
    /// Traces page state.
    pub traces: TracesState,
    /// Policies page state.
    pub policies: PoliciesState,
}

impl App {
    /// Creates the application state mounted at the root route.
    pub fn new(store: DataStore, prefs: UserPreferences) -> Self {
        let ctx = SharedCtx::new(store, prefs);
        let policies = PoliciesState::new(&ctx.store);
        Self {
            current_path: "/".to_string(),
            ctx,
            sidebar: SidebarState::new("/"),
            feed: FeedState::default(),
            traces: TracesState::default(),
            policies,
        }
    }

    /// The page addressed by the current route.
    pub fn page(&self) -> Page {
        Page::for_path(&self.current_path)
    }

    /// Fire-and-forget route change. The sidebar pin follows the new route
    /// only while the user holds no explicit pin.
    pub fn navigate(&mut self, path: &str) {
        if self.current_path != path {
            debug!(path, "navigating");
        }
        self.current_path = path.to_string();
        self.sidebar.controller.route_changed(path);
    }

    /// Swap to the next truecolor theme and persist the choice. No-op on
    /// ANSI-only terminals, where the fallback palette is forced.
    pub fn cycle_theme(&mut self) {
        if !theme::supports_truecolor() {
            return;
        }
        let next = theme::catalog::next_truecolor_after(self.ctx.theme_id);
        self.ctx.theme = next.build();
        self.ctx.theme_id = next.id;
        if let Err(error) = self.ctx.prefs.set_preferred_theme(Some(next.id.to_string())) {
            warn!("Failed to persist theme preference: {error}");
        }
    }

    /// Updates the application state based on a message.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::Tick => {}
            Msg::Resize(width, _height) => {
                let viewport = if *width < NARROW_THRESHOLD { Viewport::Narrow } else { Viewport::Full };
                self.sidebar.controller.set_viewport(viewport);
            }
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(DataStore::load(), UserPreferences::ephemeral())
    }

    #[test]
    fn navigation_updates_route_and_page() {
        let mut app = app();
        assert_eq!(app.page(), Page::Feed);
        app.navigate("/dashboard/risk");
        assert_eq!(app.current_path, "/dashboard/risk");
        assert_eq!(app.page(), Page::Risk);
    }

    #[test]
    fn external_navigation_never_stomps_an_explicit_pin() {
        let mut app = app();
        // initial mount pinned Issues; user pin survives detail navigation
        app.navigate("/incident/INC-0001");
        assert!(app.sidebar.controller.pinned().is_some());
    }

    #[test]
    fn resize_below_threshold_enters_the_narrow_viewport() {
        let mut app = app();
        app.update(&Msg::Resize(60, 24));
        assert!(app.sidebar.controller.is_narrow());
        app.update(&Msg::Resize(120, 24));
        assert!(!app.sidebar.controller.is_narrow());
    }

    #[test]
    fn feed_filters_compose() {
        let mut app = app();
        let total = app.feed.filtered(&app.ctx.store).len();
        assert_eq!(total, app.ctx.store.incidents().count());

        app.feed.cycle_severity();
        assert_eq!(app.feed.severity_filter, Some(Severity::Critical));
        for incident in app.feed.filtered(&app.ctx.store) {
            assert_eq!(incident.severity, Severity::Critical);
        }

        app.feed.search = "vector".to_string();
        for incident in app.feed.filtered(&app.ctx.store) {
            assert!(incident.title.to_lowercase().contains("vector"));
        }
    }

    #[test]
    fn policy_toggle_shadows_the_store() {
        let mut app = app();
        let before = app.policies.enabled[0];
        app.policies.toggle_selected();
        assert_eq!(app.policies.enabled[0], !before);
        // the store itself stays read-only
        assert_eq!(app.ctx.store.policies()[0].enabled, before);
    }
}
