//! Top-level view: lays out header, sidebar, and the routed content page,
//! and routes input between them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
};
use samix_types::{Effect, Msg, Page};

use crate::app::App;
use crate::ui::components::pages::{
    FeedComponent, GuardrailsComponent, IncidentDetailComponent, ModelsComponent, NotFoundComponent, PoliciesComponent,
    ReliabilityComponent, RiskComponent, SettingsComponent, TraceDetailComponent, TracesComponent,
};
use crate::ui::components::sidebar::SidebarComponent;
use crate::ui::components::{Component, HeaderComponent};

/// Which region currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusRegion {
    #[default]
    Sidebar,
    Content,
}

/// Owns the component tree and the content view for the current route.
pub struct MainView {
    header_view: HeaderComponent,
    sidebar_view: SidebarComponent,
    content_view: Box<dyn Component>,
    content_page: Page,
    focus: FocusRegion,
    content_area: Rect,
}

impl MainView {
    pub fn new(app: &App) -> Self {
        let page = app.page();
        Self {
            header_view: HeaderComponent,
            sidebar_view: SidebarComponent::new(),
            content_view: Self::view_for(&page),
            content_page: page,
            focus: FocusRegion::Sidebar,
            content_area: Rect::default(),
        }
    }

    fn view_for(page: &Page) -> Box<dyn Component> {
        match page {
            Page::Feed => Box::new(FeedComponent::default()),
            Page::IncidentDetail(id) => Box::new(IncidentDetailComponent::new(id.clone())),
            Page::Traces => Box::new(TracesComponent::default()),
            Page::TraceDetail(id) => Box::new(TraceDetailComponent::new(id.clone())),
            Page::Reliability => Box::new(ReliabilityComponent),
            Page::Risk => Box::new(RiskComponent),
            Page::Policies => Box::new(PoliciesComponent::default()),
            Page::Guardrails => Box::new(GuardrailsComponent),
            Page::Settings => Box::new(SettingsComponent),
            Page::Models => Box::new(ModelsComponent),
            Page::NotFound => Box::new(NotFoundComponent),
        }
    }

    /// Rebuild the content view when the route moved to a different page.
    pub fn sync_content(&mut self, app: &App) {
        let page = app.page();
        if page != self.content_page {
            self.content_view = Self::view_for(&page);
            self.content_page = page;
        }
    }

    pub fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('b') {
            app.sidebar.controller.toggle_rail();
            return Vec::new();
        }
        match key.code {
            KeyCode::F(8) => {
                app.cycle_theme();
                Vec::new()
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    FocusRegion::Sidebar => FocusRegion::Content,
                    FocusRegion::Content => FocusRegion::Sidebar,
                };
                app.sidebar.focused = self.focus == FocusRegion::Sidebar;
                Vec::new()
            }
            _ => match self.focus {
                FocusRegion::Sidebar => self.sidebar_view.handle_key_events(app, key),
                FocusRegion::Content => self.content_view.handle_key_events(app, key),
            },
        }
    }

    pub fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        // the sidebar sees every mouse event: hover tracking needs moves
        // both inside and outside its region
        let mut effects = self.sidebar_view.handle_mouse_events(app, mouse);

        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            let position = Position {
                x: mouse.column,
                y: mouse.row,
            };
            if app.sidebar.region_contains(position.x, position.y) {
                self.focus = FocusRegion::Sidebar;
            } else if self.content_area.contains(position) {
                self.focus = FocusRegion::Content;
                effects.extend(self.content_view.handle_mouse_events(app, mouse));
            }
            app.sidebar.focused = self.focus == FocusRegion::Sidebar;
        }
        effects
    }

    pub fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        let mut effects = app.update(&msg);
        effects.extend(self.content_view.update(app, &msg));
        effects
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        self.sync_content(app);
        app.sidebar.focused = self.focus == FocusRegion::Sidebar;

        let rows = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(area);
        self.header_view.render(frame, rows[0], app);

        let body = rows[1];
        let sidebar_width = app.sidebar.total_width().min(body.width);
        let cols = Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)]).split(body);
        self.sidebar_view.render(frame, cols[0], app);

        self.content_area = cols[1];
        self.content_view.render(frame, cols[1], app);

        // narrow drawer: the submenu overlays the content instead of
        // reflowing it
        self.sidebar_view.render_overlay(frame, cols[1], app);
    }
}
