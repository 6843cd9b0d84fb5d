use std::collections::HashSet;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use samix_types::Effect;
use tracing::warn;

use super::{PANEL_WIDTH, RAIL_WIDTH, SidebarVariant, model, routes};
use crate::app::App;
use crate::ui::components::{Component, find_target_index_by_mouse_position};
use crate::ui::theme::theme_helpers as th;

/// The sidebar view: renders the icon rail, the flyout/accordion submenu,
/// and the narrow-viewport drawer from the controller's state, and maps
/// gestures back onto the controller's transition functions.
///
/// Active-route highlighting comes from the route matcher and is
/// independent of which section is displayed open.
#[derive(Debug, Default)]
pub struct SidebarComponent {
    /// Icon ids already reported as missing a glyph; warn once per id.
    warned_icons: HashSet<model::IconId>,
}

impl SidebarComponent {
    pub fn new() -> Self {
        Self::default()
    }

    fn glyph_of(&mut self, icon: model::IconId) -> &'static str {
        match model::glyph(icon) {
            Some(glyph) => glyph,
            None => {
                if self.warned_icons.insert(icon) {
                    warn!("No glyph registered for icon {icon:?}; rendering placeholder");
                }
                model::PLACEHOLDER_GLYPH
            }
        }
    }

    /// Renders the brand row and the section headers into `rect`,
    /// recording per-section row areas. In the accordion layout the
    /// headers after the displayed section shift down to leave room for
    /// its inline items (rendered separately).
    fn render_rail(&mut self, frame: &mut Frame, rect: Rect, app: &mut App, with_labels: bool) {
        let theme = &*app.ctx.theme;
        let active = routes::matched_section(&app.current_path);
        let displayed = app.sidebar.controller.displayed();
        let focused = app.sidebar.focused;
        let cursor = app.sidebar.cursor;

        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(theme.border_style(false))
            .style(th::panel_style(theme));
        let inner = block.inner(rect);
        frame.render_widget(block, rect);
        if inner.height < 2 {
            return;
        }

        let brand = if with_labels { "◆ SAMIX AI" } else { "◆" };
        frame.render_widget(
            Paragraph::new(Span::styled(brand, theme.accent_emphasis_style())).centered(),
            Rect::new(inner.x, inner.y, inner.width, 1),
        );

        let mut y = inner.y + 2;
        for (i, section) in model::sections().iter().enumerate() {
            if y >= inner.y + inner.height {
                break;
            }
            let row = Rect::new(inner.x, y, inner.width, 1);
            app.sidebar.rail_rows.push((section.id, row));

            let glyph = self.glyph_of(section.icon);
            let is_displayed = displayed == Some(section.id);
            let is_active = active == Some(section.id);
            let is_cursor = focused && cursor == i;

            let mut style = if is_active {
                theme.accent_emphasis_style()
            } else {
                theme.text_secondary_style()
            };
            if is_displayed {
                style = style.patch(th::table_selected_style(theme));
            }

            let marker = if is_cursor { "›" } else { " " };
            let mut spans = vec![Span::styled(marker, theme.accent_primary_style()), Span::styled(glyph, style)];
            if with_labels {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(section.id.label(), style));
                spans.push(Span::styled(if is_displayed { " ▾" } else { " ▸" }, theme.text_muted_style()));
            }
            frame.render_widget(Paragraph::new(Line::from(spans)), row);

            y += 1;
            if with_labels && is_displayed {
                // leave room for the inline item rows
                y += section.items.len() as u16;
            }
        }
    }

    /// Inline item rows beneath the expanded section header (accordion).
    fn render_accordion_items(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let Some(section_id) = app.sidebar.controller.displayed() else {
            return;
        };
        let Some(header) = app.sidebar.rail_rows.iter().find(|(id, _)| *id == section_id).map(|(_, row)| *row) else {
            return;
        };
        let section = model::section(section_id);
        let active_item = model::item_of(&app.current_path);
        let theme = &*app.ctx.theme;
        let bottom = rect.y + rect.height;

        for (j, item) in section.items.iter().enumerate() {
            let y = header.y + 1 + j as u16;
            if y >= bottom {
                break;
            }
            let row = Rect::new(header.x, y, header.width, 1);
            app.sidebar.item_rows.push((item, row));

            let glyph = self.glyph_of(item.icon);
            let is_active = active_item.is_some_and(|a| a.url == item.url);
            let style = if is_active {
                th::table_selected_style(theme)
            } else {
                theme.text_primary_style()
            };
            let spans = vec![
                Span::raw("   "),
                Span::styled(glyph, theme.text_muted_style()),
                Span::raw(" "),
                Span::styled(item.title, style),
            ];
            frame.render_widget(Paragraph::new(Line::from(spans)), row);
        }
    }

    /// Renders the submenu panel for the displayed section into `rect`,
    /// recording item rows and the collapse control.
    fn render_panel(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let Some(section_id) = app.sidebar.controller.displayed() else {
            return;
        };
        let section = model::section(section_id);
        let active_item = model::item_of(&app.current_path);
        let focused = app.sidebar.focused;
        let theme = &*app.ctx.theme;

        let block = th::block(theme, Some(section_id.label()), focused);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        for (j, item) in section.items.iter().enumerate() {
            let y = inner.y + j as u16;
            if y >= inner.y + inner.height {
                break;
            }
            let row = Rect::new(inner.x, y, inner.width, 1);
            app.sidebar.item_rows.push((item, row));

            let glyph = self.glyph_of(item.icon);
            let is_active = active_item.is_some_and(|a| a.url == item.url);
            let style = if is_active {
                th::table_selected_style(theme)
            } else {
                theme.text_primary_style()
            };
            let title = samix_util::truncate_with_ellipsis(item.title, inner.width.saturating_sub(4) as usize);
            let spans = vec![
                Span::raw(" "),
                Span::styled(glyph, theme.text_muted_style()),
                Span::raw(" "),
                Span::styled(title, style),
            ];
            frame.render_widget(Paragraph::new(Line::from(spans)), row);
        }

        // collapse control pinned to the bottom of the panel
        if inner.height > section.items.len() as u16 + 1 {
            let y = inner.y + inner.height - 1;
            let row = Rect::new(inner.x, y, inner.width, 1);
            app.sidebar.collapse_row = Some(row);
            frame.render_widget(Paragraph::new(Span::styled("« collapse", theme.text_muted_style())), row);
        }
    }

    /// Drawer overlay for narrow viewports: the submenu renders on top of
    /// the content area instead of reflowing it. Called by the main view
    /// after the content so it stacks above.
    pub fn render_overlay(&mut self, frame: &mut Frame, body: Rect, app: &mut App) {
        if !app.sidebar.controller.is_narrow() || !app.sidebar.controller.panel_visible() {
            return;
        }
        let width = PANEL_WIDTH.min(body.width);
        if width == 0 || body.height == 0 {
            return;
        }
        let overlay = Rect::new(body.x, body.y, width, body.height);
        frame.render_widget(Clear, overlay);
        app.sidebar.panel_area = Some(overlay);
        self.render_panel(frame, overlay, app);
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        let section_count = model::sections().len();
        match key.code {
            KeyCode::Up => {
                app.sidebar.cursor = (app.sidebar.cursor + section_count - 1) % section_count;
            }
            KeyCode::Down => {
                app.sidebar.cursor = (app.sidebar.cursor + 1) % section_count;
            }
            KeyCode::Enter => {
                let section = model::SectionId::ALL[app.sidebar.cursor];
                if let Some(url) = app.sidebar.controller.click_icon(section) {
                    effects.push(Effect::Navigate(url.to_string()));
                }
            }
            KeyCode::Esc => {
                app.sidebar.controller.click_collapse();
            }
            _ => {}
        }
        effects
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        let x = mouse.column;
        let y = mouse.row;
        let position = Position { x, y };

        match mouse.kind {
            MouseEventKind::Moved => {
                let rail_hit = app.sidebar.rail_rows.iter().find(|(_, row)| row.contains(position)).map(|(id, _)| *id);
                if let Some(section) = rail_hit {
                    app.sidebar.controller.pointer_enter_icon(section);
                } else if !app.sidebar.region_contains(x, y) {
                    app.sidebar.controller.pointer_leave_region();
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let rail_rects: Vec<Rect> = app.sidebar.rail_rows.iter().map(|(_, row)| *row).collect();
                if let Some(idx) = find_target_index_by_mouse_position(&app.sidebar.last_area, &rail_rects, x, y) {
                    let section = app.sidebar.rail_rows[idx].0;
                    app.sidebar.cursor = section as usize;
                    if let Some(url) = app.sidebar.controller.click_icon(section) {
                        effects.push(Effect::Navigate(url.to_string()));
                    }
                } else if app.sidebar.collapse_row.is_some_and(|row| row.contains(position)) {
                    app.sidebar.controller.click_collapse();
                } else if let Some((item, _)) = app.sidebar.item_rows.iter().find(|(_, row)| row.contains(position)).copied() {
                    let url = app.sidebar.controller.select_item(item);
                    effects.push(Effect::Navigate(url.to_string()));
                }
            }
            _ => {}
        }
        effects
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        app.sidebar.rail_rows.clear();
        app.sidebar.item_rows.clear();
        app.sidebar.collapse_row = None;
        app.sidebar.panel_area = None;
        app.sidebar.last_area = rect;

        match app.sidebar.controller.variant() {
            SidebarVariant::Flyout => {
                let chunks = Layout::horizontal([Constraint::Length(RAIL_WIDTH), Constraint::Min(0)]).split(rect);
                self.render_rail(frame, chunks[0], app, false);
                if app.sidebar.controller.panel_visible() && chunks[1].width > 0 {
                    self.render_panel(frame, chunks[1], app);
                }
            }
            SidebarVariant::Accordion => {
                self.render_rail(frame, rect, app, true);
                self.render_accordion_items(frame, rect, app);
            }
            SidebarVariant::Drawer => {
                self.render_rail(frame, rect, app, false);
            }
        }
    }
}
