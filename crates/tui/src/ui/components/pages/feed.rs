//! Issues feed: the filterable incident table behind `/`, `/incidents`,
//! and `/violations`.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
};
use samix_types::Effect;
use samix_util::{relative_from, truncate_with_ellipsis};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;
use crate::ui::widgets::badge;

/// Incident feed table with severity/status filters and title search.
#[derive(Debug, Default)]
pub struct FeedComponent {
    rows_area: Rect,
}

impl FeedComponent {
    fn navigate_to_selected(&self, app: &App) -> Option<Effect> {
        let visible = app.feed.filtered(&app.ctx.store);
        visible
            .get(app.feed.selected)
            .map(|incident| Effect::Navigate(format!("/incident/{}", incident.id)))
    }

    fn filter_line(app: &App, count: usize, total: usize) -> String {
        let severity = app.feed.severity_filter.map_or("all", |s| s.as_str());
        let status = app.feed.status_filter.map_or("all", |s| s.as_str());
        let search = if app.feed.search.is_empty() && !app.feed.searching {
            String::new()
        } else {
            let caret = if app.feed.searching { "▏" } else { "" };
            format!(" · search: {}{}", app.feed.search, caret)
        };
        format!("severity: {severity} · status: {status}{search} · {count} of {total}")
    }
}

impl Component for FeedComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        if app.feed.searching {
            match key.code {
                KeyCode::Char(c) => {
                    app.feed.search.push(c);
                    app.feed.selected = 0;
                }
                KeyCode::Backspace => {
                    app.feed.search.pop();
                }
                KeyCode::Enter | KeyCode::Esc => {
                    app.feed.searching = false;
                }
                _ => {}
            }
            return effects;
        }

        let visible_len = app.feed.filtered(&app.ctx.store).len();
        match key.code {
            KeyCode::Up => {
                app.feed.selected = app.feed.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if visible_len > 0 {
                    app.feed.selected = (app.feed.selected + 1).min(visible_len - 1);
                }
            }
            KeyCode::Enter => {
                effects.extend(self.navigate_to_selected(app));
            }
            KeyCode::Char('/') => {
                app.feed.searching = true;
            }
            KeyCode::Char('f') => {
                app.feed.cycle_severity();
            }
            KeyCode::Char('s') => {
                app.feed.cycle_status();
            }
            KeyCode::Char('c') => {
                app.feed.search.clear();
                app.feed.selected = 0;
            }
            _ => {}
        }
        effects
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return effects;
        }
        let position = Position {
            x: mouse.column,
            y: mouse.row,
        };
        if !self.rows_area.contains(position) {
            return effects;
        }
        let index = app.feed.table.offset() + (mouse.row - self.rows_area.y) as usize;
        let visible_len = app.feed.filtered(&app.ctx.store).len();
        if index >= visible_len {
            return effects;
        }
        if index == app.feed.selected {
            effects.extend(self.navigate_to_selected(app));
        } else {
            app.feed.selected = index;
        }
        effects
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let visible = app.feed.filtered(&app.ctx.store);
        let total = app.ctx.store.incidents().count();
        let anchor = app.ctx.store.anchor();

        app.feed.selected = app.feed.selected.min(visible.len().saturating_sub(1));
        let selection = if visible.is_empty() { None } else { Some(app.feed.selected) };
        app.feed.table.select(selection);

        let theme = &*app.ctx.theme;
        let block = th::block(theme, Some("Issues Feed"), true);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);
        if inner.height < 3 {
            return;
        }

        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).split(inner);
        frame.render_widget(
            Paragraph::new(Span::styled(Self::filter_line(app, visible.len(), total), theme.text_muted_style())),
            chunks[0],
        );

        let header = Row::new(vec![
            Cell::from("ID"),
            Cell::from("SEVERITY"),
            Cell::from("STATUS"),
            Cell::from("TYPE"),
            Cell::from("TITLE"),
            Cell::from("AGENT"),
            Cell::from("EVENTS"),
            Cell::from("LAST SEEN"),
        ])
        .style(th::table_header_style(theme));

        let rows: Vec<Row> = visible
            .iter()
            .enumerate()
            .map(|(i, incident)| {
                Row::new(vec![
                    Cell::from(incident.id.clone()),
                    Cell::from(Line::from(badge::severity_badge(theme, incident.severity))),
                    Cell::from(Line::from(badge::status_badge(theme, incident.status))),
                    Cell::from(incident.kind.label()),
                    Cell::from(truncate_with_ellipsis(&incident.title, 48)),
                    Cell::from(incident.agent_name.clone()),
                    Cell::from(incident.event_count.to_string()),
                    Cell::from(relative_from(anchor, incident.last_seen)),
                ])
                .style(th::table_row_style(theme, i))
            })
            .collect();

        let widths = [
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(15),
            Constraint::Length(17),
            Constraint::Min(24),
            Constraint::Length(20),
            Constraint::Length(7),
            Constraint::Length(10),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(1)
            .row_highlight_style(th::table_selected_style(theme));

        // rows start under the one-line header
        self.rows_area = Rect::new(chunks[1].x, chunks[1].y + 1, chunks[1].width, chunks[1].height.saturating_sub(1));
        frame.render_stateful_widget(table, chunks[1], &mut app.feed.table);
    }
}
