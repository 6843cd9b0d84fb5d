//! Agent traces table behind `/traces` and `/decisions`.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Position, Rect},
    text::Line,
    widgets::{Cell, Row, Table},
};
use samix_types::Effect;
use samix_util::{format_duration_ms, format_timestamp};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;
use crate::ui::widgets::badge;

/// Trace table; activating a row opens the step timeline.
#[derive(Debug, Default)]
pub struct TracesComponent {
    rows_area: Rect,
}

impl TracesComponent {
    fn navigate_to_selected(&self, app: &App) -> Option<Effect> {
        app.ctx
            .store
            .traces()
            .nth(app.traces.selected)
            .map(|trace| Effect::Navigate(format!("/trace/{}", trace.id)))
    }
}

impl Component for TracesComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        let len = app.ctx.store.traces().count();
        match key.code {
            KeyCode::Up => {
                app.traces.selected = app.traces.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if len > 0 {
                    app.traces.selected = (app.traces.selected + 1).min(len - 1);
                }
            }
            KeyCode::Enter => {
                effects.extend(self.navigate_to_selected(app));
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
        let index = app.traces.table.offset() + (mouse.row - self.rows_area.y) as usize;
        if index >= app.ctx.store.traces().count() {
            return effects;
        }
        if index == app.traces.selected {
            effects.extend(self.navigate_to_selected(app));
        } else {
            app.traces.selected = index;
        }
        effects
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let len = app.ctx.store.traces().count();
        app.traces.selected = app.traces.selected.min(len.saturating_sub(1));
        app.traces.table.select(if len == 0 { None } else { Some(app.traces.selected) });

        let theme = &*app.ctx.theme;
        let block = th::block(theme, Some("Agent Traces"), true);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);
        if inner.height < 2 {
            return;
        }

        let header = Row::new(vec![
            Cell::from("TRACE"),
            Cell::from("AGENT"),
            Cell::from("MODEL"),
            Cell::from("STATUS"),
            Cell::from("DURATION"),
            Cell::from("STARTED"),
            Cell::from("STEPS"),
        ])
        .style(th::table_header_style(theme));

        let rows: Vec<Row> = app
            .ctx
            .store
            .traces()
            .enumerate()
            .map(|(i, trace)| {
                Row::new(vec![
                    Cell::from(trace.id.clone()),
                    Cell::from(trace.agent_name.clone()),
                    Cell::from(trace.model_version.clone()),
                    Cell::from(Line::from(badge::run_status_badge(theme, trace.status))),
                    Cell::from(format_duration_ms(trace.duration_ms)),
                    Cell::from(format_timestamp(trace.started_at)),
                    Cell::from(trace.steps.len().to_string()),
                ])
                .style(th::table_row_style(theme, i))
            })
            .collect();

        let widths = [
            Constraint::Length(14),
            Constraint::Min(18),
            Constraint::Length(14),
            Constraint::Length(10),
            Constraint::Length(9),
            Constraint::Length(13),
            Constraint::Length(5),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(1)
            .row_highlight_style(th::table_selected_style(theme));

        self.rows_area = Rect::new(inner.x, inner.y + 1, inner.width, inner.height.saturating_sub(1));
        frame.render_stateful_widget(table, inner, &mut app.traces.table);
    }
}
