//! Policies page behind `/policies`. Toggles live in `PoliciesState` and
//! never write back to the store.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Position, Rect},
    widgets::{Cell, Row, Table},
};
use samix_types::Effect;
use samix_util::{relative_from, truncate_with_ellipsis};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

/// Policy table with an in-memory enable/disable toggle.
#[derive(Debug, Default)]
pub struct PoliciesComponent {
    rows_area: Rect,
}

impl Component for PoliciesComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let len = app.ctx.store.policies().len();
        match key.code {
            KeyCode::Up => {
                app.policies.selected = app.policies.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if len > 0 {
                    app.policies.selected = (app.policies.selected + 1).min(len - 1);
                }
            }
            KeyCode::Char(' ') => {
                app.policies.toggle_selected();
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let position = Position {
            x: mouse.column,
            y: mouse.row,
        };
        if !self.rows_area.contains(position) {
            return Vec::new();
        }
        let index = app.policies.table.offset() + (mouse.row - self.rows_area.y) as usize;
        if index >= app.ctx.store.policies().len() {
            return Vec::new();
        }
        if index == app.policies.selected {
            app.policies.toggle_selected();
        } else {
            app.policies.selected = index;
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let len = app.ctx.store.policies().len();
        let anchor = app.ctx.store.anchor();
        app.policies.selected = app.policies.selected.min(len.saturating_sub(1));
        app.policies.table.select(if len == 0 { None } else { Some(app.policies.selected) });
        let enabled = app.policies.enabled.clone();

        let theme = &*app.ctx.theme;
        let block = th::block(theme, Some("AI Policies"), true);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);
        if inner.height < 2 {
            return;
        }

        let header = Row::new(vec![
            Cell::from("POLICY"),
            Cell::from("TYPE"),
            Cell::from("ENABLED"),
            Cell::from("VIOLATIONS"),
            Cell::from("LAST TRIGGERED"),
            Cell::from("DESCRIPTION"),
        ])
        .style(th::table_header_style(theme));

        let rows: Vec<Row> = app
            .ctx
            .store
            .policies()
            .iter()
            .enumerate()
            .map(|(i, policy)| {
                let is_enabled = enabled.get(i).copied().unwrap_or(policy.enabled);
                let enabled_cell = if is_enabled {
                    Cell::from("on").style(theme.status_success())
                } else {
                    Cell::from("off").style(theme.text_muted_style())
                };
                let last = policy
                    .last_triggered
                    .map(|ts| relative_from(anchor, ts))
                    .unwrap_or_else(|| "never".to_string());
                Row::new(vec![
                    Cell::from(policy.name.clone()),
                    Cell::from(policy.kind.as_str()),
                    enabled_cell,
                    Cell::from(policy.violation_count.to_string()),
                    Cell::from(last),
                    Cell::from(truncate_with_ellipsis(&policy.description, 48)),
                ])
                .style(th::table_row_style(theme, i))
            })
            .collect();

        let widths = [
            Constraint::Length(26),
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(14),
            Constraint::Min(24),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(1)
            .row_highlight_style(th::table_selected_style(theme));

        self.rows_area = Rect::new(inner.x, inner.y + 1, inner.width, inner.height.saturating_sub(1));
        frame.render_stateful_widget(table, inner, &mut app.policies.table);
    }
}
