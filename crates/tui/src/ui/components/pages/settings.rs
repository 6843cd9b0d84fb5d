//! Organization settings page behind `/settings` and `/settings/audit`.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
};
use samix_util::relative_from;

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;
use crate::ui::widgets::badge;

/// Governance toggles plus the registered agent roster.
#[derive(Debug, Default)]
pub struct SettingsComponent;

impl Component for SettingsComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let anchor = app.ctx.store.anchor();
        if rect.height < 8 {
            return;
        }
        let chunks = Layout::vertical([Constraint::Min(8), Constraint::Length(9)]).split(rect);

        let block = th::block(theme, Some("Organization Settings"), false);
        let inner = block.inner(chunks[0]);
        frame.render_widget(block, chunks[0]);
        let mut lines = Vec::new();
        for setting in app.ctx.store.org_settings() {
            let state = if setting.enabled {
                Span::styled("[on] ", theme.status_success())
            } else {
                Span::styled("[off]", theme.text_muted_style())
            };
            lines.push(Line::from(vec![
                state,
                Span::raw(" "),
                Span::styled(setting.label.clone(), theme.text_primary_style()),
            ]));
            lines.push(Line::from(Span::styled(
                format!("      {}", setting.description),
                theme.text_muted_style(),
            )));
        }
        frame.render_widget(Paragraph::new(lines), inner);

        let block = th::block(theme, Some("Agents"), false);
        let inner = block.inner(chunks[1]);
        frame.render_widget(block, chunks[1]);
        let header = Row::new(vec![
            Cell::from("AGENT"),
            Cell::from("MODEL"),
            Cell::from("STATUS"),
            Cell::from("EXECUTIONS"),
            Cell::from("FAILURE RATE"),
            Cell::from("LAST ACTIVE"),
        ])
        .style(th::table_header_style(theme));
        let rows: Vec<Row> = app
            .ctx
            .store
            .agents()
            .enumerate()
            .map(|(i, agent)| {
                Row::new(vec![
                    Cell::from(agent.name.clone()),
                    Cell::from(agent.model_version.clone()),
                    Cell::from(Line::from(badge::agent_status_badge(theme, agent.status))),
                    Cell::from(agent.total_executions.to_string()),
                    Cell::from(format!("{:.1}%", agent.failure_rate)),
                    Cell::from(relative_from(anchor, agent.last_active_at)),
                ])
                .style(th::table_row_style(theme, i))
            })
            .collect();
        let widths = [
            Constraint::Min(18),
            Constraint::Length(14),
            Constraint::Length(11),
            Constraint::Length(11),
            Constraint::Length(13),
            Constraint::Length(12),
        ];
        frame.render_widget(Table::new(rows, widths).header(header).column_spacing(1), inner);
    }
}
