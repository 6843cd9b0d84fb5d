//! Reliability dashboard behind `/dashboard/reliability` and
//! `/insights/failures`.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    widgets::{Cell, Row, Table},
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;
use crate::ui::widgets::{chart, metric_card};

/// Metric cards, the weekly incident series, and per-agent reliability.
#[derive(Debug, Default)]
pub struct ReliabilityComponent;

impl Component for ReliabilityComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        if rect.height < 10 {
            return;
        }
        let chunks = Layout::vertical([Constraint::Length(5), Constraint::Min(5)]).split(rect);

        let metrics = app.ctx.store.incident_metrics();
        let cards = Layout::horizontal(vec![Constraint::Ratio(1, metrics.len().max(1) as u32); metrics.len()]).split(chunks[0]);
        for (metric, card) in metrics.iter().zip(cards.iter()) {
            metric_card::render_metric_card(frame, *card, theme, metric);
        }

        let body = Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).split(chunks[1]);
        chart::render_severity_buckets(frame, body[0], theme, "Incidents This Week", app.ctx.store.incidents_over_time());

        let block = th::block(theme, Some("Agent Reliability"), false);
        let inner = block.inner(body[1]);
        frame.render_widget(block, body[1]);

        let header = Row::new(vec![
            Cell::from("AGENT"),
            Cell::from("UPTIME"),
            Cell::from("SUCCESS"),
            Cell::from("LATENCY"),
        ])
        .style(th::table_header_style(theme));
        let rows: Vec<Row> = app
            .ctx
            .store
            .agent_reliability()
            .iter()
            .enumerate()
            .map(|(i, agent)| {
                Row::new(vec![
                    Cell::from(agent.name.clone()),
                    Cell::from(format!("{:.1}%", agent.uptime_pct)),
                    Cell::from(format!("{:.1}%", agent.success_rate_pct)),
                    Cell::from(format!("{:.1}s", agent.avg_latency_s)),
                ])
                .style(th::table_row_style(theme, i))
            })
            .collect();
        let widths = [
            Constraint::Min(18),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(8),
        ];
        frame.render_widget(Table::new(rows, widths).header(header).column_spacing(1), inner);
    }
}
