//! Risk dashboard behind `/dashboard/risk` and `/insights/drift`.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::widgets::{chart, metric_card};

/// Risk metric cards plus failure-type and failing-agent distributions.
#[derive(Debug, Default)]
pub struct RiskComponent;

impl Component for RiskComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        if rect.height < 10 {
            return;
        }
        let chunks = Layout::vertical([Constraint::Length(5), Constraint::Min(5)]).split(rect);

        let metrics = app.ctx.store.risk_metrics();
        let cards = Layout::horizontal(vec![Constraint::Ratio(1, metrics.len().max(1) as u32); metrics.len()]).split(chunks[0]);
        for (metric, card) in metrics.iter().zip(cards.iter()) {
            metric_card::render_metric_card(frame, *card, theme, metric);
        }

        let body = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(chunks[1]);
        chart::render_bar_list(frame, body[0], theme, "Failure Type Distribution", app.ctx.store.failure_distribution());
        chart::render_bar_list(frame, body[1], theme, "Top Failing Agents", app.ctx.store.top_failing_agents());
    }
}
