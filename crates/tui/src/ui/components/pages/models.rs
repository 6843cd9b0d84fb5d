//! Models & prompts page behind `/settings/models` and `/settings/agents`.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Cell, Row, Table},
};
use samix_util::relative_from;

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;
use crate::ui::widgets::badge;

/// Configured models and the system prompts bound to them.
#[derive(Debug, Default)]
pub struct ModelsComponent;

impl Component for ModelsComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let anchor = app.ctx.store.anchor();
        if rect.height < 8 {
            return;
        }
        let chunks = Layout::vertical([Constraint::Length(8), Constraint::Min(4)]).split(rect);

        let block = th::block(theme, Some("Configured Models"), false);
        let inner = block.inner(chunks[0]);
        frame.render_widget(block, chunks[0]);
        let header = Row::new(vec![
            Cell::from("MODEL"),
            Cell::from("PROVIDER"),
            Cell::from("AGENTS USING"),
            Cell::from("STATUS"),
        ])
        .style(th::table_header_style(theme));
        let rows: Vec<Row> = app
            .ctx
            .store
            .models()
            .iter()
            .enumerate()
            .map(|(i, model)| {
                Row::new(vec![
                    Cell::from(model.name.clone()),
                    Cell::from(model.provider.clone()),
                    Cell::from(model.agents_using.to_string()),
                    Cell::from(Line::from(badge::agent_status_badge(theme, model.status))),
                ])
                .style(th::table_row_style(theme, i))
            })
            .collect();
        let widths = [
            Constraint::Min(16),
            Constraint::Length(12),
            Constraint::Length(13),
            Constraint::Length(11),
        ];
        frame.render_widget(Table::new(rows, widths).header(header).column_spacing(1), inner);

        let block = th::block(theme, Some("System Prompts"), false);
        let inner = block.inner(chunks[1]);
        frame.render_widget(block, chunks[1]);
        let header = Row::new(vec![
            Cell::from("PROMPT"),
            Cell::from("MODEL"),
            Cell::from("VERSION"),
            Cell::from("LAST UPDATED"),
        ])
        .style(th::table_header_style(theme));
        let rows: Vec<Row> = app
            .ctx
            .store
            .prompts()
            .iter()
            .enumerate()
            .map(|(i, prompt)| {
                Row::new(vec![
                    Cell::from(prompt.name.clone()),
                    Cell::from(prompt.model.clone()),
                    Cell::from(prompt.version.clone()),
                    Cell::from(relative_from(anchor, prompt.updated_at)),
                ])
                .style(th::table_row_style(theme, i))
            })
            .collect();
        let widths = [
            Constraint::Min(22),
            Constraint::Length(14),
            Constraint::Length(8),
            Constraint::Length(13),
        ];
        frame.render_widget(Table::new(rows, widths).header(header).column_spacing(1), inner);
    }
}
