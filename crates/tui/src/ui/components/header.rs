//! Top header bar: product name, current page title, key hints.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

#[derive(Debug, Default)]
pub struct HeaderComponent;

impl Component for HeaderComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme.border_style(false))
            .style(th::panel_style(theme));
        let inner = block.inner(rect);
        frame.render_widget(block, rect);
        if inner.height == 0 {
            return;
        }

        let chunks = Layout::horizontal([Constraint::Min(20), Constraint::Length(52)]).split(inner);

        let title = Line::from(vec![
            Span::styled("SAMIX AI", theme.accent_emphasis_style()),
            Span::styled("  Governance Platform", theme.text_muted_style()),
            Span::styled(format!("  ·  {}", app.page().title()), theme.text_secondary_style()),
        ]);
        frame.render_widget(Paragraph::new(title), chunks[0]);

        let hints = th::hint_spans(
            theme,
            &[
                (" Tab", " focus "),
                (" ^B", " pin rail "),
                (" F8", " theme "),
                (" ^C", " quit"),
            ],
        );
        frame.render_widget(Paragraph::new(Line::from(hints)).right_aligned(), chunks[1]);
    }
}
