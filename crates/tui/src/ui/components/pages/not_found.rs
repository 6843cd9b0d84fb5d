//! Fallback page for unmatched routes.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;
use crate::ui::utils::centered_rect;

/// Centered notice naming the unmatched path. An unmatched route is an
/// expected outcome, not an error.
#[derive(Debug, Default)]
pub struct NotFoundComponent;

impl Component for NotFoundComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let block = th::block(theme, None, false);
        frame.render_widget(block, rect);

        let area = centered_rect(rect, 50, 4);
        let lines = vec![
            Line::from(Span::styled("404", theme.accent_emphasis_style())),
            Line::from(Span::styled(
                format!("No page at {}", app.current_path),
                theme.text_secondary_style(),
            )),
            Line::from(Span::styled("Pick a destination from the sidebar.", theme.text_muted_style())),
        ];
        frame.render_widget(Paragraph::new(lines).centered(), area);
    }
}
