//! Guardrails page behind `/guardrails`: always-on input/output checks.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

/// One card per guardrail with its trigger count for the day.
#[derive(Debug, Default)]
pub struct GuardrailsComponent;

impl Component for GuardrailsComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let guardrails = app.ctx.store.guardrails();
        if guardrails.is_empty() || rect.height < 4 {
            return;
        }

        let constraints = vec![Constraint::Length(4); guardrails.len()];
        let cards = Layout::vertical(constraints).split(rect);
        for (guardrail, card) in guardrails.iter().zip(cards.iter()) {
            let block = th::block(theme, None, false);
            let inner = block.inner(*card);
            frame.render_widget(block, *card);
            if inner.height == 0 {
                continue;
            }
            let state = if guardrail.enabled {
                Span::styled("[active]", theme.status_success())
            } else {
                Span::styled("[disabled]", theme.text_muted_style())
            };
            let lines = vec![
                Line::from(vec![
                    Span::styled(guardrail.name.clone(), theme.accent_emphasis_style()),
                    Span::raw("  "),
                    state,
                    Span::styled(
                        format!("  {} triggers today", guardrail.triggers_today),
                        theme.text_secondary_style(),
                    ),
                ]),
                Line::from(Span::styled(guardrail.description.clone(), theme.text_muted_style())),
            ];
            frame.render_widget(Paragraph::new(lines), inner);
        }
    }
}
