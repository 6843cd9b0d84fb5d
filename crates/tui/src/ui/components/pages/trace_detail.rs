//! Trace detail page behind `/trace/:id`: metadata plus the step timeline.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use samix_types::{Effect, TraceStep};
use samix_util::{format_duration_ms, format_timestamp};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::{Theme, theme_helpers as th};
use crate::ui::widgets::badge;

/// Step timeline for one trace.
#[derive(Debug)]
pub struct TraceDetailComponent {
    id: String,
}

impl TraceDetailComponent {
    pub fn new(id: String) -> Self {
        Self { id }
    }

    fn step_lines<'a>(theme: &dyn Theme, index: usize, step: &'a TraceStep, width: usize) -> Vec<Line<'a>> {
        let mut lines = vec![Line::from(vec![
            Span::styled(format!("{}. ", index + 1), theme.text_muted_style()),
            Span::styled(step.kind.label(), theme.accent_primary_style()),
            Span::raw("  "),
            Span::styled(step.name.clone(), theme.text_primary_style()),
            Span::raw("  "),
            badge::run_status_badge(theme, step.status),
            Span::styled(format!("  {}", format_duration_ms(step.duration_ms)), theme.text_muted_style()),
        ])];
        for (tag, text) in [("in ", step.input.as_deref()), ("out", step.output.as_deref())] {
            if let Some(text) = text {
                for wrapped in textwrap::wrap(text, width.saturating_sub(10).max(16)).into_iter().take(2) {
                    lines.push(Line::from(vec![
                        Span::styled(format!("   {tag} "), theme.text_muted_style()),
                        Span::styled(wrapped.into_owned(), theme.text_secondary_style()),
                    ]));
                }
            }
        }
        lines
    }
}

impl Component for TraceDetailComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        if matches!(key.code, KeyCode::Esc | KeyCode::Backspace)
            && let Some(parent) = app.page().parent_path()
        {
            effects.push(Effect::Navigate(parent.to_string()));
        }
        effects
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;

        let Some(trace) = app.ctx.store.trace(&self.id) else {
            let block = th::block(theme, Some("Trace"), true);
            let inner = block.inner(rect);
            frame.render_widget(block, rect);
            frame.render_widget(
                Paragraph::new(Span::styled(format!("No trace with id {}", self.id), theme.text_muted_style())),
                inner,
            );
            return;
        };

        let block = th::block(theme, Some(trace.id.as_str()), true);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);
        if inner.height < 5 {
            return;
        }

        let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).split(inner);

        let meta = vec![
            Line::from(vec![
                Span::styled(trace.agent_name.clone(), theme.accent_emphasis_style()),
                Span::styled(format!("  {}", trace.model_version), theme.text_secondary_style()),
                Span::raw("  "),
                badge::run_status_badge(theme, trace.status),
            ]),
            Line::from(vec![
                Span::styled("started ", theme.text_muted_style()),
                Span::styled(format_timestamp(trace.started_at), theme.text_primary_style()),
                Span::styled("   duration ", theme.text_muted_style()),
                Span::styled(format_duration_ms(trace.duration_ms), theme.text_primary_style()),
                Span::styled(
                    trace.user_id.as_deref().map(|u| format!("   {u}")).unwrap_or_default(),
                    theme.text_muted_style(),
                ),
            ]),
        ];
        frame.render_widget(Paragraph::new(meta), chunks[0]);

        let mut lines = Vec::new();
        for (i, step) in trace.steps.iter().enumerate() {
            lines.extend(Self::step_lines(theme, i, step, chunks[1].width as usize));
        }
        let overflow = lines.len().saturating_sub(chunks[1].height as usize);
        if overflow > 0 {
            lines.truncate(chunks[1].height as usize);
        }
        frame.render_widget(Paragraph::new(lines), chunks[1]);
    }
}
