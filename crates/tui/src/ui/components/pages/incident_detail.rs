//! Incident detail page behind `/incident/:id`.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use samix_types::Effect;
use samix_util::{format_timestamp, relative_from};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;
use crate::ui::widgets::badge;

/// Detail view for one incident. Unknown ids degrade to a short notice
/// instead of failing.
#[derive(Debug)]
pub struct IncidentDetailComponent {
    id: String,
}

impl IncidentDetailComponent {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

impl Component for IncidentDetailComponent {
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
        let anchor = app.ctx.store.anchor();

        let Some(incident) = app.ctx.store.incident(&self.id) else {
            let block = th::block(theme, Some("Incident"), true);
            let inner = block.inner(rect);
            frame.render_widget(block, rect);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!("No incident with id {}", self.id),
                    theme.text_muted_style(),
                )),
                inner,
            );
            return;
        };

        let block = th::block(theme, Some(incident.id.as_str()), true);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);
        if inner.height < 6 {
            return;
        }

        let chunks = Layout::vertical([Constraint::Length(7), Constraint::Min(3), Constraint::Length(4)]).split(inner);

        let summary = vec![
            Line::from(vec![
                Span::styled(incident.title.clone(), theme.accent_emphasis_style()),
            ]),
            Line::from(vec![
                badge::severity_badge(theme, incident.severity),
                Span::raw(" "),
                badge::status_badge(theme, incident.status),
                Span::raw("  "),
                Span::styled(incident.kind.label(), theme.text_secondary_style()),
            ]),
            Line::from(vec![
                Span::styled("agent      ", theme.text_muted_style()),
                Span::styled(incident.agent_name.clone(), theme.text_primary_style()),
            ]),
            Line::from(vec![
                Span::styled("first seen ", theme.text_muted_style()),
                Span::styled(format_timestamp(incident.first_seen), theme.text_primary_style()),
            ]),
            Line::from(vec![
                Span::styled("last seen  ", theme.text_muted_style()),
                Span::styled(
                    format!(
                        "{} ({})",
                        format_timestamp(incident.last_seen),
                        relative_from(anchor, incident.last_seen)
                    ),
                    theme.text_primary_style(),
                ),
            ]),
            Line::from(vec![
                Span::styled("events     ", theme.text_muted_style()),
                Span::styled(incident.event_count.to_string(), theme.text_primary_style()),
                Span::styled("   affected users ", theme.text_muted_style()),
                Span::styled(incident.affected_users.to_string(), theme.text_primary_style()),
            ]),
        ];
        frame.render_widget(Paragraph::new(summary), chunks[0]);

        frame.render_widget(
            Paragraph::new(incident.description.clone())
                .style(theme.text_primary_style())
                .wrap(Wrap { trim: false }),
            chunks[1],
        );

        if let Some(root_cause) = &incident.root_cause {
            let lines = vec![
                Line::from(Span::styled("Root cause", th::table_header_style(theme))),
                Line::from(Span::styled(root_cause.clone(), theme.text_secondary_style())),
            ];
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[2]);
        }
    }
}
