//! Status badges: compact colored tags for severities and statuses.

use ratatui::style::Modifier;
use ratatui::text::Span;
use samix_types::{AgentStatus, IncidentStatus, RunStatus, Severity};

use crate::ui::theme::Theme;

/// Severity as a colored tag, highest severities hottest.
pub fn severity_badge(theme: &dyn Theme, severity: Severity) -> Span<'static> {
    let style = match severity {
        Severity::Critical => theme.status_error().add_modifier(Modifier::BOLD),
        Severity::High => theme.status_warning(),
        Severity::Medium => theme.status_info(),
        Severity::Low => theme.text_muted_style(),
    };
    Span::styled(format!("[{}]", severity.as_str()), style)
}

/// Incident lifecycle status as a colored tag.
pub fn status_badge(theme: &dyn Theme, status: IncidentStatus) -> Span<'static> {
    let style = match status {
        IncidentStatus::Open => theme.status_error(),
        IncidentStatus::Investigating => theme.status_warning(),
        IncidentStatus::Resolved => theme.status_success(),
    };
    Span::styled(format!("[{}]", status.as_str()), style)
}

/// Trace/step outcome as a colored tag.
pub fn run_status_badge(theme: &dyn Theme, status: RunStatus) -> Span<'static> {
    let style = match status {
        RunStatus::Success => theme.status_success(),
        RunStatus::Warning => theme.status_warning(),
        RunStatus::Error => theme.status_error(),
    };
    Span::styled(format!("[{}]", status.as_str()), style)
}

/// Agent operational state as a colored tag.
pub fn agent_status_badge(theme: &dyn Theme, status: AgentStatus) -> Span<'static> {
    let style = match status {
        AgentStatus::Active => theme.status_success(),
        AgentStatus::Degraded => theme.status_warning(),
        AgentStatus::Inactive => theme.text_muted_style(),
    };
    Span::styled(format!("[{}]", status.as_str()), style)
}
