//! Headline metric cards for the dashboard pages.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use samix_types::{ChangeDirection, Metric};

use crate::ui::theme::{Theme, theme_helpers as th};

/// Renders one metric card: label, value, and period-over-period change.
pub fn render_metric_card(frame: &mut Frame, rect: Rect, theme: &dyn Theme, metric: &Metric) {
    let block = th::block(theme, None, false);
    let inner = block.inner(rect);
    frame.render_widget(block, rect);
    if inner.height == 0 {
        return;
    }

    let mut lines = vec![
        Line::from(Span::styled(metric.label.clone(), theme.text_muted_style())),
        Line::from(Span::styled(format_value(metric.value), theme.accent_emphasis_style())),
    ];
    lines.push(change_line(theme, metric));
    frame.render_widget(Paragraph::new(lines), inner);
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.1}")
    }
}

fn change_line(theme: &dyn Theme, metric: &Metric) -> Line<'static> {
    match (metric.change_pct, metric.direction) {
        (Some(pct), Some(ChangeDirection::Increase)) => {
            Line::from(Span::styled(format!("↑ {pct:+.0}%"), theme.status_warning()))
        }
        (Some(pct), Some(ChangeDirection::Decrease)) => {
            Line::from(Span::styled(format!("↓ {pct:+.0}%"), theme.status_success()))
        }
        _ => Line::from(Span::styled("—", theme.text_muted_style())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_values_drop_the_decimal() {
        assert_eq!(format_value(12.0), "12");
        assert_eq!(format_value(4.2), "4.2");
        assert_eq!(format_value(0.0), "0");
    }
}
