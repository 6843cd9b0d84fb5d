//! Text bar charts for the dashboard pages.
//!
//! Horizontal bars scale to the widest value in the series; severity
//! breakdowns render as stacked colored segments.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use samix_types::{IncidentBucket, SeriesPoint};
use samix_util::truncate_with_ellipsis;

use crate::ui::theme::{Theme, theme_helpers as th};

const LABEL_WIDTH: usize = 18;

fn bar(len: usize) -> String {
    "█".repeat(len)
}

fn scaled(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    (((value / max) * width as f64).round() as usize).clamp(1, width)
}

/// Renders a titled horizontal bar chart of labeled values.
pub fn render_bar_list(frame: &mut Frame, rect: Rect, theme: &dyn Theme, title: &str, points: &[SeriesPoint]) {
    let block = th::block(theme, Some(title), false);
    let inner = block.inner(rect);
    frame.render_widget(block, rect);
    if inner.height == 0 || inner.width as usize <= LABEL_WIDTH + 8 {
        return;
    }

    let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    let bar_width = inner.width as usize - LABEL_WIDTH - 8;
    let mut lines = Vec::with_capacity(points.len());
    for point in points.iter().take(inner.height as usize) {
        let label = truncate_with_ellipsis(&point.name, LABEL_WIDTH);
        let len = scaled(point.value, max, bar_width);
        lines.push(Line::from(vec![
            Span::styled(format!("{:<width$} ", label, width = LABEL_WIDTH), theme.text_secondary_style()),
            Span::styled(bar(len), theme.accent_primary_style()),
            Span::styled(format!(" {}", point.value as i64), theme.text_muted_style()),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Renders the weekly incident series with per-severity stacked segments.
pub fn render_severity_buckets(frame: &mut Frame, rect: Rect, theme: &dyn Theme, title: &str, buckets: &[IncidentBucket]) {
    let block = th::block(theme, Some(title), false);
    let inner = block.inner(rect);
    frame.render_widget(block, rect);
    if inner.height == 0 || inner.width < 16 {
        return;
    }

    let max = buckets.iter().map(|b| b.total()).max().unwrap_or(0) as f64;
    let bar_width = inner.width as usize - 10;
    let mut lines = Vec::with_capacity(buckets.len());
    for bucket in buckets.iter().take(inner.height as usize) {
        let total = bucket.total() as f64;
        let full = scaled(total, max, bar_width);
        let segment = |count: u32| -> usize {
            if total <= 0.0 {
                0
            } else {
                ((count as f64 / total) * full as f64).round() as usize
            }
        };
        let critical = segment(bucket.critical);
        let high = segment(bucket.high);
        let medium = segment(bucket.medium);
        let low = full.saturating_sub(critical + high + medium);
        lines.push(Line::from(vec![
            Span::styled(format!("{:<4}", bucket.name), theme.text_secondary_style()),
            Span::styled(bar(critical), theme.status_error()),
            Span::styled(bar(high), theme.status_warning()),
            Span::styled(bar(medium), theme.status_info()),
            Span::styled(bar(low), theme.text_muted_style()),
            Span::styled(format!(" {}", bucket.total()), theme.text_muted_style()),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaling_clamps_to_the_available_width() {
        assert_eq!(scaled(0.0, 10.0, 20), 0);
        assert_eq!(scaled(10.0, 10.0, 20), 20);
        assert_eq!(scaled(5.0, 10.0, 20), 10);
        // small non-zero values still draw one cell
        assert_eq!(scaled(0.1, 100.0, 20), 1);
    }
}
