//! Layout helpers shared across components.

use ratatui::layout::Rect;

/// A rect of at most `width`×`height`, centered inside `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width - w) / 2;
    let y = area.y + (area.height - h) / 2;
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centering_clamps_to_the_area() {
        let area = Rect::new(10, 5, 40, 20);
        let rect = centered_rect(area, 20, 10);
        assert_eq!(rect, Rect::new(20, 10, 20, 10));

        let oversized = centered_rect(area, 100, 100);
        assert_eq!(oversized, area);
    }
}
