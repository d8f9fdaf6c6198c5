//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Minimum width of one card column, borders included
pub const CARD_MIN_WIDTH: u16 = 34;

/// Height of one card row, borders included
pub const CARD_HEIGHT: u16 = 7;

/// Main screen layout areas
pub struct MainLayout {
    pub header: Rect,
    pub error: Option<Rect>,
    pub results: Rect,
    pub pagination: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout
pub fn calculate_main_layout(area: Rect, has_error: bool) -> MainLayout {
    let mut constraints = vec![Constraint::Length(3)];
    if has_error {
        constraints.push(Constraint::Length(3));
    }
    constraints.extend([
        Constraint::Min(0),
        Constraint::Length(3),
        Constraint::Length(1),
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    if has_error {
        MainLayout {
            header: chunks[0],
            error: Some(chunks[1]),
            results: chunks[2],
            pagination: chunks[3],
            help: chunks[4],
        }
    } else {
        MainLayout {
            header: chunks[0],
            error: None,
            results: chunks[1],
            pagination: chunks[2],
            help: chunks[3],
        }
    }
}

/// Number of card columns that fit in `width`
pub fn card_columns(width: u16) -> usize {
    (width / CARD_MIN_WIDTH).max(1) as usize
}

/// Split a row area into `columns` equal cells
pub fn card_row_cells(row: Rect, columns: usize) -> Vec<Rect> {
    let constraints: Vec<Constraint> = (0..columns)
        .map(|_| Constraint::Ratio(1, columns as u32))
        .collect();
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(row)
        .to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_popup(area, 40, 10);
        assert_eq!(popup, Rect::new(30, 15, 40, 10));

        let small = centered_popup(Rect::new(0, 0, 20, 5), 40, 10);
        assert_eq!(small.width, 20);
        assert_eq!(small.height, 5);
    }

    #[test]
    fn test_main_layout_with_and_without_error() {
        let area = Rect::new(0, 0, 120, 40);

        let layout = calculate_main_layout(area, false);
        assert!(layout.error.is_none());
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.results.height, 40 - 3 - 3 - 1);

        let layout = calculate_main_layout(area, true);
        assert_eq!(layout.error.map(|r| r.height), Some(3));
        assert_eq!(layout.results.height, 40 - 3 - 3 - 3 - 1);
    }

    #[test]
    fn test_card_columns() {
        assert_eq!(card_columns(10), 1);
        assert_eq!(card_columns(CARD_MIN_WIDTH * 3 + 5), 3);
        assert_eq!(card_row_cells(Rect::new(0, 0, 90, 7), 3).len(), 3);
    }
}
