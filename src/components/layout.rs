//! Layout calculations for the UI

use crate::model::LayoutMode;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of a bordered board item
pub const ITEM_HEIGHT: u16 = 3;

/// Game screen layout areas
pub struct BoardLayout {
    pub header: Rect,
    pub left: Rect,
    pub gutter: Rect,
    pub right: Rect,
    pub status: Rect,
    pub controls: Rect,
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

/// Calculate the game screen layout
///
/// The gutter between the columns is where connection lines are drawn, so
/// it is wider in the wide layout.
pub fn calculate_board_layout(area: Rect, mode: LayoutMode) -> BoardLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    let column_constraints = match mode {
        LayoutMode::Wide => [
            Constraint::Percentage(40),
            Constraint::Percentage(20),
            Constraint::Percentage(40),
        ],
        LayoutMode::Narrow => [
            Constraint::Percentage(49),
            Constraint::Percentage(2),
            Constraint::Percentage(49),
        ],
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(column_constraints)
        .split(rows[1]);

    BoardLayout {
        header: rows[0],
        left: columns[0],
        gutter: columns[1],
        right: columns[2],
        status: rows[2],
        controls: rows[3],
    }
}

/// Stack `count` items from the top of a column
///
/// Items are bordered (three rows) when they all fit, otherwise one row
/// each. Items that do not fit at all are left out.
pub fn stack_items(column: Rect, count: usize) -> Vec<Rect> {
    let height = if usize::from(column.height) >= count * usize::from(ITEM_HEIGHT) {
        ITEM_HEIGHT
    } else {
        1
    };

    (0..count)
        .map_while(|i| {
            let offset = u16::try_from(i).ok()?.checked_mul(height)?;
            if offset + height > column.height {
                return None;
            }
            Some(Rect::new(column.x, column.y + offset, column.width, height))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup() {
        let popup = centered_popup(Rect::new(0, 0, 100, 40), 60, 20);
        assert_eq!(popup, Rect::new(20, 10, 60, 20));

        let clamped = centered_popup(Rect::new(0, 0, 30, 10), 60, 20);
        assert_eq!(clamped, Rect::new(0, 0, 30, 10));
    }

    #[test]
    fn test_board_layout_columns_touch_gutter() {
        let layout = calculate_board_layout(Rect::new(0, 0, 120, 40), LayoutMode::Wide);
        assert_eq!(layout.left.x + layout.left.width, layout.gutter.x);
        assert_eq!(layout.gutter.x + layout.gutter.width, layout.right.x);
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.controls.height, 3);
        assert_eq!(layout.left.height, 35);
    }

    #[test]
    fn test_narrow_gutter_is_thin() {
        let wide = calculate_board_layout(Rect::new(0, 0, 90, 40), LayoutMode::Wide);
        let narrow = calculate_board_layout(Rect::new(0, 0, 90, 40), LayoutMode::Narrow);
        assert!(narrow.gutter.width < wide.gutter.width);
    }

    #[test]
    fn test_stack_items_bordered_when_they_fit() {
        let items = stack_items(Rect::new(2, 1, 30, 30), 10);
        assert_eq!(items.len(), 10);
        assert_eq!(items[0], Rect::new(2, 1, 30, 3));
        assert_eq!(items[9], Rect::new(2, 28, 30, 3));
    }

    #[test]
    fn test_stack_items_compact_when_short() {
        let items = stack_items(Rect::new(0, 0, 30, 12), 10);
        assert_eq!(items.len(), 10);
        assert!(items.iter().all(|r| r.height == 1));

        let clipped = stack_items(Rect::new(0, 0, 30, 6), 10);
        assert_eq!(clipped.len(), 6);
    }
}
