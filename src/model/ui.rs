//! UI state - presentation state separate from the game session

/// Board column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn other(&self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Keyboard focus on the board: a column and a row within it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Focus {
    pub side: Side,
    pub row: usize,
}

impl Default for Focus {
    fn default() -> Self {
        Self {
            side: Side::Left,
            row: 0,
        }
    }
}

impl Focus {
    pub fn next(&mut self, rows: usize) {
        if rows > 0 {
            self.row = (self.row + 1) % rows;
        }
    }

    pub fn prev(&mut self, rows: usize) {
        if rows > 0 {
            self.row = (self.row + rows - 1) % rows;
        }
    }

    pub fn switch_side(&mut self) {
        self.side = self.side.other();
    }
}

/// A full-screen view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Title,
    Game,
}

/// Navigation history of full-screen views
///
/// The bottom view is never popped: going back from it means closing
/// the application.
#[derive(Debug)]
pub struct ViewStack {
    views: Vec<Screen>,
}

impl ViewStack {
    pub fn new(root: Screen) -> Self {
        Self { views: vec![root] }
    }

    pub fn current(&self) -> Screen {
        self.views.last().copied().unwrap_or(Screen::Game)
    }

    pub fn push(&mut self, screen: Screen) {
        self.views.push(screen);
    }

    /// Whether there is a view to go back to
    pub fn can_go_back(&self) -> bool {
        self.views.len() > 1
    }

    /// Go back to the previous view; `None` when there is none
    pub fn back(&mut self) -> Option<Screen> {
        if !self.can_go_back() {
            return None;
        }
        self.views.pop();
        Some(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_wraps() {
        let mut focus = Focus::default();
        focus.prev(10);
        assert_eq!(focus.row, 9);
        focus.next(10);
        assert_eq!(focus.row, 0);
        focus.switch_side();
        assert_eq!(focus.side, Side::Right);
    }

    #[test]
    fn test_focus_with_no_rows() {
        let mut focus = Focus::default();
        focus.next(0);
        focus.prev(0);
        assert_eq!(focus.row, 0);
    }

    #[test]
    fn test_view_stack_back() {
        let mut views = ViewStack::new(Screen::Title);
        assert!(!views.can_go_back());
        views.push(Screen::Game);
        assert_eq!(views.current(), Screen::Game);

        assert_eq!(views.back(), Some(Screen::Title));
        assert_eq!(views.back(), None);
        assert_eq!(views.current(), Screen::Title);
    }
}
