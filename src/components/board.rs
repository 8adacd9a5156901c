//! Board component - the two matching columns and the pairing overlay
//!
//! Owns keyboard focus and the hit regions recorded during the last draw.
//! Game state stays in the `GameSession`, which is passed in at draw time.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{calculate_board_layout, stack_items, BoardLayout};
use crate::model::overlay::{ConnectionLine, Highlight};
use crate::model::ui::{Focus, Side};
use crate::model::{compute_overlay, EntityId, GameSession, Mark, Overlay};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const CONTROL_BUTTONS: [(&str, Action); 5] = [
    (" Check [c] ", Action::CheckAnswers),
    (" Reset [r] ", Action::Reset),
    (" Reveal [s] ", Action::RevealAnswers),
    (" Exit [q] ", Action::Exit),
    (" Help [?] ", Action::OpenHelp),
];

/// Board component for the game view
pub struct BoardComponent {
    /// Keyboard focus
    pub focus: Focus,
    /// Number of items in each column
    rows: usize,
    /// Left items as drawn, with the entity each shows
    left_regions: Vec<(Rect, EntityId)>,
    /// Right items as drawn, with their display slot
    right_regions: Vec<(Rect, usize)>,
    /// Control bar buttons as drawn
    button_regions: Vec<(Rect, Action)>,
}

impl BoardComponent {
    pub fn new(rows: usize) -> Self {
        Self {
            focus: Focus::default(),
            rows,
            left_regions: Vec::new(),
            right_regions: Vec::new(),
            button_regions: Vec::new(),
        }
    }

    /// The selection the focused item stands for
    pub fn focused_action(&self, session: &GameSession) -> Option<Action> {
        match self.focus.side {
            Side::Left => session
                .catalog()
                .get(self.focus.row)
                .map(|entity| Action::SelectLeft(entity.id)),
            Side::Right => session.right_ref(self.focus.row).map(|r| Action::SelectRight(r.slot)),
        }
    }

    /// Move focus onto an item that was just selected by mouse
    pub fn focus_on(&mut self, side: Side, row: usize) {
        if row < self.rows {
            self.focus = Focus { side, row };
        }
    }

    #[cfg(test)]
    pub fn left_regions(&self) -> &[(Rect, EntityId)] {
        &self.left_regions
    }

    #[cfg(test)]
    pub fn right_regions(&self) -> &[(Rect, usize)] {
        &self.right_regions
    }

    #[cfg(test)]
    pub fn button_regions(&self) -> &[(Rect, Action)] {
        &self.button_regions
    }

    fn hit_test(&self, column: u16, row: u16) -> Option<Action> {
        let hits = |rect: &Rect| {
            column >= rect.x
                && column < rect.x + rect.width
                && row >= rect.y
                && row < rect.y + rect.height
        };

        if let Some((_, id)) = self.left_regions.iter().find(|(rect, _)| hits(rect)) {
            return Some(Action::SelectLeft(*id));
        }
        if let Some((_, slot)) = self.right_regions.iter().find(|(rect, _)| hits(rect)) {
            return Some(Action::SelectRight(*slot));
        }
        self.button_regions
            .iter()
            .find(|(rect, _)| hits(rect))
            .map(|(_, action)| action.clone())
    }
}

impl Component for BoardComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::FocusNext),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::FocusPrev),
            KeyCode::Char('h')
            | KeyCode::Char('l')
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Tab
            | KeyCode::BackTab => Some(Action::SwitchColumn),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ActivateFocused),
            KeyCode::Char('c') => Some(Action::CheckAnswers),
            KeyCode::Char('r') => Some(Action::Reset),
            KeyCode::Char('s') => Some(Action::RevealAnswers),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Exit),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Ok(self.hit_test(mouse.column, mouse.row)),
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::FocusNext => self.focus.next(self.rows),
            Action::FocusPrev => self.focus.prev(self.rows),
            Action::SwitchColumn => self.focus.switch_side(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_board_screen which takes the session
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the board
pub struct BoardRenderContext<'a> {
    pub session: &'a GameSession,
}

/// Draw the game screen
pub fn draw_board_screen(
    frame: &mut Frame,
    area: Rect,
    board: &mut BoardComponent,
    ctx: &BoardRenderContext,
) -> Result<()> {
    let session = ctx.session;
    let layout = calculate_board_layout(area, session.layout());

    let left_rects = stack_items(layout.left, session.catalog().len());
    let right_rects = stack_items(layout.right, session.right_order().len());
    let overlay = compute_overlay(session, &left_rects, &right_rects);

    board.left_regions = left_rects
        .iter()
        .zip(session.catalog().entities())
        .map(|(rect, entity)| (*rect, entity.id))
        .collect();
    board.right_regions = right_rects.iter().copied().zip(0..).collect();

    render_header(frame, &layout, session);

    for (row, (rect, entity)) in left_rects.iter().zip(session.catalog().entities()).enumerate() {
        let look = ItemLook {
            armed: session.armed() == Some(entity.id),
            focused: session.is_interactive()
                && board.focus == Focus { side: Side::Left, row },
            mark: session.marks().left(entity.id),
            highlight: overlay.highlight_for_left(entity.id),
        };
        render_item(frame, *rect, &entity.term, &look);
    }

    for (slot, rect) in right_rects.iter().enumerate() {
        let id = session.right_order().get(slot).copied();
        let Some(entity) = id.and_then(|id| session.catalog().find(id)) else {
            continue;
        };
        let look = ItemLook {
            armed: false,
            focused: session.is_interactive()
                && board.focus == Focus { side: Side::Right, row: slot },
            mark: session.marks().right(slot),
            highlight: overlay.highlight_for_slot(slot),
        };
        render_item(frame, *rect, &entity.description, &look);
    }

    if let Overlay::Lines(lines) = &overlay {
        render_lines(frame, layout.gutter, lines);
    }

    render_status(frame, layout.status, session);
    board.button_regions = render_controls(frame, layout.controls, session);

    Ok(())
}

fn render_header(frame: &mut Frame, layout: &BoardLayout, session: &GameSession) {
    let label = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    frame.render_widget(
        Paragraph::new(Span::styled("Organs", label)),
        Rect::new(layout.left.x, layout.header.y, layout.left.width, 1),
    );
    frame.render_widget(
        Paragraph::new(Span::styled("Functions", label)),
        Rect::new(layout.right.x, layout.header.y, layout.right.width, 1),
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("showing {} ", session.layout().name()),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Right),
        layout.header,
    );
}

struct ItemLook<'a> {
    armed: bool,
    focused: bool,
    mark: Option<Mark>,
    highlight: Option<&'a Highlight>,
}

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::Correct => Color::Green,
        Mark::Wrong => Color::Red,
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

fn render_item(frame: &mut Frame, rect: Rect, text: &str, look: &ItemLook) {
    let mut text_style = Style::default().fg(Color::White);
    let mut border_style = Style::default().fg(Color::DarkGray);

    if let Some(highlight) = look.highlight {
        text_style = text_style.bg(rgb(highlight.background)).fg(Color::Black);
        border_style = border_style.fg(rgb(highlight.border));
    }
    if let Some(mark) = look.mark {
        if look.highlight.is_some() {
            // pair colour stays; correctness shows in the text only
            text_style = text_style.add_modifier(Modifier::BOLD);
        } else {
            text_style = text_style.fg(mark_color(mark));
            border_style = border_style.fg(mark_color(mark));
        }
    }
    if look.armed {
        border_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        text_style = text_style.add_modifier(Modifier::BOLD);
    }
    if look.focused {
        text_style = text_style.add_modifier(Modifier::REVERSED);
    }

    let prefix = match look.mark {
        Some(mark) => format!("{} ", mark.icon()),
        None if look.armed => "▶ ".to_string(),
        None => String::new(),
    };

    let bordered = rect.height >= 3;
    let inner_width = if bordered {
        rect.width.saturating_sub(2)
    } else {
        rect.width
    };
    let label = fit_to_width(&format!("{}{}", prefix, text), usize::from(inner_width));
    let line = Line::from(Span::styled(label, text_style));

    let mut paragraph = Paragraph::new(line);
    if let Some(highlight) = look.highlight {
        paragraph = paragraph.style(Style::default().bg(rgb(highlight.background)));
    }
    if bordered {
        paragraph = paragraph.block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    }
    frame.render_widget(paragraph, rect);
}

/// Draw connection lines across the gutter
///
/// Line coordinates are in frame cells; the canvas y axis points up, so
/// rows are negated.
fn render_lines(frame: &mut Frame, gutter: Rect, lines: &[ConnectionLine]) {
    if gutter.width == 0 || gutter.height == 0 || lines.is_empty() {
        return;
    }

    let x_bounds = [f64::from(gutter.x), f64::from(gutter.x + gutter.width)];
    let y_bounds = [
        -f64::from(gutter.y + gutter.height),
        -f64::from(gutter.y),
    ];

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            for line in lines {
                let color = match line.mark {
                    Some(mark) => mark_color(mark),
                    None => Color::Cyan,
                };
                ctx.draw(&CanvasLine {
                    x1: line.x1,
                    y1: -line.y1,
                    x2: line.x2,
                    y2: -line.y2,
                    color,
                });
            }
        });

    frame.render_widget(canvas, gutter);
}

fn render_status(frame: &mut Frame, area: Rect, session: &GameSession) {
    let line = match session.status_text() {
        Some(text) => {
            let color = if session.is_disabled() {
                Color::Green
            } else {
                Color::Yellow
            };
            Line::from(Span::styled(
                text,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
        }
        None => {
            let hint = if session.armed().is_some() {
                "Now pick the matching function"
            } else {
                "Pick an organ, then the function it performs"
            };
            Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)))
        }
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// Draw the control bar, returning the button regions
fn render_controls(frame: &mut Frame, area: Rect, session: &GameSession) -> Vec<(Rect, Action)> {
    let total_width: u16 = CONTROL_BUTTONS
        .iter()
        .map(|(label, _)| label.width() as u16 + 3)
        .sum();
    let mut x = area.x + area.width.saturating_sub(total_width) / 2;
    let mut regions = Vec::with_capacity(CONTROL_BUTTONS.len());

    for (label, action) in CONTROL_BUTTONS.iter() {
        let width = label.width() as u16 + 2;
        if x + width > area.x + area.width {
            break;
        }
        let rect = Rect::new(x, area.y, width, area.height);

        let enabled = !(*action == Action::CheckAnswers && session.is_disabled());
        let color = if !enabled {
            Color::DarkGray
        } else if *action == Action::Exit {
            Color::Red
        } else {
            Color::Cyan
        };

        let button = Paragraph::new(Span::styled(
            *label,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
        frame.render_widget(button, rect);

        regions.push((rect, action.clone()));
        x += width + 1;
    }

    regions
}

/// Truncate `text` to at most `width` columns, marking the cut with an ellipsis
fn fit_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Catalog;
    use crossterm::event::KeyModifiers;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::{backend::TestBackend, Terminal};

    fn session() -> GameSession {
        GameSession::with_rng(Catalog::digestive_system().unwrap(), 768, StdRng::seed_from_u64(9))
    }

    fn draw(board: &mut BoardComponent, session: &GameSession, width: u16, height: u16) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                let ctx = BoardRenderContext { session };
                draw_board_screen(frame, area, board, &ctx).unwrap();
            })
            .unwrap();
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_fit_to_width() {
        assert_eq!(fit_to_width("Liver", 10), "Liver");
        assert_eq!(fit_to_width("Small Intestine", 8), "Small I…");
        assert_eq!(fit_to_width("Mouth", 0), "");
    }

    #[test]
    fn test_draw_records_item_regions() {
        let session = session();
        let mut board = BoardComponent::new(10);
        draw(&mut board, &session, 120, 40);

        assert_eq!(board.left_regions().len(), 10);
        assert_eq!(board.right_regions().len(), 10);
        assert_eq!(board.button_regions().len(), CONTROL_BUTTONS.len());

        let ids: Vec<_> = board.left_regions().iter().map(|(_, id)| *id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_click_maps_to_selection() {
        let session = session();
        let mut board = BoardComponent::new(10);
        draw(&mut board, &session, 120, 40);

        let (left, id) = board.left_regions()[2];
        let action = board.handle_mouse_event(click(left.x + 1, left.y + 1)).unwrap();
        assert_eq!(action, Some(Action::SelectLeft(id)));

        let (right, slot) = board.right_regions()[5];
        let action = board.handle_mouse_event(click(right.x + 1, right.y)).unwrap();
        assert_eq!(action, Some(Action::SelectRight(slot)));
    }

    #[test]
    fn test_click_on_buttons() {
        let session = session();
        let mut board = BoardComponent::new(10);
        draw(&mut board, &session, 120, 40);

        for (rect, action) in board.button_regions().to_vec() {
            let hit = board.handle_mouse_event(click(rect.x + 1, rect.y + 1)).unwrap();
            assert_eq!(hit, Some(action));
        }
    }

    #[test]
    fn test_click_in_gutter_does_nothing() {
        let session = session();
        let mut board = BoardComponent::new(10);
        draw(&mut board, &session, 120, 40);

        let (left, _) = board.left_regions()[0];
        let gutter_x = left.x + left.width + 2;
        assert_eq!(board.handle_mouse_event(click(gutter_x, left.y)).unwrap(), None);
    }

    #[test]
    fn test_focused_action_follows_focus() {
        let session = session();
        let mut board = BoardComponent::new(10);
        board.update(Action::FocusNext).unwrap();
        assert_eq!(board.focused_action(&session), Some(Action::SelectLeft(2)));

        board.update(Action::SwitchColumn).unwrap();
        assert_eq!(board.focused_action(&session), Some(Action::SelectRight(1)));
    }

    #[test]
    fn test_key_bindings() {
        let mut board = BoardComponent::new(10);
        let key = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        assert_eq!(board.handle_key_event(key('c')).unwrap(), Some(Action::CheckAnswers));
        assert_eq!(board.handle_key_event(key('s')).unwrap(), Some(Action::RevealAnswers));
        assert_eq!(board.handle_key_event(key('r')).unwrap(), Some(Action::Reset));
        assert_eq!(board.handle_key_event(key('q')).unwrap(), Some(Action::Exit));
        assert_eq!(
            board
                .handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
                .unwrap(),
            Some(Action::ActivateFocused)
        );
    }

    #[test]
    fn test_narrow_and_short_terminal_still_draws() {
        let mut session = session();
        session.resize(80 * 8);
        session.select_left(1);
        session.select_right(0);
        let mut board = BoardComponent::new(10);
        draw(&mut board, &session, 80, 20);

        assert_eq!(board.left_regions().len(), 10);
        assert!(board.left_regions().iter().all(|(r, _)| r.height == 1));
    }
}
