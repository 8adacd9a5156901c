//! Help dialog component
//!
//! Explains the rules and lists every control.

use super::layout::centered_popup;
use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

const MAX_WIDTH: u16 = 72;

#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let dialog_area = centered_popup(
            area,
            area.width.saturating_sub(8).min(MAX_WIDTH),
            area.height.saturating_sub(4),
        );
        frame.render_widget(Clear, dialog_area);

        let content = build_help_content();
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" How to play ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.len() + 2)),
            Style::default().fg(Color::DarkGray),
        )));
    };

    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:14}", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(Color::White)),
        ]));
    };

    let add_text = |lines: &mut Vec<Line<'static>>, text: &str| {
        lines.push(Line::from(Span::styled(
            format!("  {}", text),
            Style::default().fg(Color::White),
        )));
    };

    add_section(&mut lines, "Rules");
    add_text(&mut lines, "Pick an organ on the left, then the function it performs");
    add_text(&mut lines, "on the right. Picking the same organ again cancels it;");
    add_text(&mut lines, "pairing an organ twice replaces its first choice.");
    add_text(&mut lines, "Check freezes the board until you start a new game.");

    add_section(&mut lines, "Board");
    add_shortcut(&mut lines, "j / ↓", "Next item");
    add_shortcut(&mut lines, "k / ↑", "Previous item");
    add_shortcut(&mut lines, "h / l / Tab", "Switch column");
    add_shortcut(&mut lines, "Enter / Space", "Select focused item");
    add_shortcut(&mut lines, "Mouse click", "Select item or button");

    add_section(&mut lines, "Game");
    add_shortcut(&mut lines, "c", "Check answers");
    add_shortcut(&mut lines, "r", "New game (reshuffle)");
    add_shortcut(&mut lines, "s", "Show answer key");
    add_shortcut(&mut lines, "q / Esc", "Exit");
    add_shortcut(&mut lines, "Ctrl+c", "Quit immediately");

    add_section(&mut lines, "Display");
    add_text(&mut lines, "Wide terminals draw a line for each pair;");
    add_text(&mut lines, "narrow ones give each pair its own colour.");

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_help_scroll_and_close() {
        let mut dialog = HelpDialog::default();
        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(dialog.handle_key_event(down).unwrap(), None);
        assert_eq!(dialog.scroll_offset, 1);

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(dialog.handle_key_event(esc).unwrap(), Some(Action::CloseModal));
    }

    #[test]
    fn test_help_dialog_is_centered() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut dialog = HelpDialog::default();
        terminal
            .draw(|frame| {
                let area = frame.area();
                dialog.draw(frame, area).unwrap();
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        // 72 wide, 26 high, centred in 100x30
        assert_eq!(buffer[(14, 2)].symbol(), "┌");
        assert_eq!(buffer[(85, 27)].symbol(), "┘");
        assert_eq!(buffer[(13, 2)].symbol(), " ");
    }
}
