//! Title view shown before the game
//!
//! Exit from the game comes back here; Exit from here closes the app.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

#[derive(Default)]
pub struct TitleComponent;

impl TitleComponent {
    fn get_logo() -> Vec<&'static str> {
        vec![
            "   .-'''-.          .--------.   ",
            "  /  .-.  \\        /  .--.   \\   ",
            " |  (   )  |  ==  |  (    )   |  ",
            "  \\  '-'  /        \\  '--'   /   ",
            "   '-...-'          '-------'    ",
        ]
    }
}

impl Component for TitleComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::StartGame),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Exit),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Ok(Some(Action::StartGame)),
            _ => Ok(None),
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default(), area);

        let logo = Self::get_logo();
        let logo_height = logo.len() as u16;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length((area.height.saturating_sub(logo_height + 6)) / 2),
                Constraint::Length(logo_height),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let logo_lines: Vec<Line> = logo
            .iter()
            .map(|line| {
                Line::from(Span::styled(
                    *line,
                    Style::default().fg(Color::Rgb(232, 120, 120)),
                ))
            })
            .collect();
        frame.render_widget(
            Paragraph::new(logo_lines).alignment(Alignment::Center),
            chunks[1],
        );

        let title = Line::from(vec![
            Span::styled(
                "organ",
                Style::default()
                    .fg(Color::Rgb(232, 120, 120))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "-match",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(title).alignment(Alignment::Center),
            chunks[3],
        );

        frame.render_widget(
            Paragraph::new(Span::styled(
                "Match each organ of the digestive system to what it does",
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center),
            chunks[4],
        );

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    " Enter ",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Span::raw("Start  "),
                Span::styled(
                    " ? ",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::raw("Help  "),
                Span::styled(
                    " q ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw("Quit"),
            ]))
            .alignment(Alignment::Center),
            chunks[6],
        );

        Ok(())
    }
}
