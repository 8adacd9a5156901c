//! Component trait - Interface for UI components
//!
//! A component turns input events into Actions and draws itself. Game
//! state is owned by the App; components that need it receive it at draw
//! time rather than holding their own copy.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

pub trait Component {
    /// Convert a key event into a semantic Action
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Convert a mouse event into a semantic Action
    ///
    /// Hit testing uses the regions recorded during the last draw.
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let _ = mouse;
        Ok(None)
    }

    /// Update local presentation state; may return a follow-up Action
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Render into `area`
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
