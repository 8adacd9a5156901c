//! Action enum - All possible application actions
//!
//! Components turn key and mouse events into Actions; the App applies
//! them to the game session and navigation state.

use crate::model::EntityId;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick while no event arrives
    Tick,
    /// Terminal was resized (columns, rows)
    Resize(u16, u16),
    /// Quit immediately
    ForceQuit,
    /// Leave the title view and start playing
    StartGame,
    /// Go back to the previous view, or close when there is none
    Exit,

    // ─────────────────────────────────────────────────────────────────────────
    // Board Navigation
    // ─────────────────────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,
    SwitchColumn,
    /// Select whatever item has keyboard focus
    ActivateFocused,

    // ─────────────────────────────────────────────────────────────────────────
    // Game
    // ─────────────────────────────────────────────────────────────────────────
    /// Arm or disarm a left item by entity id
    SelectLeft(EntityId),
    /// Pair the armed left item with the right item in this display slot
    SelectRight(usize),
    CheckAnswers,
    /// Start a new game (reshuffle and clear)
    Reset,
    RevealAnswers,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    OpenHelp,
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::StartGame => write!(f, "StartGame"),
            Action::Exit => write!(f, "Exit"),
            Action::FocusNext => write!(f, "FocusNext"),
            Action::FocusPrev => write!(f, "FocusPrev"),
            Action::SwitchColumn => write!(f, "SwitchColumn"),
            Action::ActivateFocused => write!(f, "ActivateFocused"),
            Action::SelectLeft(id) => write!(f, "SelectLeft({})", id),
            Action::SelectRight(slot) => write!(f, "SelectRight({})", slot),
            Action::CheckAnswers => write!(f, "CheckAnswers"),
            Action::Reset => write!(f, "Reset"),
            Action::RevealAnswers => write!(f, "RevealAnswers"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}
