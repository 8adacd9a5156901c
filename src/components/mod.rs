//! UI Components
//!
//! Each component turns input into Actions and renders itself.

pub mod board;
pub mod help_dialog;
pub mod layout;
pub mod title;

pub use board::{draw_board_screen, BoardComponent, BoardRenderContext};
pub use help_dialog::HelpDialog;
pub use title::TitleComponent;
