//! Model layer - game state and the pure logic around it
//!
//! - `GameSession` - pairing state machine, scoring and layout flag
//! - `overlay` - line geometry and pair colours for the renderer
//! - `ModalStack` / `ViewStack` - navigation state

pub mod catalog;
pub mod evaluation;
pub mod modal;
pub mod overlay;
pub mod pairing;
pub mod session;
pub mod shuffle;
pub mod ui;

pub use catalog::{Catalog, EntityId};
pub use evaluation::Mark;
pub use overlay::{compute_overlay, LayoutMode, Overlay};
pub use session::GameSession;
