//! Root application component
//!
//! The App owns the game session and navigation state and routes events to
//! the child component for the current view. Game rules live in
//! `GameSession`; the App only decides which transition an Action means.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_board_screen, BoardComponent, BoardRenderContext, HelpDialog, TitleComponent,
};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::ui::{Screen, Side, ViewStack};
use crate::model::{Catalog, GameSession};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};
use tracing::{debug, info};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

pub struct App {
    pub config: Config,

    /// The game being played
    pub session: GameSession,

    /// Full-screen view history
    pub views: ViewStack,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub title: TitleComponent,
    pub board: BoardComponent,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create an App playing the digestive-system catalog
    pub fn new(config: Config) -> Result<App> {
        let session = GameSession::new(Catalog::digestive_system()?, config.breakpoint_px);
        Ok(Self::with_session(config, session))
    }

    pub fn with_session(config: Config, session: GameSession) -> App {
        let views = if config.show_title {
            ViewStack::new(Screen::Title)
        } else {
            ViewStack::new(Screen::Game)
        };

        App {
            board: BoardComponent::new(session.catalog().len()),
            session,
            views,
            modals: ModalStack::new(),
            should_quit: false,
            title: TitleComponent,
            help_dialog: HelpDialog::default(),
            config,
        }
    }

    /// Go back a view, or close when there is nothing to go back to
    fn exit_view(&mut self) {
        match self.views.back() {
            Some(screen) => info!(?screen, "back to previous view"),
            None => {
                info!("closing");
                self.should_quit = true;
            }
        }
    }

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        if let Some(modal) = self.modals.top().cloned() {
            return self.handle_modal_key_event(&modal, key);
        }

        match self.views.current() {
            Screen::Title => self.title.handle_key_event(key),
            Screen::Game => self.board.handle_key_event(key),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if !self.modals.is_empty() {
            return Ok(None);
        }

        match self.views.current() {
            Screen::Title => self.title.handle_mouse_event(mouse),
            Screen::Game => self.board.handle_mouse_event(mouse),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action != Action::Tick {
            debug!(%action, "update");
        }

        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {}
            Action::Resize(columns, _) => {
                if self.session.resize(self.config.viewport_width_px(columns)) {
                    info!(columns, layout = ?self.session.layout(), "layout switched");
                }
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::StartGame => {
                if self.views.current() == Screen::Title {
                    self.session.init_game();
                    self.views.push(Screen::Game);
                }
            }
            Action::Exit => self.exit_view(),

            // ─────────────────────────────────────────────────────────────────
            // Board Navigation (delegate to BoardComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::FocusNext | Action::FocusPrev | Action::SwitchColumn => {
                return self.board.update(action);
            }
            Action::ActivateFocused => {
                return Ok(self.board.focused_action(&self.session));
            }

            // ─────────────────────────────────────────────────────────────────
            // Game
            // ─────────────────────────────────────────────────────────────────
            Action::SelectLeft(id) => {
                if self.session.select_left(id) {
                    if let Some(row) = self.session.catalog().position(id) {
                        self.board.focus_on(Side::Left, row);
                    }
                }
            }
            Action::SelectRight(slot) => {
                if self.session.select_right(slot) {
                    self.board.focus_on(Side::Right, slot);
                }
            }
            Action::CheckAnswers => {
                self.session.check_answers();
            }
            Action::Reset => self.session.init_game(),
            Action::RevealAnswers => {
                self.session.reveal_answers();
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.views.current() {
            Screen::Title => self.title.draw(frame, area)?,
            Screen::Game => {
                let ctx = BoardRenderContext {
                    session: &self.session,
                };
                draw_board_screen(frame, area, &mut self.board, &ctx)?;
            }
        }

        if let Some(Modal::Help) = self.modals.top() {
            self.help_dialog.draw(frame, area)?;
        }

        Ok(())
    }
}
