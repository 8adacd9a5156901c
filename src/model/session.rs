//! Game session - the pairing state machine
//!
//! A session owns everything one game needs: the catalog, the shuffled
//! right column, the player's pairings, the current phase and the layout
//! mode. Transitions are plain methods that report whether anything
//! changed; out-of-phase calls are silent no-ops.

use super::catalog::{Catalog, EntityId};
use super::evaluation::{evaluate, Marks, Score};
use super::overlay::LayoutMode;
use super::pairing::{PairingState, RightRef};
use super::shuffle::right_display_order;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

/// Status text shown once the answer key is revealed
pub const ANSWER_KEY_TEXT: &str = "Answer Key Shown";

/// Selection phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing armed, board accepts selection
    Idle,
    /// A left item is waiting for its right item
    LeftArmed(EntityId),
    /// Answers were checked; board frozen until reset
    Checked(Score),
    /// Answer key is shown; board disabled until reset
    Revealed,
}

pub struct GameSession {
    catalog: Catalog,
    right_order: Vec<EntityId>,
    pairings: PairingState,
    phase: Phase,
    marks: Marks,
    layout: LayoutMode,
    breakpoint_px: u32,
    rng: StdRng,
}

impl GameSession {
    /// Create a session seeded from system entropy and start the first game
    pub fn new(catalog: Catalog, breakpoint_px: u32) -> Self {
        Self::with_rng(catalog, breakpoint_px, StdRng::from_entropy())
    }

    /// Create a session with a caller-supplied random source
    pub fn with_rng(catalog: Catalog, breakpoint_px: u32, rng: StdRng) -> Self {
        let mut session = Self {
            catalog,
            right_order: Vec::new(),
            pairings: PairingState::new(),
            phase: Phase::Idle,
            marks: Marks::default(),
            layout: LayoutMode::Wide,
            breakpoint_px,
            rng,
        };
        session.init_game();
        session
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Reshuffle the right column and clear all player state
    pub fn init_game(&mut self) {
        self.right_order = right_display_order(&self.catalog, &mut self.rng);
        self.reset_state();
        info!(order = ?self.right_order, "new game");
    }

    /// Clear cursor, pairings, marks and status; re-enable interaction
    pub fn reset_state(&mut self) {
        self.phase = Phase::Idle;
        self.pairings.clear();
        self.marks.clear();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Selection protocol
    // ─────────────────────────────────────────────────────────────────────────

    /// Arm a left item, or disarm it if it is already armed
    pub fn select_left(&mut self, id: EntityId) -> bool {
        if !self.is_interactive() || self.catalog.find(id).is_none() {
            return false;
        }

        self.phase = match self.phase {
            Phase::LeftArmed(armed) if armed == id => Phase::Idle,
            _ => Phase::LeftArmed(id),
        };
        debug!(id, phase = ?self.phase, "select left");
        true
    }

    /// Pair the armed left item with the right item in `slot`
    ///
    /// Does nothing when no left item is armed.
    pub fn select_right(&mut self, slot: usize) -> bool {
        let Phase::LeftArmed(left) = self.phase else {
            return false;
        };
        let Some(right) = self.right_ref(slot) else {
            return false;
        };

        let previous = self.pairings.insert(left, right);
        self.phase = Phase::Idle;
        debug!(left, right = right.id, slot, ?previous, "paired");
        true
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Evaluation
    // ─────────────────────────────────────────────────────────────────────────

    /// Mark every pairing and freeze the board
    ///
    /// Returns `None` once the answer key is shown.
    pub fn check_answers(&mut self) -> Option<Score> {
        if self.phase == Phase::Revealed {
            return None;
        }

        let evaluation = evaluate(&self.pairings, self.catalog.len());
        self.marks = evaluation.marks;
        self.phase = Phase::Checked(evaluation.score);
        info!(
            correct = evaluation.score.correct,
            total = evaluation.score.total,
            "answers checked"
        );
        Some(evaluation.score)
    }

    /// Replace the player's pairings with the answer key and lock the board
    pub fn reveal_answers(&mut self) -> Score {
        self.reset_state();

        for entity in self.catalog.entities() {
            if let Some(slot) = self.right_order.iter().position(|&id| id == entity.id) {
                self.pairings.insert(entity.id, RightRef { slot, id: entity.id });
            }
        }

        let evaluation = evaluate(&self.pairings, self.catalog.len());
        self.marks = evaluation.marks;
        self.phase = Phase::Revealed;
        info!("answer key shown");
        evaluation.score
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Layout
    // ─────────────────────────────────────────────────────────────────────────

    /// Record a new viewport width, returning true when the layout flips
    pub fn resize(&mut self, width_px: u32) -> bool {
        let layout = LayoutMode::for_width(width_px, self.breakpoint_px);
        if layout == self.layout {
            return false;
        }
        debug!(width_px, from = ?self.layout, to = ?layout, "layout mode changed");
        self.layout = layout;
        true
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn right_order(&self) -> &[EntityId] {
        &self.right_order
    }

    pub fn right_ref(&self, slot: usize) -> Option<RightRef> {
        self.right_order
            .get(slot)
            .map(|&id| RightRef { slot, id })
    }

    pub fn pairings(&self) -> &PairingState {
        &self.pairings
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn marks(&self) -> &Marks {
        &self.marks
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn armed(&self) -> Option<EntityId> {
        match self.phase {
            Phase::LeftArmed(id) => Some(id),
            _ => None,
        }
    }

    /// Whether the board accepts selection
    pub fn is_interactive(&self) -> bool {
        matches!(self.phase, Phase::Idle | Phase::LeftArmed(_))
    }

    /// Whether items are disabled (answer key shown)
    pub fn is_disabled(&self) -> bool {
        self.phase == Phase::Revealed
    }

    /// Text for the status line, if one is showing
    pub fn status_text(&self) -> Option<String> {
        match self.phase {
            Phase::Checked(score) => Some(score.to_string()),
            Phase::Revealed => Some(ANSWER_KEY_TEXT.to_string()),
            Phase::Idle | Phase::LeftArmed(_) => None,
        }
    }
}
