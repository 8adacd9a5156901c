//! Scoring and correctness marks

use super::catalog::EntityId;
use super::pairing::PairingState;
use std::collections::HashMap;
use std::fmt;

/// Correctness marker carried by an item (and, in wide layout, a line)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Correct,
    Wrong,
}

impl Mark {
    pub fn from_correct(correct: bool) -> Self {
        if correct {
            Mark::Correct
        } else {
            Mark::Wrong
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Mark::Correct => "✓",
            Mark::Wrong => "✗",
        }
    }
}

/// Number of correct pairings out of the catalog size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You got {} out of {} correct!", self.correct, self.total)
    }
}

/// Per-item marks keyed by left entity id and right display slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Marks {
    left: HashMap<EntityId, Mark>,
    right: HashMap<usize, Mark>,
}

impl Marks {
    pub fn left(&self, id: EntityId) -> Option<Mark> {
        self.left.get(&id).copied()
    }

    pub fn right(&self, slot: usize) -> Option<Mark> {
        self.right.get(&slot).copied()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    pub fn clear(&mut self) {
        self.left.clear();
        self.right.clear();
    }
}

/// Result of comparing the pairings against the ground truth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub score: Score,
    pub marks: Marks,
}

/// Mark both sides of every pairing and count the correct ones.
///
/// Right items that nobody paired stay unmarked, even when they are the true
/// match of a wrongly paired left item.
pub fn evaluate(pairings: &PairingState, total: usize) -> Evaluation {
    let mut marks = Marks::default();
    let mut correct = 0;

    for pairing in pairings.iter() {
        let mark = Mark::from_correct(pairing.is_correct());
        if mark == Mark::Correct {
            correct += 1;
        }
        marks.left.insert(pairing.left, mark);
        marks.right.insert(pairing.right.slot, mark);
    }

    Evaluation {
        score: Score { correct, total },
        marks,
    }
}
