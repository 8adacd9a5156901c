//! Pairing state - the player's chosen links from terms to descriptions

use super::catalog::EntityId;

/// A right-column item: its display slot and the entity it describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RightRef {
    pub slot: usize,
    pub id: EntityId,
}

/// One link from a left item to a right item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pairing {
    pub left: EntityId,
    pub right: RightRef,
}

impl Pairing {
    pub fn is_correct(&self) -> bool {
        self.left == self.right.id
    }
}

/// Insertion-ordered map from left id to right item
///
/// Each left id appears at most once. Re-pairing a left id replaces its
/// right item in place, so the pairing keeps its original position (and
/// therefore its highlight hue).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairingState {
    pairings: Vec<Pairing>,
}

impl PairingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair `left` with `right`, returning the right item it previously held
    pub fn insert(&mut self, left: EntityId, right: RightRef) -> Option<RightRef> {
        match self.pairings.iter_mut().find(|p| p.left == left) {
            Some(existing) => Some(std::mem::replace(&mut existing.right, right)),
            None => {
                self.pairings.push(Pairing { left, right });
                None
            }
        }
    }

    #[cfg(test)]
    pub fn get(&self, left: EntityId) -> Option<RightRef> {
        self.pairings.iter().find(|p| p.left == left).map(|p| p.right)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pairing> {
        self.pairings.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }

    pub fn clear(&mut self) {
        self.pairings.clear();
    }
}
