//! Right-column shuffling

use super::catalog::{Catalog, EntityId};
use rand::Rng;

/// Fisher-Yates shuffle in place: walk from the last index down, swapping
/// each slot with a uniformly chosen slot at or below it.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// A fresh right-column display order for the catalog
pub fn right_display_order<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Vec<EntityId> {
    let mut order: Vec<EntityId> = catalog.entities().iter().map(|e| e.id).collect();
    shuffle(&mut order, rng);
    order
}
