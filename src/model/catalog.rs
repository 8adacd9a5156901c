//! Catalog of pairable entities
//!
//! The catalog order is the left-column display order.

use crate::error::CatalogError;
use std::collections::HashSet;

/// Stable identifier shared by a term and its matching description
pub type EntityId = u32;

/// A term and the description it matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub id: EntityId,
    pub term: String,
    pub description: String,
}

impl Entity {
    pub fn new(id: EntityId, term: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            term: term.into(),
            description: description.into(),
        }
    }
}

/// Ordered, immutable set of entities with unique ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entities: Vec<Entity>,
}

const DIGESTIVE_SYSTEM: [(EntityId, &str, &str); 10] = [
    (1, "Mouth", "Chews food and mixes it with saliva"),
    (2, "Salivary Glands", "Produces a liquid that makes food wet"),
    (3, "Oesophagus", "A tube that carries food to the stomach"),
    (4, "Stomach", "A muscular bag that churns and digests food"),
    (5, "Liver", "Makes bile to help digest fats"),
    (6, "Pancreas", "Makes juices to break down sugars and fats"),
    (7, "Small Intestine", "Absorbs nutrients into the blood"),
    (8, "Large Intestine", "Absorbs water from undigested food"),
    (9, "Rectum", "Stores waste before it leaves the body"),
    (10, "Anus", "Opening where waste leaves the body"),
];

impl Catalog {
    /// Build a catalog, rejecting empty lists and duplicate ids
    pub fn new(entities: Vec<Entity>) -> Result<Self, CatalogError> {
        if entities.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(entities.len());
        for entity in &entities {
            if !seen.insert(entity.id) {
                return Err(CatalogError::DuplicateId(entity.id));
            }
        }

        Ok(Self { entities })
    }

    /// The organs of the digestive system and what each one does
    pub fn digestive_system() -> Result<Self, CatalogError> {
        Self::new(
            DIGESTIVE_SYSTEM
                .iter()
                .map(|(id, term, description)| Entity::new(*id, *term, *description))
                .collect(),
        )
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    pub fn find(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Left-column position of an entity
    pub fn position(&self, id: EntityId) -> Option<usize> {
        self.entities.iter().position(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digestive_system_has_ten_unique_entities() {
        let catalog = Catalog::digestive_system().unwrap();
        assert_eq!(catalog.len(), 10);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = Catalog::digestive_system().unwrap();
        assert_eq!(catalog.get(0).map(|e| e.term.as_str()), Some("Mouth"));
        assert_eq!(catalog.get(9).map(|e| e.term.as_str()), Some("Anus"));
        assert_eq!(catalog.position(4), Some(3));
    }

    #[test]
    fn test_catalog_rejects_duplicate_ids() {
        let result = Catalog::new(vec![
            Entity::new(1, "Heart", "Pumps blood"),
            Entity::new(1, "Lungs", "Exchange gases"),
        ]);
        assert_eq!(result, Err(CatalogError::DuplicateId(1)));
    }

    #[test]
    fn test_catalog_rejects_empty() {
        assert_eq!(Catalog::new(Vec::new()), Err(CatalogError::Empty));
    }

    #[test]
    fn test_find_by_id() {
        let catalog = Catalog::digestive_system().unwrap();
        assert_eq!(catalog.find(5).map(|e| e.term.as_str()), Some("Liver"));
        assert!(catalog.find(42).is_none());
    }
}
