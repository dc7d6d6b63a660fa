//! Catalog registry for archetype lookup.
//!
//! The `CardCatalog` stores all archetypes for a scenario, keyed by
//! name. The name is the serialization discriminator: load
//! reconstruction resolves every saved card through this table and fails
//! hard on an unknown name.

use rustc_hash::FxHashMap;

use crate::core::card::InstanceId;

use super::archetype::Archetype;

/// Registry of card archetypes.
///
/// ## Example
///
/// ```
/// use scenario_ccg::catalog::{Archetype, CardCatalog};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(Archetype::follower("Fairy", 1, 1, 1));
///
/// let found = catalog.get("Fairy").unwrap();
/// assert_eq!(found.cost, 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    archetypes: FxHashMap<String, Archetype>,
    /// Registration order, for seeding the catalog zone deterministically.
    order: Vec<String>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an archetype.
    ///
    /// Panics if an archetype with the same name already exists.
    pub fn register(&mut self, archetype: Archetype) {
        if self.archetypes.contains_key(&archetype.name) {
            panic!("Archetype {:?} already registered", archetype.name);
        }
        self.order.push(archetype.name.clone());
        self.archetypes.insert(archetype.name.clone(), archetype);
    }

    /// Get an archetype by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Archetype> {
        self.archetypes.get(name)
    }

    /// Check if a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.archetypes.contains_key(name)
    }

    /// Get the number of registered archetypes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }

    /// Iterate over archetypes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Archetype> {
        self.order.iter().map(|name| &self.archetypes[name])
    }

    /// Instantiate an archetype by name.
    ///
    /// Returns `None` for unknown names; callers decide whether that is
    /// recoverable (load reconstruction treats it as fatal).
    #[must_use]
    pub fn instantiate(&self, name: &str, id: InstanceId) -> Option<crate::core::CardInstance> {
        self.get(name).map(|archetype| archetype.instantiate(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut catalog = CardCatalog::new();
        catalog.register(Archetype::follower("Fairy", 1, 1, 1));

        assert!(catalog.contains("Fairy"));
        assert_eq!(catalog.get("Fairy").unwrap().cost, 1);
        assert!(catalog.get("Nonesuch").is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_name_panics() {
        let mut catalog = CardCatalog::new();
        catalog.register(Archetype::follower("Fairy", 1, 1, 1));
        catalog.register(Archetype::spell("Fairy", 0));
    }

    #[test]
    fn test_iteration_preserves_registration_order() {
        let mut catalog = CardCatalog::new();
        catalog.register(Archetype::spell("Mystic Insight", 0));
        catalog.register(Archetype::follower("Fairy", 1, 1, 1));
        catalog.register(Archetype::amulet("Glowing Rock", 2));

        let names: Vec<_> = catalog.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Mystic Insight", "Fairy", "Glowing Rock"]);
    }

    #[test]
    fn test_instantiate_by_name() {
        let mut catalog = CardCatalog::new();
        catalog.register(Archetype::follower("Fairy", 1, 1, 1));

        let card = catalog.instantiate("Fairy", InstanceId::new(9)).unwrap();
        assert_eq!(card.name, "Fairy");
        assert_eq!(card.id, InstanceId::new(9));

        assert!(catalog.instantiate("Nonesuch", InstanceId::new(10)).is_none());
    }
}
