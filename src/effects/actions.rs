//! Hook flows and the capability-scoped action interface.
//!
//! Card hooks never touch `GameState` directly. They receive an
//! [`ActionScope`] - the only sanctioned way to mutate the game - and
//! report progress as a [`HookFlow`]:
//!
//! - `Done`: the effect succeeded; the engine finalizes the transition.
//! - `Cancel`: the effect aborts; nothing irreversible has happened yet.
//! - `NeedTargets`: the effect suspends. The engine stores the one-shot
//!   [`Resume`] continuation and returns control to the external actor;
//!   feeding a selection back in resumes the effect as a plain call.

use std::rc::Rc;

use smallvec::SmallVec;

use crate::catalog::CardCatalog;
use crate::core::card::{CardInstance, InstanceId};
use crate::core::state::GameState;
use crate::zones::Area;

use super::targeting::SelectionRequest;

/// Selected target IDs, as delivered to a resumed hook.
pub type SelectedIds = SmallVec<[InstanceId; 4]>;

/// One-shot continuation for a suspended hook.
///
/// `None` means the external actor canceled targeting; the hook must
/// treat that as "abort this effect". An empty slice is a valid "proceed
/// with no target" resolution - the distinction is per-card.
pub type Resume = Box<dyn FnOnce(&mut ActionScope<'_>, Option<&[InstanceId]>) -> HookFlow>;

/// Progress report from a card hook.
pub enum HookFlow {
    /// Effect finished; commit the transition.
    Done,
    /// Effect aborted; reject the transition with no mutation to undo.
    Cancel,
    /// Effect needs a player-chosen target before it can continue.
    NeedTargets(SelectionRequest, Resume),
}

impl std::fmt::Debug for HookFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HookFlow::Done => write!(f, "Done"),
            HookFlow::Cancel => write!(f, "Cancel"),
            HookFlow::NeedTargets(request, _) => {
                f.debug_tuple("NeedTargets").field(request).finish()
            }
        }
    }
}

/// Hook invoked when a card is played from hand.
pub type PlayHook = Rc<dyn Fn(&CardInstance, &mut ActionScope<'_>) -> HookFlow>;

/// Hook invoked when a card is activated on the field.
pub type ActHook = Rc<dyn Fn(&CardInstance, &mut ActionScope<'_>) -> HookFlow>;

/// The capability set exposed to card hooks.
///
/// Borrows the game state for exactly one hook invocation; a fresh scope
/// is built for every call and every resume.
pub struct ActionScope<'a> {
    catalog: &'a CardCatalog,
    state: &'a mut GameState,
}

impl<'a> ActionScope<'a> {
    pub(crate) fn new(catalog: &'a CardCatalog, state: &'a mut GameState) -> Self {
        Self { catalog, state }
    }

    /// Apply a delta to the enemy leader's hit points.
    pub fn change_opponent_hp(&mut self, delta: i64) {
        self.state.change_enemy_hp(delta);
    }

    /// Remove a card from an area. See [`ZoneStore::remove_card`].
    ///
    /// [`ZoneStore::remove_card`]: crate::zones::ZoneStore::remove_card
    pub fn remove_card(&mut self, id: InstanceId, area: Area) -> bool {
        self.state.zones.remove_card(id, area)
    }

    /// Add a card to an area. See [`ZoneStore::add_card`].
    ///
    /// [`ZoneStore::add_card`]: crate::zones::ZoneStore::add_card
    pub fn add_card(&mut self, card: CardInstance, area: Area) -> bool {
        self.state.zones.add_card(card, area)
    }

    /// Move a card between areas. See [`ZoneStore::move_card`].
    ///
    /// [`ZoneStore::move_card`]: crate::zones::ZoneStore::move_card
    pub fn move_card(&mut self, id: InstanceId, source: Area, target: Area) -> bool {
        self.state.zones.move_card(id, source, target)
    }

    /// Instantiate an archetype by name into an area.
    ///
    /// Returns the add result (`false` when the area rejects the card).
    /// An unregistered name is a programming error in the hook and
    /// panics.
    pub fn spawn(&mut self, name: &str, area: Area) -> bool {
        let archetype = self
            .catalog
            .get(name)
            .unwrap_or_else(|| panic!("hook spawned unregistered archetype {name:?}"));
        let id = self.state.zones.alloc_id();
        self.state.zones.add_card(archetype.instantiate(id), area)
    }

    /// Snapshot of the combo counter.
    #[must_use]
    pub fn combo_count(&self) -> u32 {
        self.state.combo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Archetype;

    fn catalog() -> CardCatalog {
        let mut catalog = CardCatalog::new();
        catalog.register(Archetype::follower("Fairy", 1, 1, 1));
        catalog
    }

    #[test]
    fn test_scope_spawns_by_name() {
        let catalog = catalog();
        let mut state = GameState::new();
        let mut scope = ActionScope::new(&catalog, &mut state);

        assert!(scope.spawn("Fairy", Area::Hand));
        assert!(scope.spawn("Fairy", Area::Hand));

        let hand = state.zones.cards(Area::Hand);
        assert_eq!(hand.len(), 2);
        assert_ne!(hand[0].id, hand[1].id);
    }

    #[test]
    #[should_panic(expected = "unregistered archetype")]
    fn test_spawn_unknown_name_panics() {
        let catalog = catalog();
        let mut state = GameState::new();
        let mut scope = ActionScope::new(&catalog, &mut state);

        scope.spawn("Nonesuch", Area::Hand);
    }

    #[test]
    fn test_scope_hp_and_combo() {
        let catalog = catalog();
        let mut state = GameState::new();
        state.combo = 3;

        let mut scope = ActionScope::new(&catalog, &mut state);
        scope.change_opponent_hp(-4);

        assert_eq!(scope.combo_count(), 3);
        assert_eq!(state.enemy_hp, 16);
    }
}
