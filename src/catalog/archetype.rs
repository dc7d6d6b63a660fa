//! Archetypes - static card definitions.
//!
//! An `Archetype` holds the unchanging data of a card plus its optional
//! hooks. Hooks are `Rc` closures so archetypes stay cheap to clone; the
//! engine is single-threaded by design (see the crate docs), so no
//! `Send`/`Sync` bound is imposed.

use crate::core::card::{CardInstance, CardKind, FollowerStats, InstanceId};
use crate::effects::{ActHook, ActionScope, HookFlow, PlayHook};

/// Static definition of a card.
///
/// Create via the kind constructors and builder methods:
///
/// ```
/// use scenario_ccg::catalog::Archetype;
///
/// let fairy = Archetype::follower("Fairy", 1, 1, 1).with_rush();
/// assert_eq!(fairy.cost, 1);
/// ```
#[derive(Clone)]
pub struct Archetype {
    /// Archetype name - unique within a catalog, the reconstruction key.
    pub name: String,

    /// Play cost in play points.
    pub cost: i64,

    /// Variant tag.
    pub kind: CardKind,

    /// Base follower stats; `None` for spells and amulets.
    pub stats: Option<FollowerStats>,

    /// Hook invoked when played from hand. `None` means the default
    /// behavior: succeed with no side effects beyond placement.
    pub on_play: Option<PlayHook>,

    /// Hook invoked when activated on the field. `None` means the card
    /// cannot be activated.
    pub on_act: Option<ActHook>,
}

impl std::fmt::Debug for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Archetype")
            .field("name", &self.name)
            .field("cost", &self.cost)
            .field("kind", &self.kind)
            .field("stats", &self.stats)
            .field("on_play", &self.on_play.as_ref().map(|_| "..."))
            .field("on_act", &self.on_act.as_ref().map(|_| "..."))
            .finish()
    }
}

impl Archetype {
    /// Create a follower archetype.
    #[must_use]
    pub fn follower(name: impl Into<String>, cost: i64, attack: i64, hp: i64) -> Self {
        Self {
            name: name.into(),
            cost,
            kind: CardKind::Follower,
            stats: Some(FollowerStats::new(attack, hp)),
            on_play: None,
            on_act: None,
        }
    }

    /// Create a spell archetype.
    ///
    /// Spells carry no hooks in this model: they resolve from hand with
    /// no effect hook and never occupy a zone afterwards.
    #[must_use]
    pub fn spell(name: impl Into<String>, cost: i64) -> Self {
        Self {
            name: name.into(),
            cost,
            kind: CardKind::Spell,
            stats: None,
            on_play: None,
            on_act: None,
        }
    }

    /// Create an amulet archetype.
    #[must_use]
    pub fn amulet(name: impl Into<String>, cost: i64) -> Self {
        Self {
            name: name.into(),
            cost,
            kind: CardKind::Amulet,
            stats: None,
            on_play: None,
            on_act: None,
        }
    }

    /// Grant the rush keyword (builder pattern). Followers only.
    #[must_use]
    pub fn with_rush(mut self) -> Self {
        if let Some(stats) = &mut self.stats {
            stats.rush = true;
        }
        self
    }

    /// Grant the storm keyword (builder pattern). Followers only.
    #[must_use]
    pub fn with_storm(mut self) -> Self {
        if let Some(stats) = &mut self.stats {
            stats.storm = true;
        }
        self
    }

    /// Attach a play-from-hand hook (builder pattern).
    #[must_use]
    pub fn with_play_hook(
        mut self,
        hook: impl Fn(&CardInstance, &mut ActionScope<'_>) -> HookFlow + 'static,
    ) -> Self {
        self.on_play = Some(std::rc::Rc::new(hook));
        self
    }

    /// Attach an activate-on-field hook (builder pattern).
    #[must_use]
    pub fn with_act_hook(
        mut self,
        hook: impl Fn(&CardInstance, &mut ActionScope<'_>) -> HookFlow + 'static,
    ) -> Self {
        self.on_act = Some(std::rc::Rc::new(hook));
        self
    }

    /// Create an instance of this archetype with the given ID.
    ///
    /// Copies the data half only; hooks stay on the archetype.
    #[must_use]
    pub fn instantiate(&self, id: InstanceId) -> CardInstance {
        CardInstance {
            id,
            name: self.name.clone(),
            cost: self.cost,
            kind: self.kind,
            stats: self.stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follower_constructor() {
        let archetype = Archetype::follower("Carbuncle", 2, 2, 2);

        assert_eq!(archetype.kind, CardKind::Follower);
        assert_eq!(archetype.stats, Some(FollowerStats::new(2, 2)));
        assert!(archetype.on_play.is_none());
        assert!(archetype.on_act.is_none());
    }

    #[test]
    fn test_keywords() {
        let archetype = Archetype::follower("Fairy", 1, 1, 1).with_rush();
        assert!(archetype.stats.unwrap().rush);
        assert!(!archetype.stats.unwrap().storm);

        let archetype = Archetype::follower("Charging Beetle", 3, 0, 2).with_storm();
        assert!(archetype.stats.unwrap().storm);
    }

    #[test]
    fn test_keywords_noop_for_amulet() {
        let archetype = Archetype::amulet("Glowing Rock", 2).with_rush();
        assert!(archetype.stats.is_none());
    }

    #[test]
    fn test_instantiate_copies_data_only() {
        let archetype = Archetype::follower("Fairy", 1, 1, 1)
            .with_play_hook(|_, _| HookFlow::Done);

        let card = archetype.instantiate(InstanceId::new(5));

        assert_eq!(card.id, InstanceId::new(5));
        assert_eq!(card.name, "Fairy");
        assert_eq!(card.cost, 1);
        assert_eq!(card.kind, CardKind::Follower);
        assert_eq!(card.stats, Some(FollowerStats::new(1, 1)));
    }

    #[test]
    fn test_spell_has_no_stats() {
        let card = Archetype::spell("Ambush", 1).instantiate(InstanceId::new(1));
        assert_eq!(card.stats, None);
        assert!(!card.persists_on_field());
    }
}
