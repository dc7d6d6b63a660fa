//! The standard archetype set.
//!
//! Sixteen archetypes matching the sample scenario list: a spread of
//! followers with rush/storm keywords, vanilla spells, and two amulets.
//! Two of them carry hooks and exercise the whole effect pipeline:
//!
//! - **Fairy Tamer** spawns two Fairy tokens into hand when played.
//! - **Elder Staff** is an activated amulet that bounces a chosen own
//!   follower or amulet back to hand, asking the player to pick it.

use crate::effects::{HookFlow, SelectionRequest};
use crate::zones::Area;

use super::archetype::Archetype;
use super::registry::CardCatalog;

/// Build the standard catalog.
#[must_use]
pub fn standard_set() -> CardCatalog {
    let mut catalog = CardCatalog::new();

    catalog.register(Archetype::spell("Mystic Insight", 0));
    catalog.register(Archetype::follower("Fairy", 1, 1, 1).with_rush());
    catalog.register(Archetype::follower("Meadow Sprite", 1, 1, 1));
    catalog.register(Archetype::spell("Muster", 1));
    catalog.register(Archetype::spell("Forewarning", 1));
    catalog.register(Archetype::spell("Ambush", 1));
    catalog.register(Archetype::spell("Deadly Arrow", 1));
    catalog.register(Archetype::follower("Lily", 2, 1, 3));

    catalog.register(
        Archetype::follower("Fairy Tamer", 2, 1, 1).with_play_hook(|_, scope| {
            // Token adds may be rejected by hand capacity; the effect
            // still succeeds with however many fit.
            scope.spawn("Fairy", Area::Hand);
            scope.spawn("Fairy", Area::Hand);
            HookFlow::Done
        }),
    );

    catalog.register(Archetype::follower("Carbuncle", 2, 2, 2));
    catalog.register(Archetype::spell("Flower Garden", 2));
    catalog.register(Archetype::amulet("Glowing Rock", 2));
    catalog.register(Archetype::follower("Charging Beetle", 3, 0, 2).with_storm());

    catalog.register(
        Archetype::amulet("Elder Staff", 3).with_act_hook(|card, _| {
            let request = SelectionRequest::cards(Area::OwnField, 1)
                .without(card.id)
                .cancelable();

            HookFlow::NeedTargets(
                request,
                Box::new(|scope, selection| match selection {
                    None => HookFlow::Cancel,
                    Some(ids) => {
                        for &id in ids {
                            scope.move_card(id, Area::OwnField, Area::Hand);
                        }
                        HookFlow::Done
                    }
                }),
            )
        }),
    );

    catalog.register(Archetype::follower("Backwoods Guardian", 5, 3, 3));
    catalog.register(Archetype::follower("Veteran Sentinel", 8, 4, 4));

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardKind;

    #[test]
    fn test_standard_set_size() {
        let catalog = standard_set();
        assert_eq!(catalog.len(), 16);
    }

    #[test]
    fn test_hooked_archetypes() {
        let catalog = standard_set();

        let tamer = catalog.get("Fairy Tamer").unwrap();
        assert!(tamer.on_play.is_some());
        assert!(tamer.on_act.is_none());

        let staff = catalog.get("Elder Staff").unwrap();
        assert_eq!(staff.kind, CardKind::Amulet);
        assert!(staff.on_act.is_some());
    }

    #[test]
    fn test_keyword_spread() {
        let catalog = standard_set();

        assert!(catalog.get("Fairy").unwrap().stats.unwrap().rush);
        assert!(catalog.get("Charging Beetle").unwrap().stats.unwrap().storm);
        assert!(!catalog.get("Lily").unwrap().stats.unwrap().rush);
    }

    #[test]
    fn test_kind_spread() {
        let catalog = standard_set();

        let spells = catalog.iter().filter(|a| a.kind == CardKind::Spell).count();
        let amulets = catalog.iter().filter(|a| a.kind == CardKind::Amulet).count();
        let followers = catalog.iter().filter(|a| a.kind == CardKind::Follower).count();

        assert_eq!(spells, 6);
        assert_eq!(amulets, 2);
        assert_eq!(followers, 8);
    }
}
