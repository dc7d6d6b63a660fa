//! Combat resolution between field occupants and leaders.
//!
//! Leader attacks are one-sided: the attacker deals its attack to the
//! enemy leader and takes nothing back. Card-vs-card combat applies
//! mutual damage simultaneously; each side is then destroyed
//! independently if its own remaining hit points dropped to zero or
//! below, so an even trade removes both.

use tracing::debug;

use crate::core::card::InstanceId;
use crate::core::state::GameState;
use crate::zones::Area;

/// What an attack is aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackTarget {
    /// The opposing leader.
    Leader,
    /// A card on the opponent's field.
    Card(InstanceId),
}

/// Execute an attack from an own-field follower.
///
/// The attacker must be a follower on the own field; a card target must
/// be a follower on the opponent's field. If either side fails to
/// resolve, the call is a no-op and returns `false`.
pub fn execute_attack(
    state: &mut GameState,
    attacker_id: InstanceId,
    target: AttackTarget,
) -> bool {
    let Some(attacker) = state.zones.find(attacker_id, Area::OwnField) else {
        return false;
    };
    let Some(attacker_stats) = attacker.stats else {
        return false;
    };

    match target {
        AttackTarget::Leader => {
            state.change_enemy_hp(-attacker_stats.attack);
            true
        }
        AttackTarget::Card(target_id) => {
            let Some(defender) = state.zones.find(target_id, Area::OpponentField) else {
                return false;
            };
            let Some(defender_stats) = defender.stats else {
                return false;
            };

            // Simultaneous mutual damage.
            if let Some(stats) = state
                .zones
                .find_mut(target_id, Area::OpponentField)
                .and_then(|c| c.stats.as_mut())
            {
                stats.hp -= attacker_stats.attack;
            }
            if let Some(stats) = state
                .zones
                .find_mut(attacker_id, Area::OwnField)
                .and_then(|c| c.stats.as_mut())
            {
                stats.hp -= defender_stats.attack;
            }

            // Each side evaluated independently after its own damage.
            if state
                .zones
                .find(target_id, Area::OpponentField)
                .is_some_and(|c| c.hp() <= 0)
            {
                state.zones.remove_card(target_id, Area::OpponentField);
                debug!(%target_id, "defender destroyed");
            }
            if state
                .zones
                .find(attacker_id, Area::OwnField)
                .is_some_and(|c| c.hp() <= 0)
            {
                state.zones.remove_card(attacker_id, Area::OwnField);
                debug!(%attacker_id, "attacker destroyed");
            }

            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Archetype;

    fn put_follower(state: &mut GameState, name: &str, attack: i64, hp: i64, area: Area) -> InstanceId {
        let id = state.zones.alloc_id();
        let card = Archetype::follower(name, 1, attack, hp).instantiate(id);
        assert!(state.zones.add_card(card, area));
        id
    }

    #[test]
    fn test_leader_attack_is_one_sided() {
        let mut state = GameState::new();
        let attacker = put_follower(&mut state, "Carbuncle", 2, 2, Area::OwnField);

        assert!(execute_attack(&mut state, attacker, AttackTarget::Leader));

        assert_eq!(state.enemy_hp, 18);
        // Attacker untouched.
        assert_eq!(state.zones.find(attacker, Area::OwnField).unwrap().hp(), 2);
    }

    #[test]
    fn test_mutual_damage_survivors() {
        let mut state = GameState::new();
        let attacker = put_follower(&mut state, "Lily", 1, 3, Area::OwnField);
        let defender = put_follower(&mut state, "Carbuncle", 2, 2, Area::OpponentField);

        assert!(execute_attack(&mut state, attacker, AttackTarget::Card(defender)));

        assert_eq!(state.zones.find(attacker, Area::OwnField).unwrap().hp(), 1);
        assert_eq!(
            state.zones.find(defender, Area::OpponentField).unwrap().hp(),
            1
        );
    }

    #[test]
    fn test_trade_destroys_both() {
        let mut state = GameState::new();
        let attacker = put_follower(&mut state, "Attacker", 2, 2, Area::OwnField);
        let defender = put_follower(&mut state, "Defender", 3, 1, Area::OpponentField);

        assert!(execute_attack(&mut state, attacker, AttackTarget::Card(defender)));

        assert!(state.zones.find(attacker, Area::OwnField).is_none());
        assert!(state.zones.find(defender, Area::OpponentField).is_none());
        assert_eq!(state.zones.len(Area::OwnField), 0);
        assert_eq!(state.zones.len(Area::OpponentField), 0);
    }

    #[test]
    fn test_one_sided_destruction() {
        let mut state = GameState::new();
        let attacker = put_follower(&mut state, "Veteran Sentinel", 4, 4, Area::OwnField);
        let defender = put_follower(&mut state, "Fairy", 1, 1, Area::OpponentField);

        assert!(execute_attack(&mut state, attacker, AttackTarget::Card(defender)));

        assert_eq!(state.zones.find(attacker, Area::OwnField).unwrap().hp(), 3);
        assert!(state.zones.find(defender, Area::OpponentField).is_none());
    }

    #[test]
    fn test_unresolvable_ids_are_noop() {
        let mut state = GameState::new();
        let attacker = put_follower(&mut state, "Fairy", 1, 1, Area::OwnField);

        assert!(!execute_attack(
            &mut state,
            InstanceId::new(999),
            AttackTarget::Leader
        ));
        assert!(!execute_attack(
            &mut state,
            attacker,
            AttackTarget::Card(InstanceId::new(999))
        ));

        assert_eq!(state.enemy_hp, 20);
        assert_eq!(state.zones.find(attacker, Area::OwnField).unwrap().hp(), 1);
    }

    #[test]
    fn test_amulet_cannot_fight() {
        let mut state = GameState::new();
        let attacker = put_follower(&mut state, "Fairy", 1, 1, Area::OwnField);

        let rock_id = state.zones.alloc_id();
        let rock = Archetype::amulet("Glowing Rock", 2).instantiate(rock_id);
        state.zones.add_card(rock, Area::OpponentField);

        assert!(!execute_attack(&mut state, attacker, AttackTarget::Card(rock_id)));
        assert!(state.zones.find(rock_id, Area::OpponentField).is_some());
    }
}
