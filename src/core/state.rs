//! Game state: the full scenario aggregate.
//!
//! `GameState` owns everything a scenario needs: both life totals, play
//! points, the combo counter, the evolve counters, and the zone store.
//! It is passed by exclusive mutable reference into the engine's entry
//! points; nothing here is global.
//!
//! Life totals are never clamped. A non-positive total is a terminal
//! condition observable via [`GameState::outcome`].

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::zones::ZoneStore;

/// Default leader hit points.
pub const DEFAULT_MAX_HP: i64 = 20;
/// Default play point ceiling.
pub const DEFAULT_MAX_PP: i64 = 10;
/// Default evolve point allowance.
pub const DEFAULT_EVOLVE_POINTS: i64 = 2;

/// Terminal result of a scenario.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// Enemy leader's hit points reached zero.
    Victory,
    /// Own leader's hit points reached zero.
    Defeat,
}

/// Full scenario state.
///
/// Serializes verbatim; instances inside the zones are plain data, so
/// saving needs no special handling. Loading must reattach behavior via
/// the catalog (see `persist`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Display name of the loaded scenario.
    pub scenario_name: String,

    /// Own leader hit points. Never clamped.
    pub my_hp: i64,

    /// Current play points.
    pub my_pp: i64,

    /// Whether the extra play point has been granted this game.
    pub extra_pp: bool,

    /// Remaining evolve points.
    pub evolve_points: i64,

    /// Remaining super-evolve points.
    pub super_evolve_points: i64,

    /// Successful plays this turn, readable by hooks.
    pub combo: u32,

    /// Enemy leader hit points. Never clamped.
    pub enemy_hp: i64,

    /// The five zones and their capacity limits.
    pub zones: ZoneStore,

    /// Leader hit point ceiling.
    pub max_hp: i64,

    /// Play point ceiling.
    pub max_pp: i64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create an empty state with standard limits and no cards anywhere.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scenario_name: "sample".to_string(),
            my_hp: DEFAULT_MAX_HP,
            my_pp: 0,
            extra_pp: false,
            evolve_points: DEFAULT_EVOLVE_POINTS,
            super_evolve_points: 0,
            combo: 0,
            enemy_hp: DEFAULT_MAX_HP,
            zones: ZoneStore::new(),
            max_hp: DEFAULT_MAX_HP,
            max_pp: DEFAULT_MAX_PP,
        }
    }

    /// Apply a delta to the enemy leader's hit points.
    ///
    /// Negative deltas are damage. The total is not clamped; crossing
    /// zero is logged as the terminal condition.
    pub fn change_enemy_hp(&mut self, delta: i64) {
        self.enemy_hp += delta;
        if self.enemy_hp <= 0 {
            info!(enemy_hp = self.enemy_hp, "game over: victory");
        }
    }

    /// Apply a delta to the own leader's hit points.
    pub fn change_my_hp(&mut self, delta: i64) {
        self.my_hp += delta;
        if self.my_hp <= 0 {
            info!(my_hp = self.my_hp, "game over: defeat");
        }
    }

    /// Check whether either leader has fallen.
    ///
    /// Victory is checked first: a simultaneous zero counts as a win for
    /// the scenario player.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.enemy_hp <= 0 {
            Some(GameOutcome::Victory)
        } else if self.my_hp <= 0 {
            Some(GameOutcome::Defeat)
        } else {
            None
        }
    }

    /// Set the remaining evolve points.
    pub fn set_evolve_points(&mut self, points: i64) {
        self.evolve_points = points;
    }

    /// Set the remaining super-evolve points.
    pub fn set_super_evolve_points(&mut self, points: i64) {
        self.super_evolve_points = points;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let state = GameState::new();

        assert_eq!(state.my_hp, 20);
        assert_eq!(state.enemy_hp, 20);
        assert_eq!(state.my_pp, 0);
        assert_eq!(state.combo, 0);
        assert_eq!(state.evolve_points, 2);
        assert_eq!(state.outcome(), None);
    }

    #[test]
    fn test_hp_not_clamped() {
        let mut state = GameState::new();

        state.change_enemy_hp(-25);
        assert_eq!(state.enemy_hp, -5);
        assert_eq!(state.outcome(), Some(GameOutcome::Victory));
    }

    #[test]
    fn test_defeat() {
        let mut state = GameState::new();

        state.change_my_hp(-20);
        assert_eq!(state.my_hp, 0);
        assert_eq!(state.outcome(), Some(GameOutcome::Defeat));
    }

    #[test]
    fn test_healing_past_terminal() {
        let mut state = GameState::new();

        state.change_enemy_hp(-20);
        assert_eq!(state.outcome(), Some(GameOutcome::Victory));

        // Totals are raw numbers; a later heal undoes the condition.
        state.change_enemy_hp(5);
        assert_eq!(state.outcome(), None);
    }

    #[test]
    fn test_evolve_point_setters() {
        let mut state = GameState::new();

        state.set_evolve_points(1);
        state.set_super_evolve_points(3);

        assert_eq!(state.evolve_points, 1);
        assert_eq!(state.super_evolve_points, 3);
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut state = GameState::new();
        state.my_pp = 4;
        state.combo = 2;

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.my_pp, 4);
        assert_eq!(deserialized.combo, 2);
        assert_eq!(deserialized.scenario_name, state.scenario_name);
    }
}
