//! Save/load collaborator: JSON serialization with archetype
//! reconstruction.
//!
//! Saving is verbatim serde: instances carry only plain data once
//! stripped of behavior. Loading is two-phase:
//!
//! 1. Parse the blob into a `GameState` of bare instances.
//! 2. Rebuild every card in the catalog, hand, and both fields from its
//!    archetype, using the registered name as the discriminator.
//!
//! An unrecognized name fails the whole load - there is no partial or
//! best-effort reconstruction. Names are validated across all zones
//! before any instance is rebuilt.

use thiserror::Error;
use tracing::debug;

use crate::catalog::CardCatalog;
use crate::core::state::GameState;
use crate::zones::Area;

/// Zones whose cards are reconstructed from archetypes on load.
const RECONSTRUCTED_AREAS: [Area; 4] = [
    Area::Catalog,
    Area::Hand,
    Area::OwnField,
    Area::OpponentField,
];

/// Failure modes of [`load_state`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// The blob was not a valid serialized game state.
    #[error("failed to parse saved scenario: {0}")]
    Parse(#[from] serde_json::Error),

    /// A saved card names an archetype the catalog does not know.
    #[error("unknown card archetype: {0:?}")]
    UnknownArchetype(String),
}

/// Serialize the full game state.
pub fn save_state(state: &GameState) -> Result<String, serde_json::Error> {
    serde_json::to_string(state)
}

/// Deserialize a game state and reattach card behavior.
///
/// Every card reference in the reconstructed zones becomes a full
/// archetype instance with a freshly minted ID and base stats, exactly
/// as if promoted from the catalog. The removed zone is carried as
/// plain data.
pub fn load_state(catalog: &CardCatalog, blob: &str) -> Result<GameState, LoadError> {
    let mut state: GameState = serde_json::from_str(blob)?;

    // Validate every name first so a bad blob mutates nothing.
    for area in RECONSTRUCTED_AREAS {
        for card in state.zones.cards(area) {
            if !catalog.contains(&card.name) {
                return Err(LoadError::UnknownArchetype(card.name.clone()));
            }
        }
    }

    for area in RECONSTRUCTED_AREAS {
        let names: Vec<String> = state
            .zones
            .cards(area)
            .iter()
            .map(|c| c.name.clone())
            .collect();

        let rebuilt = names
            .iter()
            .map(|name| {
                let id = state.zones.alloc_id();
                catalog
                    .instantiate(name, id)
                    .expect("name validated against catalog")
            })
            .collect();

        state.zones.replace_area(area, rebuilt);
    }

    debug!(scenario = %state.scenario_name, "scenario loaded");
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::standard_set;
    use crate::effects::EffectEngine;

    #[test]
    fn test_round_trip_preserves_counters() {
        let engine = EffectEngine::new(standard_set());
        let mut state = engine.new_game();
        state.my_pp = 7;
        state.combo = 3;
        state.enemy_hp = 12;
        state.scenario_name = "lethal puzzle".to_string();

        let blob = save_state(&state).unwrap();
        let loaded = load_state(engine.catalog(), &blob).unwrap();

        assert_eq!(loaded.my_pp, 7);
        assert_eq!(loaded.combo, 3);
        assert_eq!(loaded.enemy_hp, 12);
        assert_eq!(loaded.scenario_name, "lethal puzzle");
    }

    #[test]
    fn test_reconstruction_rebuilds_archetypes() {
        let engine = EffectEngine::new(standard_set());
        let mut state = engine.new_game();

        let fairy = state
            .zones
            .cards(Area::Catalog)
            .iter()
            .find(|c| c.name == "Fairy")
            .map(|c| c.id)
            .unwrap();
        state.zones.move_card(fairy, Area::Catalog, Area::OwnField);

        // Scratch the copy so reconstruction has something to reset.
        let copy_id = state.zones.cards(Area::OwnField)[0].id;
        state
            .zones
            .find_mut(copy_id, Area::OwnField)
            .unwrap()
            .stats
            .as_mut()
            .unwrap()
            .hp = -3;

        let blob = save_state(&state).unwrap();
        let loaded = load_state(engine.catalog(), &blob).unwrap();

        let rebuilt = &loaded.zones.cards(Area::OwnField)[0];
        assert_eq!(rebuilt.name, "Fairy");
        // Fresh instance: base stats and a newly minted ID.
        assert_eq!(rebuilt.hp(), 1);
        assert_ne!(rebuilt.id, copy_id);
    }

    #[test]
    fn test_unknown_archetype_fails_loudly() {
        let engine = EffectEngine::new(standard_set());
        let mut state = engine.new_game();

        let fairy = state
            .zones
            .cards(Area::Catalog)
            .iter()
            .find(|c| c.name == "Fairy")
            .map(|c| c.id)
            .unwrap();
        state.zones.move_card(fairy, Area::Catalog, Area::Hand);
        let copy_id = state.zones.cards(Area::Hand)[0].id;
        state.zones.find_mut(copy_id, Area::Hand).unwrap().name = "Forgotten One".to_string();

        let blob = save_state(&state).unwrap();
        let result = load_state(engine.catalog(), &blob);

        assert!(matches!(
            result,
            Err(LoadError::UnknownArchetype(name)) if name == "Forgotten One"
        ));
    }

    #[test]
    fn test_garbage_blob_fails_parse() {
        let catalog = standard_set();
        assert!(matches!(
            load_state(&catalog, "not json"),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn test_loaded_ids_unique_within_zones() {
        let engine = EffectEngine::new(standard_set());
        let mut state = engine.new_game();

        // Two copies of the same template in hand.
        let fairy = state
            .zones
            .cards(Area::Catalog)
            .iter()
            .find(|c| c.name == "Fairy")
            .map(|c| c.id)
            .unwrap();
        state.zones.move_card(fairy, Area::Catalog, Area::Hand);
        state.zones.move_card(fairy, Area::Catalog, Area::Hand);

        let blob = save_state(&state).unwrap();
        let loaded = load_state(engine.catalog(), &blob).unwrap();

        let hand = loaded.zones.cards(Area::Hand);
        assert_eq!(hand.len(), 2);
        assert_ne!(hand[0].id, hand[1].id);
    }
}
