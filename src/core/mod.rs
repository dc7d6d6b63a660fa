//! Core engine types: card instances, instance IDs, the game state aggregate.
//!
//! Everything here is plain data. Behavior (hooks) lives in `catalog`
//! and is attached by archetype name lookup, never stored on instances.

pub mod card;
pub mod state;

pub use card::{CardInstance, CardKind, FollowerStats, InstanceId};
pub use state::{GameOutcome, GameState};
