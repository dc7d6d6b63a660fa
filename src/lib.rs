//! # scenario-ccg
//!
//! A card-game effect resolution engine for scripted scenarios: a state
//! machine that applies card abilities against a shared game state, with
//! support for abilities that pause mid-resolution to request a
//! player-chosen target and resume once the selection arrives.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: The game state is an owned value passed by
//!    exclusive mutable reference into every engine entry point. No
//!    ambient singletons.
//!
//! 2. **Data Cards, Table Hooks**: Card instances are plain data and
//!    serialize cleanly. Behavior lives on archetypes in the catalog,
//!    dispatched by name lookup.
//!
//! 3. **Commit Late**: Irreversible mutation (cost payment, hand removal,
//!    combo increment) happens only after a hook's outcome is known, so
//!    cancellation never needs rollback.
//!
//! ## Architecture
//!
//! - **One-Shot Continuations**: A suspended ability is a stored `FnOnce`
//!   plus the pending selection request. Resuming is a plain function
//!   call, not a scheduler hand-off. At most one selection may be
//!   outstanding at a time.
//!
//! - **Single Logical Thread**: Everything between suspension points runs
//!   to completion synchronously. Hooks are `Rc` closures; a
//!   multi-threaded host must guard whole transitions with one lock.
//!
//! ## Modules
//!
//! - `core`: Card instances, instance IDs, the game state aggregate
//! - `zones`: The five named zones and their movement primitives
//! - `catalog`: Archetype definitions, registry, and the standard set
//! - `effects`: Hook flows, the action scope, targeting, the engine
//! - `combat`: Attack resolution between field occupants and leaders
//! - `persist`: JSON save/load with archetype reconstruction

pub mod core;
pub mod zones;
pub mod catalog;
pub mod effects;
pub mod combat;
pub mod persist;

// Re-export commonly used types
pub use crate::core::{
    CardInstance, CardKind, FollowerStats, GameOutcome, GameState, InstanceId,
};

pub use crate::zones::{Area, ZoneStore};

pub use crate::catalog::{standard_set, Archetype, CardCatalog};

pub use crate::effects::{
    ActionScope, EffectEngine, HookFlow, ResolutionStatus, Resume, SelectedIds,
    SelectionRequest, TargetingCoordinator,
};

pub use crate::combat::{execute_attack, AttackTarget};

pub use crate::persist::{load_state, save_state, LoadError};
