//! Zone system for card locations.
//!
//! Five named zones hold every card instance in a scenario:
//!
//! - `Catalog`: the scenario card list. Never a legal move target; cards
//!   flow *out* of it by cloning with a fresh instance ID.
//! - `Hand`, `OwnField`, `OpponentField`: the playable zones, with
//!   capacity and kind legality enforced on every add.
//! - `Removed`: where consumed cards go.
//!
//! Capacity and kind checks are the sole legality gate here - cost and
//! targeting logic live in `effects`.

pub mod store;

pub use store::{Area, ZoneStore, DEFAULT_MAX_FIELD_SIZE, DEFAULT_MAX_HAND_SIZE};
