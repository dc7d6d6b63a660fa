//! Card instances - the concrete cards that occupy zones.
//!
//! A `CardInstance` is a specific occurrence of an archetype in a game.
//! It carries only plain data: the identity (`InstanceId`), the
//! archetype-fixed attributes (name, cost, kind), and for followers the
//! mutable combat stats. Two instances of the same archetype always have
//! distinct IDs.
//!
//! Instance data is what gets serialized; the behavior half of a card is
//! reattached on load via the catalog (see `persist`).

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance.
///
/// IDs are allocated by the zone store's counter. They identify the
/// *instance*, not the archetype: promoting a catalog entry into an owned
/// copy always mints a fresh ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u64);

impl InstanceId {
    /// Create an instance ID from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// The kind of a card.
///
/// Followers fight on the field, amulets sit on the field without stats,
/// spells resolve from hand and never occupy a zone afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Follower,
    Spell,
    Amulet,
}

/// Combat stats for follower cards.
///
/// `hp` is the *current* hit points; combat mutates it in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowerStats {
    pub attack: i64,
    pub hp: i64,
    /// Can attack enemy followers the turn it is played.
    #[serde(default)]
    pub rush: bool,
    /// Can attack anything the turn it is played.
    #[serde(default)]
    pub storm: bool,
}

impl FollowerStats {
    /// Create stats with no keywords.
    #[must_use]
    pub const fn new(attack: i64, hp: i64) -> Self {
        Self {
            attack,
            hp,
            rush: false,
            storm: false,
        }
    }
}

/// A card instance in a game.
///
/// Invariant: `stats` is `Some` if and only if `kind` is
/// [`CardKind::Follower`]. The catalog constructors uphold this.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique ID for this instance.
    pub id: InstanceId,

    /// Archetype name - the discriminator used for reconstruction.
    pub name: String,

    /// Play cost in play points.
    pub cost: i64,

    /// Variant tag.
    pub kind: CardKind,

    /// Follower combat stats; `None` for spells and amulets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<FollowerStats>,
}

impl CardInstance {
    /// Check whether this card may occupy a field zone.
    ///
    /// Spells resolve and vanish; only followers and amulets persist.
    #[must_use]
    pub fn persists_on_field(&self) -> bool {
        !matches!(self.kind, CardKind::Spell)
    }

    /// Get the attack value, or 0 for cards without stats.
    #[must_use]
    pub fn attack(&self) -> i64 {
        self.stats.map_or(0, |s| s.attack)
    }

    /// Get the current hit points, or 0 for cards without stats.
    #[must_use]
    pub fn hp(&self) -> i64 {
        self.stats.map_or(0, |s| s.hp)
    }
}
