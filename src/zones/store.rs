//! Zone store: ordered card collections and movement primitives.
//!
//! The `ZoneStore` exclusively owns every card instance reachable from a
//! scenario. All three primitives report legality as a plain `bool` and
//! never partially mutate: a rejected add touches nothing, and a move
//! only removes from the source once the add has succeeded.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::card::{CardInstance, CardKind, InstanceId};

/// Default field capacity per side.
pub const DEFAULT_MAX_FIELD_SIZE: usize = 5;
/// Default hand capacity.
pub const DEFAULT_MAX_HAND_SIZE: usize = 9;

/// The five named zones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Area {
    /// The scenario card list. Cards leave it by cloning, never removal.
    Catalog,
    /// The player's hand.
    Hand,
    /// The player's side of the field.
    OwnField,
    /// The opponent's side of the field.
    OpponentField,
    /// Consumed cards.
    Removed,
}

impl Area {
    /// Check if this area is one of the two field zones.
    #[must_use]
    pub const fn is_field(self) -> bool {
        matches!(self, Area::OwnField | Area::OpponentField)
    }
}

/// Owns the five zones as insertion-ordered sequences.
///
/// Also owns the instance ID allocator: promoting a catalog entry into a
/// playable copy mints a fresh ID here, so IDs are unique across the
/// whole store by construction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ZoneStore {
    catalog: Vec<CardInstance>,
    hand: Vec<CardInstance>,
    own_field: Vec<CardInstance>,
    opponent_field: Vec<CardInstance>,
    removed: Vec<CardInstance>,

    /// Field capacity per side.
    pub max_field_size: usize,
    /// Hand capacity.
    pub max_hand_size: usize,

    next_instance: u64,
}

impl Default for ZoneStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoneStore {
    /// Create an empty store with standard capacities.
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: Vec::new(),
            hand: Vec::new(),
            own_field: Vec::new(),
            opponent_field: Vec::new(),
            removed: Vec::new(),
            max_field_size: DEFAULT_MAX_FIELD_SIZE,
            max_hand_size: DEFAULT_MAX_HAND_SIZE,
            next_instance: 1,
        }
    }

    /// Allocate a fresh instance ID.
    pub fn alloc_id(&mut self) -> InstanceId {
        let id = InstanceId::new(self.next_instance);
        self.next_instance += 1;
        id
    }

    /// Get the cards in an area, in insertion order.
    #[must_use]
    pub fn cards(&self, area: Area) -> &[CardInstance] {
        self.area(area)
    }

    /// Get the number of cards in an area.
    #[must_use]
    pub fn len(&self, area: Area) -> usize {
        self.area(area).len()
    }

    /// Check if an area is empty.
    #[must_use]
    pub fn is_empty(&self, area: Area) -> bool {
        self.area(area).is_empty()
    }

    /// Check if the own field is at capacity.
    #[must_use]
    pub fn is_own_field_full(&self) -> bool {
        self.own_field.len() >= self.max_field_size
    }

    /// Find a card by ID within an area.
    #[must_use]
    pub fn find(&self, id: InstanceId, area: Area) -> Option<&CardInstance> {
        self.area(area).iter().find(|c| c.id == id)
    }

    /// Find a card by ID within an area, mutably.
    pub fn find_mut(&mut self, id: InstanceId, area: Area) -> Option<&mut CardInstance> {
        self.area_mut(area).iter_mut().find(|c| c.id == id)
    }

    /// Remove the first instance matching `id` in `area`.
    ///
    /// Returns whether a card was found and removed.
    pub fn remove_card(&mut self, id: InstanceId, area: Area) -> bool {
        let cards = self.area_mut(area);
        if let Some(index) = cards.iter().position(|c| c.id == id) {
            cards.remove(index);
            true
        } else {
            false
        }
    }

    /// Append a card to an area, subject to legality checks.
    ///
    /// Rejects (no mutation, returns `false`) when:
    /// - the target is the catalog,
    /// - the target is a field zone at capacity or the card is a spell
    ///   (spells never persist on a field),
    /// - the target is the hand at capacity.
    pub fn add_card(&mut self, card: CardInstance, area: Area) -> bool {
        if area == Area::Catalog {
            return false;
        }

        if area.is_field() {
            if self.area(area).len() >= self.max_field_size {
                return false;
            }
            if card.kind == CardKind::Spell {
                return false;
            }
        }

        if area == Area::Hand && self.hand.len() >= self.max_hand_size {
            return false;
        }

        self.area_mut(area).push(card);
        true
    }

    /// Move a card between areas.
    ///
    /// A catalog source is a template: a new instance with a fresh ID is
    /// created and added to the target, and the catalog entry stays put.
    /// Any other source is add-then-remove, so a failed add leaves the
    /// source untouched. Returns overall success.
    pub fn move_card(&mut self, id: InstanceId, source: Area, target: Area) -> bool {
        if source == Area::Catalog {
            let Some(template) = self.find(id, Area::Catalog) else {
                return false;
            };
            let mut copy = template.clone();
            copy.id = self.alloc_id();
            debug!(template = %id, copy = %copy.id, ?target, "promoting catalog entry");
            return self.add_card(copy, target);
        }

        let Some(card) = self.find(id, source) else {
            return false;
        };
        let card = card.clone();

        if !self.add_card(card, target) {
            return false;
        }
        self.remove_card(id, source);
        true
    }

    /// Replace an area's contents wholesale.
    ///
    /// Used by load reconstruction; bypasses capacity checks because the
    /// serialized state is taken verbatim.
    pub(crate) fn replace_area(&mut self, area: Area, cards: Vec<CardInstance>) {
        *self.area_mut(area) = cards;
    }

    fn area(&self, area: Area) -> &Vec<CardInstance> {
        match area {
            Area::Catalog => &self.catalog,
            Area::Hand => &self.hand,
            Area::OwnField => &self.own_field,
            Area::OpponentField => &self.opponent_field,
            Area::Removed => &self.removed,
        }
    }

    fn area_mut(&mut self, area: Area) -> &mut Vec<CardInstance> {
        match area {
            Area::Catalog => &mut self.catalog,
            Area::Hand => &mut self.hand,
            Area::OwnField => &mut self.own_field,
            Area::OpponentField => &mut self.opponent_field,
            Area::Removed => &mut self.removed,
        }
    }
}
