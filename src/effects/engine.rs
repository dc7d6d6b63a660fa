//! The effect resolution engine.
//!
//! Orchestrates the two life-cycle transitions - play from hand and
//! activate on field - by invoking archetype hooks with an
//! [`ActionScope`] and interpreting their [`HookFlow`].
//!
//! ## Transition ordering
//!
//! `play_from_hand` checks legality first (field capacity, card present,
//! affordable cost), then runs the hook, and only commits the
//! irreversible steps - hand removal, field placement, cost payment,
//! combo increment - once the hook reports success. A hook cancellation
//! therefore aborts with *nothing* to roll back.
//!
//! `act_on_field` treats activation as consumption: the card is removed
//! from the field on hook success, so an activated ability is a
//! single-use trigger, not a toggled state. Implementers generalizing
//! this model should lift the removal into the hook's own control.

use tracing::{debug, warn};

use crate::catalog::CardCatalog;
use crate::core::card::{CardInstance, CardKind, InstanceId};
use crate::core::state::GameState;
use crate::zones::Area;

use super::actions::{ActionScope, HookFlow};
use super::targeting::{PendingSelection, Precheck, TargetingCoordinator};

/// Result of driving a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolutionStatus {
    /// The transition ran to completion and all mutations are committed.
    Committed,
    /// A legality check failed or the hook canceled; nothing was mutated
    /// by the transition bookkeeping itself.
    Rejected,
    /// The hook suspended for target selection. Feed the answer through
    /// [`EffectEngine::complete_target_selection`].
    AwaitingSelection,
}

/// The commit step owed to a suspended or completed transition.
pub(crate) enum Finalize {
    /// Finish a play: remove from hand, place, pay cost, count combo.
    Play { card: CardInstance },
    /// Finish an activation: consume the card from the field.
    Act { card_id: InstanceId },
}

/// Drives card transitions against an explicit game state.
///
/// Owns the archetype catalog (behavior lookup) and the targeting
/// coordinator (the single pending-selection slot). The game state is
/// always passed in by the caller; the engine holds no card data.
pub struct EffectEngine {
    catalog: CardCatalog,
    targeting: TargetingCoordinator,
}

impl EffectEngine {
    /// Create an engine over a catalog.
    #[must_use]
    pub fn new(catalog: CardCatalog) -> Self {
        Self {
            catalog,
            targeting: TargetingCoordinator::new(),
        }
    }

    /// Get the archetype catalog.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// Get the targeting coordinator (to observe a pending request).
    #[must_use]
    pub fn targeting(&self) -> &TargetingCoordinator {
        &self.targeting
    }

    /// Create a fresh game state with the catalog zone seeded from this
    /// engine's archetype list, in registration order.
    #[must_use]
    pub fn new_game(&self) -> GameState {
        let mut state = GameState::new();
        let cards = self
            .catalog
            .iter()
            .map(|archetype| {
                let id = state.zones.alloc_id();
                archetype.instantiate(id)
            })
            .collect();
        state.zones.replace_area(Area::Catalog, cards);
        state
    }

    /// Play a card from hand.
    ///
    /// Rejected (no mutation) when the own field is at capacity, the card
    /// is not in hand, the cost exceeds current play points, or a
    /// selection is already outstanding. Spells resolve without a hook
    /// and are not placed anywhere afterwards.
    pub fn play_from_hand(&mut self, state: &mut GameState, id: InstanceId) -> ResolutionStatus {
        if self.targeting.is_pending() {
            warn!(%id, "play rejected: a target selection is pending");
            return ResolutionStatus::Rejected;
        }
        if state.zones.is_own_field_full() {
            warn!(%id, "play rejected: own field is full");
            return ResolutionStatus::Rejected;
        }
        let Some(card) = state.zones.find(id, Area::Hand).cloned() else {
            warn!(%id, "play rejected: card not in hand");
            return ResolutionStatus::Rejected;
        };
        if state.my_pp < card.cost {
            warn!(%id, cost = card.cost, pp = state.my_pp, "play rejected: insufficient play points");
            return ResolutionStatus::Rejected;
        }

        let flow = if card.kind == CardKind::Spell {
            // Spells carry no hook in this model.
            HookFlow::Done
        } else {
            match self.catalog.get(&card.name).and_then(|a| a.on_play.clone()) {
                Some(hook) => {
                    let mut scope = ActionScope::new(&self.catalog, state);
                    hook(&card, &mut scope)
                }
                // Default behavior: succeed with no side effects.
                None => HookFlow::Done,
            }
        };

        self.drive(state, flow, Finalize::Play { card })
    }

    /// Activate a card on the own field.
    ///
    /// Rejected when the card is not on the field or its archetype has no
    /// activation hook. On hook success the card is consumed (removed
    /// from the field).
    pub fn act_on_field(&mut self, state: &mut GameState, id: InstanceId) -> ResolutionStatus {
        if self.targeting.is_pending() {
            warn!(%id, "activation rejected: a target selection is pending");
            return ResolutionStatus::Rejected;
        }
        let Some(card) = state.zones.find(id, Area::OwnField).cloned() else {
            warn!(%id, "activation rejected: card not on field");
            return ResolutionStatus::Rejected;
        };
        let Some(hook) = self.catalog.get(&card.name).and_then(|a| a.on_act.clone()) else {
            warn!(%id, name = %card.name, "activation rejected: no activation hook");
            return ResolutionStatus::Rejected;
        };

        let flow = {
            let mut scope = ActionScope::new(&self.catalog, state);
            hook(&card, &mut scope)
        };

        self.drive(state, flow, Finalize::Act { card_id: id })
    }

    /// Resolve the outstanding target selection.
    ///
    /// `Some(ids)` resumes the suspended hook with the chosen targets
    /// (an empty slice means "proceed, nothing chosen"); `None` is the
    /// explicit cancellation the hook must treat as an abort.
    ///
    /// Panics if no selection is pending - completing out of turn is a
    /// programming error in the caller.
    pub fn complete_target_selection(
        &mut self,
        state: &mut GameState,
        selection: Option<&[InstanceId]>,
    ) -> ResolutionStatus {
        let PendingSelection {
            request: _,
            resume,
            finalize,
        } = self.targeting.take();

        debug!(canceled = selection.is_none(), "resuming suspended effect");
        let flow = {
            let mut scope = ActionScope::new(&self.catalog, state);
            resume(&mut scope, selection)
        };

        self.drive(state, flow, finalize)
    }

    /// Run a hook flow until it finishes, cancels, or suspends.
    fn drive(
        &mut self,
        state: &mut GameState,
        mut flow: HookFlow,
        finalize: Finalize,
    ) -> ResolutionStatus {
        loop {
            match flow {
                HookFlow::Done => return self.commit(state, finalize),
                HookFlow::Cancel => {
                    debug!("effect canceled, transition aborted");
                    return ResolutionStatus::Rejected;
                }
                HookFlow::NeedTargets(mut request, resume) => {
                    match TargetingCoordinator::precheck(state, &mut request) {
                        Precheck::Immediate(ids) => {
                            let mut scope = ActionScope::new(&self.catalog, state);
                            flow = resume(&mut scope, Some(ids.as_slice()));
                        }
                        Precheck::Suspend => {
                            self.targeting.begin(PendingSelection {
                                request,
                                resume,
                                finalize,
                            });
                            return ResolutionStatus::AwaitingSelection;
                        }
                    }
                }
            }
        }
    }

    /// Apply the irreversible tail of a successful transition.
    fn commit(&mut self, state: &mut GameState, finalize: Finalize) -> ResolutionStatus {
        match finalize {
            Finalize::Play { card } => {
                state.zones.remove_card(card.id, Area::Hand);

                if card.persists_on_field() {
                    let id = card.id;
                    if !state.zones.add_card(card.clone(), Area::OwnField) {
                        // The hook filled the field after the capacity
                        // gate passed; the card goes to Removed rather
                        // than vanishing.
                        state.zones.add_card(card.clone(), Area::Removed);
                        warn!(%id, "field filled during resolution, card removed");
                    }
                }

                state.my_pp -= card.cost;
                state.combo += 1;
                debug!(name = %card.name, combo = state.combo, "play committed");
            }
            Finalize::Act { card_id } => {
                state.zones.remove_card(card_id, Area::OwnField);
                debug!(%card_id, "activation committed, card consumed");
            }
        }

        ResolutionStatus::Committed
    }
}
