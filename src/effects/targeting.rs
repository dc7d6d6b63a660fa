//! Targeting: the suspend/resume selection protocol.
//!
//! A hook that needs a player-chosen target produces a
//! [`SelectionRequest`] and a one-shot resume continuation. The
//! coordinator first prechecks eligibility: an own-field request with no
//! eligible occupants resolves *immediately* with an empty list - a
//! "no legal targets, effect is a no-op" fast path that is distinct from
//! the user canceling. Otherwise the request and continuation are parked
//! in the single pending slot until the external actor supplies a
//! resolution.
//!
//! At most one selection may be outstanding system-wide. A second
//! concurrent request is a programming error and panics.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::debug;

use crate::core::card::{CardKind, InstanceId};
use crate::core::state::GameState;
use crate::zones::Area;

use super::actions::{Resume, SelectedIds};
use super::engine::Finalize;

/// Requirements for a target selection, produced transiently by a hook.
#[derive(Clone, Debug)]
pub struct SelectionRequest {
    /// Restrict eligible cards to one kind, if set.
    pub target_kind: Option<CardKind>,
    /// The zone to pick from.
    pub target_area: Area,
    /// Instance IDs that must not be offered (typically the source card).
    pub excluded: FxHashSet<InstanceId>,
    /// How many targets to pick. Clamped to the eligible count for
    /// own-field requests.
    pub count: usize,
    /// Whether the external actor may decline with a `None` resolution.
    pub cancelable: bool,
}

impl SelectionRequest {
    /// Request `count` cards from `area`.
    #[must_use]
    pub fn cards(area: Area, count: usize) -> Self {
        Self {
            target_kind: None,
            target_area: area,
            excluded: FxHashSet::default(),
            count,
            cancelable: false,
        }
    }

    /// Restrict to a card kind (builder pattern).
    #[must_use]
    pub fn of_kind(mut self, kind: CardKind) -> Self {
        self.target_kind = Some(kind);
        self
    }

    /// Exclude an instance ID (builder pattern).
    #[must_use]
    pub fn without(mut self, id: InstanceId) -> Self {
        self.excluded.insert(id);
        self
    }

    /// Allow cancellation (builder pattern).
    #[must_use]
    pub fn cancelable(mut self) -> Self {
        self.cancelable = true;
        self
    }

    fn matches(&self, kind: CardKind, id: InstanceId) -> bool {
        !self.excluded.contains(&id) && self.target_kind.map_or(true, |k| k == kind)
    }
}

/// Outcome of the eligibility precheck.
pub(crate) enum Precheck {
    /// No suspension needed; resume at once with these IDs.
    Immediate(SelectedIds),
    /// Park the request and wait for the external actor.
    Suspend,
}

/// The single outstanding selection: request, continuation, and the
/// transition to finalize once the hook runs to completion.
pub(crate) struct PendingSelection {
    pub request: SelectionRequest,
    pub resume: Resume,
    pub finalize: Finalize,
}

/// Manages the suspend/resume protocol for target selection.
///
/// Holds at most one [`PendingSelection`]. The external actor observes
/// the outstanding request via [`pending_request`] and answers through
/// the engine's `complete_target_selection`.
///
/// [`pending_request`]: TargetingCoordinator::pending_request
#[derive(Default)]
pub struct TargetingCoordinator {
    pending: Option<PendingSelection>,
}

impl TargetingCoordinator {
    /// Create a coordinator with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a selection is outstanding.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Get the outstanding request, if any.
    #[must_use]
    pub fn pending_request(&self) -> Option<&SelectionRequest> {
        self.pending.as_ref().map(|p| &p.request)
    }

    /// Precheck a request against the current state.
    ///
    /// Own-field requests compute the eligible set up front: zero
    /// eligible targets short-circuits to an immediate empty resolution,
    /// and the requested count is clamped to the eligible count.
    /// Requests against other zones always suspend.
    pub(crate) fn precheck(state: &GameState, request: &mut SelectionRequest) -> Precheck {
        if request.target_area == Area::OwnField {
            let eligible = state
                .zones
                .cards(Area::OwnField)
                .iter()
                .filter(|c| request.matches(c.kind, c.id))
                .count();

            if eligible == 0 {
                debug!("no eligible targets, resolving selection as empty");
                return Precheck::Immediate(SmallVec::new());
            }
            request.count = request.count.min(eligible);
        }

        Precheck::Suspend
    }

    /// Park a pending selection.
    ///
    /// Panics if one is already outstanding - the single-flight invariant
    /// is a programming error to violate, not a recoverable condition.
    pub(crate) fn begin(&mut self, pending: PendingSelection) {
        if self.pending.is_some() {
            panic!("a target selection is already pending");
        }
        debug!(request = ?pending.request, "suspending for target selection");
        self.pending = Some(pending);
    }

    /// Take the pending selection for resumption.
    ///
    /// Panics if nothing is pending.
    pub(crate) fn take(&mut self) -> PendingSelection {
        self.pending
            .take()
            .expect("no target selection is pending")
    }
}
