//! Effect system: hook flows, targeting, and the resolution engine.
//!
//! Card abilities are archetype hooks driven by the [`EffectEngine`]:
//!
//! - Hooks mutate state only through the capability-scoped
//!   [`ActionScope`].
//! - A hook that needs a player decision suspends by returning
//!   [`HookFlow::NeedTargets`]; the [`TargetingCoordinator`] parks the
//!   one-shot continuation until the external actor answers.
//! - The engine commits the irreversible parts of a transition (cost,
//!   placement, combo) only after the hook succeeds, so cancellation
//!   never requires rollback.

pub mod actions;
pub mod engine;
pub mod targeting;

pub use actions::{ActHook, ActionScope, HookFlow, PlayHook, Resume, SelectedIds};
pub use engine::{EffectEngine, ResolutionStatus};
pub use targeting::{SelectionRequest, TargetingCoordinator};
