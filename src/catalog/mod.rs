//! Card catalog: archetypes, the name-keyed registry, and the standard set.
//!
//! An archetype is the static half of a card: name, cost, kind, base
//! stats, and the optional play/activate hooks. Instances copy the data
//! half and leave the hooks behind; the engine reattaches behavior by
//! looking the archetype up by name at hook time. The same lookup table
//! drives load reconstruction, which fails hard on unknown names.

pub mod archetype;
pub mod registry;
pub mod set;

pub use archetype::Archetype;
pub use registry::CardCatalog;
pub use set::standard_set;
