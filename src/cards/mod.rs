//! Card system: archetypes, cards and the generator.
//!
//! ## Key Types
//!
//! - `Archetype`: Faction record with visuals and a stat bias
//! - `ArchetypeRegistry`: Ordered archetype lookup
//! - `Card`: Immutable generated unit
//! - `CardCandidate`: Card record with optional fields, for unchecked data
//! - `CardGenerator`: Maps (archetype, cost, taunt) to a card

pub mod archetype;
pub mod card;
pub mod generator;
pub mod registry;

pub use archetype::{builtin_archetypes, Archetype};
pub use card::{Card, CardCandidate, CardDefect, CardField, CardId};
pub use generator::{card_name, check_cost, CardGenerator};
pub use registry::ArchetypeRegistry;
