//! Card system: movement archetypes, cards, and the registry.
//!
//! ## Key Types
//!
//! - `CardId`: identifier for cards
//! - `Card`: a playable card granting a movement archetype
//! - `MoveArchetype`: a named displacement table
//! - `ArchetypeStack`: an ordered pile of archetypes with an active cursor
//! - `CardRegistry`: card lookup by id

pub mod archetype;
pub mod card;
pub mod registry;

pub use archetype::{ArchetypeStack, MoveArchetype};
pub use card::{Card, CardId};
pub use registry::CardRegistry;
