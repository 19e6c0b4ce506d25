//! Vaultlight - loadout viewer core
//!
//! Cross-references saved loadouts against static item definitions and
//! produces render-ready projections: armor mod assignment, equipped
//! gear classification, subclass socket grouping, and cosmetics.

pub mod assign;
pub mod defs;
pub mod loadout;
pub mod view;

// Re-export commonly used types
pub use assign::{assign_mods, ArmorSlot, AssignmentResult, MAX_SLOT_ENERGY, SLOT_COUNT};
pub use defs::{DefinitionIndex, ItemDefinition, ItemHash, ResolvedItem};
pub use loadout::{Loadout, LoadoutRecord, LoadoutStore};
