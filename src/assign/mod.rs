//! Armor mod assignment
//!
//! Partitions a loadout's mod list across the five armor slots.

pub mod engine;
pub mod slot;

pub use engine::{assign_mods, AssignmentResult, MAX_SLOT_ENERGY};
pub use slot::{ArmorSlot, SLOT_COUNT};
