//! Render-facing projections
//!
//! Pure transformations from a loadout plus the definition index into the
//! shapes a rendering layer iterates. Hashes with no definition are
//! dropped, the same way the assignment engine drops them.

pub mod cosmetics;
pub mod equipped;
pub mod subclass;

pub use cosmetics::{slot_cosmetics, SlotCosmetics};
pub use equipped::{inventory_query, EquippedGear, EquippedItem};
pub use subclass::SubclassSockets;
