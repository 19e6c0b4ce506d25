//! Armor slot enumeration
//!
//! The five armor equipment positions, each carrying its canonical name
//! token and inventory bucket hash.

use serde::{Deserialize, Serialize};

/// Number of armor slots
pub const SLOT_COUNT: usize = 5;

/// One of the five armor equipment positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArmorSlot {
    Helmet,
    Arms,
    Chest,
    Legs,
    ClassItem,
}

impl ArmorSlot {
    /// All slots in fixed scan and display order
    pub const ALL: [ArmorSlot; SLOT_COUNT] = [
        ArmorSlot::Helmet,
        ArmorSlot::Arms,
        ArmorSlot::Chest,
        ArmorSlot::Legs,
        ArmorSlot::ClassItem,
    ];

    /// Position in scan order (0..5)
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            ArmorSlot::Helmet => "Helmet",
            ArmorSlot::Arms => "Arms",
            ArmorSlot::Chest => "Chest",
            ArmorSlot::Legs => "Legs",
            ArmorSlot::ClassItem => "Class Item",
        }
    }

    /// Lowercase token a mod's type name is matched against
    pub fn token(&self) -> &'static str {
        match self {
            ArmorSlot::Helmet => "helmet",
            ArmorSlot::Arms => "arms",
            ArmorSlot::Chest => "chest",
            ArmorSlot::Legs => "leg",
            ArmorSlot::ClassItem => "class",
        }
    }

    /// Inventory bucket hash for this slot
    pub fn bucket_hash(&self) -> u32 {
        match self {
            ArmorSlot::Helmet => 3448274439,
            ArmorSlot::Arms => 3551918588,
            ArmorSlot::Chest => 14239492,
            ArmorSlot::Legs => 20886954,
            ArmorSlot::ClassItem => 1585787867,
        }
    }

    /// Map an inventory bucket hash back to its slot
    pub fn from_bucket_hash(hash: u32) -> Option<ArmorSlot> {
        ArmorSlot::ALL.into_iter().find(|s| s.bucket_hash() == hash)
    }

    /// Whether a mod's type name claims this slot (substring match on the
    /// lowercased name, so "Helmet Armor Mod" claims Helmet)
    pub fn claims(&self, type_name: &str) -> bool {
        type_name.to_lowercase().contains(self.token())
    }
}
