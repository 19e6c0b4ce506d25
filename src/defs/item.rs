//! Item definition metadata
//!
//! The static fields the viewer needs per item type: display info, the
//! free-text type classification, energy cost, and the inventory bucket.

use serde::{Deserialize, Serialize};

/// Manifest hash identifying an item type
pub type ItemHash = u32;

/// Numeric item categories used by the definition manifest
pub mod item_type {
    pub const ARMOR: u32 = 2;
    pub const WEAPON: u32 = 3;
    pub const SUBCLASS: u32 = 16;
    pub const MOD: u32 = 19;
}

/// Numeric item sub-categories used by the definition manifest
pub mod item_sub_type {
    pub const SHADER: u32 = 20;
    pub const ORNAMENT: u32 = 21;
}

/// Static metadata for one item type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDefinition {
    /// Display name
    pub name: String,
    /// Icon path relative to the content host
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Free-text classification string, e.g. "Helmet Mod" or "General Armor Mod"
    pub type_name: String,
    /// Numeric item category
    pub item_type: u32,
    /// Numeric item sub-category
    pub item_sub_type: u32,
    /// Energy cost, present only for mod-type items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_cost: Option<u8>,
    /// Inventory bucket hash, present only for equippable gear
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_hash: Option<u32>,
}

impl ItemDefinition {
    /// Energy cost for budget accounting (0 when the item has none)
    pub fn energy(&self) -> u32 {
        self.energy_cost.unwrap_or(0) as u32
    }

    pub fn is_armor(&self) -> bool {
        self.item_type == item_type::ARMOR
    }

    pub fn is_weapon(&self) -> bool {
        self.item_type == item_type::WEAPON
    }

    pub fn is_subclass(&self) -> bool {
        self.item_type == item_type::SUBCLASS
    }

    pub fn is_mod(&self) -> bool {
        self.item_type == item_type::MOD
    }

    pub fn is_shader(&self) -> bool {
        self.is_mod() && self.item_sub_type == item_sub_type::SHADER
    }

    pub fn is_ornament(&self) -> bool {
        self.is_mod() && self.item_sub_type == item_sub_type::ORNAMENT
    }
}
