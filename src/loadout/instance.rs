//! Live item instances
//!
//! State flags for items currently in the player's inventory, supplied
//! by the live-inventory collaborator and matched to loadout items by
//! instance id.

use serde::{Deserialize, Serialize};

/// Item state bitflags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemState(pub u32);

impl ItemState {
    pub const LOCKED: u32 = 1;
    pub const TRACKED: u32 = 2;
    pub const MASTERWORK: u32 = 4;
    pub const CRAFTED: u32 = 8;

    fn contains(&self, bit: u32) -> bool {
        self.0 & bit != 0
    }

    pub fn is_locked(&self) -> bool {
        self.contains(Self::LOCKED)
    }

    pub fn is_tracked(&self) -> bool {
        self.contains(Self::TRACKED)
    }

    pub fn is_masterwork(&self) -> bool {
        self.contains(Self::MASTERWORK)
    }

    pub fn is_crafted(&self) -> bool {
        self.contains(Self::CRAFTED)
    }
}

/// One live inventory item instance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInstance {
    pub item_instance_id: String,
    #[serde(default)]
    pub state: ItemState,
}
