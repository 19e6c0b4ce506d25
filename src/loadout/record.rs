//! Loadout records
//!
//! The saved-loadout data model. Records are snapshotted as camelCase
//! JSON, matching the shape the import collaborator hands over.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::defs::ItemHash;

/// One saved loadout, scoped to a platform membership
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadoutRecord {
    pub platform_membership_id: String,
    pub destiny_version: u32,
    pub loadout: Loadout,
}

/// A named gear configuration for one character class
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loadout {
    pub id: String,
    pub name: String,
    pub class_type: u8,
    #[serde(default)]
    pub clear_space: bool,
    #[serde(default)]
    pub equipped: Vec<LoadoutItem>,
    #[serde(default)]
    pub created_at: u64,
    #[serde(default)]
    pub last_updated_at: u64,
    #[serde(default)]
    pub parameters: LoadoutParameters,
}

impl Loadout {
    pub fn guardian_class(&self) -> GuardianClass {
        GuardianClass::from_class_type(self.class_type)
    }
}

/// One equipped item reference inside a loadout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadoutItem {
    /// Item instance id
    pub id: String,
    /// Definition hash
    pub hash: ItemHash,
    /// Socket index to plug hash, iterated in ascending socket order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socket_overrides: Option<BTreeMap<u32, ItemHash>>,
}

/// Mod selections and armor options attached to a loadout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadoutParameters {
    /// Flat, unbucketed mod list
    #[serde(default)]
    pub mods: Vec<ItemHash>,
    /// Explicit per-bucket mod lists (ornaments, shaders)
    #[serde(default)]
    pub mods_by_bucket: BTreeMap<u32, Vec<ItemHash>>,
    #[serde(default)]
    pub lock_armor_energy_type: u32,
    #[serde(default)]
    pub assume_armor_masterwork: u32,
}

/// Character class a loadout belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuardianClass {
    Titan,
    Hunter,
    Warlock,
    Unknown,
}

impl GuardianClass {
    pub fn from_class_type(class_type: u8) -> Self {
        match class_type {
            0 => GuardianClass::Titan,
            1 => GuardianClass::Hunter,
            2 => GuardianClass::Warlock,
            _ => GuardianClass::Unknown,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GuardianClass::Titan => "Titan",
            GuardianClass::Hunter => "Hunter",
            GuardianClass::Warlock => "Warlock",
            GuardianClass::Unknown => "Unknown",
        }
    }
}
