//! Equipped gear classification
//!
//! Splits a loadout's equipped list into subclass, weapons, and the five
//! armor slots, pairing each entry with its definition and the matching
//! live instance when one exists.

use crate::assign::{ArmorSlot, SLOT_COUNT};
use crate::defs::{DefinitionIndex, ItemDefinition};
use crate::loadout::{ItemInstance, Loadout, LoadoutItem};

/// One equipped entry with its definition and live instance
#[derive(Debug, Clone)]
pub struct EquippedItem<'a> {
    pub item: &'a LoadoutItem,
    pub def: &'a ItemDefinition,
    pub instance: Option<&'a ItemInstance>,
}

/// A loadout's equipped list split for display
#[derive(Debug, Clone)]
pub struct EquippedGear<'a> {
    pub subclass: Option<EquippedItem<'a>>,
    pub weapons: Vec<EquippedItem<'a>>,
    /// Armor by slot, indexed by `ArmorSlot::index`
    pub armor: [Option<EquippedItem<'a>>; SLOT_COUNT],
}

impl<'a> EquippedGear<'a> {
    /// Classify a loadout's equipped items.
    ///
    /// Items with no definition are skipped. When two items map to the
    /// same category or slot, the first wins.
    pub fn classify(
        loadout: &'a Loadout,
        defs: &'a DefinitionIndex,
        instances: &'a [ItemInstance],
    ) -> Self {
        let mut subclass = None;
        let mut weapons = Vec::new();
        let mut armor: [Option<EquippedItem<'a>>; SLOT_COUNT] = std::array::from_fn(|_| None);

        for item in &loadout.equipped {
            let Some(def) = defs.get(item.hash) else {
                continue;
            };
            let instance = instances.iter().find(|i| i.item_instance_id == item.id);
            let entry = EquippedItem {
                item,
                def,
                instance,
            };

            if def.is_subclass() {
                if subclass.is_none() {
                    subclass = Some(entry);
                }
            } else if def.is_weapon() {
                weapons.push(entry);
            } else if def.is_armor() {
                if let Some(slot) = def.bucket_hash.and_then(ArmorSlot::from_bucket_hash) {
                    let spot = &mut armor[slot.index()];
                    if spot.is_none() {
                        *spot = Some(entry);
                    }
                }
            }
        }

        Self {
            subclass,
            weapons,
            armor,
        }
    }

    /// Armor equipped in one slot
    pub fn armor_slot(&self, slot: ArmorSlot) -> Option<&EquippedItem<'a>> {
        self.armor[slot.index()].as_ref()
    }
}

/// Search query matching the equipped weapons and armor by instance id,
/// for pasting into an inventory-manager search box
pub fn inventory_query(gear: &EquippedGear<'_>) -> String {
    gear.weapons
        .iter()
        .map(|w| w.item.id.as_str())
        .chain(gear.armor.iter().flatten().map(|a| a.item.id.as_str()))
        .map(|id| format!("id:{}", id))
        .collect::<Vec<_>>()
        .join(" or ")
}
