//! Mod-to-armor-slot assignment engine
//!
//! Two phases: seed each slot with the mods whose type name claims it,
//! then greedily place the remainder first-fit in slot order under the
//! per-slot energy budget and a duplicate-type exclusion. Pure and total;
//! hashes without a definition are dropped before accounting.

use std::collections::HashSet;

use crate::defs::{DefinitionIndex, ItemHash, ResolvedItem};

use super::slot::{ArmorSlot, SLOT_COUNT};

/// Per-slot energy budget
pub const MAX_SLOT_ENERGY: u32 = 10;

/// Mods partitioned across the five armor slots
#[derive(Debug, Clone)]
pub struct AssignmentResult<'a> {
    /// Assigned mods per slot, indexed by `ArmorSlot::index`
    pub bucketed: [Vec<ResolvedItem<'a>>; SLOT_COUNT],
    /// Mods that fit nowhere, in original relative order
    pub unfit: Vec<ResolvedItem<'a>>,
}

impl<'a> AssignmentResult<'a> {
    /// Mods assigned to one slot
    pub fn slot(&self, slot: ArmorSlot) -> &[ResolvedItem<'a>] {
        &self.bucketed[slot.index()]
    }

    /// Total number of mods placed into slots
    pub fn placed(&self) -> usize {
        self.bucketed.iter().map(Vec::len).sum()
    }
}

impl Default for AssignmentResult<'_> {
    fn default() -> Self {
        Self {
            bucketed: std::array::from_fn(|_| Vec::new()),
            unfit: Vec::new(),
        }
    }
}

/// Partition a loadout's flat mod list across the five armor slots.
///
/// Seeded mods (type name claims a slot) are never moved or evicted;
/// the remainder is placed first-fit in slot scan order. A remainder mod
/// whose type name starts with "General" is prepended to its slot's list,
/// anything else is appended.
pub fn assign_mods<'a>(mod_hashes: &[ItemHash], defs: &'a DefinitionIndex) -> AssignmentResult<'a> {
    let mods = defs.resolve_all(mod_hashes);

    let mut result = AssignmentResult::default();
    let mut energy = [0u32; SLOT_COUNT];

    // Phase 1: seed each slot by type-name affinity
    for slot in ArmorSlot::ALL {
        let seeded: Vec<ResolvedItem<'a>> = mods
            .iter()
            .copied()
            .filter(|m| slot.claims(&m.def.type_name))
            .collect();
        energy[slot.index()] = seeded.iter().map(|m| m.def.energy()).sum();
        result.bucketed[slot.index()] = seeded;
    }

    let seeded_hashes: HashSet<ItemHash> =
        result.bucketed.iter().flatten().map(|m| m.hash).collect();

    // Phase 2: first-fit placement of the non-seeded remainder
    for m in mods.iter().filter(|m| !seeded_hashes.contains(&m.hash)) {
        let mut placed = false;
        for slot in ArmorSlot::ALL {
            let i = slot.index();
            let new_energy = energy[i] + m.def.energy();
            if new_energy > MAX_SLOT_ENERGY {
                continue;
            }
            // One mod of a given type per slot
            if result.bucketed[i]
                .iter()
                .any(|b| b.def.type_name == m.def.type_name)
            {
                continue;
            }
            if m.def.type_name.starts_with("General") {
                result.bucketed[i].insert(0, *m);
            } else {
                result.bucketed[i].push(*m);
            }
            energy[i] = new_energy;
            placed = true;
            break;
        }
        if !placed {
            result.unfit.push(*m);
        }
    }

    result
}
