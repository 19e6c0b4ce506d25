//! Per-slot cosmetic selection
//!
//! Picks the ornament and shader to show next to an armor piece, from the
//! loadout's explicit per-bucket mod list for that slot.

use crate::assign::ArmorSlot;
use crate::defs::{DefinitionIndex, ResolvedItem};
use crate::loadout::LoadoutParameters;

/// Ornament and shader picked from a slot's explicit mod list
#[derive(Debug, Clone, Default)]
pub struct SlotCosmetics<'a> {
    pub ornament: Option<ResolvedItem<'a>>,
    pub shader: Option<ResolvedItem<'a>>,
}

/// Pick the first ornament and first shader listed for a slot's bucket.
/// Universal ornaments are armor-type items, so those count as ornaments.
pub fn slot_cosmetics<'a>(
    slot: ArmorSlot,
    params: &LoadoutParameters,
    defs: &'a DefinitionIndex,
) -> SlotCosmetics<'a> {
    let hashes = params
        .mods_by_bucket
        .get(&slot.bucket_hash())
        .map(Vec::as_slice)
        .unwrap_or(&[]);
    let resolved = defs.resolve_all(hashes);

    SlotCosmetics {
        ornament: resolved
            .iter()
            .copied()
            .find(|m| m.def.is_ornament() || m.def.is_armor()),
        shader: resolved.iter().copied().find(|m| m.def.is_shader()),
    }
}
