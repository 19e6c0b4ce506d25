//! Hash-keyed definition index
//!
//! Wraps the manifest lookup the rest of the crate resolves hashes through.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::item::{ItemDefinition, ItemHash};

/// An item hash paired with its resolved definition
#[derive(Debug, Clone, Copy)]
pub struct ResolvedItem<'a> {
    pub hash: ItemHash,
    pub def: &'a ItemDefinition,
}

/// Definition lookup for the session, keyed by manifest hash
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefinitionIndex {
    defs: HashMap<ItemHash, ItemDefinition>,
}

impl DefinitionIndex {
    pub fn new() -> Self {
        Self {
            defs: HashMap::new(),
        }
    }

    /// Add or overwrite a definition
    pub fn insert(&mut self, hash: ItemHash, def: ItemDefinition) {
        self.defs.insert(hash, def);
    }

    /// Look up a definition by hash
    pub fn get(&self, hash: ItemHash) -> Option<&ItemDefinition> {
        self.defs.get(&hash)
    }

    /// Look up a hash, keeping the hash alongside the definition
    pub fn resolve(&self, hash: ItemHash) -> Option<ResolvedItem<'_>> {
        self.get(hash).map(|def| ResolvedItem { hash, def })
    }

    /// Resolve a hash list in order, dropping hashes with no definition
    pub fn resolve_all(&self, hashes: &[ItemHash]) -> Vec<ResolvedItem<'_>> {
        hashes.iter().filter_map(|&h| self.resolve(h)).collect()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

impl FromIterator<(ItemHash, ItemDefinition)> for DefinitionIndex {
    fn from_iter<I: IntoIterator<Item = (ItemHash, ItemDefinition)>>(iter: I) -> Self {
        Self {
            defs: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> ItemDefinition {
        ItemDefinition {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_keeps_hash() {
        let index: DefinitionIndex = [(10, named("a")), (20, named("b"))].into_iter().collect();
        let resolved = index.resolve(20).unwrap();
        assert_eq!(resolved.hash, 20);
        assert_eq!(resolved.def.name, "b");
        assert!(index.resolve(30).is_none());
    }

    #[test]
    fn test_resolve_all_drops_missing() {
        let index: DefinitionIndex = [(1, named("a")), (3, named("c"))].into_iter().collect();
        let resolved = index.resolve_all(&[1, 2, 3]);
        let hashes: Vec<u32> = resolved.iter().map(|r| r.hash).collect();
        assert_eq!(hashes, vec![1, 3]);
    }
}
