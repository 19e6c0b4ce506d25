//! Subclass socket grouping
//!
//! Resolves a subclass item's socket-override plugs and groups them for
//! display by their type-name classification.

use crate::defs::{DefinitionIndex, ResolvedItem};
use crate::loadout::LoadoutItem;

/// A subclass's plugs grouped for display
#[derive(Debug, Clone, Default)]
pub struct SubclassSockets<'a> {
    /// The super plug; when several plugs classify as supers, the last wins
    pub super_plug: Option<ResolvedItem<'a>>,
    pub aspects: Vec<ResolvedItem<'a>>,
    pub fragments: Vec<ResolvedItem<'a>>,
    /// Anything that is neither aspect, fragment, nor super
    pub abilities: Vec<ResolvedItem<'a>>,
}

impl<'a> SubclassSockets<'a> {
    /// Group a subclass item's socket overrides, in ascending socket order.
    /// Plugs with no definition are skipped.
    pub fn group(item: &LoadoutItem, defs: &'a DefinitionIndex) -> Self {
        let mut sockets = Self::default();
        let Some(overrides) = &item.socket_overrides else {
            return sockets;
        };

        for &plug in overrides.values() {
            let Some(resolved) = defs.resolve(plug) else {
                continue;
            };
            let type_name = &resolved.def.type_name;
            if type_name.contains("Aspect") {
                sockets.aspects.push(resolved);
            } else if type_name.contains("Fragment") {
                sockets.fragments.push(resolved);
            } else if type_name.contains("Super") {
                sockets.super_plug = Some(resolved);
            } else {
                sockets.abilities.push(resolved);
            }
        }

        sockets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::ItemDefinition;
    use std::collections::BTreeMap;

    fn plug(type_name: &str) -> ItemDefinition {
        ItemDefinition {
            name: "Plug".to_string(),
            type_name: type_name.to_string(),
            ..Default::default()
        }
    }

    fn subclass_item(overrides: &[(u32, u32)]) -> LoadoutItem {
        LoadoutItem {
            id: "sub".to_string(),
            hash: 1,
            socket_overrides: Some(overrides.iter().copied().collect::<BTreeMap<_, _>>()),
        }
    }

    fn defs() -> DefinitionIndex {
        [
            (10, plug("Stasis Super")),
            (11, plug("Stasis Aspect")),
            (12, plug("Stasis Aspect")),
            (13, plug("Stasis Fragment")),
            (14, plug("Stasis Grenade")),
            (15, plug("Arc Super")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_grouping_by_type_name() {
        let item = subclass_item(&[(0, 10), (1, 11), (2, 12), (3, 13), (4, 14)]);
        let defs = defs();
        let sockets = SubclassSockets::group(&item, &defs);

        assert_eq!(sockets.super_plug.unwrap().hash, 10);
        let aspect_hashes: Vec<u32> = sockets.aspects.iter().map(|a| a.hash).collect();
        assert_eq!(aspect_hashes, vec![11, 12]);
        assert_eq!(sockets.fragments.len(), 1);
        assert_eq!(sockets.abilities[0].hash, 14);
    }

    #[test]
    fn test_sockets_iterate_in_ascending_order() {
        // Insertion order in the source map does not matter
        let item = subclass_item(&[(5, 12), (1, 11)]);
        let defs = defs();
        let sockets = SubclassSockets::group(&item, &defs);
        let aspect_hashes: Vec<u32> = sockets.aspects.iter().map(|a| a.hash).collect();
        assert_eq!(aspect_hashes, vec![11, 12]);
    }

    #[test]
    fn test_last_super_wins() {
        let item = subclass_item(&[(0, 10), (1, 15)]);
        let defs = defs();
        let sockets = SubclassSockets::group(&item, &defs);
        assert_eq!(sockets.super_plug.unwrap().hash, 15);
    }

    #[test]
    fn test_missing_plug_definitions_are_skipped() {
        let item = subclass_item(&[(0, 99), (1, 13)]);
        let defs = defs();
        let sockets = SubclassSockets::group(&item, &defs);
        assert!(sockets.super_plug.is_none());
        assert_eq!(sockets.fragments.len(), 1);
    }

    #[test]
    fn test_no_overrides_is_empty() {
        let item = LoadoutItem {
            id: "sub".to_string(),
            hash: 1,
            socket_overrides: None,
        };
        let defs = defs();
        let sockets = SubclassSockets::group(&item, &defs);
        assert!(sockets.super_plug.is_none());
        assert!(sockets.aspects.is_empty());
        assert!(sockets.fragments.is_empty());
        assert!(sockets.abilities.is_empty());
    }
}
