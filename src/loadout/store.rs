//! Loadout store
//!
//! Owned store for the session's loadouts. Hydrated once from a cached
//! JSON snapshot, replaced wholesale when a new backup is imported, and
//! handed by reference to whatever view layer needs it.

use thiserror::Error;

use super::record::LoadoutRecord;

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to parse loadout snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The session's loadouts
#[derive(Debug, Clone, Default)]
pub struct LoadoutStore {
    records: Vec<LoadoutRecord>,
}

impl LoadoutStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Hydrate from a cached JSON snapshot.
    ///
    /// On parse failure the store keeps its current contents.
    pub fn load(&mut self, json: &str) -> Result<usize, StoreError> {
        let records: Vec<LoadoutRecord> = serde_json::from_str(json)?;
        log::info!("Loaded {} loadouts from snapshot", records.len());
        self.records = records;
        Ok(self.records.len())
    }

    /// Swap in freshly imported records
    pub fn replace(&mut self, records: Vec<LoadoutRecord>) {
        log::info!(
            "Replacing {} loadouts with {}",
            self.records.len(),
            records.len()
        );
        self.records = records;
    }

    /// Serialize the store back to a JSON snapshot
    pub fn snapshot(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string(&self.records)?)
    }

    /// All records in insertion order
    pub fn records(&self) -> &[LoadoutRecord] {
        &self.records
    }

    /// Find a record by loadout id
    pub fn find(&self, id: &str) -> Option<&LoadoutRecord> {
        self.records.iter().find(|r| r.loadout.id == id)
    }

    /// Records for one character class
    pub fn for_class(&self, class_type: u8) -> Vec<&LoadoutRecord> {
        self.records
            .iter()
            .filter(|r| r.loadout.class_type == class_type)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loadout::record::Loadout;

    fn record(id: &str, class_type: u8) -> LoadoutRecord {
        LoadoutRecord {
            platform_membership_id: "1".to_string(),
            destiny_version: 2,
            loadout: Loadout {
                id: id.to_string(),
                name: format!("Loadout {}", id),
                class_type,
                clear_space: false,
                equipped: Vec::new(),
                created_at: 0,
                last_updated_at: 0,
                parameters: Default::default(),
            },
        }
    }

    #[test]
    fn test_replace_and_find() {
        let mut store = LoadoutStore::new();
        assert!(store.is_empty());

        store.replace(vec![record("a", 0), record("b", 2)]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.find("b").unwrap().loadout.name, "Loadout b");
        assert!(store.find("c").is_none());
    }

    #[test]
    fn test_for_class_filters() {
        let mut store = LoadoutStore::new();
        store.replace(vec![record("a", 0), record("b", 2), record("c", 2)]);

        let warlock: Vec<&str> = store
            .for_class(2)
            .iter()
            .map(|r| r.loadout.id.as_str())
            .collect();
        assert_eq!(warlock, vec!["b", "c"]);
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut store = LoadoutStore::new();
        store.replace(vec![record("a", 1)]);

        let json = store.snapshot().unwrap();
        let mut other = LoadoutStore::new();
        assert_eq!(other.load(&json).unwrap(), 1);
        assert_eq!(other.find("a").unwrap().loadout.class_type, 1);
    }

    #[test]
    fn test_bad_snapshot_keeps_existing_records() {
        let mut store = LoadoutStore::new();
        store.replace(vec![record("a", 0)]);

        assert!(store.load("not json").is_err());
        assert_eq!(store.len(), 1);
        assert!(store.find("a").is_some());
    }
}
