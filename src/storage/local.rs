//! localStorage backend
//!
//! The plan lives as a single JSON blob under one key and is rewritten in
//! full on every change. Missing or corrupt data reads as an empty plan.

use async_trait::async_trait;
use log::{debug, error, warn};

use super::PlanStorage;
use crate::config::STORAGE_KEY;
use crate::error::PlanError;
use crate::models::{Plan, PlantingRecord, PlotId};

/// String key-value storage holding serialized blobs
pub trait BlobStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), PlanError>;
}

/// `window.localStorage`
pub struct BrowserBlobStore {
    storage: Option<web_sys::Storage>,
}

impl BrowserBlobStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            warn!("localStorage is unavailable; the plan will not survive a reload");
        }
        Self { storage }
    }
}

impl BlobStore for BrowserBlobStore {
    fn read(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PlanError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| PlanError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|err| PlanError::Storage(format!("{err:?}")))
    }
}

/// In-memory blobs; clones share the same map.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MemoryBlobStore {
    blobs: std::rc::Rc<std::cell::RefCell<std::collections::HashMap<String, String>>>,
}

#[cfg(test)]
impl BlobStore for MemoryBlobStore {
    fn read(&self, key: &str) -> Option<String> {
        self.blobs.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PlanError> {
        self.blobs.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub struct LocalPlanStorage<B> {
    blobs: B,
    key: &'static str,
}

impl<B: BlobStore> LocalPlanStorage<B> {
    pub fn new(blobs: B) -> Self {
        Self::with_key(blobs, STORAGE_KEY)
    }

    pub fn with_key(blobs: B, key: &'static str) -> Self {
        Self { blobs, key }
    }

    fn read_plan(&self) -> Plan {
        let Some(raw) = self.blobs.read(self.key) else {
            return Plan::new();
        };
        if raw.is_empty() {
            return Plan::new();
        }
        match serde_json::from_str(&raw) {
            Ok(plan) => plan,
            Err(err) => {
                warn!("discarding unreadable plan under {}: {}", self.key, err);
                Plan::new()
            }
        }
    }

    fn write_plan(&self, plan: &Plan) {
        let encoded = match serde_json::to_string(plan) {
            Ok(encoded) => encoded,
            Err(err) => {
                error!("failed to encode plan: {}", err);
                return;
            }
        };
        if let Err(err) = self.blobs.write(self.key, &encoded) {
            error!("failed to write plan under {}: {}", self.key, err);
        }
    }
}

#[async_trait(?Send)]
impl<B: BlobStore> PlanStorage for LocalPlanStorage<B> {
    fn describe(&self) -> &'static str {
        "localStorage"
    }

    async fn load_all(&self) -> Result<Plan, PlanError> {
        let plan = self.read_plan();
        debug!("loaded {} planted plots from {}", plan.len(), self.key);
        Ok(plan)
    }

    async fn upsert(&self, plot_id: &PlotId, record: &PlantingRecord) -> Result<(), PlanError> {
        let mut plan = self.read_plan();
        plan.insert(plot_id.clone(), record.clone());
        self.write_plan(&plan);
        Ok(())
    }

    async fn remove(&self, plot_id: &PlotId) -> Result<(), PlanError> {
        let mut plan = self.read_plan();
        plan.remove(plot_id);
        self.write_plan(&plan);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn record(vegetable: &str) -> PlantingRecord {
        PlantingRecord {
            vegetable: vegetable.to_string(),
            planted_date: "2024-04-20".to_string(),
            updated_at: "2024-04-20T07:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_missing_blob_loads_empty() {
        let storage = LocalPlanStorage::new(MemoryBlobStore::default());
        assert!(block_on(storage.load_all()).unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_blob_loads_empty() {
        let blobs = MemoryBlobStore::default();
        blobs.write(STORAGE_KEY, "{not json").unwrap();
        let storage = LocalPlanStorage::new(blobs.clone());
        assert!(block_on(storage.load_all()).unwrap().is_empty());

        blobs.write(STORAGE_KEY, "null").unwrap();
        assert!(block_on(storage.load_all()).unwrap().is_empty());
    }

    #[test]
    fn test_round_trip_through_blob() {
        let blobs = MemoryBlobStore::default();
        let writer = LocalPlanStorage::new(blobs.clone());
        block_on(writer.upsert(&PlotId::from("bed-a-r1c1"), &record("tomato"))).unwrap();
        block_on(writer.upsert(&PlotId::from("bed-c-r4c2"), &record("herb"))).unwrap();

        let mut expected = Plan::new();
        expected.insert(PlotId::from("bed-a-r1c1"), record("tomato"));
        expected.insert(PlotId::from("bed-c-r4c2"), record("herb"));

        let reader = LocalPlanStorage::new(blobs);
        assert_eq!(block_on(reader.load_all()).unwrap(), expected);
    }

    #[test]
    fn test_remove_rewrites_blob() {
        let blobs = MemoryBlobStore::default();
        let storage = LocalPlanStorage::new(blobs.clone());
        let id = PlotId::from("bed-b-r1c1");
        block_on(storage.upsert(&id, &record("beet"))).unwrap();
        block_on(storage.remove(&id)).unwrap();

        assert_eq!(blobs.read(STORAGE_KEY).as_deref(), Some("{}"));
    }

    #[test]
    fn test_blob_format_is_plain_map() {
        let blobs = MemoryBlobStore::default();
        let storage = LocalPlanStorage::new(blobs.clone());
        block_on(storage.upsert(&PlotId::from("bed-a-r1c1"), &record("pea"))).unwrap();

        let raw: serde_json::Value = serde_json::from_str(&blobs.read(STORAGE_KEY).unwrap()).unwrap();
        assert_eq!(raw["bed-a-r1c1"]["vegetable"], "pea");
        assert_eq!(raw["bed-a-r1c1"]["plantedDate"], "2024-04-20");
    }
}
