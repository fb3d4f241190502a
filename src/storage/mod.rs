//! Plan Storage
//!
//! One interface, two backends: the whole plan as a JSON blob in
//! localStorage, or one record at a time through the HTTP API. The backend
//! is chosen when the bundle is built (cargo feature `remote`).

mod local;
#[cfg(feature = "remote")]
mod remote;

use std::rc::Rc;

use async_trait::async_trait;

use crate::editor::PendingChange;
use crate::error::PlanError;
use crate::models::{Plan, PlantingRecord, PlotId};

#[cfg(test)]
pub use local::MemoryBlobStore;
pub use local::{BlobStore, BrowserBlobStore, LocalPlanStorage};
#[cfg(feature = "remote")]
pub use remote::RemotePlanStorage;

/// Persistence backend for the garden plan.
///
/// Futures are not `Send`: every backend runs on the browser's single thread.
#[async_trait(?Send)]
pub trait PlanStorage {
    /// Short backend name for log lines
    fn describe(&self) -> &'static str;

    /// Fetch the entire plan once at startup
    async fn load_all(&self) -> Result<Plan, PlanError>;

    async fn upsert(&self, plot_id: &PlotId, record: &PlantingRecord) -> Result<(), PlanError>;

    async fn remove(&self, plot_id: &PlotId) -> Result<(), PlanError>;
}

/// Write a validated change through to `storage`.
pub async fn persist_change(
    storage: &dyn PlanStorage,
    change: &PendingChange,
) -> Result<(), PlanError> {
    match change {
        PendingChange::Upsert { plot_id, record } => storage.upsert(plot_id, record).await,
        PendingChange::Remove { plot_id } => storage.remove(plot_id).await,
    }
}

#[cfg(not(feature = "remote"))]
pub fn default_storage() -> Rc<dyn PlanStorage> {
    Rc::new(LocalPlanStorage::new(BrowserBlobStore::new()))
}

#[cfg(feature = "remote")]
pub fn default_storage() -> Rc<dyn PlanStorage> {
    Rc::new(RemotePlanStorage::new(crate::config::api_base()))
}
