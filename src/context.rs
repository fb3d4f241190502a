//! Application Context
//!
//! Shared handles provided via Leptos Context API: the session store and the
//! storage backend, plus the editor actions that touch both.

use std::rc::Rc;

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::error;
use reactive_stores::Store;

use crate::editor::PendingChange;
use crate::models::PlotId;
use crate::session::{write_through, GardenSession, GardenSessionStoreFields};
use crate::storage::PlanStorage;

#[derive(Clone, Copy)]
pub struct GardenContext {
    pub store: Store<GardenSession>,
    storage: StoredValue<Rc<dyn PlanStorage>, LocalStorage>,
}

impl GardenContext {
    pub fn new(store: Store<GardenSession>, storage: Rc<dyn PlanStorage>) -> Self {
        Self {
            store,
            storage: StoredValue::new_local(storage),
        }
    }

    pub fn storage(&self) -> Rc<dyn PlanStorage> {
        self.storage.get_value()
    }

    pub fn open_editor(&self, plot_id: PlotId) {
        self.store.write().open(plot_id);
    }

    pub fn cancel_editor(&self) {
        if self.store.editor().read_untracked().is_open() {
            self.store.write().cancel();
        }
    }

    /// Invalid input is dropped silently; the dialog stays open.
    pub fn submit_editor(&self) {
        let change = self.store.editor().read_untracked().prepare_submit(Utc::now());
        if let Some(change) = change {
            self.persist(change);
        }
    }

    pub fn clear_editor(&self) {
        let change = self.store.editor().read_untracked().prepare_clear();
        if let Some(change) = change {
            self.persist(change);
        }
    }

    fn persist(&self, change: PendingChange) {
        let store = self.store;
        let storage = self.storage();
        spawn_local(async move {
            let plot_id = change.plot_id().clone();
            let result =
                write_through(storage.as_ref(), change, |change| store.write().commit(change)).await;
            if let Err(err) = result {
                error!("saving {} failed: {}", plot_id, err);
                alert(&format!("Could not save plot {}: {}", plot_id, err));
            }
        });
    }
}

pub fn use_garden() -> GardenContext {
    expect_context::<GardenContext>()
}

/// Blocking browser alert for persistence failures
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
