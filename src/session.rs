//! Garden Session
//!
//! The single owner of mutable app state: the in-memory plan and the editor.
//! Provided to components as a reactive store. `write_through` is the one
//! save path: the UI passes a closure that commits into the store.

use log::{info, warn};
use reactive_stores::Store;

use crate::editor::{EditorState, PendingChange};
use crate::error::PlanError;
use crate::models::{Plan, PlotId};
use crate::storage::{persist_change, PlanStorage};

#[derive(Clone, Debug, Default, Store)]
pub struct GardenSession {
    pub plan: Plan,
    pub editor: EditorState,
}

impl GardenSession {
    /// Load the plan once. A failing backend leaves the plan empty and hands
    /// the error back so the caller can tell the user.
    pub async fn load(storage: &dyn PlanStorage) -> (Self, Option<PlanError>) {
        match storage.load_all().await {
            Ok(plan) => {
                info!("plan loaded from {} ({} plots planted)", storage.describe(), plan.len());
                (Self { plan, ..Self::default() }, None)
            }
            Err(err) => {
                warn!("could not load plan from {}: {}", storage.describe(), err);
                (Self::default(), Some(err))
            }
        }
    }

    pub fn open(&mut self, plot_id: PlotId) {
        let current = self.plan.get(&plot_id);
        self.editor.open(plot_id.clone(), current);
    }

    pub fn cancel(&mut self) {
        self.editor.cancel();
    }

    /// Apply a change that storage has already accepted.
    pub fn commit(&mut self, change: &PendingChange) {
        change.apply(&mut self.plan);
        self.editor.close_if_active(change.plot_id());
    }
}

/// Write `change` through to storage, then hand it to `commit`.
///
/// `commit` only runs once storage has accepted the change, so on `Err` the
/// caller's plan and editor are untouched.
pub async fn write_through(
    storage: &dyn PlanStorage,
    change: PendingChange,
    commit: impl FnOnce(&PendingChange),
) -> Result<PlotId, PlanError> {
    persist_change(storage, &change).await?;
    info!("{} updated via {}", change.plot_id(), storage.describe());
    commit(&change);
    Ok(change.plot_id().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::FALLBACK_ICON;
    use crate::layout::GARDEN_LAYOUT;
    use crate::models::PlantingRecord;
    use crate::presentation::{update_plot, PlotView};
    use crate::storage::{LocalPlanStorage, MemoryBlobStore};
    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};
    use futures::executor::block_on;
    use leptos::prelude::{Owner, ReadUntracked, Write};

    /// Backend that rejects every call, like an unreachable server
    struct FailingStorage;

    #[async_trait(?Send)]
    impl PlanStorage for FailingStorage {
        fn describe(&self) -> &'static str {
            "failing"
        }

        async fn load_all(&self) -> Result<Plan, PlanError> {
            Err(PlanError::Transport("connection refused".to_string()))
        }

        async fn upsert(&self, _: &PlotId, _: &PlantingRecord) -> Result<(), PlanError> {
            Err(PlanError::Status { action: "save plot", status: 500 })
        }

        async fn remove(&self, _: &PlotId) -> Result<(), PlanError> {
            Err(PlanError::Status { action: "clear plot", status: 500 })
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
    }

    fn local() -> LocalPlanStorage<MemoryBlobStore> {
        LocalPlanStorage::new(MemoryBlobStore::default())
    }

    /// Same sequence as `GardenContext::submit_editor`, driven synchronously
    fn submit(
        session: &mut GardenSession,
        storage: &dyn PlanStorage,
        now: DateTime<Utc>,
    ) -> Result<Option<PlotId>, PlanError> {
        let Some(change) = session.editor.prepare_submit(now) else {
            return Ok(None);
        };
        block_on(write_through(storage, change, |change| session.commit(change))).map(Some)
    }

    fn clear(session: &mut GardenSession, storage: &dyn PlanStorage) -> Result<Option<PlotId>, PlanError> {
        let Some(change) = session.editor.prepare_clear() else {
            return Ok(None);
        };
        block_on(write_through(storage, change, |change| session.commit(change))).map(Some)
    }

    fn view_of(session: &GardenSession, plot_id: &str) -> Option<PlotView> {
        update_plot(GARDEN_LAYOUT, &session.plan, &PlotId::from(plot_id))
    }

    fn fill(session: &mut GardenSession, plot: &str, vegetable: &str, date: &str) {
        session.open(PlotId::from(plot));
        session.editor.set_vegetable(vegetable.to_string());
        session.editor.set_planted_date(date.to_string());
    }

    #[test]
    fn test_submit_then_reopen_prefills() {
        let storage = local();
        let mut session = GardenSession::default();
        fill(&mut session, "bed-a-r1c1", "Tomato", "2024-05-01");

        let saved = submit(&mut session, &storage, now()).unwrap();
        assert_eq!(saved, Some(PlotId::from("bed-a-r1c1")));
        assert!(!session.editor.is_open());

        session.open(PlotId::from("bed-a-r1c1"));
        let form = session.editor.form().unwrap();
        assert_eq!(form.vegetable, "tomato");
        assert_eq!(form.planted_date, "2024-05-01");
    }

    #[test]
    fn test_tomato_example_renders() {
        let storage = local();
        let mut session = GardenSession::default();
        fill(&mut session, "bed-a-r1c1", "Tomato", "2024-05-01");
        submit(&mut session, &storage, now()).unwrap();

        let view = view_of(&session, "bed-a-r1c1").unwrap();
        assert_eq!(view.icon, Some("🍅"));
        assert_eq!(view.tooltip, "Tomato — planted 2024-05-01");
    }

    #[test]
    fn test_durian_renders_fallback() {
        let storage = local();
        let mut session = GardenSession::default();
        fill(&mut session, "bed-b-r2c2", "durian", "2024-06-01");
        submit(&mut session, &storage, now()).unwrap();

        let view = view_of(&session, "bed-b-r2c2").unwrap();
        assert_eq!(view.icon, Some(FALLBACK_ICON));
    }

    #[test]
    fn test_invalid_form_stays_open() {
        let storage = local();
        let mut session = GardenSession::default();
        fill(&mut session, "bed-a-r1c1", "", "2024-05-01");

        assert_eq!(submit(&mut session, &storage, now()).unwrap(), None);
        assert!(session.editor.is_open());
        assert!(session.plan.is_empty());
    }

    #[test]
    fn test_clear_removes_record() {
        let storage = local();
        let mut session = GardenSession::default();
        fill(&mut session, "bed-d-r1c1", "carrot", "2024-04-01");
        submit(&mut session, &storage, now()).unwrap();

        session.open(PlotId::from("bed-d-r1c1"));
        clear(&mut session, &storage).unwrap();
        assert!(session.plan.is_empty());
        assert!(!session.editor.is_open());

        let (reloaded, _) = block_on(GardenSession::load(&storage));
        assert!(reloaded.plan.is_empty());
    }

    #[test]
    fn test_clear_empty_plot_is_noop() {
        let storage = local();
        let mut session = GardenSession::default();
        fill(&mut session, "bed-a-r1c1", "kale", "2024-04-01");
        submit(&mut session, &storage, now()).unwrap();
        let before = session.plan.clone();

        session.open(PlotId::from("bed-e-r5c3"));
        clear(&mut session, &storage).unwrap();
        assert_eq!(session.plan, before);
    }

    #[test]
    fn test_reload_matches_saved_plan() {
        let blobs = MemoryBlobStore::default();
        let storage = LocalPlanStorage::new(blobs.clone());
        let mut session = GardenSession::default();
        fill(&mut session, "bed-a-r1c1", "pea", "2024-03-15");
        submit(&mut session, &storage, now()).unwrap();
        fill(&mut session, "bed-c-r2c2", "sweet corn", "2024-05-10");
        submit(&mut session, &storage, now()).unwrap();

        let (reloaded, err) = block_on(GardenSession::load(&LocalPlanStorage::new(blobs)));
        assert!(err.is_none());
        assert_eq!(reloaded.plan, session.plan);
    }

    #[test]
    fn test_failed_save_changes_nothing() {
        let mut session = GardenSession::default();
        fill(&mut session, "bed-a-r1c1", "tomato", "2024-05-01");
        let editor_before = session.editor.clone();
        let view_before = view_of(&session, "bed-a-r1c1");

        let err = submit(&mut session, &FailingStorage, now()).unwrap_err();
        assert_eq!(err, PlanError::Status { action: "save plot", status: 500 });
        assert!(session.plan.is_empty());
        assert_eq!(session.editor, editor_before);
        assert_eq!(view_of(&session, "bed-a-r1c1"), view_before);
    }

    #[test]
    fn test_failed_clear_keeps_record() {
        let storage = local();
        let mut session = GardenSession::default();
        fill(&mut session, "bed-a-r1c1", "tomato", "2024-05-01");
        submit(&mut session, &storage, now()).unwrap();
        let plan_before = session.plan.clone();

        session.open(PlotId::from("bed-a-r1c1"));
        assert!(clear(&mut session, &FailingStorage).is_err());
        assert_eq!(session.plan, plan_before);
        assert!(session.editor.is_open());
    }

    #[test]
    fn test_failed_load_yields_empty_plan_and_error() {
        let (session, err) = block_on(GardenSession::load(&FailingStorage));
        assert!(session.plan.is_empty());
        assert!(matches!(err, Some(PlanError::Transport(_))));
    }

    #[test]
    fn test_commit_for_other_plot_keeps_editor_open() {
        let mut session = GardenSession::default();
        session.open(PlotId::from("bed-b-r1c1"));
        let change = PendingChange::Remove { plot_id: PlotId::from("bed-a-r1c1") };
        session.commit(&change);
        assert_eq!(session.editor.active_plot(), Some(&PlotId::from("bed-b-r1c1")));
    }

    #[test]
    fn test_write_through_skips_commit_on_failure() {
        let mut committed = false;
        let change = PendingChange::Remove { plot_id: PlotId::from("bed-a-r1c1") };
        let result = block_on(write_through(&FailingStorage, change, |_| committed = true));
        assert!(result.is_err());
        assert!(!committed);
    }

    #[test]
    fn test_write_through_commits_into_store() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(GardenSession::default());
        store.write().open(PlotId::from("bed-c-r3c1"));
        store.write().editor.set_vegetable("Garlic".to_string());
        store.write().editor.set_planted_date("2024-10-01".to_string());

        let change = store.editor().read_untracked().prepare_submit(now()).unwrap();
        let saved = block_on(write_through(&local(), change, |change| store.write().commit(change)));

        assert_eq!(saved, Ok(PlotId::from("bed-c-r3c1")));
        assert!(!store.editor().read_untracked().is_open());
        let plan = store.plan().read_untracked();
        assert_eq!(plan[&PlotId::from("bed-c-r3c1")].vegetable, "garlic");
    }
}
