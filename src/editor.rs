//! Plot Editor State
//!
//! The modal form is bound to at most one plot at a time. Submitting or
//! clearing does not touch the plan directly; it yields a [`PendingChange`]
//! that is applied only after persistence succeeds.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::models::{Plan, PlantingRecord, PlotId};

/// Raw form fields as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorForm {
    pub vegetable: String,
    pub planted_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Closed,
    Open { plot_id: PlotId, form: EditorForm },
}

/// A validated mutation waiting for the storage backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingChange {
    Upsert { plot_id: PlotId, record: PlantingRecord },
    Remove { plot_id: PlotId },
}

impl PendingChange {
    pub fn plot_id(&self) -> &PlotId {
        match self {
            PendingChange::Upsert { plot_id, .. } | PendingChange::Remove { plot_id } => plot_id,
        }
    }

    pub fn apply(&self, plan: &mut Plan) {
        match self {
            PendingChange::Upsert { plot_id, record } => {
                plan.insert(plot_id.clone(), record.clone());
            }
            PendingChange::Remove { plot_id } => {
                plan.remove(plot_id);
            }
        }
    }
}

impl EditorState {
    /// Bind the editor to `plot_id`, replacing any plot already open.
    pub fn open(&mut self, plot_id: PlotId, current: Option<&PlantingRecord>) {
        let form = current
            .map(|record| EditorForm {
                vegetable: record.vegetable.clone(),
                planted_date: record.planted_date.clone(),
            })
            .unwrap_or_default();
        *self = EditorState::Open { plot_id, form };
    }

    pub fn cancel(&mut self) {
        *self = EditorState::Closed;
    }

    /// Close the editor unless the user has moved on to another plot.
    pub fn close_if_active(&mut self, plot_id: &PlotId) {
        if self.active_plot() == Some(plot_id) {
            self.cancel();
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, EditorState::Open { .. })
    }

    pub fn active_plot(&self) -> Option<&PlotId> {
        match self {
            EditorState::Open { plot_id, .. } => Some(plot_id),
            EditorState::Closed => None,
        }
    }

    pub fn form(&self) -> Option<&EditorForm> {
        match self {
            EditorState::Open { form, .. } => Some(form),
            EditorState::Closed => None,
        }
    }

    pub fn title(&self) -> Option<String> {
        self.active_plot()
            .map(|plot_id| format!("Planting details for {plot_id}"))
    }

    pub fn set_vegetable(&mut self, value: String) {
        if let EditorState::Open { form, .. } = self {
            form.vegetable = value;
        }
    }

    pub fn set_planted_date(&mut self, value: String) {
        if let EditorState::Open { form, .. } = self {
            form.planted_date = value;
        }
    }

    /// Validate the form. `None` when closed or when either field is blank.
    pub fn prepare_submit(&self, now: DateTime<Utc>) -> Option<PendingChange> {
        let EditorState::Open { plot_id, form } = self else {
            return None;
        };
        let vegetable = form.vegetable.trim().to_lowercase();
        if vegetable.is_empty() || form.planted_date.is_empty() {
            return None;
        }
        Some(PendingChange::Upsert {
            plot_id: plot_id.clone(),
            record: PlantingRecord {
                vegetable,
                planted_date: form.planted_date.clone(),
                updated_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            },
        })
    }

    pub fn prepare_clear(&self) -> Option<PendingChange> {
        self.active_plot().map(|plot_id| PendingChange::Remove {
            plot_id: plot_id.clone(),
        })
    }
}
