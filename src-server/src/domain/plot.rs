//! Plot Entity
//!
//! A planted plot: an opaque plot id plus the record stored verbatim.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::entity::{DomainError, DomainResult, Entity};

/// Fields the frontend sends for one plot
const REQUIRED_FIELDS: [&str; 4] = ["plotId", "vegetable", "plantedDate", "updatedAt"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantingRecord {
    pub vegetable: String,
    pub planted_date: String,
    pub updated_at: String,
}

/// Plan as returned by `GET /api/plan`, keyed by plot id
pub type Plan = BTreeMap<String, PlantingRecord>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plot {
    pub plot_id: String,
    pub record: PlantingRecord,
}

impl Plot {
    pub fn new(plot_id: impl Into<String>, record: PlantingRecord) -> Self {
        Self {
            plot_id: plot_id.into(),
            record,
        }
    }

    /// Build a plot from a `POST /api/plot` body.
    ///
    /// Every field must be present and a string; values are kept verbatim.
    pub fn from_payload(payload: &Value) -> DomainResult<Self> {
        let field = |name: &str| payload.get(name).and_then(Value::as_str);
        let missing = REQUIRED_FIELDS.iter().any(|name| field(name).is_none());
        if missing {
            return Err(DomainError::InvalidInput("Missing required fields".to_string()));
        }
        Ok(Self::new(
            field("plotId").unwrap_or_default(),
            PlantingRecord {
                vegetable: field("vegetable").unwrap_or_default().to_string(),
                planted_date: field("plantedDate").unwrap_or_default().to_string(),
                updated_at: field("updatedAt").unwrap_or_default().to_string(),
            },
        ))
    }
}

impl Entity for Plot {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.plot_id
    }
}
