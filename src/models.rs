//! Frontend Models
//!
//! Data structures matching the `/api/plan` payload and the localStorage blob.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a single bed cell, `<sectionId>-r<row>c<col>` (1-indexed).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlotId(String);

impl PlotId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn for_cell(section_id: &str, row: u32, col: u32) -> Self {
        Self(format!("{section_id}-r{row}c{col}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlotId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// What was planted in a plot and when (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantingRecord {
    /// Lowercased free text
    pub vegetable: String,
    /// ISO calendar date, `YYYY-MM-DD`
    pub planted_date: String,
    /// RFC 3339 timestamp of the last save
    pub updated_at: String,
}

/// The whole garden plan. A missing key means the plot is empty.
pub type Plan = BTreeMap<PlotId, PlantingRecord>;
