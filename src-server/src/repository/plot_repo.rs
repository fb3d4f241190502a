//! Plot Repository
//!
//! SQLite-backed storage for planted plots, one row per plot.

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::{params, Connection, Row};
use tokio::sync::Mutex;

use super::traits::Repository;
use crate::domain::{DomainResult, Entity, Plan, PlantingRecord, Plot};

/// SQLite implementation of Plot repository
pub struct PlotRepository {
    conn: Arc<Mutex<Connection>>,
}

impl PlotRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// All plots as the plan map sent to the frontend
    pub async fn plan(&self) -> DomainResult<Plan> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .map(|plot| (plot.plot_id, plot.record))
            .collect())
    }
}

#[async_trait]
impl Repository<Plot> for PlotRepository {
    async fn find_by_id(&self, id: &String) -> DomainResult<Option<Plot>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(
            "SELECT plot_id, vegetable, planted_date, updated_at FROM plots WHERE plot_id = ?1",
        )?;
        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(row) => Ok(Some(row_to_plot(row)?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> DomainResult<Vec<Plot>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(
            "SELECT plot_id, vegetable, planted_date, updated_at FROM plots ORDER BY plot_id",
        )?;
        let plots = stmt
            .query_map((), row_to_plot)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(plots)
    }

    async fn upsert(&self, entity: &Plot) -> DomainResult<Plot> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO plots (plot_id, vegetable, planted_date, updated_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(plot_id) DO UPDATE SET
               vegetable = excluded.vegetable,
               planted_date = excluded.planted_date,
               updated_at = excluded.updated_at",
            params![
                entity.id(),
                entity.record.vegetable,
                entity.record.planted_date,
                entity.record.updated_at
            ],
        )?;
        Ok(entity.clone())
    }

    async fn delete(&self, id: &String) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        conn.execute("DELETE FROM plots WHERE plot_id = ?1", params![id])?;
        Ok(())
    }
}

/// Convert a database row to Plot
fn row_to_plot(row: &Row<'_>) -> rusqlite::Result<Plot> {
    Ok(Plot {
        plot_id: row.get(0)?,
        record: PlantingRecord {
            vegetable: row.get(1)?,
            planted_date: row.get(2)?,
            updated_at: row.get(3)?,
        },
    })
}
