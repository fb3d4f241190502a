//! Database Connection and Setup
//!
//! Opens the SQLite database and runs migrations.

use std::path::Path;

use rusqlite::Connection;
use tracing::info;

use crate::domain::{DomainError, DomainResult};

/// Open (or create) the database file and make sure the schema exists
pub fn open_db(db_path: &Path) -> DomainResult<Connection> {
    let conn = Connection::open(db_path)?;
    run_migrations(&conn)?;
    info!(path = %db_path.display(), "database ready");
    Ok(conn)
}

/// In-memory database with the schema applied (tests, throwaway servers)
pub fn open_in_memory() -> DomainResult<Connection> {
    let conn = Connection::open_in_memory()?;
    run_migrations(&conn)?;
    Ok(conn)
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS plots (
            plot_id TEXT PRIMARY KEY,
            vegetable TEXT NOT NULL,
            planted_date TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        (),
    )?;
    Ok(())
}

impl From<rusqlite::Error> for DomainError {
    fn from(err: rusqlite::Error) -> Self {
        DomainError::Internal(err.to_string())
    }
}
