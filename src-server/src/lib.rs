//! Garden Plan Backend
//!
//! Layered architecture:
//! - domain: Plot entity and domain errors
//! - repository: SQLite data access
//! - routes: axum handlers for `/api/*` and the static frontend

use std::path::PathBuf;
use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;
use tokio::sync::Mutex;

pub mod config;
pub mod domain;
pub mod repository;
pub mod routes;

pub use config::ServerConfig;

use domain::DomainResult;
use repository::{open_db, open_in_memory, PlotRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub plots: Arc<PlotRepository>,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn open(config: &ServerConfig) -> DomainResult<Self> {
        let conn = open_db(&config.db_path)?;
        Ok(Self::with_connection(conn, config.static_dir.clone()))
    }

    pub fn in_memory(static_dir: PathBuf) -> DomainResult<Self> {
        Ok(Self::with_connection(open_in_memory()?, static_dir))
    }

    fn with_connection(conn: rusqlite::Connection, static_dir: PathBuf) -> Self {
        Self {
            plots: Arc::new(PlotRepository::new(Arc::new(Mutex::new(conn)))),
            static_dir,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/plan", get(routes::get_plan))
        .route("/api/plot", post(routes::upsert_plot))
        .route("/api/plot/", delete(routes::missing_plot_id))
        .route("/api/plot/{plot_id}", delete(routes::delete_plot))
        .fallback(routes::serve_static)
        .with_state(state)
}
