//! Repository Layer
//!
//! Data access abstractions and implementations.

mod db;
mod plot_repo;
mod traits;


pub use db::{open_db, open_in_memory};
pub use plot_repo::PlotRepository;
pub use traits::Repository;
