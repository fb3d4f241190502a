//! Routes Layer
//!
//! axum handlers that bridge the frontend to the plot repository.

mod assets;
mod error;
mod plot_routes;

pub use assets::serve_static;
pub use error::ApiError;
pub use plot_routes::{delete_plot, get_plan, missing_plot_id, upsert_plot};
