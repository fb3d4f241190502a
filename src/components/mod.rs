//! UI Components
//!
//! Leptos components for the garden page.

mod garden_grid;
mod legend;
mod plot_editor;

pub use garden_grid::GardenGrid;
pub use legend::Legend;
pub use plot_editor::PlotEditor;
