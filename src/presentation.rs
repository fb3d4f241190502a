//! Plot presentation
//!
//! Turns plan records into what a plot cell shows: an icon and a tooltip.
//! Kept free of Leptos so the rules can be tested natively.

use crate::icons::{icon_for_vegetable, title_case, FALLBACK_ICON, VEGETABLE_ICONS};
use crate::layout::{contains_plot, Section};
use crate::models::{Plan, PlantingRecord, PlotId};

/// Visible state of one plot cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotView {
    /// `None` for an empty plot
    pub icon: Option<&'static str>,
    pub tooltip: String,
}

pub fn plot_view(plot_id: &PlotId, record: Option<&PlantingRecord>) -> PlotView {
    match record {
        Some(record) => PlotView {
            icon: Some(icon_for_vegetable(&record.vegetable)),
            tooltip: format!(
                "{} — planted {}",
                title_case(&record.vegetable),
                record.planted_date
            ),
        },
        None => PlotView {
            icon: None,
            tooltip: format!("Empty plot ({plot_id})"),
        },
    }
}

/// Current view of `plot_id`, or `None` if the layout has no such plot.
pub fn update_plot(layout: &[Section], plan: &Plan, plot_id: &PlotId) -> Option<PlotView> {
    if !contains_plot(layout, plot_id) {
        return None;
    }
    Some(plot_view(plot_id, plan.get(plot_id)))
}

/// Legend lines: one per known vegetable, then the fallback.
pub fn legend_entries() -> Vec<String> {
    VEGETABLE_ICONS
        .iter()
        .map(|(vegetable, icon)| format!("{icon} {}", title_case(vegetable)))
        .chain(std::iter::once(format!(
            "{FALLBACK_ICON} Other / unknown vegetable"
        )))
        .collect()
}
