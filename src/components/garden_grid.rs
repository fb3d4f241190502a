//! Garden Grid Component
//!
//! Expands the static layout into beds of clickable plot cells and tree markers.

use leptos::prelude::*;

use crate::context::use_garden;
use crate::icons::TREE_ICON;
use crate::layout::{Bed, Section, Tree, GARDEN_LAYOUT};
use crate::models::PlotId;
use crate::presentation::update_plot;
use crate::session::GardenSessionStoreFields;

/// The whole garden, one element per layout section
#[component]
pub fn GardenGrid() -> impl IntoView {
    view! {
        <div class="garden">
            {GARDEN_LAYOUT.iter().map(|section| match section {
                Section::Bed(bed) => view! { <BedView bed=bed /> }.into_any(),
                Section::Tree(tree) => view! { <TreeView tree=tree /> }.into_any(),
            }).collect_view()}
        </div>
    }
}

#[component]
fn BedView(bed: &'static Bed) -> impl IntoView {
    view! {
        <section
            class=format!("bed bed--{}", bed.variant)
            aria-label=format!("{} garden bed", bed.id)
        >
            {bed.plot_ids().into_iter().map(|plot_id| view! { <PlotCell plot_id=plot_id /> }).collect_view()}
        </section>
    }
}

#[component]
fn TreeView(tree: &'static Tree) -> impl IntoView {
    view! {
        <figure class="tree">
            <span class="tree__icon-wrap" aria-hidden="true">
                <span class="tree__emoji">{TREE_ICON}</span>
                <span class="tree__fruit">{tree.fruit_icon}</span>
            </span>
            <figcaption class="tree__label">{tree.label}</figcaption>
        </figure>
    }
}

/// One plot button. Only re-renders when its own record changes.
#[component]
fn PlotCell(plot_id: PlotId) -> impl IntoView {
    let ctx = use_garden();
    let store = ctx.store;

    let view_id = plot_id.clone();
    let cell = Memo::new(move |_| {
        let plan = store.plan().read();
        update_plot(GARDEN_LAYOUT, &plan, &view_id)
    });

    let data_id = plot_id.to_string();

    view! {
        <button
            type="button"
            class="plot"
            data-plot-id=data_id
            title=move || cell.get().map(|view| view.tooltip).unwrap_or_default()
            on:click=move |_| ctx.open_editor(plot_id.clone())
        >
            {move || cell.get().and_then(|view| view.icon).unwrap_or("")}
        </button>
    }
}
