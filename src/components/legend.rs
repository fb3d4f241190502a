//! Legend Component

use leptos::prelude::*;

use crate::presentation::legend_entries;

#[component]
pub fn Legend() -> impl IntoView {
    view! {
        <ul id="legend-list" class="legend-list">
            {legend_entries().into_iter().map(|entry| view! { <li>{entry}</li> }).collect_view()}
        </ul>
    }
}
