//! Garden Plan Frontend App
//!
//! Main application component: garden grid, legend and the plot editor.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{GardenGrid, Legend, PlotEditor};
use crate::context::{alert, GardenContext};
use crate::session::{GardenSession, GardenSessionStoreFields};
use crate::storage;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(GardenSession::default());
    let ctx = GardenContext::new(store, storage::default_storage());

    // Provide context to all children
    provide_context(ctx);

    // Load the plan on mount; later changes are written through one by one
    spawn_local(async move {
        let backend = ctx.storage();
        let (loaded, err) = GardenSession::load(backend.as_ref()).await;
        *store.plan().write() = loaded.plan;
        if let Some(err) = err {
            alert(&format!("Could not load the garden plan: {}", err));
        }
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Garden Plan"</h1>
            </header>

            <main class="main-content">
                <GardenGrid />
            </main>

            <aside class="legend">
                <h2>"Legend"</h2>
                <Legend />
            </aside>

            <PlotEditor />
        </div>
    }
}
