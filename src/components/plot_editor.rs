//! Plot Editor Component
//!
//! Modal dialog bound to the session's editor state. Save and Clear go
//! through storage first; on failure the dialog stays open.

use leptos::html::Dialog;
use leptos::prelude::*;

use crate::context::use_garden;
use crate::session::GardenSessionStoreFields;

#[component]
pub fn PlotEditor() -> impl IntoView {
    let ctx = use_garden();
    let store = ctx.store;
    let dialog_ref = NodeRef::<Dialog>::new();

    // Mirror editor state onto the native <dialog>
    Effect::new(move |_| {
        let open = store.editor().read().is_open();
        let Some(dialog) = dialog_ref.get() else {
            return;
        };
        if open && !dialog.open() {
            let _ = dialog.show_modal();
        } else if !open && dialog.open() {
            dialog.close();
        }
    });

    let title = move || store.editor().read().title().unwrap_or_default();
    let vegetable = move || {
        store
            .editor()
            .read()
            .form()
            .map(|form| form.vegetable.clone())
            .unwrap_or_default()
    };
    let planted_date = move || {
        store
            .editor()
            .read()
            .form()
            .map(|form| form.planted_date.clone())
            .unwrap_or_default()
    };

    view! {
        // Escape closes the native dialog without going through our buttons
        <dialog id="plot-dialog" class="plot-dialog" node_ref=dialog_ref on:close=move |_| ctx.cancel_editor()>
            <form
                id="plot-form"
                on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    ctx.submit_editor();
                }
            >
                <h2 id="plot-title">{title}</h2>

                <label for="veg-type">"Vegetable"</label>
                <input
                    id="veg-type"
                    type="text"
                    placeholder="e.g. tomato"
                    required=true
                    prop:value=vegetable
                    on:input=move |ev| store.editor().write().set_vegetable(event_target_value(&ev))
                />

                <label for="plant-date">"Planted on"</label>
                <input
                    id="plant-date"
                    type="date"
                    required=true
                    prop:value=planted_date
                    on:input=move |ev| store.editor().write().set_planted_date(event_target_value(&ev))
                />

                <div class="dialog-actions">
                    <button type="button" id="clear-btn" class="clear-btn" on:click=move |_| ctx.clear_editor()>
                        "Clear"
                    </button>
                    <button type="button" id="cancel-btn" class="cancel-btn" on:click=move |_| ctx.cancel_editor()>
                        "Cancel"
                    </button>
                    <button type="submit" class="save-btn">"Save"</button>
                </div>
            </form>
        </dialog>
    }
}
